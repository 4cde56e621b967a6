//! Filter argument types for CLI commands

use std::path::PathBuf;

use clap::Args;

use crate::client::models::AlertStatus;

/// Filter arguments for the alert export command.
#[derive(Args, Debug, Clone)]
pub struct AlertFilterArgs {
    /// Number of days previous to now to get alerts for
    #[arg(value_parser = clap::value_parser!(u32).range(1..=365))]
    pub days: u32,

    /// Alert status to fetch
    #[arg(long, value_enum, default_value = "active", hide_possible_values = true)]
    pub status: AlertStatus,

    /// Only export alerts raised by this rule
    #[arg(long = "rule-id")]
    pub rule_id: Option<String>,

    /// Start datetime of the range (ISO-8601, overrides the day window)
    #[arg(long = "start-date")]
    pub start_date: Option<String>,

    /// End datetime of the range (ISO-8601, overrides the day window)
    #[arg(long = "end-date")]
    pub end_date: Option<String>,

    /// Append to this existing file instead of creating a new one
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Filter arguments for the ec2 export command.
#[derive(Args, Debug, Default, Clone)]
pub struct Ec2FilterArgs {
    /// Export instances with a Threat Stack agent installed (default)
    #[arg(long, conflicts_with = "unmonitored")]
    pub monitored: bool,

    /// Export instances without a Threat Stack agent
    #[arg(long)]
    pub unmonitored: bool,
}

impl Ec2FilterArgs {
    /// Whether the export targets monitored instances.
    pub fn monitored(&self) -> bool {
        !self.unmonitored
    }
}
