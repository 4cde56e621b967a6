//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod agent;
pub mod alert;
pub mod args;
pub mod completions;
pub mod context;
pub mod ec2;
pub mod handlers;
pub mod init;
pub mod rule;
pub mod status;
pub mod user;
pub mod vuln;

pub use args::{AlertFilterArgs, Ec2FilterArgs, GlobalOptions};
pub use context::CommandContext;

use crate::client::models::MemberRole;

/// threatop - CLI companion for the Threat Stack platform
#[derive(Parser, Debug)]
#[command(name = "threatop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Organization profile from the config file
    #[arg(long, global = true, env = "THREATOP_ORG", hide_env = true)]
    pub org: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "THREATOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Custom API host for development/testing
    #[arg(long, global = true, env = "THREATOP_API_HOST", hide = true)]
    pub api_host: Option<String>,

    /// Disable progress logging
    #[arg(long, global = true, conflicts_with = "debug")]
    pub quiet: bool,

    /// Enable additional debug logging
    #[arg(long, global = true, env = "THREATOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize threatop configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Export Threat Stack agents
    #[command(subcommand)]
    Agent(AgentCommands),

    /// Export alerts
    #[command(subcommand)]
    Alert(AlertCommands),

    /// Export EC2 instances
    #[command(subcommand)]
    Ec2(Ec2Commands),

    /// Export rules and their suppressions
    #[command(subcommand)]
    Rule(RuleCommands),

    /// Export vulnerabilities
    #[command(subcommand)]
    Vuln(VulnCommands),

    /// Export and manage organization users
    #[command(subcommand)]
    User(UserCommands),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Agent subcommands
#[derive(Subcommand, Debug)]
pub enum AgentCommands {
    /// Write all online agents to CSV
    Export,
}

/// Alert subcommands
#[derive(Subcommand, Debug)]
pub enum AlertCommands {
    /// Write alerts for a date window to CSV
    #[command(after_help = "EXAMPLES:\n  \
        threatop alert export 7                          # Active alerts, last 7 days\n  \
        threatop alert export 30 --status dismissed      # Dismissed alerts, last 30 days\n  \
        threatop alert export 90 --rule-id <UUID>        # One rule only\n  \
        threatop alert export 7 --output existing.csv    # Append to an earlier export")]
    Export {
        #[command(flatten)]
        filters: AlertFilterArgs,
    },
}

/// EC2 subcommands
#[derive(Subcommand, Debug)]
pub enum Ec2Commands {
    /// Write EC2 instances to CSV
    Export {
        #[command(flatten)]
        filters: Ec2FilterArgs,
    },
}

/// Rule subcommands
#[derive(Subcommand, Debug)]
pub enum RuleCommands {
    /// Write every rule and suppression to CSV
    Export,
}

/// Vulnerability subcommands
#[derive(Subcommand, Debug)]
pub enum VulnCommands {
    /// Write active vulnerabilities (joined to EC2 instances) to CSV
    Export {
        /// Pull only vulnerabilities that have security notices
        #[arg(long)]
        notices: bool,
    },
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Write all organization members to CSV
    Export,

    /// Invite a new user to the organization by email
    Invite {
        /// Email address to invite
        #[arg(long = "user-email")]
        email: String,

        /// Role for the invited user
        #[arg(long = "user-role", value_enum, default_value = "user", hide_possible_values = true)]
        role: MemberRole,
    },

    /// Add a user who already exists in another organization
    Add {
        /// Threat Stack user ID to add
        #[arg(long)]
        id: String,

        /// Role for the added user
        #[arg(long, value_enum, default_value = "user", hide_possible_values = true)]
        role: MemberRole,
    },

    /// Remove a user from the organization
    Remove {
        /// Threat Stack user ID to remove
        #[arg(long)]
        id: String,
    },
}
