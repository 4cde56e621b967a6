//! Alert resource models

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Alert status filter accepted by the alerts endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AlertStatus {
    #[default]
    Active,
    Dismissed,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Active => "active",
            AlertStatus::Dismissed => "dismissed",
        }
    }
}

/// Query parameters for the alerts endpoint
#[derive(Debug, Clone)]
pub struct AlertQuery {
    pub status: AlertStatus,
    /// Range start, ISO-8601
    pub from: String,
    /// Range end, ISO-8601
    pub until: String,
    /// Restrict to a single rule
    pub rule_id: Option<String>,
}

impl AlertQuery {
    /// Build a query for a window of `days` ending at `now`, with
    /// optional explicit start/end overrides.
    pub fn window(
        status: AlertStatus,
        days: u32,
        start: Option<String>,
        end: Option<String>,
        rule_id: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let from =
            start.unwrap_or_else(|| (now - Duration::days(days as i64)).format(ISO).to_string());
        let until = end.unwrap_or_else(|| now.format(ISO).to_string());

        Self {
            status,
            from,
            until,
            rule_id,
        }
    }
}

const ISO: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A Threat Stack alert
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Alert ID
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    /// Alert severity (1 is highest)
    #[serde(default)]
    pub severity: Option<i64>,

    /// Rule that fired this alert
    #[serde(default)]
    pub rule_id: Option<String>,

    #[serde(default)]
    pub ruleset_id: Option<String>,

    /// Agent the alert was observed on
    #[serde(default)]
    pub agent_id: Option<String>,

    #[serde(default)]
    pub data_source: Option<String>,

    #[serde(default)]
    pub dismissed_at: Option<String>,

    #[serde(default)]
    pub dismiss_reason: Option<String>,
}

impl Alert {
    /// Whether the alert was raised by the given rule.
    pub fn matches_rule(&self, rule_id: &str) -> bool {
        self.rule_id.as_deref() == Some(rule_id)
    }
}
