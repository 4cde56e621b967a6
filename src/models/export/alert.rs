//! Alert export rows

use crate::client::models::Alert;
use crate::output::CsvRecord;

use super::{opt, opt_display};

/// One alert, flattened for CSV
#[derive(Debug, Clone)]
pub struct AlertRow {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub severity: String,
    pub rule_id: String,
    pub ruleset_id: String,
    pub agent_id: String,
    pub data_source: String,
    pub dismissed_at: String,
    pub dismiss_reason: String,
}

impl From<&Alert> for AlertRow {
    fn from(alert: &Alert) -> Self {
        Self {
            id: alert.id.clone(),
            title: opt(&alert.title),
            created_at: opt(&alert.created_at),
            severity: opt_display(&alert.severity),
            rule_id: opt(&alert.rule_id),
            ruleset_id: opt(&alert.ruleset_id),
            agent_id: opt(&alert.agent_id),
            data_source: opt(&alert.data_source),
            dismissed_at: opt(&alert.dismissed_at),
            dismiss_reason: opt(&alert.dismiss_reason),
        }
    }
}

impl CsvRecord for AlertRow {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "title",
            "createdAt",
            "severity",
            "ruleId",
            "rulesetId",
            "agentId",
            "dataSource",
            "dismissedAt",
            "dismissReason",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.created_at.clone(),
            self.severity.clone(),
            self.rule_id.clone(),
            self.ruleset_id.clone(),
            self.agent_id.clone(),
            self.data_source.clone(),
            self.dismissed_at.clone(),
            self.dismiss_reason.clone(),
        ]
    }
}
