//! Rule and suppression export rows

use crate::client::models::{Rule, Ruleset};
use crate::output::CsvRecord;

use super::{opt, opt_display};

/// One (rule, suppression) pair, flattened for CSV
#[derive(Debug, Clone)]
pub struct RuleRow {
    pub ruleset_id: String,
    pub ruleset_name: String,
    pub rule_id: String,
    pub rule_name: String,
    pub title: String,
    pub description: String,
    pub enabled: String,
    pub severity: String,
    pub suppression: String,
}

impl RuleRow {
    /// Fan a rule out into one row per suppression.
    ///
    /// A rule without suppressions still yields one row, with an empty
    /// suppression column, so every rule appears in the export.
    pub fn rows_for(ruleset: &Ruleset, rule: &Rule) -> Vec<RuleRow> {
        let base = RuleRow {
            ruleset_id: ruleset.id.clone(),
            ruleset_name: ruleset.name.clone(),
            rule_id: rule.id.clone(),
            rule_name: rule.name.clone(),
            title: opt(&rule.title),
            description: opt(&rule.alert_description),
            enabled: opt_display(&rule.enabled),
            severity: opt_display(&rule.severity_of_alerts),
            suppression: String::new(),
        };

        if rule.suppressions.is_empty() {
            return vec![base];
        }

        rule.suppressions
            .iter()
            .map(|suppression| RuleRow {
                suppression: suppression.clone(),
                ..base.clone()
            })
            .collect()
    }
}

impl CsvRecord for RuleRow {
    fn headers() -> &'static [&'static str] {
        &[
            "rulesetId",
            "rulesetName",
            "ruleId",
            "ruleName",
            "title",
            "description",
            "enabled",
            "severity",
            "suppression",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.ruleset_id.clone(),
            self.ruleset_name.clone(),
            self.rule_id.clone(),
            self.rule_name.clone(),
            self.title.clone(),
            self.description.clone(),
            self.enabled.clone(),
            self.severity.clone(),
            self.suppression.clone(),
        ]
    }
}
