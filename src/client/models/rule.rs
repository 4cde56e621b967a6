//! Ruleset and rule resource models

use serde::{Deserialize, Serialize};

/// A detection ruleset (a named group of rules)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ruleset {
    /// Ruleset ID
    pub id: String,

    /// Ruleset name
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// A detection rule, including its suppression clauses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Rule ID
    pub id: String,

    /// Rule name
    pub name: String,

    #[serde(default)]
    pub title: Option<String>,

    /// Description attached to alerts fired by this rule
    #[serde(default)]
    pub alert_description: Option<String>,

    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity assigned to alerts from this rule (1 is highest)
    #[serde(default)]
    pub severity_of_alerts: Option<i64>,

    /// Suppression filter expressions attached to the rule
    #[serde(default)]
    pub suppressions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rule_with_suppressions() {
        let rule: Rule = serde_json::from_value(json!({
            "id": "rule-1",
            "name": "Host: sudo",
            "title": "Sudo Commands",
            "alertDescription": "A sudo command\nwas run",
            "enabled": true,
            "severityOfAlerts": 2,
            "suppressions": ["user = \"deploy\"", "tty != \"\""]
        }))
        .unwrap();

        assert_eq!(rule.suppressions.len(), 2);
        assert_eq!(rule.severity_of_alerts, Some(2));
    }

    #[test]
    fn test_rule_without_suppressions() {
        let rule: Rule = serde_json::from_value(json!({
            "id": "rule-2",
            "name": "Host: login"
        }))
        .unwrap();

        assert!(rule.suppressions.is_empty());
        assert!(rule.enabled.is_none());
    }
}
