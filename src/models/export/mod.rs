//! CSV row types, one module per exported resource

mod agent;
mod alert;
mod ec2;
mod rule;
mod user;
mod vuln;

pub use agent::AgentRow;
pub use alert::AlertRow;
pub use ec2::Ec2Row;
pub use rule::RuleRow;
pub use user::MemberRow;
pub use vuln::VulnRow;

use serde_json::Value;

/// Render an optional string field, empty when absent.
pub(crate) fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Render an optional displayable field, empty when absent.
pub(crate) fn opt_display<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(T::to_string).unwrap_or_default()
}

/// Render a raw JSON field compactly, empty when absent or null.
pub(crate) fn json_field(value: &Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(v) => v.to_string(),
    }
}
