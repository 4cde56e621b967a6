//! Organization member export rows

use chrono::DateTime;

use crate::client::models::Member;
use crate::output::CsvRecord;

use super::{opt, opt_display};

/// One organization member, flattened for CSV
#[derive(Debug, Clone)]
pub struct MemberRow {
    pub role: String,
    pub sso_enabled: String,
    pub display_name: String,
    pub user_enabled: String,
    /// Last authentication time rendered as a UTC datetime
    pub last_authenticated_at: String,
    pub mfa_enabled: String,
    pub id: String,
    pub email: String,
}

impl From<&Member> for MemberRow {
    fn from(member: &Member) -> Self {
        Self {
            role: opt(&member.role),
            sso_enabled: opt_display(&member.sso_enabled),
            display_name: opt(&member.display_name),
            user_enabled: opt_display(&member.user_enabled),
            last_authenticated_at: member
                .last_authenticated_at
                .and_then(format_epoch_millis)
                .unwrap_or_default(),
            mfa_enabled: opt_display(&member.mfa_enabled),
            id: member.id.clone(),
            email: member.email.clone(),
        }
    }
}

/// Epoch milliseconds to `YYYY-MM-DD HH:MM:SS` (UTC).
fn format_epoch_millis(millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
}

impl CsvRecord for MemberRow {
    fn headers() -> &'static [&'static str] {
        &[
            "role",
            "ssoEnabled",
            "displayName",
            "userEnabled",
            "lastAuthenticatedAt",
            "mfaEnabled",
            "id",
            "email",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.role.clone(),
            self.sso_enabled.clone(),
            self.display_name.clone(),
            self.user_enabled.clone(),
            self.last_authenticated_at.clone(),
            self.mfa_enabled.clone(),
            self.id.clone(),
            self.email.clone(),
        ]
    }
}
