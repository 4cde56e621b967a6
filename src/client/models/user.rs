//! Organization member resource models

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Membership role assignable through the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MemberRole {
    #[default]
    User,
    Reader,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::User => "user",
            MemberRole::Reader => "reader",
        }
    }
}

/// An organization member
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// User ID
    pub id: String,

    /// User email
    pub email: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub sso_enabled: Option<bool>,

    #[serde(default)]
    pub user_enabled: Option<bool>,

    #[serde(default)]
    pub mfa_enabled: Option<bool>,

    /// Last authentication time, epoch milliseconds
    #[serde(default)]
    pub last_authenticated_at: Option<i64>,
}

/// Body for POST organizations/invites
#[derive(Debug, Clone, Serialize)]
pub struct InviteRequest {
    pub role: String,
    pub email: String,
}

impl InviteRequest {
    /// Validate the email and build the request.
    pub fn new(role: MemberRole, email: &str) -> Result<Self> {
        if !is_valid_email(email) {
            return Err(Error::Other(format!("email failed to verify: {}", email)));
        }

        Ok(Self {
            role: role.as_str().to_string(),
            email: email.to_string(),
        })
    }
}

/// Body for POST organizations/members
#[derive(Debug, Clone, Serialize)]
pub struct AddMemberRequest {
    pub role: String,
    pub id: String,
}

impl AddMemberRequest {
    pub fn new(role: MemberRole, user_id: &str) -> Self {
        Self {
            role: role.as_str().to_string(),
            id: user_id.trim().to_string(),
        }
    }
}

/// Loose shape check, matching the original `^\S+@\S+\.\S+$` rule.
pub fn is_valid_email(email: &str) -> bool {
    use regex::Regex;
    use std::sync::LazyLock;

    static EMAIL: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("static pattern"));

    EMAIL.is_match(email)
}
