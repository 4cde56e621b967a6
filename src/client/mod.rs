//! Threat Stack API client
//!
//! The `ThreatStackApi` trait is the seam between commands and the wire:
//! commands drive token-paginated listings and membership mutations
//! through it, and tests substitute a mock.

use async_trait::async_trait;

pub mod hawk;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod threatstack;

#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockThreatStackClient;
pub use pagination::Page;
pub use threatstack::ThreatStackClient;

use models::{
    AddMemberRequest, Agent, Alert, AlertQuery, Ec2Instance, InviteRequest, Member, Rule, Ruleset,
    Vulnerability,
};

use crate::error::Result;

/// Agent status exports are limited to
pub const ONLINE_AGENT_STATUS: &str = "online";

/// Threat Stack API operations
///
/// Listing methods fetch a single page; callers follow the returned
/// continuation token until it is absent.
#[async_trait]
pub trait ThreatStackApi: Send + Sync {
    /// List online agents
    async fn list_agents(&self, token: Option<&str>) -> Result<Page<Agent>>;

    /// List alerts matching a status/date-range query
    async fn list_alerts(&self, query: &AlertQuery, token: Option<&str>) -> Result<Page<Alert>>;

    /// List EC2 instances by monitored state (verbose, with agents)
    async fn list_ec2(&self, monitored: bool, token: Option<&str>) -> Result<Page<Ec2Instance>>;

    /// List detection rulesets
    async fn list_rulesets(&self, token: Option<&str>) -> Result<Page<Ruleset>>;

    /// List the rules of one ruleset
    async fn list_rules(&self, ruleset_id: &str, token: Option<&str>) -> Result<Page<Rule>>;

    /// List active vulnerabilities, optionally only those with notices
    async fn list_vulnerabilities(
        &self,
        notices_only: bool,
        token: Option<&str>,
    ) -> Result<Page<Vulnerability>>;

    /// List organization members
    async fn list_members(&self, token: Option<&str>) -> Result<Page<Member>>;

    /// Invite a new user to the organization by email
    async fn invite_member(&self, request: &InviteRequest) -> Result<()>;

    /// Add an existing platform user to the organization
    async fn add_member(&self, request: &AddMemberRequest) -> Result<()>;

    /// Remove a user from the organization
    async fn remove_member(&self, member_id: &str) -> Result<()>;
}
