//! Mock Threat Stack API client for testing
//!
//! Provides a mock implementation of `ThreatStackApi` for unit testing
//! without making real API calls. Listing methods serve pre-loaded
//! pages in order; mutation methods record their arguments.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use super::ThreatStackApi;
use super::models::{
    AddMemberRequest, Agent, Alert, AlertQuery, Ec2Instance, InviteRequest, Member, Rule, Ruleset,
    Vulnerability,
};
use super::pagination::Page;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Load pages via the builder methods, then drive commands against it:
///
/// ```ignore
/// let mock = MockThreatStackClient::new()
///     .with_agent_pages(vec![page_one, page_two]);
/// let page = mock.list_agents(None).await?;
/// ```
#[derive(Default)]
pub struct MockThreatStackClient {
    agent_pages: Mutex<VecDeque<Page<Agent>>>,
    alert_pages: Mutex<VecDeque<Page<Alert>>>,
    ec2_pages: Mutex<VecDeque<Page<Ec2Instance>>>,
    ruleset_pages: Mutex<VecDeque<Page<Ruleset>>>,
    rules_by_ruleset: Mutex<HashMap<String, Vec<Rule>>>,
    vuln_pages: Mutex<VecDeque<Page<Vulnerability>>>,
    member_pages: Mutex<VecDeque<Page<Member>>>,

    /// Invites recorded by `invite_member`
    pub invites: Mutex<Vec<InviteRequest>>,
    /// Additions recorded by `add_member`
    pub added: Mutex<Vec<AddMemberRequest>>,
    /// Removals recorded by `remove_member`
    pub removed: Mutex<Vec<String>>,

    /// Error returned by the next call, consumed on first use
    error: Mutex<Option<ApiError>>,
}

impl MockThreatStackClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_agent_pages(self, pages: Vec<Page<Agent>>) -> Self {
        *self.agent_pages.lock().unwrap() = pages.into();
        self
    }

    pub fn with_alert_pages(self, pages: Vec<Page<Alert>>) -> Self {
        *self.alert_pages.lock().unwrap() = pages.into();
        self
    }

    pub fn with_ec2_pages(self, pages: Vec<Page<Ec2Instance>>) -> Self {
        *self.ec2_pages.lock().unwrap() = pages.into();
        self
    }

    pub fn with_ruleset_pages(self, pages: Vec<Page<Ruleset>>) -> Self {
        *self.ruleset_pages.lock().unwrap() = pages.into();
        self
    }

    pub fn with_rules(self, ruleset_id: &str, rules: Vec<Rule>) -> Self {
        self.rules_by_ruleset
            .lock()
            .unwrap()
            .insert(ruleset_id.to_string(), rules);
        self
    }

    pub fn with_vuln_pages(self, pages: Vec<Page<Vulnerability>>) -> Self {
        *self.vuln_pages.lock().unwrap() = pages.into();
        self
    }

    pub fn with_member_pages(self, pages: Vec<Page<Member>>) -> Self {
        *self.member_pages.lock().unwrap() = pages.into();
        self
    }

    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    fn take_error(&self) -> Result<()> {
        if let Some(err) = self.error.lock().unwrap().take() {
            return Err(err.into());
        }
        Ok(())
    }

    fn next_page<T>(queue: &Mutex<VecDeque<Page<T>>>) -> Page<T> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Page::last(Vec::new()))
    }
}

#[async_trait]
impl ThreatStackApi for MockThreatStackClient {
    async fn list_agents(&self, _token: Option<&str>) -> Result<Page<Agent>> {
        self.take_error()?;
        Ok(Self::next_page(&self.agent_pages))
    }

    async fn list_alerts(&self, _query: &AlertQuery, _token: Option<&str>) -> Result<Page<Alert>> {
        self.take_error()?;
        Ok(Self::next_page(&self.alert_pages))
    }

    async fn list_ec2(&self, _monitored: bool, _token: Option<&str>) -> Result<Page<Ec2Instance>> {
        self.take_error()?;
        Ok(Self::next_page(&self.ec2_pages))
    }

    async fn list_rulesets(&self, _token: Option<&str>) -> Result<Page<Ruleset>> {
        self.take_error()?;
        Ok(Self::next_page(&self.ruleset_pages))
    }

    async fn list_rules(&self, ruleset_id: &str, _token: Option<&str>) -> Result<Page<Rule>> {
        self.take_error()?;
        let rules = self
            .rules_by_ruleset
            .lock()
            .unwrap()
            .get(ruleset_id)
            .cloned()
            .unwrap_or_default();
        Ok(Page::last(rules))
    }

    async fn list_vulnerabilities(
        &self,
        _notices_only: bool,
        _token: Option<&str>,
    ) -> Result<Page<Vulnerability>> {
        self.take_error()?;
        Ok(Self::next_page(&self.vuln_pages))
    }

    async fn list_members(&self, _token: Option<&str>) -> Result<Page<Member>> {
        self.take_error()?;
        Ok(Self::next_page(&self.member_pages))
    }

    async fn invite_member(&self, request: &InviteRequest) -> Result<()> {
        self.take_error()?;
        self.invites.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn add_member(&self, request: &AddMemberRequest) -> Result<()> {
        self.take_error()?;
        self.added.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn remove_member(&self, member_id: &str) -> Result<()> {
        self.take_error()?;
        self.removed.lock().unwrap().push(member_id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn agent(id: &str) -> Agent {
        serde_json::from_value(json!({ "id": id, "status": "online" })).unwrap()
    }

    #[tokio::test]
    async fn test_pages_served_in_order() {
        let mock = MockThreatStackClient::new().with_agent_pages(vec![
            Page {
                data: vec![agent("a-1")],
                token: Some("t2".to_string()),
            },
            Page::last(vec![agent("a-2")]),
        ]);

        let first = mock.list_agents(None).await.unwrap();
        assert_eq!(first.token.as_deref(), Some("t2"));
        assert_eq!(first.data[0].id, "a-1");

        let second = mock.list_agents(first.token.as_deref()).await.unwrap();
        assert!(second.token.is_none());
        assert_eq!(second.data[0].id, "a-2");

        // Exhausted queue keeps returning empty last pages
        let third = mock.list_agents(None).await.unwrap();
        assert!(third.data.is_empty());
    }

    #[tokio::test]
    async fn test_error_consumed_on_first_use() {
        let mock = MockThreatStackClient::new().with_error(ApiError::Forbidden);

        assert!(mock.list_agents(None).await.is_err());
        assert!(mock.list_agents(None).await.is_ok());
    }

    #[tokio::test]
    async fn test_mutations_recorded() {
        use super::super::models::MemberRole;

        let mock = MockThreatStackClient::new();
        mock.invite_member(&InviteRequest::new(MemberRole::Reader, "a@example.com").unwrap())
            .await
            .unwrap();
        mock.add_member(&AddMemberRequest::new(MemberRole::User, "user-9"))
            .await
            .unwrap();
        mock.remove_member("user-3").await.unwrap();

        assert_eq!(mock.invites.lock().unwrap().len(), 1);
        assert_eq!(mock.added.lock().unwrap()[0].id, "user-9");
        assert_eq!(mock.removed.lock().unwrap()[0], "user-3");
    }
}
