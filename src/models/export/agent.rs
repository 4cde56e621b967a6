//! Agent export rows

use crate::client::models::Agent;
use crate::output::CsvRecord;

use super::{json_field, opt};

/// One agent, flattened for CSV
#[derive(Debug, Clone)]
pub struct AgentRow {
    pub id: String,
    pub instance_id: String,
    pub status: String,
    pub created_at: String,
    pub last_reported_at: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub hostname: String,
    /// Private and public addresses, loopback and link-local excluded
    pub ip_addresses: String,
    pub tags: String,
    pub agent_type: String,
    pub os_version: String,
    pub kernel: String,
    /// Module health flag, empty when the agent does not report it
    pub is_healthy: String,
}

impl From<&Agent> for AgentRow {
    fn from(agent: &Agent) -> Self {
        let is_healthy = agent
            .agent_module_health
            .as_ref()
            .map(|health| health.is_healthy.to_string())
            .unwrap_or_default();

        Self {
            id: agent.id.clone(),
            instance_id: opt(&agent.instance_id),
            status: agent.status.clone(),
            created_at: opt(&agent.created_at),
            last_reported_at: opt(&agent.last_reported_at),
            version: opt(&agent.version),
            name: opt(&agent.name),
            description: opt(&agent.description),
            hostname: opt(&agent.hostname),
            ip_addresses: format!("[{}]", agent.reachable_addresses().join(", ")),
            tags: json_field(&agent.tags),
            agent_type: opt(&agent.agent_type),
            os_version: opt(&agent.os_version),
            kernel: opt(&agent.kernel),
            is_healthy,
        }
    }
}

impl CsvRecord for AgentRow {
    fn headers() -> &'static [&'static str] {
        &[
            "agentId",
            "instanceId",
            "status",
            "createdAt",
            "lastReportedAt",
            "version",
            "name",
            "description",
            "hostname",
            "ipAddresses",
            "tags",
            "agentType",
            "osVersion",
            "kernel",
            "isHealthy",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.instance_id.clone(),
            self.status.clone(),
            self.created_at.clone(),
            self.last_reported_at.clone(),
            self.version.clone(),
            self.name.clone(),
            self.description.clone(),
            self.hostname.clone(),
            self.ip_addresses.clone(),
            self.tags.clone(),
            self.agent_type.clone(),
            self.os_version.clone(),
            self.kernel.clone(),
            self.is_healthy.clone(),
        ]
    }
}
