//! Vulnerability resource models

use serde::{Deserialize, Serialize};

/// A package vulnerability reported by the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vulnerability {
    /// CVE identifier
    pub cve_number: String,

    /// Package name and version as reported by the agent
    #[serde(default)]
    pub reported_package: Option<String>,

    /// Resolved system package name
    #[serde(default)]
    pub system_package: Option<String>,

    /// Attack vector (network, local)
    #[serde(default)]
    pub vector_type: Option<String>,

    #[serde(default)]
    pub severity: Option<String>,

    #[serde(default)]
    pub is_suppressed: Option<bool>,

    /// Whether a vendor security notice exists for this CVE
    #[serde(default)]
    pub has_security_notices: Option<bool>,

    /// Agents the vulnerable package was observed on
    #[serde(default)]
    pub agents: Vec<VulnAgent>,
}

/// Agent reference embedded in vulnerability records
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnAgent {
    pub agent_id: String,

    #[serde(default)]
    pub hostname: Option<String>,
}

impl Vulnerability {
    /// The first affected agent's id, used to join against EC2 data.
    pub fn primary_agent_id(&self) -> Option<&str> {
        self.agents.first().map(|a| a.agent_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vulnerability_deserializes() {
        let vuln: Vulnerability = serde_json::from_value(json!({
            "cveNumber": "CVE-2022-0001",
            "reportedPackage": "openssl 1.1.1",
            "systemPackage": "openssl",
            "vectorType": "network",
            "severity": "high",
            "isSuppressed": false,
            "hasSecurityNotices": true,
            "agents": [
                {"agentId": "agent-1", "hostname": "web-1"},
                {"agentId": "agent-2"}
            ]
        }))
        .unwrap();

        assert_eq!(vuln.primary_agent_id(), Some("agent-1"));
        assert_eq!(vuln.agents.len(), 2);
    }

    #[test]
    fn test_vulnerability_without_agents() {
        let vuln: Vulnerability =
            serde_json::from_value(json!({ "cveNumber": "CVE-2022-0002" })).unwrap();
        assert!(vuln.primary_agent_id().is_none());
    }
}
