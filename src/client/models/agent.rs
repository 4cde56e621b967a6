//! Agent resource models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Loopback addresses the platform reports but exports never want
const LOOPBACK_ADDRESSES: [&str; 2] = ["127.0.0.1/8", "::1/128"];

/// A Threat Stack agent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Agent ID
    pub id: String,

    /// Cloud instance the agent runs on, when known
    #[serde(default)]
    pub instance_id: Option<String>,

    /// Agent status (online, offline)
    pub status: String,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub last_reported_at: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub hostname: Option<String>,

    /// Addresses grouped by visibility (private, public, link-local)
    #[serde(default)]
    pub ip_addresses: Option<IpAddresses>,

    /// Free-form tag data as reported by the platform
    #[serde(default)]
    pub tags: Option<Value>,

    #[serde(default)]
    pub agent_type: Option<String>,

    #[serde(default)]
    pub os_version: Option<String>,

    #[serde(default)]
    pub kernel: Option<String>,

    /// Module health summary, absent on older agents
    #[serde(default)]
    pub agent_module_health: Option<ModuleHealth>,
}

/// Agent addresses grouped by visibility
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAddresses {
    #[serde(default)]
    pub private: Vec<String>,

    #[serde(default)]
    pub public: Vec<String>,

    #[serde(default)]
    pub link_local: Vec<String>,
}

/// Agent module health summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleHealth {
    pub is_healthy: bool,
}

impl Agent {
    /// Private and public addresses, excluding link-local and loopback.
    pub fn reachable_addresses(&self) -> Vec<String> {
        let Some(ref addrs) = self.ip_addresses else {
            return Vec::new();
        };

        addrs
            .private
            .iter()
            .chain(addrs.public.iter())
            .filter(|addr| !LOOPBACK_ADDRESSES.contains(&addr.as_str()))
            .cloned()
            .collect()
    }
}
