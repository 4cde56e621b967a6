//! EC2 instance resource models
//!
//! The `aws/ec2?verbose=true` endpoint returns each instance together
//! with the agents installed on it (empty for unmonitored instances).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An EC2 instance known to the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ec2Instance {
    /// EC2 instance ID
    pub id: String,

    #[serde(default)]
    pub kernel_id: Option<String>,

    #[serde(default)]
    pub instance_type: Option<String>,

    #[serde(default)]
    pub private_dns_name: Option<String>,

    #[serde(default)]
    pub private_ip_address: Option<String>,

    /// Security groups, left as raw JSON
    #[serde(default)]
    pub groups: Option<Value>,

    #[serde(default)]
    pub subnet_id: Option<String>,

    #[serde(default)]
    pub key_name: Option<String>,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub launch_time: Option<String>,

    #[serde(default)]
    pub image_id: Option<String>,

    #[serde(default)]
    pub architecture: Option<String>,

    #[serde(default)]
    pub public_dns_name: Option<String>,

    #[serde(default)]
    pub public_ip_address: Option<String>,

    #[serde(default)]
    pub vpc_id: Option<String>,

    /// AWS integration profile the instance was discovered through
    #[serde(default)]
    pub aws_profile: Option<Value>,

    /// Whether a Threat Stack agent is installed
    #[serde(default)]
    pub monitored: Option<bool>,

    #[serde(default)]
    pub tags: Option<Value>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub state_code: Option<i64>,

    /// Agents installed on the instance; empty when unmonitored
    #[serde(default)]
    pub agents: Vec<Ec2Agent>,
}

/// Agent summary embedded in verbose EC2 responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ec2Agent {
    pub id: String,

    #[serde(default)]
    pub status: Option<String>,

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

    #[serde(default)]
    pub is_container_agent: Option<bool>,

    #[serde(default)]
    pub kernel: Option<String>,

    #[serde(default)]
    pub os_version: Option<String>,
}

impl Ec2Instance {
    /// The first installed agent, which monitored exports join against.
    pub fn primary_agent(&self) -> Option<&Ec2Agent> {
        self.agents.first()
    }
}
