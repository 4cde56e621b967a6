//! EC2 instance export rows
//!
//! The instance column block is shared with the vulnerability export,
//! which appends it to each vulnerability joined against a monitored
//! instance.

use crate::client::models::{Ec2Agent, Ec2Instance};
use crate::output::CsvRecord;

use super::{json_field, opt, opt_display};

/// Instance column block, also appended to joined vulnerability rows
pub(crate) const INSTANCE_HEADERS: [&str; 20] = [
    "id",
    "kernelId",
    "instanceType",
    "privateDnsName",
    "privateIpAddress",
    "groups",
    "subnetId",
    "keyName",
    "region",
    "launchTime",
    "imageId",
    "architecture",
    "publicDnsName",
    "publicIpAddress",
    "vpcId",
    "awsProfile",
    "monitored",
    "tags",
    "state",
    "stateCode",
];

/// Agent column block for monitored instances
const AGENT_HEADERS: [&str; 11] = [
    "agentId",
    "agentStatus",
    "agentCreatedAt",
    "agentLastReportedAt",
    "agentVersion",
    "agentName",
    "agentDescription",
    "agentHostname",
    "isContainerAgent",
    "agentKernel",
    "agentOsVersion",
];

/// Values for the instance column block.
pub(crate) fn instance_fields(instance: &Ec2Instance) -> Vec<String> {
    vec![
        instance.id.clone(),
        opt(&instance.kernel_id),
        opt(&instance.instance_type),
        opt(&instance.private_dns_name),
        opt(&instance.private_ip_address),
        json_field(&instance.groups),
        opt(&instance.subnet_id),
        opt(&instance.key_name),
        opt(&instance.region),
        opt(&instance.launch_time),
        opt(&instance.image_id),
        opt(&instance.architecture),
        opt(&instance.public_dns_name),
        opt(&instance.public_ip_address),
        opt(&instance.vpc_id),
        json_field(&instance.aws_profile),
        opt_display(&instance.monitored),
        json_field(&instance.tags),
        opt(&instance.state),
        opt_display(&instance.state_code),
    ]
}

/// Values for the agent column block; all empty when no agent is installed.
fn agent_fields(agent: Option<&Ec2Agent>) -> Vec<String> {
    match agent {
        Some(agent) => vec![
            agent.id.clone(),
            opt(&agent.status),
            opt(&agent.created_at),
            opt(&agent.last_reported_at),
            opt(&agent.version),
            opt(&agent.name),
            opt(&agent.description),
            opt(&agent.hostname),
            opt_display(&agent.is_container_agent),
            opt(&agent.kernel),
            opt(&agent.os_version),
        ],
        None => vec![String::new(); AGENT_HEADERS.len()],
    }
}

/// One EC2 instance with its first agent, flattened for CSV
#[derive(Debug, Clone)]
pub struct Ec2Row {
    fields: Vec<String>,
}

impl From<&Ec2Instance> for Ec2Row {
    fn from(instance: &Ec2Instance) -> Self {
        let mut fields = instance_fields(instance);
        fields.extend(agent_fields(instance.primary_agent()));
        Self { fields }
    }
}

impl CsvRecord for Ec2Row {
    fn headers() -> &'static [&'static str] {
        use std::sync::LazyLock;

        static HEADERS: LazyLock<Vec<&'static str>> =
            LazyLock::new(|| [INSTANCE_HEADERS.as_slice(), AGENT_HEADERS.as_slice()].concat());

        HEADERS.as_slice()
    }

    fn record(&self) -> Vec<String> {
        self.fields.clone()
    }
}
