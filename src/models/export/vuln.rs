//! Vulnerability export rows
//!
//! Each vulnerability row carries the instance column block of the
//! monitored EC2 instance its first agent runs on, when one matches.

use crate::client::models::{Ec2Instance, Vulnerability};
use crate::output::CsvRecord;

use super::ec2::{INSTANCE_HEADERS, instance_fields};
use super::{opt, opt_display};

const VULN_HEADERS: [&str; 8] = [
    "cveNumber",
    "reportedPackage",
    "systemPackage",
    "vectorType",
    "severity",
    "isSuppressed",
    "hasSecurityNotices",
    "agentId",
];

/// One vulnerability, optionally joined to an EC2 instance
#[derive(Debug, Clone)]
pub struct VulnRow {
    fields: Vec<String>,
}

impl VulnRow {
    pub fn new(vuln: &Vulnerability, instance: Option<&Ec2Instance>) -> Self {
        let mut fields = vec![
            vuln.cve_number.clone(),
            opt(&vuln.reported_package),
            opt(&vuln.system_package),
            opt(&vuln.vector_type),
            opt(&vuln.severity),
            opt_display(&vuln.is_suppressed),
            opt_display(&vuln.has_security_notices),
            vuln.primary_agent_id().unwrap_or_default().to_string(),
        ];

        match instance {
            Some(instance) => fields.extend(instance_fields(instance)),
            None => fields.extend(vec![String::new(); INSTANCE_HEADERS.len()]),
        }

        Self { fields }
    }
}

impl CsvRecord for VulnRow {
    fn headers() -> &'static [&'static str] {
        use std::sync::LazyLock;

        static HEADERS: LazyLock<Vec<&'static str>> =
            LazyLock::new(|| [VULN_HEADERS.as_slice(), INSTANCE_HEADERS.as_slice()].concat());

        HEADERS.as_slice()
    }

    fn record(&self) -> Vec<String> {
        self.fields.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vuln() -> Vulnerability {
        serde_json::from_value(json!({
            "cveNumber": "CVE-2022-0001",
            "reportedPackage": "openssl 1.1.1",
            "severity": "high",
            "hasSecurityNotices": true,
            "agents": [{"agentId": "agent-1"}]
        }))
        .unwrap()
    }

    fn instance() -> Ec2Instance {
        serde_json::from_value(json!({
            "id": "i-0abc",
            "region": "us-east-1",
            "monitored": true,
            "agents": [{"id": "agent-1"}]
        }))
        .unwrap()
    }

    #[test]
    fn test_joined_row_carries_instance_columns() {
        let row = VulnRow::new(&vuln(), Some(&instance()));
        let record = row.record();

        assert_eq!(record.len(), VulnRow::headers().len());
        assert_eq!(record[0], "CVE-2022-0001");
        assert_eq!(record[7], "agent-1");
        assert_eq!(record[8], "i-0abc"); // first instance column
    }

    #[test]
    fn test_unjoined_row_pads_instance_columns() {
        let row = VulnRow::new(&vuln(), None);
        let record = row.record();

        assert_eq!(record.len(), VulnRow::headers().len());
        assert!(record[8..].iter().all(String::is_empty));
    }

    #[test]
    fn test_headers_concatenate_blocks() {
        let headers = VulnRow::headers();
        assert_eq!(headers.len(), 28);
        assert_eq!(headers[0], "cveNumber");
        assert_eq!(headers[8], "id");
    }
}
