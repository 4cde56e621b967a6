//! Vulnerability export command
//!
//! Two fetch phases: first index monitored EC2 instances by their
//! primary agent id, then stream vulnerabilities and join each one to
//! the instance its first agent runs on.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::Utc;
use log::info;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::for_each_page;
use crate::client::ThreatStackApi;
use crate::client::models::Ec2Instance;
use crate::error::Result;
use crate::models::VulnRow;
use crate::output::{CsvSink, filename};

/// Export active vulnerabilities to CSV, enriched with EC2 data.
pub async fn export(opts: &GlobalOptions, notices_only: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let mut instances_by_agent: HashMap<String, Ec2Instance> = HashMap::new();
    let client = ctx.client.clone();
    for_each_page(
        move |token| {
            let client = client.clone();
            async move { client.list_ec2(true, token.as_deref()).await }
        },
        |instances| {
            for instance in instances {
                let agent_id = instance.primary_agent().map(|agent| agent.id.clone());
                if let Some(agent_id) = agent_id {
                    instances_by_agent.insert(agent_id, instance);
                }
            }
            Ok(())
        },
    )
    .await?;
    info!("Indexed {} monitored instances.", instances_by_agent.len());

    let file = filename::vulns_csv(&ctx.org_name, notices_only, Utc::now());
    let mut sink = CsvSink::create::<VulnRow>(&PathBuf::from(&file))?;

    let client = ctx.client.clone();
    let total = for_each_page(
        move |token| {
            let client = client.clone();
            async move { client.list_vulnerabilities(notices_only, token.as_deref()).await }
        },
        |vulns| {
            info!("Adding {} vulns", vulns.len());
            for vuln in &vulns {
                let instance = vuln
                    .primary_agent_id()
                    .and_then(|agent_id| instances_by_agent.get(agent_id));
                sink.write(&VulnRow::new(vuln, instance))?;
            }
            Ok(())
        },
    )
    .await?;

    let written = sink.finish()?;
    info!("{} of {} vulns written to {}", written, total, file);

    Ok(())
}
