//! Agent export command

use std::path::PathBuf;

use chrono::Utc;
use log::{debug, info};

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::for_each_page;
use crate::client::ThreatStackApi;
use crate::error::Result;
use crate::models::AgentRow;
use crate::output::{CsvSink, filename};

/// Export all online agents to CSV, page by page.
pub async fn export(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let file = filename::agents_csv(&ctx.org_name, Utc::now());
    let path = PathBuf::from(&file);
    let mut sink = CsvSink::create::<AgentRow>(&path)?;

    let client = ctx.client.clone();
    let total = for_each_page(
        move |token| {
            let client = client.clone();
            async move { client.list_agents(token.as_deref()).await }
        },
        |agents| {
            if !agents.is_empty() {
                info!("Returned {} agents.", agents.len());
            }
            for agent in &agents {
                debug!("agent record: {:?}", agent);
                sink.write(&AgentRow::from(agent))?;
            }
            Ok(())
        },
    )
    .await?;

    if total == 0 {
        info!("0 agents found.");
        return Ok(());
    }

    let written = sink.finish()?;
    info!("{} agents written to {}", written, file);

    Ok(())
}
