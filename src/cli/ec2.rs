//! EC2 instance export command

use std::path::PathBuf;

use chrono::Utc;
use log::info;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::fetch_all;
use crate::client::ThreatStackApi;
use crate::error::Result;
use crate::models::Ec2Row;
use crate::output::{CsvSink, filename};

/// Export EC2 instances (monitored or unmonitored) to CSV.
pub async fn export(opts: &GlobalOptions, monitored: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let client = ctx.client.clone();
    let instances = fetch_all(move |token| {
        let client = client.clone();
        async move { client.list_ec2(monitored, token.as_deref()).await }
    })
    .await?;
    info!("Fetched {} instances.", instances.len());

    let file = filename::ec2_csv(&ctx.org_name, monitored, Utc::now());
    let mut sink = CsvSink::create::<Ec2Row>(&PathBuf::from(&file))?;
    for instance in &instances {
        sink.write(&Ec2Row::from(instance))?;
    }

    let written = sink.finish()?;
    info!("{} instances written to {}", written, file);

    Ok(())
}
