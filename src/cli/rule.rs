//! Rule and suppression export command

use std::path::PathBuf;

use chrono::Utc;
use log::info;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::fetch_all;
use crate::client::ThreatStackApi;
use crate::error::Result;
use crate::models::RuleRow;
use crate::output::{CsvSink, filename};

/// Export every rule in every ruleset, one row per suppression.
pub async fn export(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let client = ctx.client.clone();
    let rulesets = fetch_all(move |token| {
        let client = client.clone();
        async move { client.list_rulesets(token.as_deref()).await }
    })
    .await?;
    info!("Fetched {} rulesets.", rulesets.len());

    let file = filename::rules_csv(&ctx.org_name, Utc::now());
    let mut sink = CsvSink::create::<RuleRow>(&PathBuf::from(&file))?;

    for ruleset in &rulesets {
        info!("Getting ruleset: {}", ruleset.name);

        let client = ctx.client.clone();
        let ruleset_id = ruleset.id.clone();
        let rules = fetch_all(move |token| {
            let client = client.clone();
            let ruleset_id = ruleset_id.clone();
            async move { client.list_rules(&ruleset_id, token.as_deref()).await }
        })
        .await?;

        for rule in &rules {
            for row in RuleRow::rows_for(ruleset, rule) {
                sink.write(&row)?;
            }
        }
        info!("Finished getting all rules in: {}", ruleset.name);
    }

    let written = sink.finish()?;
    info!("{} rule rows written to {}", written, file);

    Ok(())
}
