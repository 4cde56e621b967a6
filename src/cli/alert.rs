//! Alert export command

use std::path::PathBuf;

use chrono::Utc;
use log::info;

use crate::cli::CommandContext;
use crate::cli::args::{AlertFilterArgs, GlobalOptions};
use crate::cli::handlers::for_each_page;
use crate::client::ThreatStackApi;
use crate::client::models::AlertQuery;
use crate::error::Result;
use crate::models::AlertRow;
use crate::output::{CsvSink, filename};

/// Export alerts for a date window to CSV, writing after every page.
pub async fn export(opts: &GlobalOptions, filters: &AlertFilterArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let now = Utc::now();
    let query = AlertQuery::window(
        filters.status,
        filters.days,
        filters.start_date.clone(),
        filters.end_date.clone(),
        filters.rule_id.clone(),
        now,
    );
    info!(
        "Fetching {} alerts from {} until {}",
        query.status.as_str(),
        query.from,
        query.until
    );

    // --output appends to a file from an earlier export; otherwise a
    // fresh timestamped file gets the header row.
    let (mut sink, file) = match &filters.output {
        Some(path) => (CsvSink::append(path)?, path.display().to_string()),
        None => {
            let file = filename::alerts_csv(
                &ctx.org_name,
                filters.status,
                filters.rule_id.as_deref(),
                now,
            );
            (CsvSink::create::<AlertRow>(&PathBuf::from(&file))?, file)
        }
    };

    let client = ctx.client.clone();
    let fetch_query = query.clone();
    let rule_filter = filters.rule_id.clone();
    let status = filters.status;

    let total = for_each_page(
        move |token| {
            let client = client.clone();
            let query = fetch_query.clone();
            async move { client.list_alerts(&query, token.as_deref()).await }
        },
        |alerts| {
            let mut written = 0usize;
            for alert in &alerts {
                // The query already filters by rule; keep the local
                // predicate so an appended file never mixes rules.
                if let Some(ref rule_id) = rule_filter {
                    if !alert.matches_rule(rule_id) {
                        continue;
                    }
                }
                sink.write(&AlertRow::from(alert))?;
                written += 1;
            }
            info!("Writing alerts: {}, Rule status: {}", written, status.as_str());
            Ok(())
        },
    )
    .await?;

    let written = sink.finish()?;
    info!("Processed {} alerts, wrote {} to {}", total, written, file);

    Ok(())
}
