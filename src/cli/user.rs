//! Organization user commands: export to CSV, invite, add, remove

use std::path::PathBuf;

use chrono::Utc;
use colored::Colorize;
use log::info;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::for_each_page;
use crate::client::ThreatStackApi;
use crate::client::models::{AddMemberRequest, InviteRequest, MemberRole};
use crate::error::Result;
use crate::models::MemberRow;
use crate::output::{CsvSink, filename};

/// Export all organization members to CSV.
pub async fn export(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let file = filename::users_csv(&ctx.org_name, Utc::now());
    let mut sink = CsvSink::create::<MemberRow>(&PathBuf::from(&file))?;

    let client = ctx.client.clone();
    for_each_page(
        move |token| {
            let client = client.clone();
            async move { client.list_members(token.as_deref()).await }
        },
        |members| {
            for member in &members {
                sink.write(&MemberRow::from(member))?;
            }
            Ok(())
        },
    )
    .await?;

    let written = sink.finish()?;
    info!("{} users written to {}", written, file);

    Ok(())
}

/// Invite a new user to the organization by email.
///
/// The email is validated before any API call is made.
pub async fn invite(opts: &GlobalOptions, role: MemberRole, email: &str) -> Result<()> {
    let request = InviteRequest::new(role, email)?;

    let ctx = CommandContext::new(opts)?;
    info!("Inviting {} as {}", email, role.as_str());
    ctx.client.invite_member(&request).await?;

    println!("{} Invite sent to {}", "✓".green(), email.bold());

    Ok(())
}

/// Add a user who already exists in another organization.
pub async fn add(opts: &GlobalOptions, role: MemberRole, user_id: &str) -> Result<()> {
    let request = AddMemberRequest::new(role, user_id);

    let ctx = CommandContext::new(opts)?;
    info!("Attempting to add user: {}", request.id);
    ctx.client.add_member(&request).await?;

    println!("{} User {} added", "✓".green(), request.id.bold());

    Ok(())
}

/// Remove a user from the organization.
pub async fn remove(opts: &GlobalOptions, user_id: &str) -> Result<()> {
    let user_id = user_id.trim();

    let ctx = CommandContext::new(opts)?;
    info!("Attempting to remove user: {}", user_id);
    ctx.client.remove_member(user_id).await?;

    println!("{} User {} has been removed", "✓".green(), user_id.bold());

    Ok(())
}
