//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::{Config, DEFAULT_ORG_PROFILE};
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "threatop Configuration Status".bold());

    match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            let config_path = Config::resolve_path(opts.config_ref())?;
            println!("Config file: {}", config_path.display().to_string().cyan());
            println!();

            if config.credentials.user_id.is_empty() || config.credentials.api_key.is_empty() {
                println!("{} API credentials not configured", "✗".red());
                println!("  → Run 'threatop init' to configure");
            } else {
                println!(
                    "{} API credentials configured (user {})",
                    "✓".green(),
                    config.credentials.user_id
                );
            }

            let selected = opts.org_ref().unwrap_or(DEFAULT_ORG_PROFILE);
            if config.organizations.is_empty() {
                println!("{} No organization profiles configured", "✗".red());
                println!("  → Run 'threatop init' to add one");
            } else {
                println!();
                println!("Organization profiles:");
                for (name, org) in &config.organizations {
                    let marker = if name == selected {
                        "(selected)".green().to_string()
                    } else {
                        String::new()
                    };
                    println!("  {} - {} ({}) {}", name.bold(), org.name, org.id, marker);
                }

                if !config.organizations.contains_key(selected) {
                    println!();
                    println!(
                        "{} Selected profile '{}' does not exist",
                        "⚠".yellow(),
                        selected
                    );
                }
            }

            if let Some(ref host) = config.api_host {
                println!();
                println!("{} Custom API host: {}", "○".dimmed(), host.cyan());
            }

            println!();
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "threatop init".cyan()
            );
            println!();
        }
    }

    Ok(())
}
