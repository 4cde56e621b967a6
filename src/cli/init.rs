//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::config::{Config, Credentials, DEFAULT_ORG_PROFILE, OrgProfile};
use crate::error::Result;

/// Run the init command.
///
/// Prompts for API credentials and one organization profile and writes
/// the config file. When the file already exists, credentials are
/// replaced and the organization is added (or updated) under the chosen
/// profile name, so `threatop init --org prod` can extend an existing
/// setup.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let profile_name = opts.org_ref().unwrap_or(DEFAULT_ORG_PROFILE);

    println!("{}", "Welcome to threatop!".bold().green());
    if profile_name != DEFAULT_ORG_PROFILE {
        println!("Setting up organization profile: {}\n", profile_name.bold());
    } else {
        println!("Let's set up your Threat Stack configuration.\n");
    }

    let theme = ColorfulTheme::default();

    let user_id: String = Input::with_theme(&theme)
        .with_prompt("Enter your Threat Stack API user ID")
        .interact_text()?;

    let api_key: String = Password::with_theme(&theme)
        .with_prompt("Enter your Threat Stack API key")
        .interact()?;

    let org_id: String = Input::with_theme(&theme)
        .with_prompt("Enter the organization ID")
        .interact_text()?;

    let org_name: String = Input::with_theme(&theme)
        .with_prompt("Enter the organization name")
        .interact_text()?;

    let mut config = match Config::load_at(opts.config_ref()) {
        Ok(existing) => existing,
        Err(_) => Config {
            credentials: Credentials {
                user_id: String::new(),
                api_key: String::new(),
            },
            organizations: Default::default(),
            api_host: opts.api_host.clone(),
        },
    };

    config.credentials = Credentials { user_id, api_key };
    config.organizations.insert(
        profile_name.to_string(),
        OrgProfile {
            id: org_id.trim().to_string(),
            name: org_name.trim().to_string(),
        },
    );

    config.validate()?;
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!(
        "  {} - Show configuration status",
        "threatop status".cyan()
    );
    println!(
        "  {} - Export all online agents to CSV",
        "threatop agent export".cyan()
    );

    Ok(())
}
