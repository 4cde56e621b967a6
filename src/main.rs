//! threatop CLI - companion for the Threat Stack platform

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{
    AgentCommands, AlertCommands, Cli, Commands, Ec2Commands, GlobalOptions, RuleCommands,
    UserCommands, VulnCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let opts = GlobalOptions::from_cli(&cli);
    if let Err(err) = run(cli, &opts).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Progress goes through the logger so `--quiet` and `--debug` are a
/// single filter decision; `RUST_LOG` still wins when set.
fn init_logging(cli: &Cli) {
    let default_level = if cli.debug {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

async fn run(cli: Cli, opts: &GlobalOptions) -> Result<()> {
    match cli.command {
        Commands::Init => cli::init::run(opts),
        Commands::Status => cli::status::run(opts),
        Commands::Version => {
            println!("threatop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
        Commands::Agent(AgentCommands::Export) => cli::agent::export(opts).await,
        Commands::Alert(AlertCommands::Export { filters }) => {
            cli::alert::export(opts, &filters).await
        }
        Commands::Ec2(Ec2Commands::Export { filters }) => {
            cli::ec2::export(opts, filters.monitored()).await
        }
        Commands::Rule(RuleCommands::Export) => cli::rule::export(opts).await,
        Commands::Vuln(VulnCommands::Export { notices }) => cli::vuln::export(opts, notices).await,
        Commands::User(user_cmd) => match user_cmd {
            UserCommands::Export => cli::user::export(opts).await,
            UserCommands::Invite { email, role } => cli::user::invite(opts, role, &email).await,
            UserCommands::Add { id, role } => cli::user::add(opts, role, &id).await,
            UserCommands::Remove { id } => cli::user::remove(opts, &id).await,
        },
    }
}
