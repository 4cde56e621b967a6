//! Global CLI options shared across all commands
//!
//! This module provides a centralized struct for global CLI options, so
//! command handlers take one argument instead of a flag per parameter.

use crate::cli::Cli;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For each option: CLI flag > environment variable > config file >
/// default. This struct captures the CLI/env layer; config file values
/// are resolved later in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Organization profile name (selects an entry in the config file)
    pub org: Option<String>,

    /// Custom config file path (defaults to ~/.threatop/config.yaml)
    pub config: Option<String>,

    /// Custom API host for development/testing
    pub api_host: Option<String>,

    /// Disable progress logging
    pub quiet: bool,

    /// Enable additional debug logging
    pub debug: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    ///
    /// This is the primary constructor, called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            org: cli.org.clone(),
            config: cli.config.clone(),
            api_host: cli.api_host.clone(),
            quiet: cli.quiet,
            debug: cli.debug,
        }
    }

    /// Get organization profile as `Option<&str>`.
    pub fn org_ref(&self) -> Option<&str> {
        self.org.as_deref()
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API host override as `Option<&str>`.
    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}
