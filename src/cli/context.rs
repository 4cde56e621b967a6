//! Command execution context
//!
//! Provides a unified context for command execution, eliminating
//! boilerplate for config loading, organization resolution, and client
//! initialization.

use std::sync::Arc;

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::client::ThreatStackClient;
use crate::config::Config;
use crate::error::Result;
use crate::output::filename;

/// Context for command execution containing config and client.
///
/// This struct encapsulates the shared state every API-backed command
/// needs:
/// - Loaded and validated configuration
/// - The resolved organization profile
/// - An API client scoped to that organization (Arc so export loops can
///   clone it into fetch closures)
#[derive(Debug)]
pub struct CommandContext {
    /// Loaded and validated configuration
    pub config: Config,

    /// Resolved organization ID
    pub org_id: String,

    /// Sanitized organization name, used in output filenames
    pub org_name: String,

    /// API client scoped to the resolved organization
    pub client: Arc<ThreatStackClient>,
}

impl CommandContext {
    /// Create a new command context with full initialization.
    ///
    /// This handles:
    /// - Loading config from path (or default location)
    /// - Validating required values are present
    /// - Resolving the organization profile (`--org` or `default`)
    /// - Creating the API client scoped to that organization
    ///
    /// # Errors
    /// Returns an error if config cannot be loaded, required values are
    /// missing, or the requested organization profile does not exist.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        config.validate()?;

        let org = config.resolve_org(opts.org_ref())?.clone();
        debug!("Using organization {} ({})", org.name, org.id);

        let api_host = opts
            .api_host_ref()
            .map(String::from)
            .or_else(|| config.api_host.clone());

        let client = ThreatStackClient::new(
            config.credentials.user_id.clone(),
            config.credentials.api_key.clone(),
            org.id.clone(),
            api_host,
        )?;

        Ok(Self {
            config,
            org_id: org.id,
            org_name: filename::sanitize_org_name(&org.name),
            client: Arc::new(client),
        })
    }
}
