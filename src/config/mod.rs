//! Configuration management for threatop
//!
//! Credentials are shared across organizations; each named organization
//! profile carries the org id and display name used to scope API calls
//! and to stamp output filenames.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Name of the organization profile used when `--org` is not given
pub const DEFAULT_ORG_PROFILE: &str = "default";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API credentials, shared across all organization profiles
    pub credentials: Credentials,

    /// Named organization profiles
    #[serde(default)]
    pub organizations: BTreeMap<String, OrgProfile>,

    /// Custom API host for development/testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,
}

/// Threat Stack API credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// API user ID
    pub user_id: String,

    /// API key
    pub api_key: String,
}

/// A single organization profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgProfile {
    /// Organization ID
    pub id: String,

    /// Organization display name (sanitized for use in filenames)
    pub name: String,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".threatop").join("config.yaml"))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path override
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an optional path override
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Validate that required configuration is present
    pub fn validate(&self) -> Result<()> {
        if self.credentials.user_id.is_empty() {
            return Err(ConfigError::MissingValue("credentials.user_id").into());
        }
        if self.credentials.api_key.is_empty() {
            return Err(ConfigError::MissingValue("credentials.api_key").into());
        }
        for (name, org) in &self.organizations {
            if org.id.is_empty() || org.name.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "organization profile '{}' is missing id or name",
                    name
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Resolve an organization profile by name, defaulting to `default`.
    pub fn resolve_org(&self, name: Option<&str>) -> Result<&OrgProfile> {
        let name = name.unwrap_or(DEFAULT_ORG_PROFILE);
        self.organizations
            .get(name)
            .ok_or_else(|| ConfigError::UnknownOrganization(name.to_string()).into())
    }
}
