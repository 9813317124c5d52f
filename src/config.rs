//! Configuration handling for tfmodulegen.
//! Loads the optional JSON configuration file that pre-fills the Terraform
//! version prompt and the provider list.

use crate::constants::DEFAULT_TERRAFORM_VERSION;
use crate::error::{Error, Result};
use crate::module::{null_as_default, Provider};
use log::{debug, info, warn};
use serde::Deserialize;
use std::path::Path;

/// Defaults read from the configuration file.
///
/// An empty `terraform_version` and an empty `providers` list both mean
/// "not configured".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default, deserialize_with = "null_as_default")]
    pub terraform_version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub providers: Vec<Provider>,
}

impl Config {
    /// Version constraint offered to the operator when they leave the prompt empty.
    pub fn default_terraform_version(&self) -> &str {
        if self.terraform_version.is_empty() {
            DEFAULT_TERRAFORM_VERSION
        } else {
            &self.terraform_version
        }
    }

    pub fn has_terraform_version(&self) -> bool {
        !self.terraform_version.is_empty()
    }
}

/// Parses the configuration content.
///
/// # Arguments
/// * `content` - Raw configuration content as string
///
/// # Returns
/// * `Result<Config>` - Parsed configuration
///
/// # Errors
/// * `Error::ConfigError` if the content is not a JSON object of the expected shape
pub fn parse_config(content: &str) -> Result<Config> {
    serde_json::from_str(content).map_err(|e| Error::ConfigError(e.to_string()))
}

/// Loads the configuration file, never failing.
///
/// A missing file yields the empty configuration silently. An unreadable or
/// malformed file yields the empty configuration after a warning, so the run
/// proceeds exactly as if no file were present.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Config {
    let config_path = config_path.as_ref();
    if !config_path.exists() {
        debug!("No configuration file at {}", config_path.display());
        return Config::default();
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Error opening config file {}: {}", config_path.display(), e);
            return Config::default();
        }
    };

    match parse_config(&content) {
        Ok(config) => {
            info!("Loaded configuration from {}", config_path.display());
            config
        }
        Err(e) => {
            warn!("Error decoding config file {}: {}", config_path.display(), e);
            Config::default()
        }
    }
}
