#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

/// Remote backend coordinates. Presence of this struct is what switches the
/// store into remote mode; it is resolved exactly once at startup.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub url: String,
    pub api_key: String,
}

/// Fully resolved runtime configuration: CLI flags merged with the optional
/// TOML file and environment fallbacks.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_dir: String,
    pub remote: Option<RemoteConfig>,
    pub relay_endpoint: Option<String>,
    pub verbose: bool,
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data_dir", &self.data_dir)?;
        if let Some(remote) = &self.remote {
            validation::validate_url("remote.url", &remote.url)?;
            validation::validate_non_empty_string("remote.api_key", &remote.api_key)?;
        }
        if let Some(endpoint) = &self.relay_endpoint {
            validation::validate_url("contact.relay_endpoint", endpoint)?;
        }
        Ok(())
    }
}
