use crate::config::file::FileConfig;
use crate::config::{RemoteConfig, ResolvedConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

const REMOTE_URL_ENV: &str = "VENDAA_REMOTE_URL";
const REMOTE_KEY_ENV: &str = "VENDAA_REMOTE_KEY";
const RELAY_ENV: &str = "VENDAA_FORM_RELAY";

#[derive(Debug, Parser)]
#[command(name = "vendaa-cms")]
#[command(about = "Admin CLI for the Vendaa content store")]
pub struct CmsConfig {
    /// Directory holding the local JSON snapshots.
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    /// Remote backend base URL; presence (with the key) enables remote mode.
    #[arg(long)]
    pub remote_url: Option<String>,

    /// Remote backend API key.
    #[arg(long)]
    pub remote_key: Option<String>,

    /// Form-relay endpoint for the contact command.
    #[arg(long)]
    pub relay_endpoint: Option<String>,

    /// Optional TOML config file; CLI flags win over file values.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the catalogue, optionally filtered.
    List {
        #[arg(long, default_value = "all")]
        category: String,
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Print one item with pricing tiers and branding options.
    Show { id: String },
    /// Insert or update an item from a JSON file.
    UpsertItem {
        #[arg(long)]
        file: String,
    },
    /// Delete an entry: kind is items, testimonials, or case_studies.
    Delete { kind: String, id: String },
    /// Update the display currency.
    SetCurrency { code: String, symbol: String },
    /// Upload an item image (field: image, before_image, after_image).
    UploadImage {
        id: String,
        field: String,
        path: String,
    },
    /// Sign in through the identity provider and persist the session.
    Login {
        #[arg(long)]
        email: String,
        /// Read from VENDAA_ADMIN_PASSWORD when omitted.
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign out and clear the persisted session.
    Logout,
    /// Show the admin gate state.
    Status,
    /// Submit a contact message through the relay (or print a mailto draft).
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long)]
        message: String,
    },
}

impl CmsConfig {
    /// Merge CLI flags, the optional TOML file, and environment fallbacks
    /// into one validated runtime configuration. Remote mode requires both
    /// the URL and the key; anything less degrades to local mode.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = match &self.config {
            Some(path) => {
                let file = FileConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let data_dir = file
            .as_ref()
            .and_then(|f| f.site.data_dir.clone())
            .filter(|_| self.data_dir == "./data")
            .unwrap_or_else(|| self.data_dir.clone());

        let remote_url = self
            .remote_url
            .clone()
            .or_else(|| file.as_ref().and_then(|f| f.remote.as_ref().map(|r| r.url.clone())))
            .or_else(|| std::env::var(REMOTE_URL_ENV).ok());
        let remote_key = self
            .remote_key
            .clone()
            .or_else(|| {
                file.as_ref()
                    .and_then(|f| f.remote.as_ref().map(|r| r.api_key.clone()))
            })
            .or_else(|| std::env::var(REMOTE_KEY_ENV).ok());

        let remote = match (remote_url, remote_key) {
            (Some(url), Some(api_key)) => Some(RemoteConfig { url, api_key }),
            _ => None,
        };

        let relay_endpoint = self
            .relay_endpoint
            .clone()
            .or_else(|| {
                file.as_ref()
                    .and_then(|f| f.contact.as_ref())
                    .and_then(|c| c.relay_endpoint.clone())
            })
            .or_else(|| std::env::var(RELAY_ENV).ok());

        let resolved = ResolvedConfig {
            data_dir,
            remote,
            relay_endpoint,
            verbose: self.verbose,
        };
        resolved.validate()?;
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn base_config() -> CmsConfig {
        CmsConfig {
            data_dir: "./data".to_string(),
            remote_url: None,
            remote_key: None,
            relay_endpoint: None,
            config: None,
            verbose: false,
            command: Command::Status,
        }
    }

    #[test]
    fn test_no_remote_flags_means_local_mode() {
        let resolved = base_config().resolve().unwrap();
        assert!(resolved.remote.is_none());
        assert_eq!(resolved.data_dir, "./data");
    }

    #[test]
    fn test_url_without_key_degrades_to_local_mode() {
        let mut config = base_config();
        config.remote_url = Some("https://cms.example.com".to_string());
        let resolved = config.resolve().unwrap();
        assert!(resolved.remote.is_none());
    }

    #[test]
    fn test_flags_enable_remote_mode() {
        let mut config = base_config();
        config.remote_url = Some("https://cms.example.com".to_string());
        config.remote_key = Some("anon-key".to_string());
        let resolved = config.resolve().unwrap();

        let remote = resolved.remote.unwrap();
        assert_eq!(remote.url, "https://cms.example.com");
        assert_eq!(remote.api_key, "anon-key");
    }

    #[test]
    fn test_file_config_fills_missing_flags() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"
[site]
name = "vendaa"
data_dir = "/var/lib/vendaa"

[remote]
url = "https://cms.example.com"
api_key = "file-key"
"#
        )
        .unwrap();

        let mut config = base_config();
        config.config = Some(temp_file.path().to_str().unwrap().to_string());
        let resolved = config.resolve().unwrap();

        assert_eq!(resolved.data_dir, "/var/lib/vendaa");
        assert_eq!(resolved.remote.unwrap().api_key, "file-key");
    }

    #[test]
    fn test_cli_flags_win_over_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"
[site]
name = "vendaa"

[remote]
url = "https://file.example.com"
api_key = "file-key"
"#
        )
        .unwrap();

        let mut config = base_config();
        config.config = Some(temp_file.path().to_str().unwrap().to_string());
        config.remote_url = Some("https://flag.example.com".to_string());
        config.remote_key = Some("flag-key".to_string());
        let resolved = config.resolve().unwrap();

        assert_eq!(resolved.remote.unwrap().url, "https://flag.example.com");
    }

    #[test]
    fn test_invalid_remote_url_is_rejected() {
        let mut config = base_config();
        config.remote_url = Some("not-a-url".to_string());
        config.remote_key = Some("key".to_string());
        assert!(config.resolve().is_err());
    }
}
