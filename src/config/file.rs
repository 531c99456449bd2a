use crate::utils::error::{CmsError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub site: SiteSection,
    pub remote: Option<RemoteSection>,
    pub contact: Option<ContactSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub name: String,
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSection {
    pub url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSection {
    pub relay_endpoint: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CmsError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CmsError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replace `${VAR_NAME}` placeholders with environment values; unknown
/// variables are left in place so validation can flag them.
fn substitute_env_vars(content: &str) -> String {
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("site.name", &self.site.name)?;
        if let Some(data_dir) = &self.site.data_dir {
            validation::validate_path("site.data_dir", data_dir)?;
        }
        if let Some(remote) = &self.remote {
            validation::validate_url("remote.url", &remote.url)?;
            validation::validate_non_empty_string("remote.api_key", &remote.api_key)?;
        }
        if let Some(contact) = &self.contact {
            if let Some(endpoint) = &contact.relay_endpoint {
                validation::validate_url("contact.relay_endpoint", endpoint)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[site]
name = "vendaa"
data_dir = "./data"

[remote]
url = "https://cms.example.com"
api_key = "anon-key"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.site.name, "vendaa");
        assert_eq!(config.site.data_dir.as_deref(), Some("./data"));
        assert_eq!(config.remote.as_ref().unwrap().api_key, "anon-key");
        assert!(config.contact.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_CMS_API_KEY", "secret-from-env");

        let toml_content = r#"
[site]
name = "vendaa"

[remote]
url = "https://cms.example.com"
api_key = "${TEST_CMS_API_KEY}"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.remote.unwrap().api_key, "secret-from-env");

        std::env::remove_var("TEST_CMS_API_KEY");
    }

    #[test]
    fn test_invalid_remote_url_fails_validation() {
        let toml_content = r#"
[site]
name = "vendaa"

[remote]
url = "not-a-url"
api_key = "anon-key"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[site]
name = "file-test"

[contact]
relay_endpoint = "https://formrelay.example.com/f/abc"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.site.name, "file-test");
        assert_eq!(
            config.contact.unwrap().relay_endpoint.as_deref(),
            Some("https://formrelay.example.com/f/abc")
        );
    }
}
