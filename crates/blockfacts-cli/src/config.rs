/*
[INPUT]:  YAML configuration file, CLI/env overrides
[OUTPUT]: Resolved API credentials and client settings
[POS]:    Configuration layer - CLI setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use blockfacts_adapter::http::REST_BASE_URL;
use blockfacts_adapter::ws::STREAM_URL;
use blockfacts_adapter::{ClientConfig, Credentials, RestClient};
use serde::{Deserialize, Serialize};

/// Top-level CLI configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CliConfig {
    /// BlockFacts API key
    #[serde(default)]
    pub key: Option<String>,
    /// BlockFacts API secret
    #[serde(default)]
    pub secret: Option<String>,
    /// REST base URL (default: production API)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Streaming URL (default: production stream)
    #[serde(default = "default_stream_url")]
    pub stream_url: String,
    /// Whole-request timeout; unset means no timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    REST_BASE_URL.to_string()
}

fn default_stream_url() -> String {
    STREAM_URL.to_string()
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse config yaml")?;
        Ok(config)
    }

    /// Defaults when no file is given
    pub fn defaults() -> Self {
        Self {
            key: None,
            secret: None,
            base_url: default_base_url(),
            stream_url: default_stream_url(),
            timeout_secs: None,
        }
    }

    /// Flag/env values win over the file
    pub fn with_overrides(mut self, key: Option<String>, secret: Option<String>) -> Self {
        if key.is_some() {
            self.key = key;
        }
        if secret.is_some() {
            self.secret = secret;
        }
        self
    }

    /// Credentials, falling back to the placeholder values for anything unset
    pub fn credentials(&self) -> Credentials {
        let defaults = Credentials::default();
        Credentials::new(
            self.key.clone().unwrap_or(defaults.key),
            self.secret.clone().unwrap_or(defaults.secret),
        )
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: self.timeout_secs.map(Duration::from_secs),
            connect_timeout: None,
        }
    }

    pub fn rest_client(&self) -> anyhow::Result<RestClient> {
        RestClient::with_config_and_base_url(self.client_config(), self.credentials(), &self.base_url)
            .context("build rest client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let config = CliConfig::from_yaml_str("key: K\nsecret: S\n").expect("parse");
        assert_eq!(config.credentials(), Credentials::new("K", "S"));
        assert_eq!(config.base_url, "https://api.blockfacts.io/api/v1/");
        assert_eq!(config.stream_url, "wss://ws.blockfacts.io/v1/");
        assert_eq!(config.client_config().timeout, None);
    }

    #[test]
    fn test_overrides_win() {
        let config = CliConfig::from_yaml_str("key: K\nsecret: S\ntimeout_secs: 5\n")
            .expect("parse")
            .with_overrides(Some("K2".to_string()), None);

        assert_eq!(config.credentials(), Credentials::new("K2", "S"));
        assert_eq!(config.client_config().timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_missing_credentials_use_placeholders() {
        let config = CliConfig::defaults();
        assert_eq!(config.credentials(), Credentials::default());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(CliConfig::from_yaml_str("key: [unclosed").is_err());
    }
}
