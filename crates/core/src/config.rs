//! Client configuration

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// Base URL baked in at build time, if `LEARNHUB_API_BASE_URL` was set
pub const BUILD_API_BASE_URL: Option<&str> = option_env!("LEARNHUB_API_BASE_URL");

/// Fallback when neither the build nor the runtime environment names an API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// API client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every request path is appended to
    pub api_base_url: String,

    /// Request timeout in seconds (ignored on wasm32)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: BUILD_API_BASE_URL
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            timeout_secs: None,
            user_agent: concat!("learnhub-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at `api_base_url` with default settings
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> CoreResult<Self> {
        let settings = Self::defaults()?
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix("LEARNHUB").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with defaults and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables cannot be parsed
    pub fn from_env() -> CoreResult<Self> {
        let settings = Self::defaults()?
            .add_source(config::Environment::with_prefix("LEARNHUB").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the base URL is an absolute http(s) URL
    pub fn validate(&self) -> CoreResult<()> {
        let url = Url::parse(&self.api_base_url)?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(CoreError::invalid_config(format!(
                "api_base_url must use http or https, got {other}"
            ))),
        }
    }

    fn defaults() -> CoreResult<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = Self::default();
        Ok(config::Config::builder()
            .set_default("api_base_url", defaults.api_base_url)?
            .set_default("user_agent", defaults.user_agent)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.user_agent.starts_with("learnhub-client/"));
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_validate_rejects_relative_and_foreign_schemes() {
        assert!(ClientConfig::with_base_url("/api").validate().is_err());
        assert!(matches!(
            ClientConfig::with_base_url("ftp://example.com").validate(),
            Err(CoreError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "api_base_url = \"https://api.learnhub.test\"\ntimeout_secs = 15"
        )
        .unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_base_url, "https://api.learnhub.test");
        assert_eq!(config.timeout_secs, Some(15));
    }
}
