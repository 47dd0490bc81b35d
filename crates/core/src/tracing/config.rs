//! Configuration for tracing

use serde::{Deserialize, Serialize};

/// Main instrumentation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentationConfig {
    /// Service name reported with every event
    pub service_name: String,
    /// Log level filter (e.g., "info", "learnhub_http=debug")
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output (native only)
    #[serde(default)]
    pub json: bool,
}

impl Default for InstrumentationConfig {
    fn default() -> Self {
        Self {
            service_name: "learnhub-client".to_string(),
            log_level: "info".to_string(),
            json: false,
        }
    }
}

impl InstrumentationConfig {
    /// Create configuration from environment variables
    ///
    /// Supports the following environment variables:
    /// - `SERVICE_NAME`: Service name
    /// - `RUST_LOG`: Log level filter
    /// - `LEARNHUB_LOG_JSON`: `1` or `true` for JSON output
    pub fn from_env() -> Self {
        let service_name =
            std::env::var("SERVICE_NAME").unwrap_or_else(|_| "learnhub-client".to_string());

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let json = std::env::var("LEARNHUB_LOG_JSON")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            service_name,
            log_level,
            json,
        }
    }

    /// Create a development configuration with sensible defaults
    pub fn dev() -> Self {
        Self {
            service_name: "learnhub-client-dev".to_string(),
            log_level: "debug".to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InstrumentationConfig::default();
        assert_eq!(config.service_name, "learnhub-client");
        assert_eq!(config.log_level, "info");
        assert!(!config.json);
    }

    #[test]
    fn test_dev_config() {
        let config = InstrumentationConfig::dev();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_json_flag_defaults_when_missing() {
        let config: InstrumentationConfig =
            serde_json::from_str(r#"{"service_name":"x","log_level":"warn"}"#).unwrap();
        assert!(!config.json);
    }
}
