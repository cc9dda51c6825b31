use serde::Deserialize;

use super::api_utils::{api_base, join_url};

/// localStorage key holding an optional JSON override of [`AppConfig`]
pub const CONFIG_STORAGE_KEY: &str = "wallet_config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Explicit API host; derived from the window location when absent
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    /// `error` | `warn` | `info` | `debug` | `trace`
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_port() -> u16 {
    3000
}

fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            api_port: default_api_port(),
            api_prefix: default_api_prefix(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Unknown names fall back to `Debug`
    pub fn max_log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }

    /// Base URL handed to the REST client
    pub fn rest_base_url(&self) -> String {
        self.rest_base_url_with(|| api_base(self.api_port))
    }

    fn rest_base_url_with(&self, location_base: impl FnOnce() -> String) -> String {
        let host = match &self.api_base {
            Some(base) => base.clone(),
            None => location_base(),
        };
        join_url(&host, &self.api_prefix)
    }
}

/// Load configuration
///
/// Search order:
/// 1. JSON override in `localStorage["wallet_config"]`
/// 2. Built-in defaults (API on port 3000 of the page host)
///
/// Runs before logging is set up, so an invalid override is returned as an
/// error for the caller to report.
pub fn load_config() -> Result<AppConfig, serde_json::Error> {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    match stored {
        Some(json) => AppConfig::from_json(&json),
        None => Ok(AppConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_override_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_port, 3000);
        assert_eq!(config.max_log_level(), log::Level::Debug);
    }

    #[test]
    fn test_log_level_override() {
        let config = AppConfig::from_json(r#"{"log_level": "warn"}"#).unwrap();
        assert_eq!(config.max_log_level(), log::Level::Warn);

        let config = AppConfig::from_json(r#"{"log_level": "loud"}"#).unwrap();
        assert_eq!(config.max_log_level(), log::Level::Debug);
    }

    #[test]
    fn test_explicit_base_wins_over_location() {
        let config =
            AppConfig::from_json(r#"{"api_base": "https://wallet.example", "api_prefix": "/v2"}"#)
                .unwrap();
        let url = config.rest_base_url_with(|| unreachable!("location must not be consulted"));
        assert_eq!(url, "https://wallet.example/v2");
    }

    #[test]
    fn test_location_base_used_when_absent() {
        let config = AppConfig::default();
        let url = config.rest_base_url_with(|| "http://localhost:3000".to_string());
        assert_eq!(url, "http://localhost:3000/api/v1");
    }
}
