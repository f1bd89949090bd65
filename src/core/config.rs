//! Configuration management for the MCP server.
//!
//! Configuration is read once at startup from environment variables (and an
//! optional `.env` file) and then shared read-only with every tool.

use serde_json::{Value, json};
use thiserror::Error;
use tracing::{info, warn};

/// Environment variable holding the Jellyfin base URL.
pub const JELLYFIN_URL_VAR: &str = "JELLYFIN_URL";
/// Environment variable holding the Jellyfin API key.
pub const JELLYFIN_API_KEY_VAR: &str = "JELLYFIN_API_KEY";
/// Environment variable holding the Jellyfin user id.
pub const JELLYFIN_USER_ID_VAR: &str = "JELLYFIN_USER_ID";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Jellyfin connection settings.
    pub jellyfin: JellyfinConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Connection settings for the Jellyfin server.
///
/// All three values are required for a tool call to proceed. Empty values are
/// accepted at startup and reported per call by [`JellyfinConfig::check`].
#[derive(Clone, Default)]
pub struct JellyfinConfig {
    /// Base URL without trailing slash, e.g. `http://jellyfin.local:8096`.
    pub url: String,

    /// API key sent as the `api_key` query parameter.
    pub api_key: String,

    /// User whose library views are queried.
    pub user_id: String,
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for JellyfinConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JellyfinConfig")
            .field("url", &self.url)
            .field(
                "api_key",
                &(!self.api_key.is_empty()).then_some("[REDACTED]"),
            )
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// A required Jellyfin setting that is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingSetting {
    #[error("JELLYFIN_URL not configured")]
    Url,
    #[error("JELLYFIN_API_KEY not configured")]
    ApiKey,
    #[error("JELLYFIN_USER_ID not configured")]
    UserId,
}

impl MissingSetting {
    /// Name of the environment variable to set.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::Url => JELLYFIN_URL_VAR,
            Self::ApiKey => JELLYFIN_API_KEY_VAR,
            Self::UserId => JELLYFIN_USER_ID_VAR,
        }
    }

    /// The `{"error": ...}` object returned to the caller in place of a result.
    pub fn to_response(self) -> Value {
        json!({ "error": self.to_string() })
    }
}

impl JellyfinConfig {
    /// Create connection settings; a trailing `/` on the URL is dropped.
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            user_id: user_id.into(),
        }
    }

    /// Check that every required value is present.
    ///
    /// Values are checked in order URL, API key, user id; the first empty one
    /// is reported.
    pub fn check(&self) -> Result<(), MissingSetting> {
        if self.url.is_empty() {
            return Err(MissingSetting::Url);
        }
        if self.api_key.is_empty() {
            return Err(MissingSetting::ApiKey);
        }
        if self.user_id.is_empty() {
            return Err(MissingSetting::UserId);
        }
        Ok(())
    }

    fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self::new(
            var(JELLYFIN_URL_VAR),
            var(JELLYFIN_API_KEY_VAR),
            var(JELLYFIN_USER_ID_VAR),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "jellyfin-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            jellyfin: JellyfinConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration pointing at the given Jellyfin server.
    pub fn with_jellyfin(jellyfin: JellyfinConfig) -> Self {
        Self {
            jellyfin,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`); Jellyfin settings use `JELLYFIN_URL`,
    /// `JELLYFIN_API_KEY` and `JELLYFIN_USER_ID`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.jellyfin = JellyfinConfig::from_env();

        config
    }

    /// Log the state of the Jellyfin settings.
    ///
    /// Called after logging is initialised, since `from_env` runs before it.
    pub fn log_summary(&self) {
        match self.jellyfin.check() {
            Ok(()) => info!(
                "Jellyfin configured: {} (user {})",
                self.jellyfin.url, self.jellyfin.user_id
            ),
            Err(missing) => warn!(
                "{} is not set - every tool call will report it until configured",
                missing.env_var()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn complete() -> JellyfinConfig {
        JellyfinConfig::new("http://jellyfin.local:8096", "test-api-key", "test-user-id")
    }

    #[test]
    fn test_check_all_set() {
        assert_eq!(complete().check(), Ok(()));
    }

    #[test]
    fn test_check_missing_url() {
        let config = JellyfinConfig {
            url: String::new(),
            ..complete()
        };
        let err = config.check().unwrap_err();
        assert_eq!(err, MissingSetting::Url);
        assert_eq!(err.to_response(), json!({"error": "JELLYFIN_URL not configured"}));
    }

    #[test]
    fn test_check_missing_api_key() {
        let config = JellyfinConfig {
            api_key: String::new(),
            ..complete()
        };
        assert_eq!(config.check(), Err(MissingSetting::ApiKey));
    }

    #[test]
    fn test_check_missing_user_id() {
        let config = JellyfinConfig {
            user_id: String::new(),
            ..complete()
        };
        let err = config.check().unwrap_err();
        assert!(err.to_string().contains("JELLYFIN_USER_ID"));
    }

    #[test]
    fn test_check_reports_first_missing() {
        assert_eq!(JellyfinConfig::default().check(), Err(MissingSetting::Url));

        let config = JellyfinConfig::new("http://jf", "", "");
        assert_eq!(config.check(), Err(MissingSetting::ApiKey));
    }

    #[test]
    fn test_url_trailing_slash_trimmed() {
        let config = JellyfinConfig::new("http://jellyfin.local:8096//", "k", "u");
        assert_eq!(config.url, "http://jellyfin.local:8096");
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let config = JellyfinConfig::new("http://jf", "super_secret_key", "u");
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_api_key_redacted_in_full_config() {
        let config = Config::with_jellyfin(JellyfinConfig::new("http://jf", "super_secret_key", "u"));
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("http://jf"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_jellyfin_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(JELLYFIN_URL_VAR, "http://env-host:8096/");
            std::env::set_var(JELLYFIN_API_KEY_VAR, "env-key");
            std::env::set_var(JELLYFIN_USER_ID_VAR, "env-user");
        }
        let config = Config::from_env();
        assert_eq!(config.jellyfin.url, "http://env-host:8096");
        assert_eq!(config.jellyfin.api_key, "env-key");
        assert_eq!(config.jellyfin.user_id, "env-user");
        unsafe {
            std::env::remove_var(JELLYFIN_URL_VAR);
            std::env::remove_var(JELLYFIN_API_KEY_VAR);
            std::env::remove_var(JELLYFIN_USER_ID_VAR);
        }
    }

    #[test]
    fn test_log_level_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "debug");
        }
        let config = Config::from_env();
        assert_eq!(config.logging.level, "debug");
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
        }
    }
}
