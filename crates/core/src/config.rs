//! Application configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration, overridable from a JSON document
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub catalog: CatalogConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.validate()
    }
}

/// Mock authentication settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// The single accepted username
    pub username: String,
    /// The single accepted password
    pub password: String,
    pub access_ttl_secs: u32,
    pub refresh_ttl_secs: u32,
    /// Refresh once the access token has less than this left
    pub refresh_threshold_secs: u32,
    pub check_interval_ms: u32,
    pub login_latency_ms: u32,
    pub refresh_latency_ms: u32,
    pub keys: StorageKeys,
}

impl AuthConfig {
    /// Access token lifetime
    pub const ACCESS_TTL_SECS: u32 = 3_600; // 1 hour

    /// Refresh token lifetime
    pub const REFRESH_TTL_SECS: u32 = 86_400; // 24 hours

    /// Refresh window before access token expiry
    pub const REFRESH_THRESHOLD_SECS: u32 = 300; // 5 minutes

    /// Silent refresh check interval in milliseconds
    pub const CHECK_INTERVAL_MS: u32 = 60_000; // 1 minute

    pub fn access_ttl(&self) -> Duration {
        Duration::from_secs(u64::from(self.access_ttl_secs))
    }

    pub fn refresh_ttl(&self) -> Duration {
        Duration::from_secs(u64::from(self.refresh_ttl_secs))
    }

    pub fn refresh_threshold_ms(&self) -> i64 {
        i64::from(self.refresh_threshold_secs) * 1000
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.check_interval_ms))
    }

    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(u64::from(self.login_latency_ms))
    }

    pub fn refresh_latency(&self) -> Duration {
        Duration::from_millis(u64::from(self.refresh_latency_ms))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.access_ttl_secs == 0 || self.refresh_ttl_secs == 0 {
            return Err(ConfigError::invalid("token lifetimes must be non-zero"));
        }
        if self.check_interval_ms == 0 {
            return Err(ConfigError::invalid("check interval must be non-zero"));
        }
        if self.refresh_threshold_secs >= self.access_ttl_secs {
            return Err(ConfigError::invalid(
                "refresh threshold must be shorter than the access token lifetime",
            ));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "password123".to_string(),
            access_ttl_secs: Self::ACCESS_TTL_SECS,
            refresh_ttl_secs: Self::REFRESH_TTL_SECS,
            refresh_threshold_secs: Self::REFRESH_THRESHOLD_SECS,
            check_interval_ms: Self::CHECK_INTERVAL_MS,
            login_latency_ms: 500,
            refresh_latency_ms: 300,
            keys: StorageKeys::default(),
        }
    }
}

/// Local storage slots holding the session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub access_token: String,
    pub refresh_token: String,
    pub expiry: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            access_token: "sw_token".to_string(),
            refresh_token: "sw_refresh_token".to_string(),
            expiry: "sw_token_expiry".to_string(),
        }
    }
}

/// Remote collection settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,
    pub people_path: String,
}

impl CatalogConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://swapi.dev/api";

    /// First page of the people collection
    pub fn people_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.people_path.trim_start_matches('/')
        )
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            people_path: "people/?format=json".to_string(),
        }
    }
}

/// Logging settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl LogConfig {
    /// Parsed level, falling back to `INFO` for unknown names
    pub fn level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.auth.username, "admin");
        assert_eq!(config.auth.access_ttl(), Duration::from_secs(3600));
        assert_eq!(config.auth.refresh_ttl(), Duration::from_secs(86_400));
        assert_eq!(config.auth.refresh_threshold_ms(), 300_000);
        assert_eq!(config.auth.check_interval(), Duration::from_secs(60));
        assert_eq!(config.auth.keys.expiry, "sw_token_expiry");
        assert_eq!(
            config.catalog.people_url(),
            "https://swapi.dev/api/people/?format=json"
        );
        assert_eq!(config.log.level(), tracing::Level::INFO);
    }

    #[test]
    fn test_partial_json_override() {
        let config =
            AppConfig::from_json(r#"{"catalog": {"base_url": "http://localhost:9000/api/"}, "log": {"level": "debug"}}"#)
                .unwrap();
        assert_eq!(
            config.catalog.people_url(),
            "http://localhost:9000/api/people/?format=json"
        );
        assert_eq!(config.log.level(), tracing::Level::DEBUG);
        assert_eq!(config.auth, AuthConfig::default());
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let result = AppConfig::from_json(
            r#"{"auth": {"access_ttl_secs": 60, "refresh_threshold_secs": 300}}"#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let log = LogConfig {
            level: "chatty".to_string(),
        };
        assert_eq!(log.level(), tracing::Level::INFO);
    }
}
