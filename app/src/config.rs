//! Application configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use reclaim_types::AppCredentials;
use reclaim_utils::LogFormat;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(String),

    #[error("invalid secrets file {path}: {source}")]
    Secrets {
        path: PathBuf,
        source: reclaim_types::TypesError,
    },
}

/// Configuration for the verification front-end.
///
/// Can be loaded from a TOML file via [`AppConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the verification SDK host.
    #[serde(default = "default_bridge_url")]
    pub bridge_url: String,

    /// Upper bound on one verification round trip, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Path to the JSON file holding the application id and secret.
    #[serde(default = "default_secrets_path")]
    pub secrets_path: PathBuf,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_bridge_url() -> String {
    "http://127.0.0.1:8765".to_string()
}

fn default_request_timeout_secs() -> u64 {
    reclaim_bridge::client::DEFAULT_TIMEOUT.as_secs()
}

fn default_secrets_path() -> PathBuf {
    PathBuf::from("./secrets.json")
}

fn default_log_level() -> String {
    "warn".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Read the application credentials from [`AppConfig::secrets_path`].
    pub fn load_credentials(&self) -> Result<AppCredentials, ConfigError> {
        let content =
            std::fs::read_to_string(&self.secrets_path).map_err(|source| ConfigError::Read {
                path: self.secrets_path.clone(),
                source,
            })?;
        AppCredentials::from_secrets_json(&content).map_err(|source| ConfigError::Secrets {
            path: self.secrets_path.clone(),
            source,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bridge_url: default_bridge_url(),
            request_timeout_secs: default_request_timeout_secs(),
            secrets_path: default_secrets_path(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
