//! Core configuration types.

use super::defaults::{
    default_console_channel, default_console_permissions, default_console_server,
    default_console_user, default_log_filter, default_no_permission_message, default_prefix,
};
use chatcmd_proto::PlatformPermission;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Bot configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Identity used by the console host.
    #[serde(default)]
    pub console: ConsoleConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml(s)
    }
}

/// Dispatch settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Text command prefix, matched case-insensitively (e.g., "s!").
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// When set, events from any other server are ignored.
    #[serde(default)]
    pub restricted_server: Option<String>,
    /// Template for flag permission denials; `%perm%` is replaced with the
    /// permission's display name.
    #[serde(default = "default_no_permission_message")]
    pub no_permission_message: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            restricted_server: None,
            no_permission_message: default_no_permission_message(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive. `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

/// Console host identity.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_console_user")]
    pub user: String,
    #[serde(default = "default_console_server")]
    pub server: String,
    #[serde(default = "default_console_channel")]
    pub channel: String,
    #[serde(default = "default_console_permissions")]
    pub permissions: Vec<PlatformPermission>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            user: default_console_user(),
            server: default_console_server(),
            channel: default_console_channel(),
            permissions: default_console_permissions(),
            roles: Vec::new(),
        }
    }
}
