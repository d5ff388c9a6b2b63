//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use super::defaults::{
    default_channel, default_command_prefix, default_host, default_nick, default_owner,
    default_port, default_settle_delay_secs, default_side_log_path, default_true,
};
use super::validation::ValidationError;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Bot configuration.
///
/// Immutable for the life of the process. The nick and owner given here are
/// only the starting values; the owner may change both at runtime.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server to connect to.
    #[serde(default)]
    pub server: ServerConfig,
    /// Identity and channel.
    #[serde(default)]
    pub bot: BotConfig,
    /// Append-only log of channel messages.
    #[serde(default)]
    pub side_log: SideLogConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, falling back to built-in defaults when `path`
    /// does not exist and was not given explicitly.
    pub fn load_or_default<P: AsRef<Path>>(path: P, explicit: bool) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !explicit && !path.exists() {
            tracing::info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// `host:port` of the server.
    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Server address configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server hostname (e.g., "irc.rizon.net").
    #[serde(default = "default_host")]
    pub host: String,
    /// Plaintext port (default: 6667).
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Bot identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Initial nickname.
    #[serde(default = "default_nick")]
    pub nick: String,
    /// Initial owner nick, the only user allowed to run privileged commands.
    #[serde(default = "default_owner")]
    pub owner: String,
    /// Channel to join.
    #[serde(default = "default_channel")]
    pub channel: String,
    /// Channel key (optional).
    #[serde(default)]
    pub password: Option<String>,
    /// Character that starts a command (default: '.').
    #[serde(default = "default_command_prefix")]
    pub command_prefix: char,
    /// Seconds to wait after registering before joining the channel.
    #[serde(default = "default_settle_delay_secs")]
    pub settle_delay_secs: u64,
}

impl BotConfig {
    /// Settle delay as a `Duration`.
    pub fn settle_delay(&self) -> Duration {
        Duration::from_secs(self.settle_delay_secs)
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            nick: default_nick(),
            owner: default_owner(),
            channel: default_channel(),
            password: None,
            command_prefix: default_command_prefix(),
            settle_delay_secs: default_settle_delay_secs(),
        }
    }
}

/// Side log configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SideLogConfig {
    /// Whether channel messages are recorded at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// File the messages are appended to.
    #[serde(default = "default_side_log_path")]
    pub path: String,
}

impl Default for SideLogConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            path: default_side_log_path(),
        }
    }
}
