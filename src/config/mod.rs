//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions (Config, ServerConfig, BotConfig, SideLogConfig)
//! - [`defaults`]: serde default functions, matching the historical command-line defaults
//! - [`validation`]: startup checks run after loading

mod defaults;
mod types;
pub mod validation;

pub use types::{BotConfig, Config, ConfigError, ServerConfig, SideLogConfig};
pub use validation::{ValidationError, validate};
