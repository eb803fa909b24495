//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions (Config, BotConfig, LoggingConfig, ConsoleConfig)
//! - [`defaults`]: serde default value functions
//! - [`validation`]: startup validation collecting every error

mod defaults;
mod types;
pub mod validation;

pub use types::{BotConfig, Config, ConfigError, ConsoleConfig, LoggingConfig};
pub use validation::{ValidationError, validate};
