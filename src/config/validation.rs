//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("bot.prefix is required")]
    MissingPrefix,
    #[error("bot.prefix must not contain whitespace, got '{0}'")]
    PrefixWhitespace(String),
    #[error("bot.restricted_server must not be empty when set")]
    EmptyRestrictedServer,
    #[error("logging.filter is not a valid filter directive: {0}")]
    InvalidLogFilter(String),
    #[error("console.user is required")]
    MissingConsoleUser,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let prefix = &config.bot.prefix;
    if prefix.is_empty() {
        errors.push(ValidationError::MissingPrefix);
    } else if prefix.chars().any(char::is_whitespace) {
        errors.push(ValidationError::PrefixWhitespace(prefix.clone()));
    }

    if config
        .bot
        .restricted_server
        .as_deref()
        .is_some_and(|s| s.trim().is_empty())
    {
        errors.push(ValidationError::EmptyRestrictedServer);
    }

    if let Err(e) = EnvFilter::try_new(&config.logging.filter) {
        errors.push(ValidationError::InvalidLogFilter(e.to_string()));
    }

    if config.console.user.trim().is_empty() {
        errors.push(ValidationError::MissingConsoleUser);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
