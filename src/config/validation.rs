//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.host is required")]
    MissingHost,
    #[error("server.port must be non-zero")]
    InvalidPort,
    #[error("bot.{field} must be a non-empty word without spaces, got '{value}'")]
    InvalidName { field: &'static str, value: String },
    #[error("bot.channel must start with '#' or '&', got '{0}'")]
    InvalidChannel(String),
    #[error("bot.command_prefix must be a punctuation character, got '{0}'")]
    InvalidPrefix(char),
    #[error("side_log.path is required when the side log is enabled")]
    MissingSideLogPath,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.host.trim().is_empty() {
        errors.push(ValidationError::MissingHost);
    }
    if config.server.port == 0 {
        errors.push(ValidationError::InvalidPort);
    }

    for (field, value) in [("nick", &config.bot.nick), ("owner", &config.bot.owner)] {
        if !is_word(value) {
            errors.push(ValidationError::InvalidName {
                field,
                value: value.clone(),
            });
        }
    }

    let channel = &config.bot.channel;
    if !(channel.starts_with('#') || channel.starts_with('&')) || !is_word(channel) {
        errors.push(ValidationError::InvalidChannel(channel.clone()));
    }

    // A word-character prefix would turn ordinary chat into commands
    let prefix = config.bot.command_prefix;
    if !prefix.is_ascii_punctuation() {
        errors.push(ValidationError::InvalidPrefix(prefix));
    }

    if config.side_log.enabled && config.side_log.path.trim().is_empty() {
        errors.push(ValidationError::MissingSideLogPath);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_word(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(|c| c.is_whitespace() || c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = Config::default();
        config.server.host = " ".into();
        config.bot.nick = "two words".into();
        config.bot.channel = "kobobot".into();
        config.bot.command_prefix = 'x';
        config.side_log.path = String::new();

        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(matches!(errors[0], ValidationError::MissingHost));
        assert!(matches!(
            errors[1],
            ValidationError::InvalidName { field: "nick", .. }
        ));
        assert!(matches!(errors[2], ValidationError::InvalidChannel(_)));
        assert!(matches!(errors[3], ValidationError::InvalidPrefix('x')));
        assert!(matches!(errors[4], ValidationError::MissingSideLogPath));
    }

    #[test]
    fn test_disabled_side_log_needs_no_path() {
        let mut config = Config::default();
        config.side_log.enabled = false;
        config.side_log.path = String::new();
        assert!(validate(&config).is_ok());
    }
}
