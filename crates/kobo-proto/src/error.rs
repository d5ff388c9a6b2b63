//! Error types for the protocol crate.
//!
//! [`ParseError`] covers lines and origins that do not match a recognized
//! shape. [`ProtocolError`] covers the line codec.

use thiserror::Error;

/// Convenience type alias for Results using [`ParseError`].
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// A line or origin that matches none of the recognized shapes.
///
/// Parse failures are always recoverable: the offending line is dropped and
/// the caller moves on to the next one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The line was empty.
    #[error("empty line")]
    Empty,

    /// The line has no ` :` delimiter separating the trailing text.
    #[error("no trailing delimiter in line: {0:?}")]
    MissingTrailing(String),

    /// An origin was present but no command word followed it.
    #[error("no command word in line: {0:?}")]
    MissingCommand(String),

    /// A chat message or notice with nothing to address a reply to.
    #[error("no target in line: {0:?}")]
    MissingTarget(String),

    /// The command word is neither uppercase letters nor a numeric reply.
    #[error("invalid command word: {0:?}")]
    InvalidCommand(String),

    /// A keepalive challenge without a token.
    #[error("keepalive challenge without a token")]
    MissingPingToken,

    /// The origin is not of the form `nick!user@host`.
    #[error("origin is not nick!user@host: {0:?}")]
    InvalidOrigin(String),
}

impl ParseError {
    /// Static label for structured logging.
    #[inline]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::MissingTrailing(_) => "missing_trailing",
            Self::MissingCommand(_) => "missing_command",
            Self::MissingTarget(_) => "missing_target",
            Self::InvalidCommand(_) => "invalid_command",
            Self::MissingPingToken => "missing_ping_token",
            Self::InvalidOrigin(_) => "invalid_origin",
        }
    }
}

/// Errors raised by the line codec.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A line exceeded the codec's length limit.
    #[error("line too long: {actual} bytes (limit: {limit})")]
    LineTooLong {
        /// Bytes buffered when the limit was hit.
        actual: usize,
        /// Maximum allowed length.
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_labels_are_stable() {
        assert_eq!(ParseError::Empty.reason(), "empty");
        assert_eq!(
            ParseError::MissingTrailing("x".into()).reason(),
            "missing_trailing"
        );
        assert_eq!(
            ParseError::InvalidOrigin("x".into()).reason(),
            "invalid_origin"
        );
    }

    #[test]
    fn display_includes_offending_text() {
        let err = ParseError::InvalidCommand("privmsg".into());
        assert_eq!(err.to_string(), "invalid command word: \"privmsg\"");

        let err = ProtocolError::LineTooLong {
            actual: 600,
            limit: 512,
        };
        assert_eq!(err.to_string(), "line too long: 600 bytes (limit: 512)");
    }
}
