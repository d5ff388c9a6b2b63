//! Unified error handling for kobobot.
//!
//! Parse errors live in `kobo_proto`. This module holds the two layers above
//! them: transport failures, which end the session, and dispatch failures,
//! which are always turned into a reply.

use kobo_proto::ProtocolError;
use thiserror::Error;

// ============================================================================
// Transport Errors (fatal)
// ============================================================================

/// Transport-level failures. Every variant terminates the session.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("read error: {0}")]
    Read(#[source] ProtocolError),

    #[error("write error: {0}")]
    Write(#[source] ProtocolError),

    /// The server closed the stream.
    #[error("connection closed by server")]
    Closed,

    /// The writer task stopped, so nothing more can be sent.
    #[error("outbound writer stopped")]
    WriterGone,
}

impl TransportError {
    /// Get a static error code string for structured logging.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Connect { .. } => "connect",
            Self::Read(_) => "read",
            Self::Write(_) => "write",
            Self::Closed => "closed",
            Self::WriterGone => "writer_gone",
        }
    }
}

// ============================================================================
// Dispatch Errors (recoverable)
// ============================================================================

/// Reasons a command invocation did not reach a handler.
///
/// `Registry::dispatch` maps both to fixed reply strings; they never
/// interrupt the receive loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("unknown verb: {0}")]
    UnknownVerb(String),

    #[error("{nick} is not the owner")]
    Unauthorized { nick: String },
}

impl DispatchError {
    /// Get a static error code string for structured logging.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownVerb(_) => "unknown_verb",
            Self::Unauthorized { .. } => "unauthorized",
        }
    }
}
