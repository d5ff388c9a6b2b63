//! Telemetry utilities for command timing and span construction.

use std::time::Instant;
use tracing::debug;

/// Guard for timing command execution.
///
/// Logs the verb's latency at debug level when dropped.
pub struct CommandTimer {
    verb: String,
    start: Instant,
}

impl CommandTimer {
    /// Start timing a command.
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            start: Instant::now(),
        }
    }
}

impl Drop for CommandTimer {
    fn drop(&mut self) {
        let micros = self.start.elapsed().as_micros();
        debug!(verb = %self.verb, micros, "Command finished");
    }
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, info_span};

    /// Span covering a whole session.
    pub fn session(addr: &str, nick: &str) -> Span {
        info_span!("session", addr = %addr, nick = %nick)
    }

    /// Span covering one command dispatch.
    pub fn command(verb: &str, source: &str, target: &str) -> Span {
        info_span!("command", verb = %verb, source = %source, target = %target)
    }
}
