//! Session lifecycle state machine.
//!
//! ## State Machine
//!
//! ```text
//! Disconnected ──► Connecting ──► Authenticating ──► Joining ──► Active
//!                      │                │               │          │
//!                      └────────────────┴───────┬───────┴──────────┘
//!                                               ▼
//!                                             Closed
//! ```
//!
//! `Active` loops until the transport fails or ends. `Closed` is terminal:
//! there is no reconnect at this layer.

use std::fmt;
use tracing::{info, warn};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Not yet started.
    #[default]
    Disconnected,
    /// Transport is being opened.
    Connecting,
    /// USER/NICK sent, waiting out the settle delay.
    Authenticating,
    /// JOIN being sent.
    Joining,
    /// Reading and reacting to lines.
    Active,
    /// Transport gone. Terminal.
    Closed,
}

impl SessionState {
    /// Whether `self -> to` is a legal transition.
    pub fn can_transition_to(self, to: SessionState) -> bool {
        use SessionState::*;
        matches!(
            (self, to),
            (Disconnected, Connecting)
                | (Connecting, Authenticating)
                | (Authenticating, Joining)
                | (Joining, Active)
                | (Disconnected | Connecting | Authenticating | Joining | Active, Closed)
        )
    }

    /// Move to `to`, logging the transition.
    ///
    /// Returns `false` and leaves the state unchanged if the transition is
    /// not legal.
    pub fn advance(&mut self, to: SessionState) -> bool {
        if !self.can_transition_to(to) {
            warn!(from = %self, to = %to, "Illegal session transition");
            return false;
        }
        info!(from = %self, to = %to, "Session state");
        *self = to;
        true
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Disconnected => "disconnected",
            SessionState::Connecting => "connecting",
            SessionState::Authenticating => "authenticating",
            SessionState::Joining => "joining",
            SessionState::Active => "active",
            SessionState::Closed => "closed",
        };
        f.write_str(name)
    }
}
