//! Session - drives one connection to the server.
//!
//! The session runs as a single task with the following architecture:
//!
//! ```text
//! Phase 1: Registration (USER, NICK, settle delay, JOIN)
//!    ↓
//! Phase 2: Receive loop (strictly one line at a time)
//!    ┌──────────────────────────────────────────────────────┐
//!    │                   Session Task                       │
//!    │                                                      │
//!    │  FramedRead ──► parse ──► classify ──► dispatch      │
//!    │                   │                       │          │
//!    │                   ▼                       ▼          │
//!    │              [Side Log Task]      [Outbound Queue]   │
//!    │                                           │          │
//!    └───────────────────────────────────────────┼──────────┘
//!                                                ▼
//!                                      [Writer Task: FramedWrite]
//! ```
//!
//! Bot state is only mutated on the session task; the writer and side log
//! tasks each own their sink exclusively.

mod dispatch;
mod event_loop;
mod lifecycle;
mod writer;

pub use lifecycle::connect;

use crate::config::BotConfig;
use crate::error::TransportError;
use crate::handlers::Registry;
use crate::history::SideLog;
use crate::state::{BotState, SessionState};
use kobo_proto::LineCodec;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::FramedRead;
use tracing::{info, warn};

/// A bot session.
pub struct Session {
    state: BotState,
    lifecycle: SessionState,
    registry: Registry,
    side_log: Option<SideLog>,
    /// Channel key sent with JOIN.
    channel_key: Option<String>,
    settle_delay: Duration,
}

impl Session {
    /// Create a session that has not connected yet.
    pub fn new(config: &BotConfig, registry: Registry, side_log: Option<SideLog>) -> Self {
        Self {
            state: BotState::new(config),
            lifecycle: SessionState::Disconnected,
            registry,
            side_log,
            channel_key: config.password.clone(),
            settle_delay: config.settle_delay(),
        }
    }

    /// Current bot state.
    pub fn state(&self) -> &BotState {
        &self.state
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> SessionState {
        self.lifecycle
    }

    /// Connect to `addr` and run the session.
    ///
    /// Runs until the transport fails and returns the reason. Every return
    /// is fatal; there is no reconnect, and the session is left `Closed`.
    pub async fn start(&mut self, addr: &str) -> TransportError {
        self.lifecycle.advance(SessionState::Connecting);
        match connect(addr).await {
            Ok(stream) => self.run(stream).await,
            Err(e) => {
                self.lifecycle.advance(SessionState::Closed);
                e
            }
        }
    }

    /// Run the session over an already open stream.
    pub async fn run<S>(&mut self, stream: S) -> TransportError
    where
        S: AsyncRead + AsyncWrite + Send + 'static,
    {
        let (reader, writer) = tokio::io::split(stream);
        self.run_split(reader, writer).await
    }

    /// Run the session over separate read and write halves.
    pub async fn run_split<R, W>(&mut self, reader: R, writer: W) -> TransportError
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (outbound, writer_task) = writer::spawn(writer);
        let mut lines = FramedRead::new(reader, LineCodec::new());

        let mut reason = match self.register(&outbound).await {
            Ok(()) => self.event_loop(&mut lines, &outbound).await,
            Err(e) => e,
        };
        self.lifecycle.advance(SessionState::Closed);

        // Let the writer drain what is already queued
        drop(outbound);
        match writer_task.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                if matches!(reason, TransportError::WriterGone) {
                    reason = TransportError::Write(e);
                } else {
                    warn!(error = %e, "Outbound writer failed during shutdown");
                }
            }
            Err(e) => warn!(error = %e, "Outbound writer task panicked"),
        }

        if let Some(side_log) = self.side_log.take() {
            side_log.close().await;
        }

        info!(
            reason = reason.error_code(),
            usage = ?self.registry.command_stats(),
            "Session closed"
        );
        reason
    }
}
