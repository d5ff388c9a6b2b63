//! Connection lifecycle: connect, register, join.

use super::Session;
use super::writer::{OutboundTx, send};
use crate::error::TransportError;
use crate::state::SessionState;
use kobo_proto::Outbound;
use tokio::net::TcpStream;
use tracing::{debug, info};

/// Open the TCP transport to `addr` (`host:port`).
pub async fn connect(addr: &str) -> Result<TcpStream, TransportError> {
    let stream = TcpStream::connect(addr)
        .await
        .map_err(|source| TransportError::Connect {
            addr: addr.to_owned(),
            source,
        })?;
    match stream.peer_addr() {
        Ok(peer) => info!(addr = %addr, peer = %peer, "Connected to IRC server"),
        Err(_) => info!(addr = %addr, "Connected to IRC server"),
    }
    Ok(stream)
}

impl Session {
    /// Walk `Connecting -> Authenticating -> Joining -> Active`.
    ///
    /// The settle delay blocks the session; nothing is read until the join
    /// has been queued. The join is not confirmed.
    pub(super) async fn register(&mut self, tx: &OutboundTx) -> Result<(), TransportError> {
        if self.lifecycle == SessionState::Disconnected {
            self.lifecycle.advance(SessionState::Connecting);
        }

        self.lifecycle.advance(SessionState::Authenticating);
        let nick = self.state.nick().to_owned();
        send(tx, Outbound::User(nick.clone())).await?;
        send(tx, Outbound::Nick(nick)).await?;

        if !self.settle_delay.is_zero() {
            debug!(delay = ?self.settle_delay, "Waiting before join");
            tokio::time::sleep(self.settle_delay).await;
        }

        self.lifecycle.advance(SessionState::Joining);
        send(
            tx,
            Outbound::Join {
                channel: self.state.channel().to_owned(),
                key: self.channel_key.clone(),
            },
        )
        .await?;

        self.lifecycle.advance(SessionState::Active);
        Ok(())
    }
}
