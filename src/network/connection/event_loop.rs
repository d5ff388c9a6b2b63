//! Active-state receive loop.

use super::Session;
use super::writer::{OutboundTx, send};
use crate::error::TransportError;
use futures_util::StreamExt;
use kobo_proto::LineCodec;
use tokio::io::AsyncRead;
use tokio_util::codec::FramedRead;
use tracing::{error, info};

impl Session {
    /// Read lines one at a time, in arrival order, until the transport ends.
    ///
    /// Returns the fatal condition that stopped the loop.
    pub(super) async fn event_loop<R>(
        &mut self,
        lines: &mut FramedRead<R, LineCodec>,
        tx: &OutboundTx,
    ) -> TransportError
    where
        R: AsyncRead + Unpin,
    {
        loop {
            match lines.next().await {
                Some(Ok(line)) => {
                    for msg in self.handle_line(&line) {
                        if let Err(e) = send(tx, msg).await {
                            return e;
                        }
                    }
                }
                Some(Err(e)) => {
                    error!(error = %e, "Error reading connection stream");
                    return TransportError::Read(e);
                }
                None => {
                    info!("Server closed the connection");
                    return TransportError::Closed;
                }
            }
        }
    }
}
