//! Outbound writer task.
//!
//! The write half of the transport is owned by one task fed through a
//! bounded queue, so lines go out whole and in the order they were queued.

use crate::error::TransportError;
use futures_util::SinkExt;
use kobo_proto::{LineCodec, Outbound, ProtocolError};
use tokio::io::AsyncWrite;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::codec::FramedWrite;
use tracing::debug;

/// Outbound queue depth.
const OUTBOUND_QUEUE: usize = 256;

pub(super) type OutboundTx = mpsc::Sender<Outbound>;

/// Start the writer task over `writer`.
pub(super) fn spawn<W>(writer: W) -> (OutboundTx, JoinHandle<Result<(), ProtocolError>>)
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, mut rx) = mpsc::channel::<Outbound>(OUTBOUND_QUEUE);
    let handle = tokio::spawn(async move {
        let mut sink = FramedWrite::new(writer, LineCodec::new());
        while let Some(msg) = rx.recv().await {
            debug!(line = %msg, "-->");
            sink.send(msg).await?;
        }
        Ok::<(), ProtocolError>(())
    });
    (tx, handle)
}

/// Queue one line for the writer.
pub(super) async fn send(tx: &OutboundTx, msg: Outbound) -> Result<(), TransportError> {
    tx.send(msg).await.map_err(|_| TransportError::WriterGone)
}
