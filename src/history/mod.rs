//! Side log: append-only record of channel messages.
//!
//! One line per message, newline-terminated, no other structure. Appends
//! are fire-and-forget from the receive loop; a single writer task owns the
//! sink so two entries never interleave their bytes.

use std::io;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Handle to the side log writer task.
pub struct SideLog {
    sender: UnboundedSender<String>,
    handle: JoinHandle<()>,
}

impl SideLog {
    /// Open (or create) `path` for appending and start the writer task.
    pub async fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())
            .await?;
        debug!(path = %path.as_ref().display(), "Side log opened");
        Ok(Self::spawn(file))
    }

    /// Start the writer task over any async sink.
    pub fn spawn<W>(sink: W) -> Self
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = tokio::spawn(write_loop(sink, receiver));
        Self { sender, handle }
    }

    /// Queue one entry. Never blocks.
    pub fn append(&self, text: &str) {
        if self.sender.send(text.to_owned()).is_err() {
            warn!("Side log writer stopped, entry dropped");
        }
    }

    /// Stop accepting entries and wait until everything queued is written.
    pub async fn close(self) {
        let SideLog { sender, handle } = self;
        drop(sender);
        if let Err(e) = handle.await {
            warn!(error = %e, "Side log writer task failed");
        }
    }
}

async fn write_loop<W>(mut sink: W, mut receiver: UnboundedReceiver<String>)
where
    W: AsyncWrite + Unpin,
{
    while let Some(text) = receiver.recv().await {
        let mut entry = text.replace(['\r', '\n'], " ");
        entry.push('\n');

        // One write per entry, so entries stay whole
        if let Err(e) = sink.write_all(entry.as_bytes()).await {
            warn!(error = %e, "Side log write failed");
            // Terminate the partial entry so the next one starts on its own line
            if let Err(e) = sink.write_all(b"\n").await {
                warn!(error = %e, "Side log unusable, discarding further entries");
                discard(&mut receiver).await;
                return;
            }
            continue;
        }
        if let Err(e) = sink.flush().await {
            warn!(error = %e, "Side log flush failed");
        }
    }
    if let Err(e) = sink.shutdown().await {
        warn!(error = %e, "Side log shutdown failed");
    }
}

/// Drain the queue without writing, so appends keep succeeding.
async fn discard(receiver: &mut UnboundedReceiver<String>) {
    let mut dropped = 0usize;
    while receiver.recv().await.is_some() {
        dropped += 1;
    }
    if dropped > 0 {
        warn!(dropped, "Side log entries discarded");
    }
}
