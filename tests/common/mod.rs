//! Integration test common infrastructure.
//!
//! Runs a [`Session`] over an in-memory duplex pipe and gives the test the
//! server end, so whole conversations can be scripted line by line.

#![allow(dead_code)]

use kobobot::config::BotConfig;
use kobobot::error::TransportError;
use kobobot::handlers::Registry;
use kobobot::history::SideLog;
use kobobot::network::Session;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream, ReadHalf, WriteHalf};
use tokio::task::JoinHandle;
use tokio::time::timeout;

/// How long a test waits for the bot to say something.
const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Bot config with no settle delay.
pub fn bot_config() -> BotConfig {
    BotConfig {
        settle_delay_secs: 0,
        ..BotConfig::default()
    }
}

/// The server side of a running session.
pub struct FakeServer {
    reader: BufReader<ReadHalf<DuplexStream>>,
    writer: WriteHalf<DuplexStream>,
    session: JoinHandle<(TransportError, Session)>,
}

impl FakeServer {
    /// Start a session with the default registry and no side log.
    pub fn start(config: BotConfig) -> Self {
        Self::start_with(config, None)
    }

    /// Start a session with an optional side log.
    pub fn start_with(config: BotConfig, side_log: Option<SideLog>) -> Self {
        let (client, server) = tokio::io::duplex(8 * 1024);
        let mut session = Session::new(&config, Registry::new(), side_log);
        let session = tokio::spawn(async move {
            let reason = session.run(client).await;
            (reason, session)
        });

        let (read_half, writer) = tokio::io::split(server);
        Self {
            reader: BufReader::new(read_half),
            writer,
            session,
        }
    }

    /// Send one line to the bot, CRLF terminated.
    pub async fn send(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\r\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Receive one line from the bot, terminator stripped.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        self.recv_timeout(RECV_TIMEOUT).await
    }

    /// Receive one line, giving up after `dur`.
    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(dur, self.reader.read_line(&mut line)).await??;
        if n == 0 {
            anyhow::bail!("bot closed the connection");
        }
        anyhow::ensure!(line.ends_with("\r\n"), "line not CRLF terminated: {line:?}");
        line.truncate(line.len() - 2);
        Ok(line)
    }

    /// Consume the USER/NICK/JOIN registration burst.
    pub async fn expect_registration(&mut self) -> anyhow::Result<Vec<String>> {
        let mut lines = Vec::new();
        for _ in 0..3 {
            lines.push(self.recv().await?);
        }
        Ok(lines)
    }

    /// Assert the bot sends nothing for a short while.
    pub async fn expect_silence(&mut self) {
        let mut line = String::new();
        let res = timeout(
            Duration::from_millis(200),
            self.reader.read_line(&mut line),
        )
        .await;
        assert!(res.is_err(), "unexpected line from bot: {line:?}");
    }

    /// Close the server side and wait for the session to end.
    ///
    /// Returns why the session stopped, and the session itself.
    pub async fn hang_up(self) -> (TransportError, Session) {
        let FakeServer {
            reader,
            writer,
            session,
        } = self;
        drop(writer);
        drop(reader);
        timeout(RECV_TIMEOUT, session)
            .await
            .expect("session did not stop")
            .expect("session task panicked")
    }
}
