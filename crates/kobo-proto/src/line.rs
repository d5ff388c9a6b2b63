//! Line-based codec for tokio.
//!
//! Reads newline-terminated lines with the `\r\n` (or bare `\n`) terminator
//! stripped, and writes [`Outbound`] lines with `\r\n` appended.

use bytes::{Buf, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::error::ProtocolError;
use crate::outbound::Outbound;

/// Default line limit: 512 bytes of classic IRC plus room for message tags.
pub const DEFAULT_MAX_LEN: usize = 8191;

/// Line-based codec that handles newline-terminated messages.
///
/// Invalid UTF-8 is replaced rather than rejected: servers relay whatever
/// encoding their users send, and a stray Latin-1 byte must not end the
/// session.
#[derive(Debug)]
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length
    max_len: usize,
}

impl LineCodec {
    /// Create a codec with [`DEFAULT_MAX_LEN`].
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_LEN)
    }

    /// Create a codec with a custom line limit.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
        }
    }

    fn take_line(&mut self, src: &mut BytesMut, len: usize) -> String {
        let raw = src.split_to(len);
        self.next_index = 0;
        let text = String::from_utf8_lossy(&raw);
        text.trim_end_matches(&['\r', '\n'][..]).to_owned()
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<String>, ProtocolError> {
        // Look for newline starting from where we left off
        if let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') {
            let len = self.next_index + offset + 1;
            if len > self.max_len {
                return Err(ProtocolError::LineTooLong {
                    actual: len,
                    limit: self.max_len,
                });
            }
            Ok(Some(self.take_line(src, len)))
        } else {
            self.next_index = src.len();

            if src.len() > self.max_len {
                return Err(ProtocolError::LineTooLong {
                    actual: src.len(),
                    limit: self.max_len,
                });
            }

            Ok(None)
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<String>, ProtocolError> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }
        if src.is_empty() {
            return Ok(None);
        }
        // Unterminated final line
        let len = src.remaining();
        Ok(Some(self.take_line(src, len)))
    }
}

impl Encoder<Outbound> for LineCodec {
    type Error = ProtocolError;

    fn encode(&mut self, msg: Outbound, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        let line = msg.to_string();
        dst.reserve(line.len() + 2);
        dst.extend_from_slice(line.as_bytes());
        dst.extend_from_slice(b"\r\n");
        Ok(())
    }
}
