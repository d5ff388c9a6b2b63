//! # kobo-proto
//!
//! Protocol pieces for the kobobot IRC client.
//!
//! - [`Event`]: one inbound line parsed into a ping, a chat message, a notice
//!   or an unrecognized line
//! - [`Identity`]: the `nick!user@host` origin of a message
//! - [`Invocation`]: a bot command (`.verb args`) embedded in chat text
//! - [`Outbound`]: the handful of lines the client ever writes
//! - [`LineCodec`]: newline framing for `tokio_util::codec`
//!
//! ## Quick Start
//!
//! ```rust
//! use kobo_proto::{Event, Identity, Invocation};
//!
//! let event: Event = ":alice!a@h PRIVMSG #chan :.c red,green".parse().unwrap();
//! if let Event::ChatMessage { origin, text, .. } = &event {
//!     let who: Identity = origin.parse().unwrap();
//!     let inv = Invocation::extract(text).unwrap();
//!     assert_eq!(who.nick, "alice");
//!     assert_eq!(inv.verb, "c");
//!     assert_eq!(inv.args, "red,green");
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod event;
pub mod invocation;
#[cfg(feature = "tokio")]
pub mod line;
pub mod origin;
pub mod outbound;

pub use self::error::{ParseError, ProtocolError};
pub use self::event::{parse, Event};
pub use self::invocation::{extract_invocation, Invocation, DEFAULT_PREFIX};
#[cfg(feature = "tokio")]
pub use self::line::LineCodec;
pub use self::origin::{parse_origin, Identity};
pub use self::outbound::Outbound;
