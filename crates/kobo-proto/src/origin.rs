//! Sender identity parsing.
//!
//! The origin of a user message has the shape `nick!user@host`. A leading
//! colon, as it appears on the wire, is tolerated.
//!
//! # Reference
//! - RFC 2812 Section 2.3.1: Message format

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, Result};

/// A fully populated `nick!user@host` identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identity {
    /// Nickname.
    pub nick: String,
    /// Username (ident).
    pub user: String,
    /// Hostname.
    pub host: String,
}

impl Identity {
    /// Create an identity from its three components.
    pub fn new(nick: impl Into<String>, user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            nick: nick.into(),
            user: user.into(),
            host: host.into(),
        }
    }
}

impl FromStr for Identity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_origin(s)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}@{}", self.nick, self.user, self.host)
    }
}

/// Parse a message origin into an [`Identity`].
///
/// The nick runs up to the first `!`, the host starts after the last `@`,
/// and the user is everything in between. All three must be non-empty.
///
/// # Errors
///
/// [`ParseError::InvalidOrigin`] for server names, bare nicks, or any origin
/// missing one of the three parts. No partially filled identity is ever
/// returned.
///
/// # Example
///
/// ```
/// use kobo_proto::parse_origin;
///
/// let who = parse_origin(":alice!a@example.com").unwrap();
/// assert_eq!(who.nick, "alice");
/// assert!(parse_origin("irc.example.com").is_err());
/// ```
pub fn parse_origin(origin: &str) -> Result<Identity> {
    let invalid = || ParseError::InvalidOrigin(origin.to_owned());
    let stripped = origin.strip_prefix(':').unwrap_or(origin);

    let (nick, rest) = stripped.split_once('!').ok_or_else(invalid)?;
    let (user, host) = rest.rsplit_once('@').ok_or_else(invalid)?;

    if nick.is_empty() || user.is_empty() || host.is_empty() {
        return Err(invalid());
    }
    if stripped.contains(' ') {
        return Err(invalid());
    }

    Ok(Identity::new(nick, user, host))
}
