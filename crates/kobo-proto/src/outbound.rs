//! Lines written by the client.
//!
//! `Display` renders the line without its terminator; [`crate::LineCodec`]
//! appends `\r\n`. CR and LF inside any field are rendered as spaces so one
//! value can never become two protocol lines.

use std::fmt;

/// An outbound protocol line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outbound {
    /// `USER <nick> 8 * :<nick>`
    User(String),
    /// `NICK <nick>`
    Nick(String),
    /// `JOIN <channel>[ <key>]`
    Join {
        /// Channel to join.
        channel: String,
        /// Optional channel key.
        key: Option<String>,
    },
    /// `PONG :<token>`
    Pong(String),
    /// `PRIVMSG <target> :<text>`
    Privmsg {
        /// Nick or channel.
        target: String,
        /// Message text.
        text: String,
    },
}

impl Outbound {
    /// Direct reply to a user: `PRIVMSG <nick> :<text>`.
    pub fn direct(nick: impl Into<String>, text: impl Into<String>) -> Self {
        Outbound::Privmsg {
            target: nick.into(),
            text: text.into(),
        }
    }

    /// Channel reply naming the sender: `PRIVMSG <channel> :<nick>: <text>`.
    pub fn channel_reply(channel: impl Into<String>, nick: &str, text: &str) -> Self {
        Outbound::Privmsg {
            target: channel.into(),
            text: format!("{nick}: {text}"),
        }
    }
}

impl fmt::Display for Outbound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outbound::User(nick) => {
                write!(f, "USER {} 8 * :{}", Clean(nick), Clean(nick))
            }
            Outbound::Nick(nick) => write!(f, "NICK {}", Clean(nick)),
            Outbound::Join { channel, key } => {
                write!(f, "JOIN {}", Clean(channel))?;
                if let Some(key) = key {
                    write!(f, " {}", Clean(key))?;
                }
                Ok(())
            }
            Outbound::Pong(token) => write!(f, "PONG :{}", Clean(token)),
            Outbound::Privmsg { target, text } => {
                write!(f, "PRIVMSG {} :{}", Clean(target), Clean(text))
            }
        }
    }
}

/// Renders a field with line breaks flattened to spaces.
struct Clean<'a>(&'a str);

impl fmt::Display for Clean<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.split(&['\r', '\n'][..]).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(part)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_lines() {
        assert_eq!(
            Outbound::User("kobobot".into()).to_string(),
            "USER kobobot 8 * :kobobot"
        );
        assert_eq!(Outbound::Nick("kobobot".into()).to_string(), "NICK kobobot");
    }

    #[test]
    fn test_join_with_and_without_key() {
        let join = Outbound::Join {
            channel: "#kobobot".into(),
            key: None,
        };
        assert_eq!(join.to_string(), "JOIN #kobobot");

        let join = Outbound::Join {
            channel: "#kobobot".into(),
            key: Some("hunter2".into()),
        };
        assert_eq!(join.to_string(), "JOIN #kobobot hunter2");
    }

    #[test]
    fn test_pong_echoes_token() {
        assert_eq!(Outbound::Pong("12345".into()).to_string(), "PONG :12345");
    }

    #[test]
    fn test_reply_addressing() {
        assert_eq!(
            Outbound::direct("alice", "blue").to_string(),
            "PRIVMSG alice :blue"
        );
        assert_eq!(
            Outbound::channel_reply("#chan", "alice", "blue").to_string(),
            "PRIVMSG #chan :alice: blue"
        );
    }

    #[test]
    fn test_line_breaks_flattened() {
        let msg = Outbound::direct("alice", "one\r\nQUIT :bye");
        assert_eq!(msg.to_string(), "PRIVMSG alice :one  QUIT :bye");
    }
}
