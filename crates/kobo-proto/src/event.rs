//! Inbound line parsing.
//!
//! A line is matched against two shapes, in order:
//!
//! 1. The keepalive challenge `PING :<token>`.
//! 2. The general shape `[[:]<origin> ]<COMMAND> [<target>] :<text>`, where
//!    the trailing text starts after the *first* ` :` and is kept verbatim.
//!    A `PING` in this shape (`:server PING :<token>`) is still a keepalive.
//!
//! Both shapes are written as `nom` combinators over the borrowed line.
//!
//! Lines are expected without their CR/LF terminator; [`crate::LineCodec`]
//! strips it.

use std::fmt;
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till1, take_until},
    character::complete::char,
    combinator::{map, opt, rest, verify},
    sequence::{pair, preceded, terminated},
    IResult,
};

use crate::error::{ParseError, Result};

/// Keyword and delimiter that open a keepalive challenge.
const PING_PREFIX: &str = "PING :";

/// Delimiter between the middle parameters and the trailing text.
const TRAILING_DELIM: &str = " :";

/// A single inbound line, classified.
///
/// Every event is a fresh owned value; nothing in it is shared with the
/// transport buffer or with other events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Keepalive challenge. The reply must echo `token` verbatim.
    Ping {
        /// Challenge token.
        token: String,
    },
    /// `PRIVMSG` addressed to a user or channel.
    ChatMessage {
        /// Sender origin without the leading colon (may be empty).
        origin: String,
        /// Nick or channel the message is addressed to.
        target: String,
        /// Message text.
        text: String,
    },
    /// `NOTICE`. Informational only; never triggers commands.
    Notice {
        /// Sender origin without the leading colon (may be empty).
        origin: String,
        /// Nick or channel the notice is addressed to.
        target: String,
        /// Notice text.
        text: String,
    },
    /// A well-formed line with a command word we do not act on.
    Unrecognized {
        /// The full line as received.
        raw: String,
    },
}

impl Event {
    /// Short label for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Ping { .. } => "ping",
            Event::ChatMessage { .. } => "chat_message",
            Event::Notice { .. } => "notice",
            Event::Unrecognized { .. } => "unrecognized",
        }
    }

    /// Target of a chat message or notice.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::ChatMessage { target, .. } | Event::Notice { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Text of a chat message or notice.
    pub fn text(&self) -> Option<&str> {
        match self {
            Event::ChatMessage { text, .. } | Event::Notice { text, .. } => Some(text),
            _ => None,
        }
    }
}

impl FromStr for Event {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Ping { token } => write!(f, "{PING_PREFIX}{token}"),
            Event::ChatMessage {
                origin,
                target,
                text,
            } => write_general(f, origin, "PRIVMSG", target, text),
            Event::Notice {
                origin,
                target,
                text,
            } => write_general(f, origin, "NOTICE", target, text),
            Event::Unrecognized { raw } => f.write_str(raw),
        }
    }
}

fn write_general(
    f: &mut fmt::Formatter<'_>,
    origin: &str,
    command: &str,
    target: &str,
    text: &str,
) -> fmt::Result {
    if !origin.is_empty() {
        write!(f, ":{origin} ")?;
    }
    f.write_str(command)?;
    if !target.is_empty() {
        write!(f, " {target}")?;
    }
    write!(f, "{TRAILING_DELIM}{text}")
}

/// Parse one newline-stripped line into an [`Event`].
///
/// # Errors
///
/// Returns a [`ParseError`] when the line matches neither the keepalive
/// shape nor the general message shape.
///
/// # Example
///
/// ```
/// use kobo_proto::{parse, Event};
///
/// assert_eq!(
///     parse("PING :12345").unwrap(),
///     Event::Ping { token: "12345".into() }
/// );
/// assert!(parse("garbage-no-colon-delimiter").is_err());
/// ```
pub fn parse(line: &str) -> Result<Event> {
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Ok((_, token)) = ping_token(line) {
        return ping(token);
    }

    let (_, (head, text)) =
        split_trailing(line).map_err(|_| ParseError::MissingTrailing(line.to_owned()))?;

    let (_, (origin, command, target)) = head_parts(head).map_err(|_| head_error(head, line))?;

    let needs_target = matches!(command, "PRIVMSG" | "NOTICE");
    if needs_target && target.trim().is_empty() {
        return Err(ParseError::MissingTarget(line.to_owned()));
    }

    let event = match command {
        "PING" => return ping(text),
        "PRIVMSG" => Event::ChatMessage {
            origin: origin.to_owned(),
            target: target.to_owned(),
            text: text.to_owned(),
        },
        "NOTICE" => Event::Notice {
            origin: origin.to_owned(),
            target: target.to_owned(),
            text: text.to_owned(),
        },
        _ => Event::Unrecognized {
            raw: line.to_owned(),
        },
    };
    Ok(event)
}

fn ping(token: &str) -> Result<Event> {
    if token.is_empty() {
        return Err(ParseError::MissingPingToken);
    }
    Ok(Event::Ping {
        token: token.to_owned(),
    })
}

/// `PING :<token>` at the very start of the line.
fn ping_token(input: &str) -> IResult<&str, &str> {
    preceded(tag(PING_PREFIX), rest)(input)
}

/// Everything before the first ` :`, and the text after it.
fn split_trailing(input: &str) -> IResult<&str, (&str, &str)> {
    pair(take_until(TRAILING_DELIM), preceded(tag(TRAILING_DELIM), rest))(input)
}

/// A run of non-space characters.
fn word(input: &str) -> IResult<&str, &str> {
    take_till1(|c| c == ' ')(input)
}

/// `:<origin> `
fn prefixed_origin(input: &str) -> IResult<&str, &str> {
    terminated(preceded(char(':'), word), char(' '))(input)
}

/// Uppercase letters, or a three digit numeric reply.
fn command(input: &str) -> IResult<&str, &str> {
    verify(word, |w: &str| {
        let bytes = w.as_bytes();
        let letters = bytes.iter().all(u8::is_ascii_uppercase);
        let numeric = bytes.len() == 3 && bytes.iter().all(u8::is_ascii_digit);
        letters || numeric
    })(input)
}

/// Origin (possibly empty) and command word.
///
/// The origin is whatever precedes the command word. It normally carries a
/// leading colon, but a bare `nick!user@host ` is accepted too.
fn origin_and_command(input: &str) -> IResult<&str, (&str, &str)> {
    alt((
        pair(prefixed_origin, command),
        map(command, |cmd| ("", cmd)),
        pair(terminated(word, char(' ')), command),
    ))(input)
}

/// Origin, command word and the middle parameters as one target string.
fn head_parts(input: &str) -> IResult<&str, (&str, &str, &str)> {
    let (input, (origin, command)) = origin_and_command(input)?;
    let (input, target) = preceded(opt(char(' ')), rest)(input)?;
    Ok((input, (origin, command, target)))
}

/// Pick the error for a head that has no usable command word.
fn head_error(head: &str, line: &str) -> ParseError {
    let after_origin = match prefixed_origin(head) {
        Ok((rest, _)) => rest,
        Err(_) if head.starts_with(':') => return ParseError::MissingCommand(line.to_owned()),
        Err(_) => head,
    };
    match word(after_origin) {
        Ok((_, w)) => ParseError::InvalidCommand(w.to_owned()),
        Err(_) => ParseError::MissingCommand(line.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping() {
        assert_eq!(
            parse("PING :12345").unwrap(),
            Event::Ping {
                token: "12345".into()
            }
        );
    }

    #[test]
    fn test_ping_token_kept_verbatim() {
        assert_eq!(
            parse("PING :irc.rizon.net :extra").unwrap(),
            Event::Ping {
                token: "irc.rizon.net :extra".into()
            }
        );
    }

    #[test]
    fn test_ping_without_token() {
        assert_eq!(parse("PING :"), Err(ParseError::MissingPingToken));
    }

    #[test]
    fn test_channel_privmsg() {
        let event = parse(":alice!a@h PRIVMSG #chan :.c red,green,blue").unwrap();
        assert_eq!(
            event,
            Event::ChatMessage {
                origin: "alice!a@h".into(),
                target: "#chan".into(),
                text: ".c red,green,blue".into(),
            }
        );
        assert_eq!(event.target(), Some("#chan"));
        assert_eq!(event.kind(), "chat_message");
    }

    #[test]
    fn test_text_colons_preserved() {
        let event = parse(":bob!b@h PRIVMSG kobobot :see: http://x :) ok").unwrap();
        assert_eq!(event.text(), Some("see: http://x :) ok"));
        assert_eq!(event.target(), Some("kobobot"));
    }

    #[test]
    fn test_uppercase_nick_does_not_confuse_command() {
        let event = parse(":Alice!A@H PRIVMSG #chan :hi").unwrap();
        assert!(matches!(event, Event::ChatMessage { ref origin, .. } if origin == "Alice!A@H"));
    }

    #[test]
    fn test_notice_without_origin() {
        let event = parse("NOTICE AUTH :*** Looking up your hostname...").unwrap();
        assert_eq!(
            event,
            Event::Notice {
                origin: String::new(),
                target: "AUTH".into(),
                text: "*** Looking up your hostname...".into(),
            }
        );
    }

    #[test]
    fn test_other_commands_are_unrecognized() {
        let line = ":alice!a@h JOIN #chan :realname";
        assert_eq!(parse(line).unwrap(), Event::Unrecognized { raw: line.into() });

        let line = ":irc.server.net 001 kobobot :Welcome to the network";
        assert_eq!(parse(line).unwrap(), Event::Unrecognized { raw: line.into() });
    }

    #[test]
    fn test_target_with_spaces() {
        let line = ":irc.server.net 353 kobobot = #chan :alice bob";
        assert!(matches!(parse(line), Ok(Event::Unrecognized { .. })));
    }

    #[test]
    fn test_missing_trailing() {
        assert!(matches!(
            parse("garbage-no-colon-delimiter"),
            Err(ParseError::MissingTrailing(_))
        ));
        assert!(matches!(
            parse(":alice!a@h PRIVMSG #chan"),
            Err(ParseError::MissingTrailing(_))
        ));
    }

    #[test]
    fn test_origin_without_command() {
        assert!(matches!(
            parse(":alice!a@h :hello"),
            Err(ParseError::MissingCommand(_))
        ));
        assert!(matches!(parse(" :hello"), Err(ParseError::MissingCommand(_))));
    }

    #[test]
    fn test_lowercase_command_rejected() {
        assert_eq!(
            parse(":alice!a@h privmsg #chan :hi"),
            Err(ParseError::InvalidCommand("privmsg".into()))
        );
    }

    #[test]
    fn test_ping_with_origin() {
        assert_eq!(
            parse(":irc.server PING :tok").unwrap(),
            Event::Ping {
                token: "tok".into()
            }
        );
        assert_eq!(
            parse(":irc.server PING :"),
            Err(ParseError::MissingPingToken)
        );
    }

    #[test]
    fn test_origin_without_colon() {
        assert_eq!(
            parse("alice!a@h PRIVMSG #chan :hi").unwrap(),
            Event::ChatMessage {
                origin: "alice!a@h".into(),
                target: "#chan".into(),
                text: "hi".into(),
            }
        );
    }

    #[test]
    fn test_chat_without_target() {
        assert!(matches!(
            parse(":alice!a@h PRIVMSG :.c x"),
            Err(ParseError::MissingTarget(_))
        ));
        assert!(matches!(
            parse("NOTICE :hello"),
            Err(ParseError::MissingTarget(_))
        ));
        // Only chat and notices need somewhere to reply
        assert!(matches!(
            parse(":irc.server.net QUIT :bye"),
            Ok(Event::Unrecognized { .. })
        ));
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse(""), Err(ParseError::Empty));
    }

    #[test]
    fn test_display_reassembles_fields() {
        let line = ":alice!a@h PRIVMSG #chan :a :b";
        assert_eq!(parse(line).unwrap().to_string(), line);
        assert_eq!(parse("PING :42").unwrap().to_string(), "PING :42");
    }
}
