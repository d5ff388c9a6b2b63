//! Bot command extraction from chat text.
//!
//! An invocation is a prefix character at the very start of the text,
//! immediately followed by a verb made of word characters, then optional
//! whitespace and free-form argument text:
//!
//! ```text
//! .c red, green, blue
//! ^^ ^^^^^^^^^^^^^^^^
//! |verb   args
//! prefix
//! ```
//!
//! Most chat is not an invocation; extraction returns `None` for it and that
//! is not an error.

/// Command prefix used when none is configured.
pub const DEFAULT_PREFIX: char = '.';

/// A recognized bot command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Verb, never empty.
    pub verb: String,
    /// Argument text with leading whitespace removed (may be empty).
    pub args: String,
}

impl Invocation {
    /// Extract an invocation using [`DEFAULT_PREFIX`].
    pub fn extract(text: &str) -> Option<Self> {
        Self::extract_with_prefix(text, DEFAULT_PREFIX)
    }

    /// Extract an invocation using a custom prefix character.
    pub fn extract_with_prefix(text: &str, prefix: char) -> Option<Self> {
        let body = text.strip_prefix(prefix)?;
        let verb_len = body
            .find(|c: char| !is_word_char(c))
            .unwrap_or(body.len());
        if verb_len == 0 {
            return None;
        }

        let (verb, rest) = body.split_at(verb_len);
        Some(Self {
            verb: verb.to_owned(),
            args: rest.trim_start().to_owned(),
        })
    }
}

/// Free-function form of [`Invocation::extract`].
pub fn extract_invocation(text: &str) -> Option<Invocation> {
    Invocation::extract(text)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
