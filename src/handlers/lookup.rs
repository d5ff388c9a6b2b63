//! URL-building lookups.

use super::{Context, Handler, Reply};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const WIKI_SEARCH: &str = "https://en.wikipedia.org/w/index.php";

/// Everything but the RFC 3986 unreserved characters.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// `wiki <topic>`: link to a Wikipedia search for the topic.
pub struct WikiHandler;

impl Handler for WikiHandler {
    fn handle(&self, ctx: &Context<'_>) -> Reply {
        let words: Vec<String> = ctx
            .args
            .split_whitespace()
            .map(|word| utf8_percent_encode(word, QUERY_VALUE).to_string())
            .collect();
        if words.is_empty() {
            return Reply::text(format!("Usage: {}wiki <topic>", ctx.view.prefix));
        }
        // Form encoding: words joined by '+'
        Reply::text(format!(
            "{WIKI_SEARCH}?search={}&title=Special%3ASearch&go=Go",
            words.join("+")
        ))
    }
}
