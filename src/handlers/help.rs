//! Help listing.

use super::{Context, Handler, Reply};

/// `commands`: list every registered verb.
pub struct CommandsHandler;

impl Handler for CommandsHandler {
    fn handle(&self, ctx: &Context<'_>) -> Reply {
        Reply::text(format!(
            "The available commands are: {}.",
            ctx.verbs.join(", ")
        ))
    }
}
