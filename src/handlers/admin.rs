//! Owner-only commands.
//!
//! These handlers never mutate state themselves; they return
//! [`SessionEffect`]s that the session engine applies.

use super::{Context, Handler, Reply, SessionEffect};

const NEEDS_TWO_ARGS: &str = "The set command requires two arguments!";
const UNKNOWN_SETTING: &str = "Unrecognised command! Options are: nick, owner.";

/// `set nick <nick>` / `set owner <nick>`.
pub struct SetHandler;

impl Handler for SetHandler {
    fn handle(&self, ctx: &Context<'_>) -> Reply {
        let mut parts = ctx.args.split_whitespace();
        let (Some(setting), Some(value)) = (parts.next(), parts.next()) else {
            return Reply::text(NEEDS_TWO_ARGS);
        };

        match setting {
            "nick" => Reply::text(format!("Nick set to {value}."))
                .with_effect(SessionEffect::SetNick(value.to_owned())),
            "owner" => Reply::text(format!("Owner set to {value}."))
                .with_effect(SessionEffect::SetOwner(value.to_owned())),
            _ => Reply::text(UNKNOWN_SETTING),
        }
    }

    fn privileged(&self) -> bool {
        true
    }
}
