//! Bot command handlers.
//!
//! This module contains the Handler trait and command registry for dispatching
//! invocations (`.verb args`) to the verb implementations.
//!
//! ## Built-in verbs
//!
//! | verb       | handler            | notes                         |
//! |------------|--------------------|-------------------------------|
//! | `wiki`     | [`WikiHandler`]    | builds a search URL           |
//! | `c`        | [`ChooseHandler`]  | picks one comma-separated item |
//! | `o`        | [`OrderHandler`]   | shuffles comma-separated items |
//! | `set`      | [`SetHandler`]     | owner only, returns effects   |
//! | `commands` | [`CommandsHandler`]| lists registered verbs        |

mod admin;
mod core;
mod help;
mod lookup;
mod random;

pub use admin::SetHandler;
pub use self::core::{
    Context, Handler, OWNER_ONLY_REPLY, Registry, Reply, SessionEffect, SessionView,
    unknown_verb_reply,
};
pub use help::CommandsHandler;
pub use lookup::WikiHandler;
pub use random::{ChooseHandler, OrderHandler};
