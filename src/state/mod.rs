//! State management module.
//!
//! Contains the bot's mutable state and the session lifecycle machine.

mod bot;
mod machine;

pub use bot::BotState;
pub use machine::SessionState;
