//! kobobot - a small IRC channel bot.
//!
//! Connects to one server, joins one channel, answers `.verb args`
//! commands, and records channel traffic to an append-only side log.
//! Wire parsing lives in the `kobo-proto` crate.

pub mod config;
pub mod error;
pub mod handlers;
pub mod history;
pub mod network;
pub mod state;
pub mod telemetry;

pub use network::Session;
