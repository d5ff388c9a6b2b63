//! Network module.
//!
//! Contains the client session: transport, registration, and the receive loop.

mod connection;

pub use connection::{Session, connect};
