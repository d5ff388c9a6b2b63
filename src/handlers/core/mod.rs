//! Core handler infrastructure.
//!
//! This module contains the handler trait, the context handed to each
//! handler, and the registry that maps verbs to handlers.

pub mod context;
pub mod registry;

pub use context::{Context, Handler, Reply, SessionEffect, SessionView};
pub use registry::{OWNER_ONLY_REPLY, Registry, unknown_verb_reply};
