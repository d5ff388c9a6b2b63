//! Command handler context and core types.
//!
//! Handlers never touch session state. They receive a [`SessionView`]
//! snapshot inside a [`Context`] and return a [`Reply`]: optional text plus
//! any [`SessionEffect`]s the session engine should apply.

use kobo_proto::Identity;

/// Read-only snapshot of bot state, taken just before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// Current nick.
    pub nick: String,
    /// Current owner nick.
    pub owner: String,
    /// Channel the bot sits in.
    pub channel: String,
    /// Command prefix character.
    pub prefix: char,
}

/// Handler context passed to each command handler.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Argument text after the verb (may be empty).
    pub args: &'a str,
    /// Who invoked the command.
    pub caller: &'a Identity,
    /// State snapshot; does not outlive the call.
    pub view: &'a SessionView,
    /// Every registered verb, sorted.
    pub verbs: &'a [&'static str],
}

/// A requested change to session state.
///
/// Produced by privileged handlers and applied by the session engine on its
/// own task, so state is only ever mutated in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Change the bot's nick (also sent to the server as `NICK`).
    SetNick(String),
    /// Change the owner nick.
    SetOwner(String),
}

/// Result of running a handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    /// Text to send back, if any.
    pub text: Option<String>,
    /// State changes to apply before the text is sent.
    pub effects: Vec<SessionEffect>,
}

impl Reply {
    /// A plain text reply.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            effects: Vec::new(),
        }
    }

    /// Attach a state change.
    #[must_use]
    pub fn with_effect(mut self, effect: SessionEffect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// A bot command.
///
/// New verbs are added by implementing this trait and registering the
/// handler; the parser never changes.
pub trait Handler: Send + Sync {
    /// Run the command.
    fn handle(&self, ctx: &Context<'_>) -> Reply;

    /// Restricted to the owner. The registry checks the caller before
    /// `handle` is reached.
    fn privileged(&self) -> bool {
        false
    }
}
