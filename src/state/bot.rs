//! Mutable bot state: current nick and owner.
//!
//! Owned by the session engine and mutated only on its task. Handlers see a
//! [`SessionView`] snapshot and ask for changes through [`SessionEffect`].

use crate::config::BotConfig;
use crate::handlers::{SessionEffect, SessionView};
use kobo_proto::Outbound;
use tracing::info;

/// Process-wide bot state.
#[derive(Debug, Clone)]
pub struct BotState {
    nick: String,
    owner: String,
    channel: String,
    prefix: char,
}

impl BotState {
    /// Seed state from configuration.
    pub fn new(config: &BotConfig) -> Self {
        Self {
            nick: config.nick.clone(),
            owner: config.owner.clone(),
            channel: config.channel.clone(),
            prefix: config.command_prefix,
        }
    }

    pub fn nick(&self) -> &str {
        &self.nick
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// Snapshot for one dispatch.
    pub fn view(&self) -> SessionView {
        SessionView {
            nick: self.nick.clone(),
            owner: self.owner.clone(),
            channel: self.channel.clone(),
            prefix: self.prefix,
        }
    }

    /// Apply a handler's effect. Returns the line to send, if the change
    /// must be announced to the server.
    pub fn apply(&mut self, effect: SessionEffect) -> Option<Outbound> {
        match effect {
            SessionEffect::SetNick(nick) => {
                info!(old = %self.nick, new = %nick, "Changing nick");
                self.nick = nick.clone();
                Some(Outbound::Nick(nick))
            }
            SessionEffect::SetOwner(owner) => {
                info!(old = %self.owner, new = %owner, "Changing owner");
                self.owner = owner;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_from_config() {
        let state = BotState::new(&BotConfig::default());
        assert_eq!(state.nick(), "kobobot");
        assert_eq!(state.owner(), "nanago");
        assert_eq!(state.channel(), "#kobobot");
        assert_eq!(state.prefix(), '.');
    }

    #[test]
    fn test_set_nick_announces() {
        let mut state = BotState::new(&BotConfig::default());
        let before = state.view();

        let line = state.apply(SessionEffect::SetNick("kobo2".into()));
        assert_eq!(line, Some(Outbound::Nick("kobo2".into())));
        assert_eq!(state.nick(), "kobo2");
        // Earlier snapshots are unaffected
        assert_eq!(before.nick, "kobobot");
    }

    #[test]
    fn test_set_owner_is_silent() {
        let mut state = BotState::new(&BotConfig::default());
        assert_eq!(state.apply(SessionEffect::SetOwner("alice".into())), None);
        assert_eq!(state.view().owner, "alice");
    }
}
