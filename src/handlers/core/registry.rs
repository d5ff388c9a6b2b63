//! Command handler registry and dispatch.
//!
//! The `Registry` maps verbs to handlers, enforces the owner check for
//! privileged verbs, and keeps per-verb usage counters.

use super::context::{Context, Handler, Reply, SessionView};
use crate::error::DispatchError;
use crate::handlers::{
    admin::SetHandler,
    help::CommandsHandler,
    lookup::WikiHandler,
    random::{ChooseHandler, OrderHandler},
};
use crate::telemetry::CommandTimer;
use kobo_proto::{Identity, Invocation};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Reply sent when a privileged verb is invoked by anyone but the owner.
pub const OWNER_ONLY_REPLY: &str = "Only the bot owner can set values!";

/// Reply sent for a verb nobody registered.
pub fn unknown_verb_reply(prefix: char) -> String {
    format!("That isn't a command. Try {prefix}commands to see some.")
}

/// Registry of command handlers.
pub struct Registry {
    handlers: HashMap<&'static str, Box<dyn Handler>>,
    /// Sorted verb list, handed to handlers through the context.
    verbs: Vec<&'static str>,
    /// Command usage counters
    command_counts: HashMap<&'static str, AtomicU64>,
}

impl Registry {
    /// Create a registry with every built-in verb registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();

        // Lookups
        registry.register("wiki", WikiHandler);

        // Random picks
        registry.register("c", ChooseHandler);
        registry.register("o", OrderHandler);

        // Owner-only state changes
        registry.register("set", SetHandler);

        registry.register("commands", CommandsHandler);
        registry
    }

    /// Create a registry with no verbs.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
            verbs: Vec::new(),
            command_counts: HashMap::new(),
        }
    }

    /// Register (or replace) the handler for `verb`.
    pub fn register<H: Handler + 'static>(&mut self, verb: &'static str, handler: H) {
        if self.handlers.insert(verb, Box::new(handler)).is_none() {
            self.verbs.push(verb);
            self.verbs.sort_unstable();
        }
        self.command_counts
            .entry(verb)
            .or_insert_with(|| AtomicU64::new(0));
    }

    /// All registered verbs, sorted.
    pub fn verbs(&self) -> &[&'static str] {
        &self.verbs
    }

    /// Get command usage statistics, most used first.
    pub fn command_stats(&self) -> Vec<(&'static str, u64)> {
        let mut stats: Vec<_> = self
            .command_counts
            .iter()
            .map(|(verb, count)| (*verb, count.load(Ordering::Relaxed)))
            .filter(|(_, count)| *count > 0)
            .collect();

        stats.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        stats
    }

    /// Run the handler for an invocation.
    ///
    /// # Errors
    ///
    /// [`DispatchError::UnknownVerb`] when no handler is registered for the
    /// verb, [`DispatchError::Unauthorized`] when a privileged verb is
    /// invoked by someone other than the current owner.
    pub fn try_dispatch(
        &self,
        invocation: &Invocation,
        caller: &Identity,
        view: &SessionView,
    ) -> Result<Reply, DispatchError> {
        let verb = invocation.verb.as_str();
        let handler = self
            .handlers
            .get(verb)
            .ok_or_else(|| DispatchError::UnknownVerb(verb.to_owned()))?;

        if let Some(counter) = self.command_counts.get(verb) {
            counter.fetch_add(1, Ordering::Relaxed);
        }

        if handler.privileged() && caller.nick != view.owner {
            return Err(DispatchError::Unauthorized {
                nick: caller.nick.clone(),
            });
        }

        let _timer = CommandTimer::new(verb);
        let ctx = Context {
            args: &invocation.args,
            caller,
            view,
            verbs: &self.verbs,
        };
        Ok(handler.handle(&ctx))
    }

    /// Run the handler for an invocation, turning dispatch failures into
    /// their fixed replies.
    pub fn dispatch(&self, invocation: &Invocation, caller: &Identity, view: &SessionView) -> Reply {
        match self.try_dispatch(invocation, caller, view) {
            Ok(reply) => reply,
            Err(e) => {
                debug!(verb = %invocation.verb, nick = %caller.nick, reason = e.error_code(), "Dispatch refused");
                match e {
                    DispatchError::UnknownVerb(_) => Reply::text(unknown_verb_reply(view.prefix)),
                    DispatchError::Unauthorized { .. } => Reply::text(OWNER_ONLY_REPLY),
                }
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::SessionEffect;

    fn view() -> SessionView {
        SessionView {
            nick: "kobobot".into(),
            owner: "nanago".into(),
            channel: "#kobobot".into(),
            prefix: '.',
        }
    }

    fn invoke(verb: &str, args: &str) -> Invocation {
        Invocation {
            verb: verb.into(),
            args: args.into(),
        }
    }

    fn who(nick: &str) -> Identity {
        Identity::new(nick, "u", "host")
    }

    struct Echo;

    impl Handler for Echo {
        fn handle(&self, ctx: &Context<'_>) -> Reply {
            Reply::text(format!("{} said {}", ctx.caller.nick, ctx.args))
        }
    }

    #[test]
    fn test_builtin_verbs() {
        assert_eq!(Registry::new().verbs(), &["c", "commands", "o", "set", "wiki"]);
    }

    #[test]
    fn test_register_new_verb() {
        let mut registry = Registry::new();
        registry.register("echo", Echo);

        let reply = registry.dispatch(&invoke("echo", "hi"), &who("alice"), &view());
        assert_eq!(reply, Reply::text("alice said hi"));
        assert!(registry.verbs().contains(&"echo"));
    }

    #[test]
    fn test_reregister_replaces_without_duplicating() {
        let mut registry = Registry::empty();
        registry.register("echo", Echo);
        registry.register("echo", Echo);
        assert_eq!(registry.verbs(), &["echo"]);
    }

    #[test]
    fn test_unknown_verb() {
        let registry = Registry::new();
        let inv = invoke("nope", "");

        assert_eq!(
            registry.try_dispatch(&inv, &who("alice"), &view()),
            Err(DispatchError::UnknownVerb("nope".into()))
        );
        assert_eq!(
            registry.dispatch(&inv, &who("alice"), &view()).text.as_deref(),
            Some("That isn't a command. Try .commands to see some.")
        );
    }

    #[test]
    fn test_privileged_verb_denied_for_non_owner() {
        let registry = Registry::new();
        let inv = invoke("set", "nick newnick");

        assert_eq!(
            registry.try_dispatch(&inv, &who("bob"), &view()),
            Err(DispatchError::Unauthorized { nick: "bob".into() })
        );
        let reply = registry.dispatch(&inv, &who("bob"), &view());
        assert_eq!(reply, Reply::text(OWNER_ONLY_REPLY));
        assert!(reply.effects.is_empty());
    }

    #[test]
    fn test_privileged_verb_allowed_for_owner() {
        let registry = Registry::new();
        let reply = registry.dispatch(&invoke("set", "nick newnick"), &who("nanago"), &view());

        assert_eq!(reply.text.as_deref(), Some("Nick set to newnick."));
        assert_eq!(reply.effects, vec![SessionEffect::SetNick("newnick".into())]);
    }

    #[test]
    fn test_owner_check_follows_view() {
        let registry = Registry::new();
        let mut view = view();
        view.owner = "alice".into();

        let inv = invoke("set", "owner carol");
        assert!(registry.try_dispatch(&inv, &who("nanago"), &view).is_err());
        assert!(registry.try_dispatch(&inv, &who("alice"), &view).is_ok());
    }

    #[test]
    fn test_command_stats() {
        let registry = Registry::new();
        for _ in 0..3 {
            registry.dispatch(&invoke("c", "a,b"), &who("alice"), &view());
        }
        registry.dispatch(&invoke("wiki", "rust"), &who("alice"), &view());
        registry.dispatch(&invoke("missing", ""), &who("alice"), &view());

        assert_eq!(registry.command_stats(), vec![("c", 3), ("wiki", 1)]);
    }
}
