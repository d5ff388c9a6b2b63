//! Per-line processing: parse, record, classify, respond.

use super::Session;
use crate::telemetry::spans;
use kobo_proto::{Event, Invocation, Outbound, parse, parse_origin};
use tracing::{debug, warn};

impl Session {
    /// Process one inbound line and return the lines to send, in order.
    ///
    /// Parse failures and unusable origins are logged and yield nothing;
    /// they never stop the session.
    pub fn handle_line(&mut self, line: &str) -> Vec<Outbound> {
        debug!(line = %line, "<--");

        let event = match parse(line) {
            Ok(event) => event,
            Err(e) => {
                warn!(kind = "parse", reason = e.reason(), error = %e, "Dropping line");
                return Vec::new();
            }
        };

        self.record(&event);

        let kind = event.kind();
        match event {
            Event::Ping { token } => vec![Outbound::Pong(token)],
            Event::ChatMessage {
                origin,
                target,
                text,
            } => self.handle_chat(&origin, &target, &text),
            Event::Notice { .. } | Event::Unrecognized { .. } => {
                debug!(kind, "No action");
                Vec::new()
            }
        }
    }

    /// Queue channel traffic for the side log.
    fn record(&self, event: &Event) {
        let Some(side_log) = &self.side_log else {
            return;
        };
        if let (Some(target), Some(text)) = (event.target(), event.text()) {
            if target.eq_ignore_ascii_case(self.state.channel()) {
                side_log.append(text);
            }
        }
    }

    fn handle_chat(&mut self, origin: &str, target: &str, text: &str) -> Vec<Outbound> {
        // Ordinary chat is the common case, not a failure
        let Some(invocation) = Invocation::extract_with_prefix(text, self.state.prefix()) else {
            return Vec::new();
        };

        let caller = match parse_origin(origin) {
            Ok(caller) => caller,
            Err(e) => {
                warn!(kind = "origin", reason = e.reason(), error = %e, verb = %invocation.verb, "Ignoring command");
                return Vec::new();
            }
        };

        // Addressing is decided against the nick in force when the line
        // arrived, even if this command changes it.
        let view = self.state.view();
        let direct = target == view.nick;

        let span = spans::command(&invocation.verb, &caller.nick, target);
        let reply = span.in_scope(|| self.registry.dispatch(&invocation, &caller, &view));

        let mut out = Vec::new();
        for effect in reply.effects {
            if let Some(msg) = self.state.apply(effect) {
                out.push(msg);
            }
        }
        if let Some(text) = reply.text {
            let msg = if direct {
                Outbound::direct(caller.nick.as_str(), text)
            } else {
                Outbound::channel_reply(target, &caller.nick, &text)
            };
            out.push(msg);
        }
        out
    }
}
