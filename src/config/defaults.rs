//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

/// Returns `true` (for serde defaults).
pub fn default_true() -> bool {
    true
}

// =============================================================================
// Server Defaults
// =============================================================================

pub fn default_host() -> String {
    "irc.rizon.net".to_string()
}

pub fn default_port() -> u16 {
    6667
}

// =============================================================================
// Bot Defaults
// =============================================================================

pub fn default_nick() -> String {
    "kobobot".to_string()
}

pub fn default_owner() -> String {
    "nanago".to_string()
}

pub fn default_channel() -> String {
    "#kobobot".to_string()
}

pub fn default_command_prefix() -> char {
    kobo_proto::DEFAULT_PREFIX
}

/// Seconds between registration and JOIN.
pub fn default_settle_delay_secs() -> u64 {
    5
}

// =============================================================================
// Side Log Defaults
// =============================================================================

pub fn default_side_log_path() -> String {
    "/tmp/markov".to_string()
}
