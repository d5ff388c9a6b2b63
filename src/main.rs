//! kobobot - a small IRC channel bot.

use kobobot::config::{Config, ConfigError, validate};
use kobobot::handlers::Registry;
use kobobot::history::SideLog;
use kobobot::network::Session;
use kobobot::telemetry::spans;
use tracing::{Instrument, error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "kobobot.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let arg = std::env::args().nth(1);
    let explicit = arg.is_some();
    let config_path = arg.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = Config::load_or_default(&config_path, explicit).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;
    validate(&config).map_err(|errors| {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        ConfigError::Invalid(errors)
    })?;

    let addr = config.address();
    info!(
        addr = %addr,
        nick = %config.bot.nick,
        channel = %config.bot.channel,
        "Starting kobobot"
    );

    // Side log failures are not fatal; the bot still answers commands
    let side_log = if config.side_log.enabled {
        match SideLog::open(&config.side_log.path).await {
            Ok(log) => Some(log),
            Err(e) => {
                warn!(path = %config.side_log.path, error = %e, "Side log unavailable, continuing without it");
                None
            }
        }
    } else {
        None
    };

    let mut session = Session::new(&config.bot, Registry::new(), side_log);
    let reason = session
        .start(&addr)
        .instrument(spans::session(&addr, &config.bot.nick))
        .await;

    error!(reason = reason.error_code(), error = %reason, "Session ended");
    Err(reason.into())
}
