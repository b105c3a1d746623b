// src/logging.rs
// =============================================================================
// Logging setup using `tracing` + `tracing-subscriber`.
//
// Priority for the log level:
// 1. --log-level flag
// 2. SENTINEL_LOG environment variable (e.g. "debug", or a full filter like
//    "site_sentinel=debug,reqwest=warn")
// 3. "info"
//
// Logs go to stderr so `--once --json` output on stdout stays parseable.
// Operators only ever see failures here; they are never emailed.
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "SENTINEL_LOG";

pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = match cli_level {
        Some(level) => EnvFilter::new(level.as_str()),
        None => EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))
}
