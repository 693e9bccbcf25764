//! Tracing setup for the datacollect CLI
//!
//! Usage:
//!   datacollect --debug ...                 # Debug logging to console
//!   RUST_LOG=datacollect_server=debug ...   # Fine-grained log control
//!
//! `RUST_LOG` always wins over `--debug`.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
}

/// Initialize console tracing on stderr
pub fn init(config: &TracingConfig) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .with_writer(std::io::stderr) // stdout is reserved for command output
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
