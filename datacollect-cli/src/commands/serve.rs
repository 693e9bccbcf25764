//! HTTP server command

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::load_config;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// SQLite database file (overrides config/environment)
    #[arg(long)]
    pub db_path: Option<PathBuf>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Config file (default: ~/.datacollect/config.toml)
    #[arg(long, short = 'c', env = "DATACOLLECT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref(), args.db_path)?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if args.cors_permissive {
        config.server.cors_permissive = true;
    }

    tracing::info!(
        database = %config.database.path.display(),
        "Starting datacollect server on {}",
        config.server.bind
    );

    // Blocks until shutdown
    datacollect_server::serve(&config)
        .await
        .context("Server error")?;

    Ok(())
}
