//! Create the database file and schema without serving

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use datacollect_server::db;

use super::load_config;

#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// SQLite database file (overrides config/environment)
    #[arg(long)]
    pub db_path: Option<PathBuf>,

    /// Config file (default: ~/.datacollect/config.toml)
    #[arg(long, short = 'c', env = "DATACOLLECT_CONFIG")]
    pub config: Option<PathBuf>,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let config = load_config(args.config.as_deref(), args.db_path)?;
    let path = &config.database.path;

    let pool = db::open(path, 1)
        .await
        .with_context(|| format!("Failed to initialize database at {}", path.display()))?;
    pool.close().await;

    println!("Database ready at {}", path.display());
    Ok(())
}
