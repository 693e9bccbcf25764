//! Command implementations for datacollect CLI

pub mod config;
pub mod init_db;
pub mod serve;

pub use config::run_config;
pub use init_db::run_init_db;
pub use serve::run_serve;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use datacollect_server::DatacollectConfig;

/// Load config from file and environment, then apply a `--db-path` override.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    db_path: Option<PathBuf>,
) -> Result<DatacollectConfig> {
    let mut config =
        DatacollectConfig::load(config_path).context("Failed to load configuration")?;

    if let Some(path) = db_path {
        config.database.path = path;
    }

    Ok(config)
}
