//! Inspect the resolved configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use datacollect_server::DatacollectConfig;

use super::load_config;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the resolved config (defaults, file, environment) as TOML
    Show(ShowArgs),
    /// Show default config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Config file (default: ~/.datacollect/config.toml)
    #[arg(long, short = 'c', env = "DATACOLLECT_CONFIG")]
    pub config: Option<PathBuf>,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show(args) => run_show(args),
        ConfigCommands::Path => run_path(),
    }
}

fn run_show(args: ShowArgs) -> Result<()> {
    let config = load_config(args.config.as_deref(), None)?;

    let toml_str =
        toml::to_string_pretty(&config).context("Failed to serialize config to TOML")?;
    println!("{}", toml_str);

    Ok(())
}

fn run_path() -> Result<()> {
    println!("{}", DatacollectConfig::config_path().display());
    Ok(())
}
