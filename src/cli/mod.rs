use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cli::config::CliConfig;
use crate::cli::playlists::CliPlaylists;
use crate::config::{Config, ConfigOverrides};
use crate::yamusic::YaMusic;

mod config;
mod playlists;

#[derive(Debug, PartialEq, Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: ConfigOverrides,

    #[command(subcommand)]
    pub commands: Commands,
}

#[derive(Debug, PartialEq, Subcommand)]
pub enum Commands {
    /// Manage playlists
    Playlists(CliPlaylists),
    /// Manage the configuration file
    Config(CliConfig),
}

pub async fn run_cli_command(cli: Cli) -> Result<()> {
    match cli.commands {
        Commands::Playlists(cmd) => {
            let file = Config::load_config(cli.overrides.config.as_deref()).await?;
            let config = Config::resolve(file, &cli.overrides)?;
            let api = YaMusic::new(&config)?;
            playlists::run_playlists_cmd(cmd, &api).await?
        }
        Commands::Config(cfg) => config::run_config_cmd(cfg, &cli.overrides).await?,
    }

    Ok(())
}
