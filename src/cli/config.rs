use anyhow::Result;
use clap::{Args, Subcommand};
use simplelog::info;

use crate::config::{self as app_config, Config as AppConfig, ConfigOverrides};

#[derive(Args, Debug, PartialEq)]
pub struct CliConfig {
    #[command(subcommand)]
    config_cmds: ConfigCmds,
}

#[derive(Subcommand, Debug, PartialEq)]
enum ConfigCmds {
    /// Write the configuration file from --token, --user-id, --base-url and --timeout,
    /// keeping any values already saved
    Init,
    /// Print the effective configuration
    Show,
}

pub async fn run_config_cmd(cfg: CliConfig, overrides: &ConfigOverrides) -> Result<()> {
    let path = overrides.config.as_deref();

    match cfg.config_cmds {
        ConfigCmds::Init => {
            let existing = AppConfig::load_config(path).await?;
            let config = AppConfig::resolve(existing, overrides)?;
            let saved_to = config.save_config(path).await?;

            info!("Configuration saved to `{}`", saved_to.display());
        }
        ConfigCmds::Show => {
            let existing = AppConfig::load_config(path).await?;
            let config = AppConfig::resolve(existing, overrides)?;

            if let Some(path) = path
                .map(|p| p.to_path_buf())
                .or_else(app_config::default_config_path)
            {
                println!("File:     {}", path.display());
            }
            print!("{config}");
        }
    }

    Ok(())
}
