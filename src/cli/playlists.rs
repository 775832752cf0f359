use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use serde::Serialize;
use simplelog::{info, warn};

use crate::yamusic::{GetByKindsOptions, YaMusic};

#[derive(Args, Debug, PartialEq)]
pub struct CliPlaylists {
    #[command(subcommand)]
    pub playlist_cmds: PlaylistCmds,
}

#[derive(Debug, PartialEq, Subcommand)]
pub enum PlaylistCmds {
    /// List a user's playlists
    List {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Show a playlist with its tracks
    Get {
        kind: u32,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Show several playlists with their track ids
    Kinds {
        #[arg(required = true)]
        kinds: Vec<u32>,
        /// Include playlists the user does not own
        #[arg(long)]
        mixed: bool,
        /// Ask for full track objects instead of references
        #[arg(long)]
        rich_tracks: bool,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Rename one of your playlists
    Rename {
        kind: u32,
        name: String,
        #[arg(long)]
        json: bool,
    },
    /// Create a playlist
    Create {
        title: String,
        /// Make the playlist visible to everyone
        #[arg(long)]
        public: bool,
        #[arg(long)]
        json: bool,
    },
    /// Delete one of your playlists
    Delete {
        kind: u32,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, PartialEq)]
pub struct TargetArgs {
    /// Owner of the playlists; defaults to the configured user
    #[arg(long)]
    user: Option<u64>,
    /// Print the raw response as JSON
    #[arg(long)]
    json: bool,
}

impl TargetArgs {
    fn user_id(&self, api: &YaMusic) -> u64 {
        self.user.unwrap_or_else(|| api.user_id())
    }
}

pub async fn run_playlists_cmd(cmd: CliPlaylists, api: &YaMusic) -> Result<()> {
    let playlists = api.playlists();

    match cmd.playlist_cmds {
        PlaylistCmds::List { target } => {
            let resp = playlists.list(target.user_id(api)).await?.into_inner();
            if target.json {
                return print_json(&resp);
            }

            if resp.result.is_empty() {
                println!("No playlists found.");
            }
            for playlist in &resp.result {
                println!("{playlist}");
            }
        }
        PlaylistCmds::Get { kind, target } => {
            let resp = playlists.get(target.user_id(api), kind).await?.into_inner();
            if target.json {
                return print_json(&resp);
            }

            print!("{}", resp.result);
        }
        PlaylistCmds::Kinds {
            kinds,
            mixed,
            rich_tracks,
            target,
        } => {
            let opts = GetByKindsOptions {
                kinds,
                mixed,
                rich_tracks,
            };
            let resp = playlists
                .get_by_kinds(target.user_id(api), Some(&opts))
                .await?
                .into_inner();
            if target.json {
                return print_json(&resp);
            }

            for playlist in &resp.result {
                println!("{}", playlist.summary);
                for track in &playlist.tracks {
                    match track.album_id {
                        Some(album_id) => println!("      {}:{album_id}", track.id),
                        None => println!("      {}", track.id),
                    }
                }
            }
        }
        PlaylistCmds::Rename { kind, name, json } => {
            let resp = playlists.rename(kind, &name).await?.into_inner();
            if json {
                return print_json(&resp);
            }

            info!("Playlist renamed: {}", resp.result);
        }
        PlaylistCmds::Create {
            title,
            public,
            json,
        } => {
            let resp = playlists.create(&title, public).await?.into_inner();
            if json {
                return print_json(&resp);
            }

            info!("Playlist created: {}", resp.result);
        }
        PlaylistCmds::Delete { kind, yes } => {
            if !yes && !confirm_delete(kind)? {
                warn!("Aborted.");
                return Ok(());
            }

            let resp = playlists.delete(kind).await?.into_inner();
            if resp.result != "ok" {
                return Err(anyhow!(
                    "Unexpected response while deleting playlist {kind}: {}",
                    resp.result
                ));
            }

            info!("Playlist {kind} deleted");
        }
    }

    Ok(())
}

fn confirm_delete(kind: u32) -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Delete playlist {kind}? This cannot be undone."))
        .default(false)
        .interact()?;

    Ok(confirmed)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
