//! Configuration for `yamusic`

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use derive_builder::Builder;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Token;

/// Versioned base url of the Yandex Music API
pub const DEFAULT_BASE_URL: &str = "https://api.music.yandex.net/";

/// Represents the configuration file
#[derive(Builder, Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Config {
    token: Token,
    user_id: u64,
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    #[serde(default = "default_base_url")]
    base_url: String,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none", with = "humantime_opt")]
    timeout: Option<Duration>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Values that take precedence over the configuration file
#[derive(Args, Clone, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    /// OAuth token used to authenticate with the API
    #[arg(long, env = "YAMUSIC_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,
    /// Id of the user the token belongs to
    #[arg(long, env = "YAMUSIC_USER_ID", global = true)]
    pub user_id: Option<u64>,
    /// API base url
    #[arg(long, env = "YAMUSIC_BASE_URL", global = true)]
    pub base_url: Option<String>,
    /// Per-request timeout, e.g. `30s` or `1m 30s`
    #[arg(long, env = "YAMUSIC_TIMEOUT", value_parser = humantime::parse_duration, global = true)]
    pub timeout: Option<Duration>,
    /// Path to the configuration file
    #[arg(long, env = "YAMUSIC_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

impl Config {
    pub fn get_token(&self) -> &Token {
        &self.token
    }

    pub fn get_user_id(&self) -> u64 {
        self.user_id
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Merges an optional configuration file with overrides from the command line or environment
    pub fn resolve(file: Option<Config>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut builder = ConfigBuilder::default();

        if let Some(file) = file {
            builder
                .token(file.token)
                .user_id(file.user_id)
                .base_url(file.base_url)
                .timeout(file.timeout);
        }

        if let Some(token) = &overrides.token {
            let token = Token::try_new(token.as_str())
                .map_err(|err| Error::Config(format!("invalid token: {err}")))?;
            builder.token(token);
        }
        if let Some(user_id) = overrides.user_id {
            builder.user_id(user_id);
        }
        if let Some(base_url) = &overrides.base_url {
            builder.base_url(base_url.clone());
        }
        if let Some(timeout) = overrides.timeout {
            builder.timeout(Some(timeout));
        }

        builder.build().map_err(|err| match err {
            ConfigBuilderError::UninitializedField(field) => Error::Config(format!(
                "`{field}` is not set. Pass --{} or run `yamusic config init`",
                field.replace('_', "-")
            )),
            ConfigBuilderError::ValidationError(msg) => Error::Config(msg),
        })
    }

    /// Loads the configuration file, if one exists at `path` (or the default location)
    pub async fn load_config(path: Option<&Path>) -> Result<Option<Self>> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) => path,
                None => return Ok(None),
            },
        };

        if !path.exists() {
            debug!("No configuration file at `{}`", path.display());
            return Ok(None);
        }

        debug!("Loading configuration from `{}`...", path.display());
        let contents = tokio::fs::read_to_string(&path).await.map_err(|err| {
            Error::Config(format!("unable to read `{}`: {err}", path.display()))
        })?;
        let config = serde_json::from_str(&contents).map_err(|err| {
            Error::Config(format!("unable to parse `{}`: {err}", path.display()))
        })?;

        Ok(Some(config))
    }

    /// Writes the configuration as pretty JSON, creating parent directories as needed
    pub async fn save_config(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => default_config_path().ok_or_else(|| {
                Error::Config("unable to determine the configuration directory".to_string())
            })?,
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|err| {
                Error::Config(format!("unable to create `{}`: {err}", parent.display()))
            })?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|err| Error::Config(format!("unable to serialise configuration: {err}")))?;
        tokio::fs::write(&path, json).await.map_err(|err| {
            Error::Config(format!("unable to write `{}`: {err}", path.display()))
        })?;

        Ok(path)
    }
}

/// `~/.config/yamusic/config.json` on Linux, the platform equivalent elsewhere
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("yamusic").join("config.json"))
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut output = String::default();
        output += &format!("Token:    {}\n", self.token.masked());
        output += &format!("User ID:  {}\n", self.user_id);
        output += &format!("Base URL: {}\n", self.base_url);
        if let Some(timeout) = self.timeout {
            output += &format!("Timeout:  {}\n", humantime::format_duration(timeout));
        }

        write!(f, "{}", output)
    }
}

/// (De)serializes an optional [`Duration`] as a humantime string such as `30s`
mod humantime_opt {
    use std::time::Duration;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(duration) => {
                serializer.serialize_str(&humantime::format_duration(*duration).to_string())
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| humantime::parse_duration(&s).map_err(de::Error::custom))
            .transpose()
    }
}
