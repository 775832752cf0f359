use log::debug;

use crate::config::Config;
use crate::error::Result;
use crate::http_client::HttpClient;

pub mod models;
pub mod playlists;

pub use playlists::{GetByKindsOptions, GetByKindsOptionsBuilder, Playlists};

/// Entry point to the Yandex Music API
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct YaMusic {
    client: HttpClient,
}

impl YaMusic {
    pub fn new(config: &Config) -> Result<Self> {
        debug!("Initializing Yandex Music client...");

        let client = HttpClient::new(config)?;
        Ok(Self { client })
    }

    /// Id of the user the client is authenticated as
    pub fn user_id(&self) -> u64 {
        self.client.user_id()
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    pub fn playlists(&self) -> Playlists<'_> {
        Playlists::new(&self.client)
    }
}
