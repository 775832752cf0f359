//! Playlist endpoints

use derive_builder::Builder;
use itertools::Itertools;
use log::debug;
use reqwest::Method;
use url::form_urlencoded;

use crate::error::Result;
use crate::http_client::{ApiResponse, HttpClient};
use crate::types::Visibility;
use crate::yamusic::models::{
    PlaylistsCreate, PlaylistsDelete, PlaylistsGet, PlaylistsGetByKinds, PlaylistsList,
    PlaylistsRename,
};

/// Accessor for a user's playlists, bound to a shared [`HttpClient`]
#[derive(Clone, Copy, Debug)]
pub struct Playlists<'a> {
    client: &'a HttpClient,
}

/// Options for [`Playlists::get_by_kinds`]
#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(default)]
pub struct GetByKindsOptions {
    /// Kinds of the playlists to fetch
    pub kinds: Vec<u32>,
    /// Include playlists the user does not own
    pub mixed: bool,
    /// Ask for full track objects instead of references
    pub rich_tracks: bool,
}

impl GetByKindsOptions {
    pub fn new(kinds: Vec<u32>) -> Self {
        Self {
            kinds,
            ..Default::default()
        }
    }

    /// Encodes the options as `kinds=..&mixed=..&rich-tracks=..`
    fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("kinds", &self.kinds.iter().join(","))
            .append_pair("mixed", &self.mixed.to_string())
            .append_pair("rich-tracks", &self.rich_tracks.to_string())
            .finish()
    }
}

impl<'a> Playlists<'a> {
    pub fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Returns the playlists of the user
    pub async fn list(&self, user_id: u64) -> Result<ApiResponse<PlaylistsList>> {
        let path = format!("users/{user_id}/playlists/list");
        let req = self.client.new_request(Method::GET, &path, None)?;

        self.client.execute(req).await
    }

    /// Returns a playlist of the user by kind, with full track details
    pub async fn get(&self, user_id: u64, kind: u32) -> Result<ApiResponse<PlaylistsGet>> {
        let path = format!("users/{user_id}/playlists/{kind}");
        let req = self.client.new_request(Method::GET, &path, None)?;

        self.client.execute(req).await
    }

    /// Returns several playlists by kinds, with track references
    pub async fn get_by_kinds(
        &self,
        user_id: u64,
        opts: Option<&GetByKindsOptions>,
    ) -> Result<ApiResponse<PlaylistsGetByKinds>> {
        let default_opts = GetByKindsOptions::default();
        let opts = opts.unwrap_or(&default_opts);

        let path = format!("users/{user_id}/playlists?{}", opts.to_query());
        let req = self.client.new_request(Method::GET, &path, None)?;

        self.client.execute(req).await
    }

    /// Renames a playlist of the current user
    pub async fn rename(&self, kind: u32, new_name: &str) -> Result<ApiResponse<PlaylistsRename>> {
        debug!("Renaming playlist {kind} to `{new_name}`");

        let path = format!("users/{}/playlists/{kind}/name", self.client.user_id());
        let form = [("value", new_name)];
        let req = self.client.new_request(Method::POST, &path, Some(&form))?;

        self.client.execute(req).await
    }

    /// Creates a playlist for the current user
    pub async fn create(
        &self,
        title: &str,
        is_public: bool,
    ) -> Result<ApiResponse<PlaylistsCreate>> {
        let visibility = Visibility::from(is_public).to_string();
        debug!("Creating {visibility} playlist `{title}`");

        let path = format!("users/{}/playlists/create", self.client.user_id());
        let form = [("title", title), ("visibility", visibility.as_str())];
        let req = self.client.new_request(Method::POST, &path, Some(&form))?;

        self.client.execute(req).await
    }

    /// Deletes a playlist of the current user
    pub async fn delete(&self, kind: u32) -> Result<ApiResponse<PlaylistsDelete>> {
        debug!("Deleting playlist {kind}");

        let path = format!("users/{}/playlists/{kind}/delete", self.client.user_id());
        let req = self.client.new_request(Method::POST, &path, None)?;

        self.client.execute(req).await
    }
}
