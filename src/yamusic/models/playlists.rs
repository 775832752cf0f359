use std::fmt::{Display, Formatter};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::Visibility;
use crate::yamusic::models::tracks::{TrackEntry, TrackRef};
use crate::yamusic::models::{null_as_default, Timestamp};

/// A playlist as it appears in the user's playlist list
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSummary {
    pub uid: u64,
    pub kind: u32,
    #[serde(default)]
    pub revision: u32,
    #[serde(default)]
    pub track_count: u32,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub collective: bool,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub is_banner: bool,
    #[serde(default)]
    pub is_premiere: bool,
    pub title: String,
    pub visibility: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    pub created: Timestamp,
    pub modified: Timestamp,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<serde_json::Value>,
    pub owner: Owner,
    #[serde(default)]
    pub cover: Cover,
}

impl PlaylistSummary {
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public.to_string()
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Display for PlaylistSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut str = String::default();

        str += &format!("[{}] ", self.kind);
        str += &format!("{} ", self.title);
        str += &format!("({} tracks, ", self.track_count);
        str += &format!("{}, ", humantime::format_duration(self.duration()));
        str += &format!("{}, ", self.visibility);
        str += &format!("rev {})", self.revision);

        write!(f, "{str}")
    }
}

/// A single playlist with its full track list
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDetail {
    #[serde(flatten)]
    pub summary: PlaylistSummary,
    #[serde(default)]
    pub likes_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracks: Vec<TrackEntry>,
}

impl Display for PlaylistDetail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.summary)?;
        writeln!(f, "Owner: {} ({} likes)", self.summary.owner, self.likes_count)?;
        for (idx, entry) in self.tracks.iter().enumerate() {
            writeln!(f, "{:>4}. {}", idx + 1, entry)?;
        }
        Ok(())
    }
}

/// A playlist returned when fetching by kinds, with lightweight track references
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistWithTrackRefs {
    #[serde(flatten)]
    pub summary: PlaylistSummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracks: Vec<TrackRef>,
}

impl PlaylistWithTrackRefs {
    pub fn track_ids(&self) -> Vec<u64> {
        self.tracks.iter().map(|t| t.id).collect()
    }
}

/// The playlist state returned after a rename or create
pub type PlaylistMutationResult = PlaylistSummary;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Owner {
    pub uid: u64,
    pub login: String,
    pub name: String,
    #[serde(default)]
    pub verified: bool,
}

impl Display for Owner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.login)
    }
}

/// Playlist cover
///
/// Mosaic covers carry `itemsUri`, picked covers carry `dir`/`version`/`uri`,
/// and freshly created playlists only carry `error`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cover {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub cover_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_uri: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
