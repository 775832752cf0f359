use std::fmt::{Display, Formatter};
use std::time::Duration;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::yamusic::models::{null_as_default, string_or_number, Timestamp};

/// A track's position in a playlist, with the track itself embedded
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TrackEntry {
    pub id: u64,
    pub timestamp: Timestamp,
    #[serde(default)]
    pub recent: bool,
    pub track: Track,
}

impl Display for TrackEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (added {})", self.track, self.timestamp.datetime().format("%Y-%m-%d"))
    }
}

/// A track reference returned when fetching playlists by kinds
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRef {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<u64>,
    pub timestamp: Timestamp,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub available_for_premium_users: bool,
    #[serde(default)]
    pub lyrics_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<Major>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalization: Option<Normalization>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<Artist>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub albums: Vec<Album>,
}

impl Track {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn artist(&self) -> String {
        self.artists.iter().map(|a| a.name.as_str()).join(", ")
    }

    pub fn album(&self) -> Option<&str> {
        self.albums.first().map(|a| a.title.as_str())
    }
}

impl Display for Track {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut str = String::default();

        str += &format!("{} - {}", self.artist(), self.title);
        if let Some(album) = self.album() {
            str += &format!(" [{album}]");
        }
        str += &format!(" {}", humantime::format_duration(self.duration()));
        if !self.available {
            str += " (unavailable)";
        }

        write!(f, "{str}")
    }
}

/// The label or distributor that owns the track
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Major {
    pub id: u64,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Normalization {
    pub gain: f64,
    pub peak: i64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Artist {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub various: bool,
    #[serde(default)]
    pub composer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<ArtistCover>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ArtistCover {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub cover_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub buy: Vec<serde_json::Value>,
    #[serde(default)]
    pub track_count: u32,
    #[serde(default)]
    pub recent: bool,
    #[serde(default)]
    pub very_important: bool,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub available_for_premium_users: bool,
    #[serde(default)]
    pub available_for_mobile: bool,
    #[serde(default)]
    pub available_partially: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bests: Vec<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<Artist>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_position: Option<TrackPosition>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Label {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Disc and position of the track on an album
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct TrackPosition {
    pub volume: u32,
    pub index: u32,
}
