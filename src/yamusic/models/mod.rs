use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub mod playlists;
pub mod tracks;

pub use playlists::{
    Cover, Owner, PlaylistDetail, PlaylistMutationResult, PlaylistSummary, PlaylistWithTrackRefs,
};
pub use tracks::{
    Album, Artist, ArtistCover, Label, Major, Normalization, Track, TrackEntry, TrackPosition,
    TrackRef,
};

pub type PlaylistsList = Response<Vec<PlaylistSummary>>;
pub type PlaylistsGet = Response<PlaylistDetail>;
pub type PlaylistsGetByKinds = Response<Vec<PlaylistWithTrackRefs>>;
pub type PlaylistsRename = Response<PlaylistMutationResult>;
pub type PlaylistsCreate = Response<PlaylistMutationResult>;
pub type PlaylistsDelete = Response<String>;

/// Envelope wrapped around every API response
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response<T> {
    pub invocation_info: InvocationInfo,
    pub result: T,
}

/// Diagnostic information about the server that handled the request
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct InvocationInfo {
    pub hostname: String,
    #[serde(rename = "req-id")]
    pub req_id: String,
    #[serde(
        rename = "exec-duration-millis",
        default,
        deserialize_with = "string_or_number"
    )]
    pub exec_duration_millis: String,
}

/// An RFC 3339 timestamp that is written back exactly as the service sent it
///
/// `chrono` normalises `+00:00` to `Z` and drops zero fractions, so the original
/// text is kept next to the parsed value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timestamp {
    raw: String,
    value: DateTime<FixedOffset>,
}

impl Timestamp {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.value
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            value: DateTime::parse_from_rfc3339(s)?,
            raw: s.to_string(),
        })
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Treats an explicit `null` the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts fields the service sends either as a string or as a bare number
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}
