//! Decoding the response fixtures and writing them back out must not lose any modeled field.

use pretty_assertions::assert_eq;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use yamusic::yamusic::models::{
    PlaylistDetail, PlaylistSummary, PlaylistsCreate, PlaylistsDelete, PlaylistsGet,
    PlaylistsGetByKinds, PlaylistsList, PlaylistsRename,
};

/// Decodes `fixture`, checks that re-encoding keeps every value it sent, and that the
/// re-encoded form decodes to the same thing
fn round_trip<T>(fixture: &str) -> T
where
    T: DeserializeOwned + Serialize + PartialEq + std::fmt::Debug,
{
    let decoded: T = serde_json::from_str(fixture).unwrap();

    let sent: Value = serde_json::from_str(fixture).unwrap();
    let written = serde_json::to_value(&decoded).unwrap();
    assert_preserved(&sent, &written, "");

    let redecoded: T = serde_json::from_value(written).unwrap();
    assert_eq!(decoded, redecoded);
    decoded
}

/// Every value in `sent` must appear unchanged in `written`. Defaulted fields the
/// service left out may be added.
fn assert_preserved(sent: &Value, written: &Value, at: &str) {
    match (sent, written) {
        (Value::Object(sent), Value::Object(written)) => {
            for (key, value) in sent {
                let at = format!("{at}.{key}");
                match written.get(key) {
                    Some(written) => assert_preserved(value, written, &at),
                    None => panic!("{at} was dropped"),
                }
            }
        }
        (Value::Array(sent), Value::Array(written)) => {
            assert_eq!(sent.len(), written.len(), "length of {at}");
            for (idx, (sent, written)) in sent.iter().zip(written).enumerate() {
                assert_preserved(sent, written, &format!("{at}[{idx}]"));
            }
        }
        _ => assert_eq!(sent, written, "value at {at}"),
    }
}

#[test]
fn test_list_round_trip() {
    let resp: PlaylistsList = round_trip(include_str!("fixtures/playlists_list.json"));

    assert_eq!(
        "music-stable-back-vla-52.vla.yp-c.yandex.net",
        resp.invocation_info.hostname
    );
    assert_eq!("1563457212345678-17264891234567890", resp.invocation_info.req_id);
    assert_eq!(12, resp.result[0].revision);
    assert_eq!(431000, resp.result[0].duration_ms);
    assert_eq!("2019-08-01T09:00:00.000+03:00", resp.result[1].created.as_str());
    assert_eq!(
        "2019-08-01T06:00:00+00:00",
        resp.result[1]
            .created
            .datetime()
            .with_timezone(&chrono::Utc)
            .to_rfc3339()
    );
}

#[test]
fn test_get_round_trip() {
    let resp: PlaylistsGet = round_trip(include_str!("fixtures/playlists_get.json"));

    let track = &resp.result.tracks[0].track;
    assert_eq!(Some("IRICOM"), track.major.as_ref().map(|m| m.name.as_str()));
    assert_eq!(32767, track.normalization.as_ref().unwrap().peak);
    assert_eq!(
        Some("from-album-cover"),
        track.artists[0]
            .cover
            .as_ref()
            .and_then(|c| c.cover_type.as_deref())
    );
    assert_eq!(
        Some("2016-03-18T00:00:00+03:00"),
        track.albums[0].release_date.as_ref().map(|d| d.as_str())
    );
}

#[test]
fn test_get_by_kinds_round_trip() {
    let resp: PlaylistsGetByKinds = round_trip(include_str!("fixtures/playlists_get_by_kinds.json"));

    assert_eq!(2, resp.result[0].tracks.len());
    assert_eq!(
        "2019-07-20T13:05:10.000+00:00",
        resp.result[0].tracks[1].timestamp.as_str()
    );
    assert_eq!(Some(true), resp.result[0].summary.cover.custom);
}

#[test]
fn test_rename_round_trip() {
    let resp: PlaylistsRename = round_trip(include_str!("fixtures/playlists_rename.json"));

    assert_eq!("New Name", resp.result.title);
    assert!(resp.result.tags.is_empty());
    assert_eq!(Some(""), resp.result.og_image.as_deref());
}

#[test]
fn test_create_round_trip() {
    let resp: PlaylistsCreate = round_trip(include_str!("fixtures/playlists_create.json"));

    assert_eq!("public", resp.result.visibility);
    assert_eq!(Some("cover doesn't exist"), resp.result.cover.error.as_deref());
}

#[test]
fn test_delete_round_trip() {
    let resp: PlaylistsDelete = round_trip(include_str!("fixtures/playlists_delete.json"));

    assert_eq!("ok", resp.result);
}

#[test]
fn test_serialised_field_names() {
    let resp: PlaylistsGet = serde_json::from_str(include_str!("fixtures/playlists_get.json")).unwrap();
    let value = serde_json::to_value(&resp).unwrap();

    assert_eq!("48", value["invocationInfo"]["exec-duration-millis"]);
    assert!(value["invocationInfo"]["req-id"].is_string());
    assert_eq!(1003, value["result"]["kind"]);
    assert_eq!(7, value["result"]["likesCount"]);
    assert_eq!("pic", value["result"]["cover"]["type"]);
    assert_eq!(3387519, value["result"]["tracks"][0]["track"]["albums"][0]["id"]);
    assert_eq!(
        4,
        value["result"]["tracks"][0]["track"]["albums"][0]["trackPosition"]["index"]
    );
    assert_eq!(
        true,
        value["result"]["tracks"][0]["track"]["availableForPremiumUsers"]
    );
}

#[test]
fn test_timestamps_written_verbatim() {
    let resp: PlaylistsRename =
        serde_json::from_str(include_str!("fixtures/playlists_rename.json")).unwrap();
    let value = serde_json::to_value(&resp).unwrap();

    assert_eq!("2019-08-01T09:00:00+00:00", value["result"]["created"]);
    assert_eq!("2019-08-06T10:11:12+00:00", value["result"]["modified"]);
}

#[test]
fn test_unknown_fields_ignored() {
    let mut value: Value =
        serde_json::from_str(include_str!("fixtures/playlists_create.json")).unwrap();
    value["result"]["owner"]["sex"] = Value::from("unknown");
    value["result"]["likesCount"] = Value::from(3);

    let resp: PlaylistsCreate = serde_json::from_value(value).unwrap();
    assert_eq!("yamusic-daily", resp.result.owner.login);
}

#[test]
fn test_null_lists_decode_as_empty() {
    let mut value: Value =
        serde_json::from_str(include_str!("fixtures/playlists_get.json")).unwrap();
    let result = &mut value["result"];
    result["tags"] = Value::Null;
    let track = &mut result["tracks"][0]["track"];
    track["artists"][0]["genres"] = Value::Null;
    let album = &mut track["albums"][0];
    for key in ["buy", "bests", "labels", "artists"] {
        album[key] = Value::Null;
    }

    let playlist: PlaylistDetail = serde_json::from_value(value["result"].clone()).unwrap();
    assert!(playlist.summary.tags.is_empty());
    let track = &playlist.tracks[0].track;
    assert!(track.artists[0].genres.is_empty());
    let album = &track.albums[0];
    assert!(album.buy.is_empty());
    assert!(album.bests.is_empty());
    assert!(album.labels.is_empty());
    assert!(album.artists.is_empty());

    let mut value: Value =
        serde_json::from_str(include_str!("fixtures/playlists_list.json")).unwrap();
    value["result"][0]["tags"] = Value::Null;
    let summary: PlaylistSummary = serde_json::from_value(value["result"][0].clone()).unwrap();
    assert!(summary.tags.is_empty());
}
