//! Reshaping of raw catalog documents into the flat records in [`crate::types`].
//!
//! The formatters read the upstream JSON through `serde_json::Value` indexing,
//! which yields `Null` for any missing key or out-of-range index. A missing
//! nested object therefore shows up as an absent field in the record and never
//! as an error. Lists keep the order of the source payload.

use serde_json::Value;

use crate::types::{Album, Artist, Playlist, PlaylistOwner, Track};

/// Formats an album document or a search result item.
///
/// Nested artists and track items go through [`format_artist`] and
/// [`format_track`]. Without a `tracks` container the track list is empty,
/// and missing genres become an empty list.
pub fn format_album(data: &Value) -> Album {
    Album {
        album_id: string(&data["id"]),
        artists: artists(&data["artists"]),
        genres: data["genres"]
            .as_array()
            .map(|genres| strings(genres))
            .unwrap_or_default(),
        name: string(&data["name"]),
        image_url: first_image_url(&data["images"]),
        release_date: string(&data["release_date"]),
        tracks: data["tracks"]["items"]
            .as_array()
            .map(|items| items.iter().map(format_track).collect())
            .unwrap_or_default(),
    }
}

/// Formats a track. `album_id` is `None` when the track comes without its
/// parent album, as inside an album's track listing.
pub fn format_track(data: &Value) -> Track {
    Track {
        album_id: string(&data["album"]["id"]),
        artists: artists(&data["artists"]),
        duration_ms: data["duration_ms"].as_u64(),
        track_id: string(&data["id"]),
        name: string(&data["name"]),
        popularity: popularity(&data["popularity"]),
        preview_url: string(&data["preview_url"]),
    }
}

/// Formats an artist, taking the first image as `image_url`. Followers,
/// genres and popularity stay `None` when the document omits them.
pub fn format_artist(data: &Value) -> Artist {
    Artist {
        artist_id: string(&data["id"]),
        followers: data["followers"]["total"].as_u64(),
        // unlike albums, an artist without a genre list keeps `None`
        genres: data["genres"].as_array().map(|genres| strings(genres)),
        image_url: first_image_url(&data["images"]),
        name: string(&data["name"]),
        popularity: popularity(&data["popularity"]),
    }
}

/// Playlist entries wrap the track in an item object; the inner `track` is
/// what gets formatted.
pub fn format_playlist(data: &Value) -> Playlist {
    Playlist {
        description: string(&data["description"]),
        followers: data["followers"]["total"].as_u64(),
        playlist_id: string(&data["id"]),
        image_url: first_image_url(&data["images"]),
        name: string(&data["name"]),
        owner: PlaylistOwner {
            user_id: string(&data["owner"]["id"]),
        },
        public: data["public"].as_bool(),
        tracks: data["tracks"]["items"]
            .as_array()
            .map(|items| items.iter().map(|item| format_track(&item["track"])).collect())
            .unwrap_or_default(),
    }
}

fn artists(value: &Value) -> Vec<Artist> {
    value
        .as_array()
        .map(|artists| artists.iter().map(format_artist).collect())
        .unwrap_or_default()
}

fn string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn strings(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

fn first_image_url(images: &Value) -> Option<String> {
    images[0]["url"]
        .as_str()
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

fn popularity(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|p| u32::try_from(p).ok())
}
