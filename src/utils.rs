use std::error::Error as _;

use crate::{
    Error,
    types::{Album, AlbumTableRow, Artist, Track, TrackTableRow},
};

/// Renders a track length in milliseconds as `m:ss`.
pub fn format_duration(duration_ms: Option<u64>) -> String {
    match duration_ms {
        Some(ms) => {
            let seconds = ms / 1000;
            format!("{}:{:02}", seconds / 60, seconds % 60)
        }
        None => "-".to_string(),
    }
}

pub fn join_artist_names(artists: &[Artist]) -> String {
    let names: Vec<&str> = artists
        .iter()
        .filter_map(|artist| artist.name.as_deref())
        .collect();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

pub fn or_dash_num<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

pub fn track_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .map(|track| TrackTableRow {
            name: or_dash(track.name.as_deref()),
            artists: join_artist_names(&track.artists),
            duration: format_duration(track.duration_ms),
            popularity: or_dash_num(track.popularity),
            id: or_dash(track.track_id.as_deref()),
        })
        .collect()
}

pub fn album_rows(albums: &[Album]) -> Vec<AlbumTableRow> {
    albums
        .iter()
        .map(|album| AlbumTableRow {
            name: or_dash(album.name.as_deref()),
            artists: join_artist_names(&album.artists),
            release_date: or_dash(album.release_date.as_deref()),
            tracks: album.tracks.len(),
            id: or_dash(album.album_id.as_deref()),
        })
        .collect()
}

/// Error message including the underlying transport cause, if any.
pub fn describe_error(err: &Error) -> String {
    match err.source() {
        Some(source) => format!("{}: {}", err, source),
        None => err.to_string(),
    }
}
