use std::fmt;

use serde::Serialize;
use tabled::Tabled;

/// Access token returned by the client-credentials exchange.
///
/// The token is short lived and not refreshed; callers request a new one when
/// the catalog starts rejecting it.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        BearerToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for BearerToken {
    fn from(token: String) -> Self {
        BearerToken(token)
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// keep tokens out of debug logs
impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// The catalog entity types that can be fetched by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Album,
    Track,
    Artist,
    Playlist,
}

impl ResourceKind {
    /// Path segment of the resource endpoint, e.g. `albums` in `/albums/{id}`.
    pub fn endpoint(self) -> &'static str {
        match self {
            ResourceKind::Album => "albums",
            ResourceKind::Track => "tracks",
            ResourceKind::Artist => "artists",
            ResourceKind::Playlist => "playlists",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Album => "Album",
            ResourceKind::Track => "Track",
            ResourceKind::Artist => "Artist",
            ResourceKind::Playlist => "Playlist",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub artist_id: Option<String>,
    pub followers: Option<u64>,
    pub genres: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub name: Option<String>,
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub album_id: Option<String>,
    pub artists: Vec<Artist>,
    pub duration_ms: Option<u64>,
    pub track_id: Option<String>,
    pub name: Option<String>,
    pub popularity: Option<u32>,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub album_id: Option<String>,
    pub artists: Vec<Artist>,
    pub genres: Vec<String>,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub release_date: Option<String>,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistOwner {
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub description: Option<String>,
    pub followers: Option<u64>,
    pub playlist_id: Option<String>,
    pub image_url: Option<String>,
    pub name: Option<String>,
    pub owner: PlaylistOwner,
    pub public: Option<bool>,
    pub tracks: Vec<Track>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artists: String,
    pub duration: String,
    pub popularity: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub name: String,
    pub artists: String,
    pub release_date: String,
    pub tracks: usize,
    pub id: String,
}

#[derive(Tabled)]
pub struct DetailTableRow {
    pub field: String,
    pub value: String,
}
