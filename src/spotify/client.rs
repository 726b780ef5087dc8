use log::{debug, error};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::{
    config::{Config, DEFAULT_API_URL},
    error::{Error, Result},
    spotify::format::{format_album, format_artist, format_playlist, format_track},
    types::{Album, Artist, BearerToken, Playlist, ResourceKind, Track},
};

/// Authenticated access to the catalog endpoints of the Spotify Web API.
///
/// Holds a bearer token and a base URL and nothing else; every method issues
/// exactly one GET request and reshapes the answer with the formatters in
/// [`crate::spotify::format`]. The token is never refreshed. The client can be
/// shared between tasks and calls may run concurrently.
///
/// # Example
///
/// ```
/// let token = spotify::auth::request_access_token(&config).await?;
/// let api = SpotifyApi::with_config(token, &config);
///
/// let album = api.get_album("2IYQwwgxgOIn7t3iF6ufFD").await?;
/// let tracks = api.search_tracks("daft punk").await?;
/// ```
pub struct SpotifyApi {
    client: Client,
    access_token: BearerToken,
    api_url: String,
}

impl SpotifyApi {
    /// Creates a client for the public Spotify Web API.
    pub fn new(access_token: BearerToken) -> Self {
        Self::with_api_url(access_token, DEFAULT_API_URL)
    }

    /// Creates a client for the API base URL in `config`.
    pub fn with_config(access_token: BearerToken, config: &Config) -> Self {
        Self::with_api_url(access_token, &config.api_url)
    }

    fn with_api_url(access_token: BearerToken, api_url: &str) -> Self {
        Self {
            client: Client::new(),
            access_token,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetches an album together with its artists and track listing.
    ///
    /// # Errors
    ///
    /// [`Error::EntityNotFound`] when the album does not exist, otherwise
    /// [`Error::Api`] ("Failed to fetch album").
    pub async fn get_album(&self, album_id: &str) -> Result<Album> {
        let data = self
            .fetch(ResourceKind::Album, &[album_id], &[], "Failed to fetch album")
            .await?;
        Ok(format_album(&data))
    }

    /// Searches albums. The result keeps the order of the upstream page and
    /// carries no track listings.
    ///
    /// # Errors
    ///
    /// [`Error::Api`] ("Failed to search albums") on any failure, including a
    /// response without an `albums.items` list.
    pub async fn search_albums(&self, query: &str) -> Result<Vec<Album>> {
        let message = "Failed to search albums";
        let data = self.search(query, "album", message).await?;
        Ok(items(&data["albums"]["items"], message)?
            .iter()
            .map(format_album)
            .collect())
    }

    /// Fetches a single track, including the id of its parent album.
    ///
    /// # Errors
    ///
    /// [`Error::EntityNotFound`] when the track does not exist, otherwise
    /// [`Error::Api`] ("Failed to fetch track").
    pub async fn get_track(&self, track_id: &str) -> Result<Track> {
        let data = self
            .fetch(ResourceKind::Track, &[track_id], &[], "Failed to fetch track")
            .await?;
        Ok(format_track(&data))
    }

    /// Searches tracks. The result keeps the order of the upstream page.
    ///
    /// # Errors
    ///
    /// [`Error::Api`] ("Failed to search tracks") on any failure, including a
    /// response without a `tracks.items` list. Searches never report
    /// [`Error::EntityNotFound`].
    pub async fn search_tracks(&self, query: &str) -> Result<Vec<Track>> {
        let message = "Failed to search tracks";
        let data = self.search(query, "track", message).await?;
        Ok(items(&data["tracks"]["items"], message)?
            .iter()
            .map(format_track)
            .collect())
    }

    /// Fetches an artist with followers, genres and popularity.
    ///
    /// # Errors
    ///
    /// [`Error::EntityNotFound`] when the artist does not exist, otherwise
    /// [`Error::Api`] ("Failed to fetch artist").
    pub async fn get_artist(&self, artist_id: &str) -> Result<Artist> {
        let data = self
            .fetch(ResourceKind::Artist, &[artist_id], &[], "Failed to fetch artist")
            .await?;
        Ok(format_artist(&data))
    }

    /// Fetches the most popular tracks of an artist in the given market
    /// (an ISO 3166-1 alpha-2 country code).
    ///
    /// A 404 is reported as [`Error::EntityNotFound`] for the artist, the same
    /// as [`SpotifyApi::get_artist`].
    ///
    /// # Errors
    ///
    /// [`Error::EntityNotFound`] for an unknown artist, otherwise
    /// [`Error::Api`] ("Failed to fetch artist top tracks").
    pub async fn get_artist_top_tracks(
        &self,
        artist_id: &str,
        market_code: &str,
    ) -> Result<Vec<Track>> {
        let message = "Failed to fetch artist top tracks";
        let data = self
            .fetch(
                ResourceKind::Artist,
                &[artist_id, "top-tracks"],
                &[("market", market_code)],
                message,
            )
            .await?;
        Ok(items(&data["tracks"], message)?
            .iter()
            .map(format_track)
            .collect())
    }

    /// Fetches a playlist and the tracks of its first page of items.
    ///
    /// # Errors
    ///
    /// [`Error::EntityNotFound`] when the playlist does not exist, otherwise
    /// [`Error::Api`] ("Failed to fetch playlist").
    pub async fn get_playlist(&self, playlist_id: &str) -> Result<Playlist> {
        let data = self
            .fetch(
                ResourceKind::Playlist,
                &[playlist_id],
                &[],
                "Failed to fetch playlist",
            )
            .await?;
        Ok(format_playlist(&data))
    }

    async fn fetch(
        &self,
        kind: ResourceKind,
        segments: &[&str],
        query: &[(&str, &str)],
        message: &str,
    ) -> Result<Value> {
        let mut path = vec![kind.endpoint()];
        path.extend_from_slice(segments);
        self.get(Some(kind), &path, query, message).await
    }

    async fn search(&self, query: &str, search_type: &str, message: &str) -> Result<Value> {
        self.get(
            None,
            &["search"],
            &[("q", query), ("type", search_type)],
            message,
        )
        .await
    }

    /// Issues one authenticated GET and returns the JSON document.
    ///
    /// `kind` is set for id-addressed resources only; it turns an upstream 404
    /// into [`Error::EntityNotFound`].
    async fn get(
        &self,
        kind: Option<ResourceKind>,
        path: &[&str],
        query: &[(&str, &str)],
        message: &str,
    ) -> Result<Value> {
        let url = self.endpoint(path).ok_or_else(|| {
            error!("invalid API url: {}", self.api_url);
            Error::api(message)
        })?;

        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .bearer_auth(self.access_token.as_str())
            .query(query)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| {
                error!("API request failed: {}", e);
                Error::classify(kind, message, e)
            })?;

        let data: Value = response.json().await.map_err(|e| {
            error!("API response is not valid JSON: {}", e);
            Error::api_from(message, e)
        })?;

        if !data.is_object() {
            error!("API response is not a JSON object");
            return Err(Error::api(message));
        }

        Ok(data)
    }

    /// Joins `path` onto the base URL, one segment per element, so ids are
    /// percent-encoded and cannot alter the route.
    fn endpoint(&self, path: &[&str]) -> Option<Url> {
        let mut url = Url::parse(&self.api_url).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(path);
        Some(url)
    }
}

fn items<'a>(value: &'a Value, message: &str) -> Result<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| {
        error!("API response is missing its item list");
        Error::api(message)
    })
}
