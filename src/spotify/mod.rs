//! # Spotify Integration Module
//!
//! This module is the integration layer between spoxy and the Spotify Web API.
//! It acquires application tokens, performs catalog lookups and searches, and
//! reshapes the upstream JSON documents into the flat records in
//! [`crate::types`].
//!
//! ## Architecture
//!
//! ```text
//! Caller (CLI, library users)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials grant)
//!     ├── Catalog Client (albums, tracks, artists, playlists, search)
//!     └── Formatters (raw JSON → records)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 client-credentials grant. The client id
//! and secret are sent as a `Basic` authorization header and exchanged for a
//! short-lived [`BearerToken`](crate::types::BearerToken). Tokens are neither
//! cached nor refreshed; request a new one when it expires.
//!
//! ### Catalog Client Module
//!
//! [`client`] - [`SpotifyApi`] holds a bearer token and exposes one method per
//! resource kind. Each method issues a single GET request and formats the body.
//!
//! ### Formatter Module
//!
//! [`format`] - Pure functions that never fail on missing optional data.
//! Album formatting embeds artist and track formatting; playlist formatting
//! embeds track formatting.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client-credentials token exchange
//! - `GET /albums/{id}` - Album with artists and track listing
//! - `GET /tracks/{id}` - Single track
//! - `GET /artists/{id}` - Single artist
//! - `GET /artists/{id}/top-tracks?market=` - Top tracks of an artist
//! - `GET /playlists/{id}` - Playlist with its tracks
//! - `GET /search?q=&type=album|track` - First page of album or track results
//!
//! ## Error Handling
//!
//! All functions return [`crate::Result`]:
//! - **`Error::EntityNotFound`** - an id-addressed lookup answered 404
//! - **`Error::Api`** - transport failure, any other error status, or a body
//!   that is not the expected JSON document
//!
//! Nothing is retried. Rate limiting, pagination beyond the first page and
//! token refresh are left to the caller.

pub mod auth;
pub mod client;
pub mod format;

pub use auth::{get_access_token, request_access_token};
pub use client::SpotifyApi;
