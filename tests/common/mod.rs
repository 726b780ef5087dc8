// Local stand-in for the Spotify accounts and catalog services.

#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::Router;
use serde_json::{Value, json};
use spoxy::{config::Config, spotify::SpotifyApi, types::BearerToken};

pub const TEST_TOKEN: &str = "test-token";

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on.
pub async fn closed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn config(base_url: &str) -> Config {
    Config::new("my-client", "my-secret")
        .with_api_url(format!("{}/v1", base_url))
        .with_token_url(format!("{}/api/token", base_url))
}

pub fn api(base_url: &str) -> SpotifyApi {
    SpotifyApi::with_config(BearerToken::new(TEST_TOKEN), &config(base_url))
}

#[derive(Clone, Default)]
pub struct Hits(Arc<AtomicUsize>);

impl Hits {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub fn artist_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "genres": ["electronic"],
        "popularity": 70,
        "followers": { "href": null, "total": 1200 },
        "images": [{ "url": format!("https://img.example/{}.jpg", id), "height": 640, "width": 640 }]
    })
}

/// A track as nested inside albums: no parent album object.
pub fn simple_track_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "duration_ms": 215000,
        "preview_url": null,
        "artists": [{ "id": "art1", "name": "Daft Punk" }]
    })
}

pub fn track_json(id: &str, name: &str) -> Value {
    let mut track = simple_track_json(id, name);
    track["popularity"] = json!(64);
    track["preview_url"] = json!(format!("https://p.example/{}.mp3", id));
    track["album"] = json!({ "id": "alb1", "name": "Discovery" });
    track
}

pub fn album_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "release_date": "2001-03-12",
        "genres": [],
        "images": [{ "url": "https://img.example/cover.jpg" }],
        "artists": [{ "id": "art1", "name": "Daft Punk" }],
        "tracks": {
            "items": [
                simple_track_json("t1", "One More Time"),
                simple_track_json("t2", "Aerodynamic")
            ]
        }
    })
}
