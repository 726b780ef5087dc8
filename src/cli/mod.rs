//! # CLI Module
//!
//! User-facing commands of the `spoxy` binary. Every command resolves the
//! configuration, requests an application token, runs one catalog operation
//! and prints the result either as tables or, with `--json`, as the formatted
//! record in JSON.
//!
//! ## Commands
//!
//! - [`token`] - Validates the credentials by requesting an access token
//! - [`album`], [`track`], [`artist`], [`playlist`] - Lookups by id
//! - [`top_tracks`] - Most popular tracks of an artist in a market
//! - [`search`] - Album or track search
//!
//! ## Error Handling
//!
//! Failures are fatal for the command: they are printed with the `error!`
//! macro, which exits with status 1. A missing resource prints
//! `"<Kind> not found"`.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::{
    config::Config,
    error,
    spotify::{self, SpotifyApi},
    utils::describe_error,
};

mod auth;
mod catalog;
mod search;

pub use auth::token;
pub use catalog::{album, artist, playlist, top_tracks, track};
pub use search::{SearchKind, search};

/// Requests a token and builds the catalog client, exiting on failure.
async fn connect(config: &Config) -> SpotifyApi {
    let pb = spinner("Requesting access token...");
    let token = spotify::request_access_token(config).await;
    pb.finish_and_clear();

    match token {
        Ok(token) => SpotifyApi::with_config(token, config),
        Err(e) => error!("{}", describe_error(&e)),
    }
}

/// Awaits `operation` behind a spinner and unwraps its result, exiting on failure.
async fn run<T>(message: &str, operation: impl Future<Output = crate::Result<T>>) -> T {
    let pb = spinner(message);
    let result = operation.await;
    pb.finish_and_clear();

    match result {
        Ok(value) => value,
        Err(e) => error!("{}", describe_error(&e)),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Cannot serialize output. Err: {}", e),
    }
}
