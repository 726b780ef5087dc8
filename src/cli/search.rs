use clap::ValueEnum;
use tabled::Table;

use crate::{
    config::Config,
    utils::{album_rows, track_rows},
    warning,
};

use super::{connect, print_json, run};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchKind {
    Album,
    #[default]
    Track,
}

pub async fn search(config: &Config, query: &str, kind: SearchKind, json: bool) {
    let api = connect(config).await;

    match kind {
        SearchKind::Album => {
            let albums = run("Searching albums...", api.search_albums(query)).await;
            if json {
                return print_json(&albums);
            }
            if albums.is_empty() {
                return warning!("No albums found for \"{}\"", query);
            }
            println!("{}", Table::new(album_rows(&albums)));
        }
        SearchKind::Track => {
            let tracks = run("Searching tracks...", api.search_tracks(query)).await;
            if json {
                return print_json(&tracks);
            }
            if tracks.is_empty() {
                return warning!("No tracks found for \"{}\"", query);
            }
            println!("{}", Table::new(track_rows(&tracks)));
        }
    }
}
