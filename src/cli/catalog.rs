use tabled::Table;

use crate::{
    config::Config,
    info,
    types::{DetailTableRow, Track},
    utils::{format_duration, join_artist_names, or_dash, or_dash_num, track_rows},
    warning,
};

use super::{connect, print_json, run};

pub async fn album(config: &Config, album_id: &str, json: bool) {
    let api = connect(config).await;
    let album = run("Fetching album...", api.get_album(album_id)).await;

    if json {
        return print_json(&album);
    }

    print_details(vec![
        ("Name", or_dash(album.name.as_deref())),
        ("Artists", join_artist_names(&album.artists)),
        ("Release date", or_dash(album.release_date.as_deref())),
        ("Genres", join_or_dash(&album.genres)),
        ("Image", or_dash(album.image_url.as_deref())),
        ("Id", or_dash(album.album_id.as_deref())),
    ]);
    print_tracks(&album.tracks);
}

pub async fn track(config: &Config, track_id: &str, json: bool) {
    let api = connect(config).await;
    let track = run("Fetching track...", api.get_track(track_id)).await;

    if json {
        return print_json(&track);
    }

    print_details(vec![
        ("Name", or_dash(track.name.as_deref())),
        ("Artists", join_artist_names(&track.artists)),
        ("Duration", format_duration(track.duration_ms)),
        ("Popularity", or_dash_num(track.popularity)),
        ("Preview", or_dash(track.preview_url.as_deref())),
        ("Album id", or_dash(track.album_id.as_deref())),
        ("Id", or_dash(track.track_id.as_deref())),
    ]);
}

pub async fn artist(config: &Config, artist_id: &str, json: bool) {
    let api = connect(config).await;
    let artist = run("Fetching artist...", api.get_artist(artist_id)).await;

    if json {
        return print_json(&artist);
    }

    print_details(vec![
        ("Name", or_dash(artist.name.as_deref())),
        (
            "Genres",
            artist
                .genres
                .as_deref()
                .map_or_else(|| "-".to_string(), join_or_dash),
        ),
        ("Followers", or_dash_num(artist.followers)),
        ("Popularity", or_dash_num(artist.popularity)),
        ("Image", or_dash(artist.image_url.as_deref())),
        ("Id", or_dash(artist.artist_id.as_deref())),
    ]);
}

pub async fn top_tracks(config: &Config, artist_id: &str, market: &str, json: bool) {
    let api = connect(config).await;
    let tracks = run(
        "Fetching top tracks...",
        api.get_artist_top_tracks(artist_id, market),
    )
    .await;

    if json {
        return print_json(&tracks);
    }

    info!("Top tracks in market {}", market);
    print_tracks(&tracks);
}

pub async fn playlist(config: &Config, playlist_id: &str, json: bool) {
    let api = connect(config).await;
    let playlist = run("Fetching playlist...", api.get_playlist(playlist_id)).await;

    if json {
        return print_json(&playlist);
    }

    let visibility = match playlist.public {
        Some(true) => "public",
        Some(false) => "private",
        None => "-",
    };

    print_details(vec![
        ("Name", or_dash(playlist.name.as_deref())),
        ("Description", or_dash(playlist.description.as_deref())),
        ("Owner", or_dash(playlist.owner.user_id.as_deref())),
        ("Followers", or_dash_num(playlist.followers)),
        ("Visibility", visibility.to_string()),
        ("Image", or_dash(playlist.image_url.as_deref())),
        ("Id", or_dash(playlist.playlist_id.as_deref())),
    ]);
    print_tracks(&playlist.tracks);
}

fn print_details(rows: Vec<(&str, String)>) {
    let rows: Vec<DetailTableRow> = rows
        .into_iter()
        .map(|(field, value)| DetailTableRow {
            field: field.to_string(),
            value,
        })
        .collect();
    println!("{}", Table::new(rows));
}

fn print_tracks(tracks: &[Track]) {
    if tracks.is_empty() {
        return warning!("No tracks");
    }
    println!("{}", Table::new(track_rows(tracks)));
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}
