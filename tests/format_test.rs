use serde_json::json;
use spoxy::spotify::format::{format_album, format_artist, format_playlist, format_track};

#[test]
fn test_format_artist_with_only_id_and_name() {
    let artist = format_artist(&json!({ "id": "a1", "name": "X" }));

    assert_eq!(artist.artist_id.as_deref(), Some("a1"));
    assert_eq!(artist.name.as_deref(), Some("X"));
    assert_eq!(artist.image_url, None);
    assert_eq!(artist.genres, None);
    assert_eq!(artist.followers, None);
    assert_eq!(artist.popularity, None);
}

#[test]
fn test_format_artist_serializes_absent_fields_as_null() {
    let artist = format_artist(&json!({ "id": "a1", "name": "X" }));

    assert_eq!(
        serde_json::to_value(&artist).unwrap(),
        json!({
            "artistId": "a1",
            "followers": null,
            "genres": null,
            "imageUrl": null,
            "name": "X",
            "popularity": null
        })
    );
}

#[test]
fn test_format_artist_full() {
    let artist = format_artist(&json!({
        "id": "a2",
        "name": "Justice",
        "genres": ["french house", "electro"],
        "popularity": 65,
        "followers": { "href": null, "total": 2_500_000 },
        "images": [
            { "url": "https://img.example/large.jpg", "height": 640 },
            { "url": "https://img.example/small.jpg", "height": 160 }
        ]
    }));

    assert_eq!(
        artist.genres,
        Some(vec!["french house".to_string(), "electro".to_string()])
    );
    assert_eq!(artist.followers, Some(2_500_000));
    assert_eq!(artist.popularity, Some(65));
    assert_eq!(
        artist.image_url.as_deref(),
        Some("https://img.example/large.jpg")
    );
}

#[test]
fn test_format_artist_with_empty_images() {
    let artist = format_artist(&json!({ "id": "a1", "name": "X", "images": [] }));

    assert_eq!(artist.image_url, None);
}

#[test]
fn test_format_track_outside_album_context() {
    let track = format_track(&json!({
        "id": "t1",
        "name": "Veridis Quo",
        "duration_ms": 345_000,
        "popularity": 58,
        "preview_url": null,
        "artists": [{ "id": "art1", "name": "Daft Punk" }, { "id": "art2", "name": "Guest" }]
    }));

    assert_eq!(track.track_id.as_deref(), Some("t1"));
    assert_eq!(track.album_id, None);
    assert_eq!(track.duration_ms, Some(345_000));
    assert_eq!(track.popularity, Some(58));
    assert_eq!(track.preview_url, None);
    let artists: Vec<_> = track.artists.iter().map(|a| a.name.as_deref()).collect();
    assert_eq!(artists, vec![Some("Daft Punk"), Some("Guest")]);
}

#[test]
fn test_format_track_reads_parent_album_id() {
    let track = format_track(&json!({
        "id": "t1",
        "name": "Veridis Quo",
        "album": { "id": "alb1", "name": "Discovery" },
        "artists": []
    }));

    assert_eq!(track.album_id.as_deref(), Some("alb1"));
}

#[test]
fn test_format_track_without_artists() {
    let track = format_track(&json!({ "id": "t1" }));

    assert!(track.artists.is_empty());
    assert_eq!(track.name, None);
}

#[test]
fn test_format_album_embeds_artists_and_tracks() {
    let album = format_album(&json!({
        "id": "alb1",
        "name": "Discovery",
        "release_date": "2001-03-12",
        "genres": ["house"],
        "images": [{ "url": "https://img.example/cover.jpg" }],
        "artists": [{ "id": "art1", "name": "Daft Punk" }],
        "tracks": { "items": [
            { "id": "t1", "name": "One More Time", "duration_ms": 320_000, "artists": [] },
            { "id": "t2", "name": "Aerodynamic", "duration_ms": 212_000, "artists": [] }
        ] }
    }));

    assert_eq!(album.album_id.as_deref(), Some("alb1"));
    assert_eq!(album.genres, vec!["house".to_string()]);
    assert_eq!(
        album.image_url.as_deref(),
        Some("https://img.example/cover.jpg")
    );
    assert_eq!(album.artists[0].name.as_deref(), Some("Daft Punk"));
    let ids: Vec<_> = album.tracks.iter().map(|t| t.track_id.as_deref()).collect();
    assert_eq!(ids, vec![Some("t1"), Some("t2")]);
}

#[test]
fn test_format_album_from_search_result() {
    // search results carry neither track listings nor genres
    let album = format_album(&json!({
        "id": "alb2",
        "name": "Homework",
        "release_date": "1997",
        "artists": [{ "id": "art1", "name": "Daft Punk" }]
    }));

    assert!(album.tracks.is_empty());
    assert!(album.genres.is_empty());
    assert_eq!(album.image_url, None);
    assert_eq!(album.release_date.as_deref(), Some("1997"));
}

#[test]
fn test_format_playlist() {
    let playlist = format_playlist(&json!({
        "id": "pl1",
        "name": "Focus",
        "description": "Deep work",
        "public": false,
        "followers": { "total": 42 },
        "images": [{ "url": "https://img.example/pl.jpg" }],
        "owner": { "id": "user1" },
        "tracks": { "items": [
            { "track": { "id": "t1", "name": "Nightcall", "artists": [], "album": { "id": "alb9" } } },
            { "track": { "id": "t2", "name": "Genesis", "artists": [] } }
        ] }
    }));

    assert_eq!(playlist.playlist_id.as_deref(), Some("pl1"));
    assert_eq!(playlist.description.as_deref(), Some("Deep work"));
    assert_eq!(playlist.public, Some(false));
    assert_eq!(playlist.followers, Some(42));
    assert_eq!(playlist.owner.user_id.as_deref(), Some("user1"));
    assert_eq!(
        playlist.image_url.as_deref(),
        Some("https://img.example/pl.jpg")
    );
    assert_eq!(playlist.tracks.len(), 2);
    assert_eq!(playlist.tracks[0].album_id.as_deref(), Some("alb9"));
    assert_eq!(playlist.tracks[1].name.as_deref(), Some("Genesis"));
}

#[test]
fn test_format_playlist_without_optional_structures() {
    let playlist = format_playlist(&json!({ "id": "pl2", "name": "Bare" }));

    assert_eq!(playlist.followers, None);
    assert_eq!(playlist.image_url, None);
    assert_eq!(playlist.owner.user_id, None);
    assert_eq!(playlist.public, None);
    assert!(playlist.tracks.is_empty());
}

#[test]
fn test_format_playlist_keeps_unavailable_items() {
    let playlist = format_playlist(&json!({
        "id": "pl3",
        "tracks": { "items": [
            { "track": null },
            { "track": { "id": "t1", "name": "Still here", "artists": [] } }
        ] }
    }));

    assert_eq!(playlist.tracks.len(), 2);
    assert_eq!(playlist.tracks[0].track_id, None);
    assert_eq!(playlist.tracks[1].track_id.as_deref(), Some("t1"));
}

#[test]
fn test_formatters_are_pure() {
    let raw = json!({
        "id": "alb1",
        "name": "Discovery",
        "artists": [{ "id": "art1", "name": "Daft Punk", "images": [] }],
        "tracks": { "items": [{ "id": "t1", "name": "One More Time", "artists": [] }] }
    });

    assert_eq!(format_album(&raw), format_album(&raw));
    assert_eq!(format_track(&raw), format_track(&raw));
    assert_eq!(format_artist(&raw), format_artist(&raw));
    assert_eq!(format_playlist(&raw), format_playlist(&raw));
}

#[test]
fn test_formatters_tolerate_non_object_input() {
    let album = format_album(&json!("not an object"));
    assert_eq!(album.album_id, None);
    assert!(album.artists.is_empty());

    let track = format_track(&json!(null));
    assert_eq!(track.track_id, None);
}
