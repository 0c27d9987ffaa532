//! Common test helpers shared across integration tests: a mock API server with a client pointed at it, and JSON
//! fixtures for the response objects.

#![allow(dead_code)]

use serde_json::{json, Value};
use tonearm::client::{AccessTokenClient, AccessTokenClientBuilder};
use wiremock::MockServer;

pub const ACCESS_TOKEN: &str = "test-access-token";

/// Start a mock API server and build a client that sends its requests there.
pub async fn server_and_client() -> (MockServer, AccessTokenClient) {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = MockServer::start().await;

    let client = AccessTokenClientBuilder::new(ACCESS_TOKEN)
        .api_base_url(server.uri())
        .build()
        .expect("failed to build a client for the mock server");

    (server, client)
}

pub fn simplified_artist_json(id: &str, name: &str) -> Value {
    json!({
        "href": format!("https://api.spotify.com/v1/artists/{id}"),
        "id": id,
        "name": name,
        "uri": format!("spotify:artist:{id}"),
    })
}

pub fn artist_json(id: &str, name: &str) -> Value {
    json!({
        "type": "artist",
        "followers": { "total": 1_000_000 },
        "genres": ["pop"],
        "href": format!("https://api.spotify.com/v1/artists/{id}"),
        "id": id,
        "images": [],
        "name": name,
        "popularity": 70,
        "uri": format!("spotify:artist:{id}"),
    })
}

pub fn track_json(id: &str, name: &str) -> Value {
    json!({
        "type": "track",
        "album": {
            "album_type": "album",
            "total_tracks": 9,
            "href": format!("https://api.spotify.com/v1/albums/{id}-album"),
            "id": format!("{id}-album"),
            "images": [],
            "name": "Askeleet",
            "release_date": "2021-04-16",
            "release_date_precision": "day",
            "uri": format!("spotify:album:{id}-album"),
            "artists": [simplified_artist_json("artist1", "Vesala")],
        },
        "artists": [simplified_artist_json("artist1", "Vesala")],
        "disc_number": 1,
        "duration_ms": 212_250,
        "explicit": false,
        "href": format!("https://api.spotify.com/v1/tracks/{id}"),
        "id": id,
        "name": name,
        "popularity": 64,
        "track_number": 3,
        "uri": format!("spotify:track:{id}"),
    })
}

pub fn simplified_track_json(id: &str, name: &str) -> Value {
    json!({
        "artists": [simplified_artist_json("artist1", "Vesala")],
        "disc_number": 1,
        "duration_ms": 198_000,
        "explicit": false,
        "href": format!("https://api.spotify.com/v1/tracks/{id}"),
        "id": id,
        "name": name,
        "track_number": 1,
        "uri": format!("spotify:track:{id}"),
    })
}

pub fn album_json(id: &str, name: &str) -> Value {
    json!({
        "album_type": "album",
        "total_tracks": 1,
        "href": format!("https://api.spotify.com/v1/albums/{id}"),
        "id": id,
        "images": [],
        "name": name,
        "release_date": "2021-04-16",
        "release_date_precision": "day",
        "uri": format!("spotify:album:{id}"),
        "artists": [simplified_artist_json("artist1", "Vesala")],
        "tracks": page_json(
            &format!("https://api.spotify.com/v1/albums/{id}/tracks"),
            vec![simplified_track_json("track1", "Askeleet")],
        ),
        "copyrights": [{ "text": "2021 Example Records", "type": "P" }],
        "label": "Example Records",
        "popularity": 60,
    })
}

pub fn episode_json(id: &str, name: &str) -> Value {
    json!({
        "type": "episode",
        "audio_preview_url": null,
        "description": "An episode about nothing in particular.",
        "duration_ms": 1_800_000,
        "explicit": false,
        "href": format!("https://api.spotify.com/v1/episodes/{id}"),
        "id": id,
        "images": [],
        "languages": ["en"],
        "name": name,
        "release_date": "2023-01-15",
        "release_date_precision": "day",
        "uri": format!("spotify:episode:{id}"),
        "show": {
            "description": "A show about many things.",
            "explicit": false,
            "href": "https://api.spotify.com/v1/shows/show1",
            "id": "show1",
            "images": [],
            "languages": ["en"],
            "media_type": "audio",
            "name": "Example Show",
            "publisher": "Example Publisher",
            "total_episodes": 100,
            "uri": "spotify:show:show1",
        },
    })
}

pub fn page_json(href: &str, items: Vec<Value>) -> Value {
    let total = items.len();

    json!({
        "href": href,
        "items": items,
        "limit": 20,
        "next": null,
        "offset": 0,
        "previous": null,
        "total": total,
    })
}

pub fn device_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "is_active": true,
        "is_private_session": false,
        "is_restricted": false,
        "name": name,
        "type": "computer",
        "volume_percent": 65,
        "supports_volume": true,
    })
}

pub fn playback_state_json(item: Value) -> Value {
    json!({
        "device": device_json("device1", "Living room computer"),
        "repeat_state": "off",
        "shuffle_state": false,
        "context": null,
        "timestamp": 1_700_000_000_000u64,
        "progress_ms": 44_000,
        "is_playing": true,
        "item": item,
        "currently_playing_type": "track",
        "actions": { "disallows": { "resuming": true } },
    })
}

pub fn currently_playing_json(item: Value, kind: &str) -> Value {
    json!({
        "context": null,
        "timestamp": 1_700_000_000_000u64,
        "progress_ms": 125_000,
        "is_playing": true,
        "item": item,
        "currently_playing_type": kind,
        "actions": { "disallows": {} },
    })
}

pub fn public_user_json(id: &str) -> Value {
    json!({
        "display_name": "Example User",
        "href": format!("https://api.spotify.com/v1/users/{id}"),
        "id": id,
        "uri": format!("spotify:user:{id}"),
    })
}

pub fn private_user_json() -> Value {
    json!({
        "country": "FI",
        "display_name": "Example User",
        "email": "user@example.com",
        "explicit_content": { "filter_enabled": false, "filter_locked": false },
        "followers": { "total": 7 },
        "href": "https://api.spotify.com/v1/users/user1",
        "id": "user1",
        "images": [],
        "product": "premium",
        "uri": "spotify:user:user1",
    })
}

pub fn playlist_item_json(item: Value) -> Value {
    json!({
        "added_at": "2023-06-01T12:00:00Z",
        "added_by": public_user_json("user1"),
        "is_local": false,
        "track": item,
    })
}

pub fn playlist_json(id: &str, name: &str, items: Vec<Value>) -> Value {
    json!({
        "collaborative": false,
        "description": "Songs for long drives.",
        "href": format!("https://api.spotify.com/v1/playlists/{id}"),
        "id": id,
        "images": [],
        "name": name,
        "owner": public_user_json("user1"),
        "public": true,
        "snapshot_id": "MSw4NDQ3ZDA4",
        "tracks": page_json(&format!("https://api.spotify.com/v1/playlists/{id}/tracks"), items),
        "uri": format!("spotify:playlist:{id}"),
    })
}

pub fn simplified_playlist_json(id: &str, name: &str) -> Value {
    json!({
        "collaborative": false,
        "description": "Songs for long drives.",
        "href": format!("https://api.spotify.com/v1/playlists/{id}"),
        "id": id,
        "images": [],
        "name": name,
        "owner": public_user_json("user1"),
        "public": true,
        "snapshot_id": "MSw4NDQ3ZDA4",
        "tracks": {
            "href": format!("https://api.spotify.com/v1/playlists/{id}/tracks"),
            "total": 3,
        },
        "uri": format!("spotify:playlist:{id}"),
    })
}
