//! Integration tests for the request pipeline: authentication, URL building, bodies and error handling, against a
//! mock API server.

mod common;

use serde_json::json;
use tonearm::{
    client::{Param, ScopedClient, UnscopedClient},
    model::search::SearchType,
    Error,
};
use wiremock::{
    matchers::{body_json, body_string, header, method, path, query_param, query_param_is_missing},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn bearer_token_is_sent_with_every_request() {
    let (server, client) = common::server_and_client().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("authorization", "Bearer test-access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::private_user_json()))
        .expect(1)
        .mount(&server)
        .await;

    client.current_user_profile().await.unwrap();
}

#[tokio::test]
async fn query_parameters_keep_their_order() {
    let (server, client) = common::server_and_client().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artists": common::page_json("/search", vec![common::artist_json("artist1", "Sigur Rós")]),
        })))
        .mount(&server)
        .await;

    client
        .search(
            "sigur rós",
            &[SearchType::Artist, SearchType::Track],
            &[Param::limit(10), Param::market("FI")],
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some("q=sigur+r%C3%B3s&type=artist%2Ctrack&limit=10&market=FI")
    );
}

#[tokio::test]
async fn repeated_query_keys_stay_repeated() {
    let (server, client) = common::server_and_client().await;

    Mock::given(method("GET"))
        .and(path("/tracks/track1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::track_json("track1", "Tesoma")))
        .mount(&server)
        .await;

    client
        .track("track1", &[Param::custom("filter", "a"), Param::custom("filter", "b")])
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("filter=a&filter=b"));
}

#[tokio::test]
async fn id_lists_ride_in_the_endpoint_query() {
    let (server, client) = common::server_and_client().await;

    Mock::given(method("GET"))
        .and(path("/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tracks": [] })))
        .mount(&server)
        .await;

    client.tracks(&["id1", "id2", "id3"], &[Param::market("FI")]).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("ids=id1,id2,id3&market=FI"));
}

#[tokio::test]
async fn api_error_envelope_becomes_an_api_error() {
    let (server, client) = common::server_and_client().await;

    Mock::given(method("GET"))
        .and(path("/tracks/nonexistent"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": { "status": 404, "message": "non existing id" } })),
        )
        .mount(&server)
        .await;

    let err = client.track("nonexistent", &[]).await.unwrap_err();

    assert!(matches!(err, Error::Api { status: 404, message } if message == "non existing id"));
}

#[tokio::test]
async fn error_without_the_envelope_is_a_decode_error() {
    let (server, client) = common::server_and_client().await;

    Mock::given(method("GET"))
        .and(path("/tracks/track1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client.track("track1", &[]).await.unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn an_unparseable_success_body_is_a_decode_error() {
    let (server, client) = common::server_and_client().await;

    Mock::given(method("GET"))
        .and(path("/tracks/track1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("certainly not JSON"))
        .mount(&server)
        .await;

    let err = client.track("track1", &[]).await.unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn command_responses_are_not_parsed() {
    let (server, client) = common::server_and_client().await;

    Mock::given(method("PUT"))
        .and(path("/me/tracks"))
        .and(query_param("ids", "id1,id2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("certainly not JSON"))
        .mount(&server)
        .await;

    client.save_tracks(&["id1", "id2"]).await.unwrap();
}

#[tokio::test]
async fn no_content_means_nothing_is_playing() {
    let (server, client) = common::server_and_client().await;

    Mock::given(method("GET"))
        .and(path("/me/player"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let state = client.playback_state(&[]).await.unwrap();

    assert!(state.is_none());
}

#[tokio::test]
async fn empty_response_for_a_required_object_is_an_error() {
    let (server, client) = common::server_and_client().await;

    Mock::given(method("GET"))
        .and(path("/tracks/track1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = client.track("track1", &[]).await.unwrap_err();

    assert!(matches!(err, Error::EmptyResponse));
}

#[tokio::test]
async fn bodyless_commands_send_an_explicit_zero_content_length() {
    let (server, client) = common::server_and_client().await;

    Mock::given(method("POST"))
        .and(path("/me/player/next"))
        .and(header("content-length", "0"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.skip_to_next(None).await.unwrap();
}

#[tokio::test]
async fn json_bodies_are_sent_as_json() {
    let (server, client) = common::server_and_client().await;

    Mock::given(method("PUT"))
        .and(path("/me/player"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "device_ids": ["device1"], "play": true })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.transfer_playback("device1", true).await.unwrap();
}

#[tokio::test]
async fn cover_image_uploads_send_the_base64_jpeg() {
    let (server, client) = common::server_and_client().await;

    Mock::given(method("PUT"))
        .and(path("/playlists/playlist1/images"))
        .and(header("content-type", "image/jpeg"))
        .and(body_string("L2hvbWUvc29tZSBqcGVnIGRhdGE="))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    client
        .upload_playlist_cover_image("playlist1", "L2hvbWUvc29tZSBqcGVnIGRhdGE=".to_owned())
        .await
        .unwrap();
}

#[tokio::test]
async fn an_endpoint_call_sends_exactly_one_request() {
    let (server, client) = common::server_and_client().await;

    Mock::given(method("GET"))
        .and(path("/tracks/track1"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": { "status": 500, "message": "server error" } })),
        )
        .mount(&server)
        .await;

    let result = client.track("track1", &[]).await;

    assert!(result.is_err());
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn identical_calls_send_identical_requests() {
    let (server, client) = common::server_and_client().await;

    Mock::given(method("GET"))
        .and(path("/tracks/track1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::track_json("track1", "Tesoma")))
        .expect(2)
        .mount(&server)
        .await;

    let params = [Param::market("FI"), Param::custom("filter", "a")];
    client.track("track1", &params).await.unwrap();
    client.track("track1", &params).await.unwrap();

    let requests = server.received_requests().await.unwrap();

    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, requests[1].method);
    assert_eq!(requests[0].url, requests[1].url);
    assert_eq!(requests[0].body, requests[1].body);
    assert_eq!(
        requests[0].headers.get("authorization"),
        requests[1].headers.get("authorization")
    );
}

#[tokio::test]
async fn page_continuations_follow_the_absolute_next_url() {
    let (server, client) = common::server_and_client().await;

    let mut first_page = common::page_json("/me/playlists", vec![common::simplified_playlist_json("p1", "Road trip")]);
    first_page["next"] = json!(format!("{}/me/playlists?offset=1&limit=1", server.uri()));

    Mock::given(method("GET"))
        .and(path("/me/playlists"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(first_page))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/me/playlists"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::page_json(
            "/me/playlists?offset=1",
            vec![common::simplified_playlist_json("p2", "Quiet evenings")],
        )))
        .mount(&server)
        .await;

    let page = client.current_user_playlists(&[]).await.unwrap();
    let next_page = page.next_page(&client).await.unwrap().unwrap();

    assert_eq!(next_page.items[0].name, "Quiet evenings");
    assert!(next_page.next.is_none());
}
