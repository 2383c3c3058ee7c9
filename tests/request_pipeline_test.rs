// ABOUTME: Integration tests for the authenticated request pipeline
// ABOUTME: Covers bearer attachment, public endpoint exemption, and error classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use anyhow::Result;
use gameshelf_client::constants::endpoints::{
    game_path, GAME_ENTRIES_PATH, LOGIN_PATH, REFRESH_PATH, REGISTER_PATH, SELF_USER_PATH,
};
use gameshelf_client::credentials::CredentialStore;
use gameshelf_client::errors::{ApiError, ErrorKind};
use gameshelf_client::http::ApiRequest;
use gameshelf_client::models::{Game, GameEntryQuery, User};
use helpers::fixtures::{stale_pair, user_json, STALE_ACCESS};
use helpers::mock_transport::{MockReply, MockTransport};
use http::header::AUTHORIZATION;
use http::{HeaderValue, Method};
use serde_json::json;

#[tokio::test]
async fn test_bearer_attached_to_protected_endpoint() -> Result<()> {
    let transport = MockTransport::new(|_| MockReply::ok(user_json()));
    let pipeline = common::pipeline(transport.clone(), common::credentials(Some(stale_pair())));

    let user: User = pipeline.fetch_json(ApiRequest::get(SELF_USER_PATH)).await?;

    assert_eq!(user.username, "player1");
    let sent = transport.last(SELF_USER_PATH).unwrap();
    assert!(sent.has_bearer(STALE_ACCESS));
    assert_eq!(sent.method, Method::GET);
    assert_eq!(sent.url.as_str(), "http://gameshelf.test/api/users/self/");
    Ok(())
}

#[tokio::test]
async fn test_public_endpoints_never_carry_bearer() -> Result<()> {
    let transport = MockTransport::new(|request| match request.path.as_str() {
        REGISTER_PATH => MockReply::json(201, user_json()),
        _ => MockReply::ok(json!({"access": "a", "refresh": "r"})),
    });
    let pipeline = common::pipeline(transport.clone(), common::credentials(Some(stale_pair())));

    pipeline
        .send_discarding_body(ApiRequest::post(LOGIN_PATH).json(&json!({"email": "e", "password": "p"}))?)
        .await?;
    pipeline
        .send_discarding_body(ApiRequest::post(REGISTER_PATH).json(&json!({"email": "e"}))?)
        .await?;
    pipeline
        .send_discarding_body(ApiRequest::post(REFRESH_PATH).json(&json!({"refresh": "r"}))?)
        .await?;

    let requests = transport.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|request| request.authorization.is_none()));
    Ok(())
}

#[tokio::test]
async fn test_caller_authorization_header_is_kept() -> Result<()> {
    let transport = MockTransport::new(|_| MockReply::ok(user_json()));
    let pipeline = common::pipeline(transport.clone(), common::credentials(Some(stale_pair())));

    let request = ApiRequest::get(SELF_USER_PATH)
        .with_header(AUTHORIZATION, HeaderValue::from_static("Bearer caller-token"));
    pipeline.send_discarding_body(request).await?;

    assert!(transport.last(SELF_USER_PATH).unwrap().has_bearer("caller-token"));
    Ok(())
}

#[tokio::test]
async fn test_no_credentials_sends_no_header() -> Result<()> {
    let transport = MockTransport::new(|_| {
        MockReply::ok(json!({"id": 7, "name": "Outer Wilds", "platforms": ["PC"], "genres": []}))
    });
    let pipeline = common::pipeline(transport.clone(), common::credentials(None));

    let game: Game = pipeline.fetch_json(ApiRequest::get(game_path(7))).await?;

    assert_eq!(game.name, "Outer Wilds");
    assert!(transport.last(&game_path(7)).unwrap().authorization.is_none());
    Ok(())
}

#[tokio::test]
async fn test_every_request_gets_a_distinct_request_id() -> Result<()> {
    let transport = MockTransport::new(|_| MockReply::ok(json!([])));
    let pipeline = common::pipeline(transport.clone(), common::credentials(Some(stale_pair())));

    pipeline.send_discarding_body(ApiRequest::get(GAME_ENTRIES_PATH)).await?;
    pipeline.send_discarding_body(ApiRequest::get(GAME_ENTRIES_PATH)).await?;

    let ids: Vec<String> = transport
        .requests()
        .into_iter()
        .map(|request| request.request_id.unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
    Ok(())
}

#[tokio::test]
async fn test_query_filters_are_sent() -> Result<()> {
    let transport = MockTransport::new(|_| MockReply::ok(json!([])));
    let pipeline = common::pipeline(transport.clone(), common::credentials(Some(stale_pair())));

    let query = GameEntryQuery {
        game_id: Some(42),
        ..GameEntryQuery::for_user(1)
    };
    pipeline
        .send_discarding_body(ApiRequest::get(GAME_ENTRIES_PATH).with_query(query.to_query_pairs()))
        .await?;

    let url = transport.last(GAME_ENTRIES_PATH).unwrap().url;
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert!(pairs.contains(&("user_id".to_owned(), "1".to_owned())));
    assert!(pairs.contains(&("game_id".to_owned(), "42".to_owned())));
    Ok(())
}

#[tokio::test]
async fn test_network_failure_is_classified_without_retry() {
    let transport = MockTransport::new(|_| MockReply::network_failure("connection refused"));
    let pipeline = common::pipeline(transport.clone(), common::credentials(Some(stale_pair())));

    let error = pipeline
        .send_discarding_body(ApiRequest::get(SELF_USER_PATH))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Network);
    assert!(error.to_string().contains("connection refused"));
    assert_eq!(transport.count(SELF_USER_PATH), 1);
    assert_eq!(transport.count(REFRESH_PATH), 0);
}

#[tokio::test]
async fn test_validation_error_carries_server_detail() {
    let transport = MockTransport::new(|_| {
        MockReply::json(400, json!({"rating": ["Ensure this value is less than or equal to 10."]}))
    });
    let pipeline = common::pipeline(transport, common::credentials(Some(stale_pair())));

    let error = pipeline
        .send_discarding_body(ApiRequest::post(GAME_ENTRIES_PATH).json(&json!({"rating": 11})).unwrap())
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(error.http_status(), Some(400));
    assert!(error.detail().unwrap()["rating"].is_array());
}

#[tokio::test]
async fn test_not_found_is_validation_and_server_failure_is_server() {
    let transport = MockTransport::new(|request| {
        if request.path == game_path(404) {
            MockReply::json(404, json!({"detail": "Not found."}))
        } else {
            MockReply::json(503, json!({"detail": "maintenance"}))
        }
    });
    let pipeline = common::pipeline(transport, common::credentials(Some(stale_pair())));

    let missing = pipeline
        .send_discarding_body(ApiRequest::get(game_path(404)))
        .await
        .unwrap_err();
    let unavailable = pipeline
        .send_discarding_body(ApiRequest::get(game_path(1)))
        .await
        .unwrap_err();

    assert!(matches!(missing, ApiError::Validation { status: 404, .. }));
    assert!(matches!(unavailable, ApiError::Server { status: 503, .. }));
    assert_eq!(unavailable.kind(), ErrorKind::Server);
}

#[tokio::test]
async fn test_unauthorized_public_endpoint_does_not_refresh() {
    let transport = MockTransport::new(|_| {
        MockReply::json(401, json!({"detail": "No active account found with the given credentials"}))
    });
    let pipeline = common::pipeline(transport.clone(), common::credentials(Some(stale_pair())));

    let error = pipeline
        .send_discarding_body(ApiRequest::post(LOGIN_PATH).json(&json!({"email": "e", "password": "x"})).unwrap())
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Unauthorized { ref path } if path == LOGIN_PATH));
    assert_eq!(transport.count(REFRESH_PATH), 0);
}

#[tokio::test]
async fn test_unauthorized_caller_header_does_not_refresh() {
    let transport = MockTransport::new(|_| MockReply::unauthorized());
    let pipeline = common::pipeline(transport.clone(), common::credentials(Some(stale_pair())));

    let request = ApiRequest::get(SELF_USER_PATH)
        .with_header(AUTHORIZATION, HeaderValue::from_static("Bearer someone-else"));
    let error = pipeline.send_discarding_body(request).await.unwrap_err();

    assert!(matches!(error, ApiError::Unauthorized { .. }));
    assert_eq!(transport.count(REFRESH_PATH), 0);
    assert!(pipeline.credentials().get().await.unwrap().is_some());
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let transport = MockTransport::new(|_| MockReply::ok(json!({"unexpected": true})));
    let pipeline = common::pipeline(transport, common::credentials(Some(stale_pair())));

    let error = pipeline
        .fetch_json::<User>(ApiRequest::get(SELF_USER_PATH))
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Decode { .. }));
    assert_eq!(error.kind(), ErrorKind::Internal);
}
