// ABOUTME: Integration tests for asynchronous action handlers and the store they report to
// ABOUTME: Lifecycle event order, cache effects per action, rejection handling, and session resets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use anyhow::Result;
use gameshelf_client::constants::endpoints::{
    game_entry_path, GAME_ENTRIES_PATH, LOGIN_PATH, REFRESH_PATH, REGISTER_PATH,
    SELF_STATISTICS_PATH, SELF_USER_PATH,
};
use gameshelf_client::credentials::CredentialStore;
use gameshelf_client::errors::{ApiError, ErrorKind};
use gameshelf_client::models::{
    GameEntryQuery, GameEntryStatus, LoginRequest, NewGameEntry, RegisterRequest,
};
use gameshelf_client::store::{ActionEvent, ActionKind};
use helpers::fixtures::{
    entries_json, entry, entry_json, fresh_pair, rated_entry, refreshed_tokens_json, stale_pair,
    statistics_json, user_json, FRESH_ACCESS, ROTATED_REFRESH, TEST_USER_ID,
};
use helpers::mock_transport::{MockReply, MockTransport};
use http::Method;
use serde_json::json;
use std::time::Duration;

fn library() -> Vec<gameshelf_client::models::GameEntry> {
    vec![
        entry(1, 10, GameEntryStatus::Backlog),
        rated_entry(2, 20, 8),
        entry(3, 30, GameEntryStatus::Playing),
    ]
}

#[tokio::test]
async fn test_requested_is_emitted_before_the_future_is_polled() -> Result<()> {
    let transport = MockTransport::new(|_| MockReply::ok(entries_json(&library())));
    let actions = common::actions(transport.clone(), common::credentials(Some(fresh_pair())));
    let mut events = actions.store().subscribe_events();

    let pending = actions.fetch_game_entries(GameEntryQuery::default());

    let requested = events.recv().await?;
    assert!(matches!(
        requested,
        ActionEvent::Requested { kind: ActionKind::FetchEntries, .. }
    ));
    assert!(actions.store().snapshot().is_loading(ActionKind::FetchEntries));
    assert!(transport.requests().is_empty());

    let entries = pending.await?;
    assert_eq!(entries.len(), 3);

    let settled = events.recv().await?;
    assert_eq!(settled.phase(), "fulfilled");
    assert_eq!(settled.seq(), requested.seq());
    assert!(!actions.store().snapshot().is_loading(ActionKind::FetchEntries));
    Ok(())
}

#[tokio::test]
async fn test_fetch_replaces_cache_with_result() -> Result<()> {
    let transport = MockTransport::new(|_| MockReply::ok(entries_json(&library()[1..])));
    let actions = common::actions(transport, common::credentials(Some(fresh_pair())));

    actions.fetch_game_entries(GameEntryQuery::default()).await?;

    let snapshot = actions.store().snapshot();
    assert_eq!(snapshot.entries.ids(), vec![2, 3]);
    Ok(())
}

#[tokio::test]
async fn test_fetch_accepts_paginated_envelope() -> Result<()> {
    let transport = MockTransport::new(|_| {
        MockReply::ok(json!({"count": 3, "next": null, "results": entries_json(&library())}))
    });
    let actions = common::actions(transport, common::credentials(Some(fresh_pair())));

    let entries = actions.fetch_game_entries(GameEntryQuery::for_user(TEST_USER_ID)).await?;

    assert_eq!(entries.len(), 3);
    assert_eq!(actions.store().snapshot().entries.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_create_caches_server_copy_under_new_id() -> Result<()> {
    let transport = MockTransport::new(|request| {
        let mut created = request.body.clone().unwrap();
        created["id"] = json!(77);
        MockReply::json(201, created)
    });
    let actions = common::actions(transport.clone(), common::credentials(Some(fresh_pair())));

    let created = actions
        .create_game_entry(NewGameEntry::new(40, TEST_USER_ID, GameEntryStatus::Wishlist))
        .await?;

    assert_eq!(created.id, 77);
    assert_eq!(actions.store().snapshot().entries.get(77), Some(&created));
    assert_eq!(transport.last(GAME_ENTRIES_PATH).unwrap().method, Method::POST);
    Ok(())
}

#[tokio::test]
async fn test_update_caches_submitted_value_not_response() -> Result<()> {
    let transport = MockTransport::new(|request| {
        if request.method == Method::PUT {
            // Server echoes something different from what was sent
            MockReply::ok(entry_json(&entry(2, 20, GameEntryStatus::Dropped)))
        } else {
            MockReply::ok(entries_json(&library()))
        }
    });
    let actions = common::actions(transport.clone(), common::credentials(Some(fresh_pair())));
    actions.fetch_game_entries(GameEntryQuery::default()).await?;

    let mut edited = rated_entry(2, 20, 10);
    edited.review = Some("Even better the second time".to_owned());
    let returned = actions.update_game_entry(edited.clone()).await?;

    assert_eq!(returned, edited);
    assert_eq!(actions.store().snapshot().entries.get(2), Some(&edited));
    let sent = transport.last(&game_entry_path(2)).unwrap();
    assert_eq!(sent.body, Some(entry_json(&edited)));
    Ok(())
}

#[tokio::test]
async fn test_delete_evicts_entry() -> Result<()> {
    let transport = MockTransport::new(|request| {
        if request.method == Method::DELETE {
            MockReply::no_content()
        } else {
            MockReply::ok(entries_json(&library()))
        }
    });
    let actions = common::actions(transport, common::credentials(Some(fresh_pair())));
    actions.fetch_game_entries(GameEntryQuery::default()).await?;

    actions.delete_game_entry(1).await?;

    assert_eq!(actions.store().snapshot().entries.ids(), vec![2, 3]);
    Ok(())
}

#[tokio::test]
async fn test_rejection_reaches_caller_and_leaves_cache_untouched() -> Result<()> {
    let transport = MockTransport::new(|request| {
        if request.method == Method::DELETE {
            MockReply::json(404, json!({"detail": "Not found."}))
        } else {
            MockReply::ok(entries_json(&library()))
        }
    });
    let actions = common::actions(transport, common::credentials(Some(fresh_pair())));
    actions.fetch_game_entries(GameEntryQuery::default()).await?;
    let before = actions.store().snapshot();

    let error = actions.delete_game_entry(99).await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Validation);
    let after = actions.store().snapshot();
    assert_eq!(after.entries, before.entries);
    let failure = after.last_failure.as_ref().unwrap();
    assert_eq!(failure.kind, ActionKind::DeleteEntry);
    assert_eq!(failure.error.http_status(), Some(404));
    assert!(after.pending.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_slow_list_does_not_resurrect_deleted_entry() -> Result<()> {
    let transport = MockTransport::new(|request| {
        if request.method == Method::DELETE {
            MockReply::no_content()
        } else {
            MockReply::ok(entries_json(&library())).after(Duration::from_millis(100))
        }
    });
    let actions = common::actions(transport, common::credentials(Some(fresh_pair())));

    // Issued in this order: list first, delete second
    let list = actions.fetch_game_entries(GameEntryQuery::default());
    let delete = actions.delete_game_entry(3);
    let (listed, deleted) = tokio::join!(list, delete);

    // The list result itself still includes the entry as the server saw it
    assert_eq!(listed?.len(), 3);
    deleted?;
    assert_eq!(actions.store().snapshot().entries.ids(), vec![1, 2]);
    Ok(())
}

#[tokio::test]
async fn test_statistics_are_loaded_into_store() -> Result<()> {
    let transport = MockTransport::new(|_| MockReply::ok(statistics_json()));
    let actions = common::actions(transport.clone(), common::credentials(Some(fresh_pair())));

    let statistics = actions.fetch_self_statistics().await?;

    assert_eq!(statistics.status_count(GameEntryStatus::Completed), 10);
    assert_eq!(statistics.status_count(GameEntryStatus::Dropped), 0);
    assert_eq!(statistics.platform_count("Switch"), 5);
    assert_eq!(actions.store().snapshot().statistics, Some(statistics));
    assert_eq!(transport.count(SELF_STATISTICS_PATH), 1);
    Ok(())
}

#[tokio::test]
async fn test_register_logs_in_with_same_credentials() -> Result<()> {
    let transport = MockTransport::new(|request| match request.path.as_str() {
        REGISTER_PATH => MockReply::json(201, user_json()),
        LOGIN_PATH => MockReply::ok(json!({"access": FRESH_ACCESS, "refresh": ROTATED_REFRESH})),
        _ => MockReply::unauthorized(),
    });
    let actions = common::actions(transport.clone(), common::credentials(None));

    let user = actions
        .register(RegisterRequest {
            email: "player1@example.com".to_owned(),
            username: "player1".to_owned(),
            password: "hunter22".to_owned(),
        })
        .await?;

    assert_eq!(user.id, TEST_USER_ID);
    let login_body = transport.last(LOGIN_PATH).unwrap().body.unwrap();
    assert_eq!(login_body["email"], "player1@example.com");
    assert_eq!(login_body["password"], "hunter22");
    let stored = actions.api().credentials().get().await?.unwrap();
    assert_eq!(stored.access, FRESH_ACCESS);
    assert_eq!(actions.store().snapshot().user_id(), Some(TEST_USER_ID));
    Ok(())
}

#[tokio::test]
async fn test_failed_login_stores_nothing() {
    let transport = MockTransport::new(|_| {
        MockReply::json(401, json!({"detail": "No active account found with the given credentials"}))
    });
    let actions = common::actions(transport, common::credentials(None));

    let error = actions
        .login(LoginRequest {
            email: "player1@example.com".to_owned(),
            password: "wrong".to_owned(),
        })
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Unauthorized { .. }));
    assert!(actions.api().credentials().get().await.unwrap().is_none());
    assert!(!actions.store().snapshot().session_expired);
}

#[tokio::test]
async fn test_logout_clears_credentials_and_session_data() -> Result<()> {
    let transport = MockTransport::new(|request| match request.path.as_str() {
        SELF_USER_PATH => MockReply::ok(user_json()),
        _ => MockReply::ok(entries_json(&library())),
    });
    let actions = common::actions(transport, common::credentials(Some(fresh_pair())));
    actions.fetch_self_user().await?;
    actions.fetch_game_entries(GameEntryQuery::default()).await?;

    actions.logout().await?;

    let snapshot = actions.store().snapshot();
    assert!(snapshot.entries.is_empty());
    assert!(snapshot.user.is_none());
    assert!(actions.api().credentials().get().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_slow_results_do_not_repopulate_store_after_logout() -> Result<()> {
    let transport = MockTransport::new(|request| match request.path.as_str() {
        SELF_USER_PATH => MockReply::ok(user_json()).after(Duration::from_millis(100)),
        SELF_STATISTICS_PATH => MockReply::ok(statistics_json()).after(Duration::from_millis(100)),
        _ => MockReply::ok(entries_json(&library())).after(Duration::from_millis(100)),
    });
    let actions = common::actions(transport, common::credentials(Some(fresh_pair())));

    let entries = tokio::spawn(actions.fetch_game_entries(GameEntryQuery::default()));
    let user = tokio::spawn(actions.fetch_self_user());
    let statistics = tokio::spawn(actions.fetch_self_statistics());
    actions.logout().await?;

    // The callers still get their results
    assert_eq!(entries.await??.len(), 3);
    assert_eq!(user.await??.id, TEST_USER_ID);
    statistics.await??;

    let snapshot = actions.store().snapshot();
    assert!(snapshot.entries.is_empty());
    assert!(snapshot.user.is_none());
    assert!(snapshot.statistics.is_none());
    assert!(snapshot.pending.is_empty());

    // A fetch issued after logout is applied normally
    actions.fetch_game_entries(GameEntryQuery::default()).await?;
    assert_eq!(actions.store().snapshot().entries.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_expired_session_resets_store() -> Result<()> {
    let transport = MockTransport::new(|request| {
        if request.path == REFRESH_PATH {
            MockReply::json(401, json!({"detail": "Token is blacklisted"}))
        } else if request.has_bearer(FRESH_ACCESS) {
            MockReply::ok(entries_json(&library()))
        } else {
            MockReply::unauthorized()
        }
    });
    let credentials = common::credentials(Some(fresh_pair()));
    let actions = common::actions(transport, credentials.clone());
    actions.fetch_game_entries(GameEntryQuery::default()).await?;

    // The access token is now rejected and the refresh token is dead
    credentials.set(stale_pair()).await?;
    let error = actions.fetch_self_statistics().await.unwrap_err();

    assert!(error.requires_login());
    let snapshot = actions.store().snapshot();
    assert!(snapshot.session_expired);
    assert!(snapshot.entries.is_empty());
    assert_eq!(snapshot.last_failure.as_ref().unwrap().kind, ActionKind::FetchStatistics);
    Ok(())
}

#[tokio::test]
async fn test_refresh_is_transparent_to_actions() -> Result<()> {
    let transport = MockTransport::new(|request| {
        if request.path == REFRESH_PATH {
            MockReply::ok(refreshed_tokens_json())
        } else if request.has_bearer(FRESH_ACCESS) {
            MockReply::ok(entries_json(&library()))
        } else {
            MockReply::unauthorized()
        }
    });
    let actions = common::actions(transport.clone(), common::credentials(Some(stale_pair())));
    let mut events = actions.store().subscribe_events();

    actions.fetch_game_entries(GameEntryQuery::default()).await?;

    assert_eq!(transport.count(REFRESH_PATH), 1);
    assert_eq!(events.recv().await?.phase(), "requested");
    assert_eq!(events.recv().await?.phase(), "fulfilled");
    assert!(events.try_recv().is_err());
    Ok(())
}

#[tokio::test]
async fn test_subscribers_see_each_applied_event() -> Result<()> {
    let transport = MockTransport::new(|_| MockReply::ok(user_json()));
    let actions = common::actions(transport, common::credentials(Some(fresh_pair())));
    let mut snapshots = actions.store().subscribe();
    let start = snapshots.borrow_and_update().revision;

    actions.fetch_self_user().await?;

    snapshots.changed().await?;
    let latest = snapshots.borrow_and_update().clone();
    assert_eq!(latest.revision, start + 2);
    assert_eq!(latest.user.as_ref().unwrap().username, "player1");
    Ok(())
}
