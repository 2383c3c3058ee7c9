// ABOUTME: Domain fixtures for integration tests
// ABOUTME: Game entries, credential pairs, and JSON bodies shaped like the backend's responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use gameshelf_client::models::{CredentialPair, GameEntry, GameEntryStatus, Rating};
use serde_json::{json, Value};
use std::collections::BTreeSet;

pub const TEST_USER_ID: i64 = 1;
pub const STALE_ACCESS: &str = "stale-access";
pub const FRESH_ACCESS: &str = "fresh-access";
pub const REFRESH_TOKEN: &str = "refresh-1";
pub const ROTATED_REFRESH: &str = "refresh-2";

pub fn stale_pair() -> CredentialPair {
    CredentialPair::new(STALE_ACCESS, REFRESH_TOKEN)
}

pub fn fresh_pair() -> CredentialPair {
    CredentialPair::new(FRESH_ACCESS, REFRESH_TOKEN)
}

pub fn refreshed_tokens_json() -> Value {
    json!({"access": FRESH_ACCESS, "refresh": ROTATED_REFRESH})
}

pub fn entry(id: i64, game_id: i64, status: GameEntryStatus) -> GameEntry {
    GameEntry {
        id,
        game_id,
        user_id: TEST_USER_ID,
        status,
        rating: None,
        platforms: BTreeSet::new(),
        review: None,
        game_name: None,
    }
}

pub fn rated_entry(id: i64, game_id: i64, rating: u8) -> GameEntry {
    GameEntry {
        rating: Rating::new(rating),
        platforms: ["PC".to_owned()].into_iter().collect(),
        review: Some("Loved it".to_owned()),
        ..entry(id, game_id, GameEntryStatus::Completed)
    }
}

pub fn entry_json(entry: &GameEntry) -> Value {
    serde_json::to_value(entry).unwrap()
}

pub fn entries_json(entries: &[GameEntry]) -> Value {
    Value::Array(entries.iter().map(entry_json).collect())
}

pub fn user_json() -> Value {
    json!({"id": TEST_USER_ID, "username": "player1", "email": "player1@example.com"})
}

pub fn statistics_json() -> Value {
    json!({
        "average_rating": 7.5,
        "game_status_distribution": {"1": 4, "3": 10},
        "game_genre_distribution": {"RPG": 8, "Puzzle": 2},
        "platform_distribution": {"PC": 9, "Switch": 5},
        "play_year_distribution": {"2023": 6, "2024": 8},
        "release_year_distribution": {"1998": 1, "2017": 13}
    })
}
