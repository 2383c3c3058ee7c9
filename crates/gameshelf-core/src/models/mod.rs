// ABOUTME: Core data models exchanged with the GameShelf REST API
// ABOUTME: Game entries, credential pairs, catalog games, users, and statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

/// Access/refresh token pair
pub mod credentials;
/// Catalog game metadata
pub mod game;
/// Library entries, statuses, ratings, list filters
pub mod game_entry;
/// Aggregate statistics for the current user
pub mod statistics;
/// User profile and authentication payloads
pub mod user;

pub use credentials::{CredentialPair, RefreshRequest, RefreshResponse};
pub use game::Game;
pub use game_entry::{EntryId, GameEntry, GameEntryQuery, GameEntryStatus, NewGameEntry, Rating};
pub use statistics::UserStatistics;
pub use user::{LoginRequest, RegisterRequest, User};
