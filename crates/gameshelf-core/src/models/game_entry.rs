// ABOUTME: Game library entry model with play status, rating, platforms, and review
// ABOUTME: Includes the create payload and the list filter query used by the entries endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::constants::limits::MAX_RATING;

/// Server-assigned identity of a game entry
pub type EntryId = i64;

/// Where a game sits in the user's library.
///
/// Serialized as the integer code the server uses (`0..=4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GameEntryStatus {
    /// Wants to play eventually
    Wishlist,
    /// Owned but not started
    Backlog,
    /// Currently playing
    Playing,
    /// Finished
    Completed,
    /// Abandoned
    Dropped,
}

impl GameEntryStatus {
    /// Every status in server code order
    pub const ALL: [Self; 5] = [
        Self::Wishlist,
        Self::Backlog,
        Self::Playing,
        Self::Completed,
        Self::Dropped,
    ];

    /// Upper-case name as used by the API documentation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wishlist => "WISHLIST",
            Self::Backlog => "BACKLOG",
            Self::Playing => "PLAYING",
            Self::Completed => "COMPLETED",
            Self::Dropped => "DROPPED",
        }
    }

    /// Parse a status from its name, case-insensitively
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(name))
    }
}

impl From<GameEntryStatus> for u8 {
    fn from(status: GameEntryStatus) -> Self {
        match status {
            GameEntryStatus::Wishlist => 0,
            GameEntryStatus::Backlog => 1,
            GameEntryStatus::Playing => 2,
            GameEntryStatus::Completed => 3,
            GameEntryStatus::Dropped => 4,
        }
    }
}

impl TryFrom<u8> for GameEntryStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| format!("unknown game entry status code {value}"))
    }
}

impl fmt::Display for GameEntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Rating between 0 and 10 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Create a rating, rejecting values above 10
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= MAX_RATING {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw rating value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("rating {value} exceeds {MAX_RATING}"))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{MAX_RATING}", self.0)
    }
}

/// One game in the user's library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    /// Server-assigned identity (cache key)
    pub id: EntryId,
    /// Catalog game this entry refers to
    pub game_id: i64,
    /// Owner of the entry
    pub user_id: i64,
    /// Play status
    pub status: GameEntryStatus,
    /// Optional 0-10 rating
    #[serde(default)]
    pub rating: Option<Rating>,
    /// Platforms the game is played on
    #[serde(default, deserialize_with = "null_as_empty")]
    pub platforms: BTreeSet<String>,
    /// Optional free-text review
    #[serde(default)]
    pub review: Option<String>,
    /// Display name of the catalog game, when the server includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
}

impl GameEntry {
    /// Whether the entry is played on the given platform
    #[must_use]
    pub fn is_on_platform(&self, platform: &str) -> bool {
        self.platforms.contains(platform)
    }
}

/// Payload for creating an entry: a `GameEntry` without the server-assigned id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGameEntry {
    /// Catalog game to add
    pub game_id: i64,
    /// Owner of the entry
    pub user_id: i64,
    /// Initial play status
    pub status: GameEntryStatus,
    /// Optional 0-10 rating
    #[serde(default)]
    pub rating: Option<Rating>,
    /// Platforms the game is played on
    #[serde(default, deserialize_with = "null_as_empty")]
    pub platforms: BTreeSet<String>,
    /// Optional review
    #[serde(default)]
    pub review: Option<String>,
}

impl NewGameEntry {
    /// Start a new entry with only the required fields
    #[must_use]
    pub const fn new(game_id: i64, user_id: i64, status: GameEntryStatus) -> Self {
        Self {
            game_id,
            user_id,
            status,
            rating: None,
            platforms: BTreeSet::new(),
            review: None,
        }
    }
}

/// Optional filters for the entry listing endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEntryQuery {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Free-text search
    pub query: Option<String>,
    /// Restrict to one user's entries
    pub user_id: Option<i64>,
    /// Restrict to one catalog game
    pub game_id: Option<i64>,
}

impl GameEntryQuery {
    /// Filter for all entries of one user
    #[must_use]
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    /// Query-string pairs for the filters that are set
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_owned(), page.to_string()));
        }
        if let Some(query) = &self.query {
            pairs.push(("query".to_owned(), query.clone()));
        }
        if let Some(user_id) = self.user_id {
            pairs.push(("user_id".to_owned(), user_id.to_string()));
        }
        if let Some(game_id) = self.game_id {
            pairs.push(("game_id".to_owned(), game_id.to_string()));
        }
        pairs
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeSet<String>>::deserialize(deserializer)?.unwrap_or_default())
}
