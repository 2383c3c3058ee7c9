// ABOUTME: Aggregate library statistics for the authenticated user
// ABOUTME: Sparse distributions keyed by status, genre, platform, and year; absent keys mean zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::game_entry::GameEntryStatus;

/// Aggregate distributions over the user's library.
///
/// Every distribution is a sparse map: a key the server omitted has a count of
/// zero. Use the accessor methods rather than indexing so that rule holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStatistics {
    /// Mean rating across rated entries
    #[serde(default)]
    pub average_rating: f64,
    /// Entry count per play status
    #[serde(default)]
    pub game_status_distribution: BTreeMap<GameEntryStatus, u32>,
    /// Entry count per genre
    #[serde(default)]
    pub game_genre_distribution: BTreeMap<String, u32>,
    /// Entry count per platform
    #[serde(default)]
    pub platform_distribution: BTreeMap<String, u32>,
    /// Entry count per year played
    #[serde(default)]
    pub play_year_distribution: BTreeMap<i32, u32>,
    /// Entry count per game release year
    #[serde(default)]
    pub release_year_distribution: BTreeMap<i32, u32>,
}

impl UserStatistics {
    /// Entries with the given status
    #[must_use]
    pub fn status_count(&self, status: GameEntryStatus) -> u32 {
        self.game_status_distribution
            .get(&status)
            .copied()
            .unwrap_or(0)
    }

    /// Entries played on the given platform
    #[must_use]
    pub fn platform_count(&self, platform: &str) -> u32 {
        self.platform_distribution.get(platform).copied().unwrap_or(0)
    }

    /// Entries tagged with the given genre
    #[must_use]
    pub fn genre_count(&self, genre: &str) -> u32 {
        self.game_genre_distribution.get(genre).copied().unwrap_or(0)
    }

    /// Total number of entries across all statuses
    #[must_use]
    pub fn total_entries(&self) -> u32 {
        self.game_status_distribution.values().sum()
    }

    /// Dense status series in status order, filling absent statuses with zero
    #[must_use]
    pub fn status_series(&self) -> Vec<(GameEntryStatus, u32)> {
        GameEntryStatus::ALL
            .into_iter()
            .map(|status| (status, self.status_count(status)))
            .collect()
    }
}
