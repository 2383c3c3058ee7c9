// ABOUTME: Pure selector functions deriving views from an entity cache snapshot
// ABOUTME: Lookups, filters by game and status, sorted views, and per-status counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use super::EntityCache;
use gameshelf_core::models::{EntryId, GameEntry, GameEntryStatus};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Sort orders offered to list views
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntrySort {
    /// Ascending id (creation order on the server)
    #[default]
    Id,
    /// Highest rating first; unrated entries last
    RatingDesc,
    /// Status code order, then id
    Status,
    /// Game name, case-insensitive; entries without a name last
    Name,
}

impl EntrySort {
    /// Parse a sort name as accepted on the command line
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "id" => Some(Self::Id),
            "rating" => Some(Self::RatingDesc),
            "status" => Some(Self::Status),
            "name" => Some(Self::Name),
            _ => None,
        }
    }
}

/// Single entry by id
#[must_use]
pub fn select_entry(cache: &EntityCache, id: EntryId) -> Option<&GameEntry> {
    cache.get(id)
}

/// Every entry, ordered by id
#[must_use]
pub fn select_all_entries(cache: &EntityCache) -> Vec<&GameEntry> {
    select_sorted(cache, EntrySort::Id)
}

/// Entries referring to one catalog game, ordered by id
#[must_use]
pub fn select_entries_for_game(cache: &EntityCache, game_id: i64) -> Vec<&GameEntry> {
    let mut entries: Vec<&GameEntry> = cache.iter().filter(|e| e.game_id == game_id).collect();
    entries.sort_by_key(|e| e.id);
    entries
}

/// The current user's entry for a game, if one exists
#[must_use]
pub fn select_user_entry_for_game(
    cache: &EntityCache,
    user_id: i64,
    game_id: i64,
) -> Option<&GameEntry> {
    cache
        .iter()
        .filter(|e| e.user_id == user_id && e.game_id == game_id)
        .min_by_key(|e| e.id)
}

/// Entries with the given status, ordered by id
#[must_use]
pub fn select_entries_with_status(cache: &EntityCache, status: GameEntryStatus) -> Vec<&GameEntry> {
    let mut entries: Vec<&GameEntry> = cache.iter().filter(|e| e.status == status).collect();
    entries.sort_by_key(|e| e.id);
    entries
}

/// Every entry in the requested order
#[must_use]
pub fn select_sorted(cache: &EntityCache, sort: EntrySort) -> Vec<&GameEntry> {
    let mut entries: Vec<&GameEntry> = cache.iter().collect();
    match sort {
        EntrySort::Id => entries.sort_by_key(|e| e.id),
        EntrySort::RatingDesc => entries.sort_by_key(|e| (Reverse(e.rating), e.id)),
        EntrySort::Status => entries.sort_by_key(|e| (e.status, e.id)),
        EntrySort::Name => entries.sort_by_key(|e| {
            (
                e.game_name.is_none(),
                e.game_name.as_deref().map(str::to_lowercase),
                e.id,
            )
        }),
    }
    entries
}

/// Entry count per status; statuses without entries are absent
#[must_use]
pub fn select_status_counts(cache: &EntityCache) -> BTreeMap<GameEntryStatus, u32> {
    let mut counts = BTreeMap::new();
    for entry in cache.iter() {
        *counts.entry(entry.status).or_insert(0) += 1;
    }
    counts
}

/// Mean rating over rated entries, or `None` if nothing is rated
#[must_use]
pub fn select_average_rating(cache: &EntityCache) -> Option<f64> {
    let ratings: Vec<f64> = cache
        .iter()
        .filter_map(|e| e.rating.map(|r| f64::from(r.value())))
        .collect();
    if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    }
}
