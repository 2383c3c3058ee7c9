// ABOUTME: Benchmark fixtures generating game libraries of fixed sizes
// ABOUTME: Deterministic data so repeated runs measure the same work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

//! Benchmark fixtures.

use gameshelf_client::models::{GameEntry, GameEntryStatus, Rating};
use std::collections::BTreeSet;

const PLATFORMS: [&str; 4] = ["PC", "PS5", "Switch", "Xbox"];

/// Predefined library sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum LibrarySize {
    /// A casual player's library
    Small,
    /// A typical collector
    Medium,
    /// Stress case
    Large,
}

impl LibrarySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Medium => 500,
            Self::Large => 5_000,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "50",
            Self::Medium => "500",
            Self::Large => "5000",
        }
    }
}

/// Entry `index` of a generated library
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn generate_entry(index: usize) -> GameEntry {
    let id = index as i64 + 1;
    let platforms: BTreeSet<String> = PLATFORMS
        .iter()
        .take(index % PLATFORMS.len() + 1)
        .map(|platform| (*platform).to_owned())
        .collect();
    GameEntry {
        id,
        game_id: id * 3,
        user_id: 1,
        status: GameEntryStatus::ALL[index % GameEntryStatus::ALL.len()],
        rating: Rating::new((index % 11) as u8),
        platforms,
        review: (index % 4 == 0).then(|| format!("Review number {index}")),
        game_name: Some(format!("Game {:05}", (index * 7919) % 100_000)),
    }
}

/// A whole library of `size` entries
#[must_use]
pub fn generate_library(size: LibrarySize) -> Vec<GameEntry> {
    (0..size.count()).map(generate_entry).collect()
}
