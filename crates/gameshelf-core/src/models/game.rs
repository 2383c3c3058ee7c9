// ABOUTME: Catalog game metadata returned by the games endpoint
// ABOUTME: Not a library entry - used to offer platform choices when editing entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Catalog metadata for a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Catalog identity
    pub id: i64,
    /// Display name
    pub name: String,
    /// Platforms the game was released on
    #[serde(default)]
    pub platforms: Vec<String>,
    /// Genre labels
    #[serde(default)]
    pub genres: Vec<String>,
    /// First release date, if known
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
}
