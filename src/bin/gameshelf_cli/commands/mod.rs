// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors
// ABOUTME: Re-exports command modules for gameshelf-cli
// ABOUTME: Provides session, entry, catalog, and statistics commands

pub mod entries;
pub mod games;
pub mod session;
pub mod stats;
