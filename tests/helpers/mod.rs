// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the scripted transport and domain fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub mod fixtures;
pub mod mock_transport;
