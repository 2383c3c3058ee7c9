// ABOUTME: Core types and constants for the GameShelf game library client
// ABOUTME: Foundation crate with error handling, domain models, and endpoint constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

#![deny(unsafe_code)]

//! # GameShelf Core
//!
//! Foundation crate providing shared types and constants for the GameShelf
//! client. It has no network or runtime dependencies so it can be reused by
//! any front end that speaks to the GameShelf REST API.
//!
//! ## Modules
//!
//! - **errors**: `ApiError` taxonomy surfaced to action callers, credential storage errors
//! - **models**: Game entries, credentials, catalog games, users, statistics
//! - **constants**: Endpoint paths, storage keys, and client defaults

/// Error taxonomy for API calls and credential storage
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`GameEntry`, `CredentialPair`, `UserStatistics`, ...)
pub mod models;
