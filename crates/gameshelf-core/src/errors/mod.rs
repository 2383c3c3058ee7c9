// ABOUTME: Error types shared by the request pipeline, action handlers, and credential stores
// ABOUTME: Re-exports the API error taxonomy and the storage error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

//! # Error Types
//!
//! - `ApiError` - every failure an action handler can report to its caller
//! - `ErrorKind` - coarse classification used for display and retry decisions
//! - `CredentialStoreError` - failures reading or writing persisted credentials

/// API call error taxonomy
pub mod api;
/// Credential storage errors
pub mod storage;

pub use api::{ApiError, ApiResult, ErrorKind};
pub use storage::CredentialStoreError;
