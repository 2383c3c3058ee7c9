// ABOUTME: Credential store abstraction holding the current access/refresh token pair
// ABOUTME: Pluggable backends: durable JSON file for front ends, in-memory for tests and embedding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

/// Durable file-backed store
pub mod file;
/// In-memory store
pub mod memory;

use async_trait::async_trait;
use gameshelf_core::errors::CredentialStoreError;
use gameshelf_core::models::CredentialPair;

pub use file::FileCredentialStore;
pub use memory::MemoryCredentialStore;

/// Result alias for credential store operations
pub type StoreResult<T> = Result<T, CredentialStoreError>;

/// Holder of the current credential pair.
///
/// Reads always observe the most recent `set` or `clear` (last write wins).
/// Tokens are stored opaquely and never validated here.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Current pair, if the user is logged in
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self) -> StoreResult<Option<CredentialPair>>;

    /// Replace the stored pair
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn set(&self, pair: CredentialPair) -> StoreResult<()>;

    /// Remove any stored pair
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn clear(&self) -> StoreResult<()>;

    /// Short backend description for logs
    fn backend_name(&self) -> &'static str;
}
