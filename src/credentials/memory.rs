// ABOUTME: In-memory credential store for tests and embedded use
// ABOUTME: Holds the pair behind an async RwLock; nothing survives the process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use super::{CredentialStore, StoreResult};
use async_trait::async_trait;
use gameshelf_core::models::CredentialPair;
use tokio::sync::RwLock;

/// Volatile credential store
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    pair: RwLock<Option<CredentialPair>>,
}

impl MemoryCredentialStore {
    /// Empty store (logged out)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts logged in with the given pair
    #[must_use]
    pub fn with_pair(pair: CredentialPair) -> Self {
        Self {
            pair: RwLock::new(Some(pair)),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self) -> StoreResult<Option<CredentialPair>> {
        Ok(self.pair.read().await.clone())
    }

    async fn set(&self, pair: CredentialPair) -> StoreResult<()> {
        *self.pair.write().await = Some(pair);
        Ok(())
    }

    async fn clear(&self) -> StoreResult<()> {
        *self.pair.write().await = None;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
