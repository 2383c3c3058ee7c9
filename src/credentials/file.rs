// ABOUTME: Durable credential store persisted as a small JSON file
// ABOUTME: Keeps a write-through in-memory copy so reads never touch the disk after open
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use super::{CredentialStore, StoreResult};
use async_trait::async_trait;
use gameshelf_core::errors::CredentialStoreError;
use gameshelf_core::models::CredentialPair;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// On-disk layout, keyed by the fixed storage keys
#[derive(Serialize, Deserialize)]
struct PersistedCredentials {
    #[serde(rename = "access_token")]
    access: String,
    #[serde(rename = "refresh_token")]
    refresh: String,
}

impl From<&CredentialPair> for PersistedCredentials {
    fn from(pair: &CredentialPair) -> Self {
        Self {
            access: pair.access.clone(),
            refresh: pair.refresh.clone(),
        }
    }
}

impl From<PersistedCredentials> for CredentialPair {
    fn from(persisted: PersistedCredentials) -> Self {
        Self::new(persisted.access, persisted.refresh)
    }
}

/// Credential store that survives process restarts.
///
/// Writes go to a sibling temp file which is then renamed over the target, so
/// a crash mid-write leaves either the old or the new pair on disk.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    current: RwLock<Option<CredentialPair>>,
}

impl FileCredentialStore {
    /// Open the store at `path`, loading any previously persisted pair
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let current = Self::load(&path).await?;
        debug!(
            credentials.path = %path.display(),
            credentials.present = current.is_some(),
            "Opened credential file"
        );
        Ok(Self {
            path,
            current: RwLock::new(current),
        })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(path: &Path) -> StoreResult<Option<CredentialPair>> {
        let raw = match tokio::fs::read(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CredentialStoreError::io(
                    path.display().to_string(),
                    e.to_string(),
                ))
            }
        };

        serde_json::from_slice::<PersistedCredentials>(&raw)
            .map(|persisted| Some(persisted.into()))
            .map_err(|e| CredentialStoreError::corrupt(path.display().to_string(), e.to_string()))
    }

    async fn persist(&self, pair: &CredentialPair) -> StoreResult<()> {
        let body = serde_json::to_vec_pretty(&PersistedCredentials::from(pair))
            .map_err(|e| CredentialStoreError::corrupt(self.location(), e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CredentialStoreError::io(self.location(), e.to_string()))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body)
            .await
            .map_err(|e| CredentialStoreError::io(tmp.display().to_string(), e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| CredentialStoreError::io(self.location(), e.to_string()))
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self) -> StoreResult<Option<CredentialPair>> {
        Ok(self.current.read().await.clone())
    }

    async fn set(&self, pair: CredentialPair) -> StoreResult<()> {
        // Hold the write lock across the disk write so concurrent sets land in order
        let mut current = self.current.write().await;
        self.persist(&pair).await?;
        *current = Some(pair);
        Ok(())
    }

    async fn clear(&self) -> StoreResult<()> {
        let mut current = self.current.write().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                warn!(credentials.path = %self.path.display(), "Failed to remove credential file: {}", e);
                return Err(CredentialStoreError::io(self.location(), e.to_string()));
            }
        }
        *current = None;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
