// ABOUTME: Game entry actions: list, create, update, and delete
// ABOUTME: Fulfilment applies the matching entity cache operation in the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use super::{settle, Actions};
use crate::store::{ActionKind, Fulfilled};
use gameshelf_core::errors::ApiResult;
use gameshelf_core::models::{EntryId, GameEntry, GameEntryQuery, NewGameEntry};
use std::future::Future;

impl Actions {
    /// Fetch entries and make the cache hold exactly the result
    pub fn fetch_game_entries(
        &self,
        query: GameEntryQuery,
    ) -> impl Future<Output = ApiResult<Vec<GameEntry>>> + Send + 'static {
        let ticket = self.begin(ActionKind::FetchEntries);
        let this = self.clone();
        async move {
            let result = this.api.list_game_entries(&query).await;
            settle(&this.store, ticket, result, |entries| {
                Fulfilled::EntriesListed(entries.clone())
            })
            .await
        }
    }

    /// Create an entry and cache the server's copy under its new id
    pub fn create_game_entry(
        &self,
        entry: NewGameEntry,
    ) -> impl Future<Output = ApiResult<GameEntry>> + Send + 'static {
        let ticket = self.begin(ActionKind::CreateEntry);
        let this = self.clone();
        async move {
            let result = this.api.create_game_entry(&entry).await;
            settle(&this.store, ticket, result, |created| {
                Fulfilled::EntryCreated(created.clone())
            })
            .await
        }
    }

    /// Update an entry and cache the submitted value under its id.
    ///
    /// The server's response body is not consulted; the cache reflects
    /// exactly what the client sent.
    pub fn update_game_entry(
        &self,
        entry: GameEntry,
    ) -> impl Future<Output = ApiResult<GameEntry>> + Send + 'static {
        let ticket = self.begin(ActionKind::UpdateEntry);
        let this = self.clone();
        async move {
            let result = this.api.update_game_entry(&entry).await.map(|()| entry);
            settle(&this.store, ticket, result, |submitted| {
                Fulfilled::EntryUpdated(submitted.clone())
            })
            .await
        }
    }

    /// Delete an entry and evict it from the cache
    pub fn delete_game_entry(
        &self,
        id: EntryId,
    ) -> impl Future<Output = ApiResult<()>> + Send + 'static {
        let ticket = self.begin(ActionKind::DeleteEntry);
        let this = self.clone();
        async move {
            let result = this.api.delete_game_entry(id).await;
            settle(&this.store, ticket, result, |()| Fulfilled::EntryDeleted(id)).await
        }
    }
}
