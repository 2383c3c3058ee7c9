// ABOUTME: Game entry endpoints: list with filters, create, update, and delete
// ABOUTME: Accepts both a bare array and a paginated envelope from the list endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use super::ApiClient;
use crate::http::ApiRequest;
use gameshelf_core::constants::endpoints::{game_entry_path, GAME_ENTRIES_PATH};
use gameshelf_core::errors::ApiResult;
use gameshelf_core::models::{EntryId, GameEntry, GameEntryQuery, NewGameEntry};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum EntryListBody {
    Plain(Vec<GameEntry>),
    Paged { results: Vec<GameEntry> },
}

impl From<EntryListBody> for Vec<GameEntry> {
    fn from(body: EntryListBody) -> Self {
        match body {
            EntryListBody::Plain(entries) | EntryListBody::Paged { results: entries } => entries,
        }
    }
}

impl ApiClient {
    /// List entries matching `query`
    ///
    /// # Errors
    ///
    /// Returns any pipeline failure, or `ApiError::Decode` for an unexpected body
    pub async fn list_game_entries(&self, query: &GameEntryQuery) -> ApiResult<Vec<GameEntry>> {
        let body: EntryListBody = self
            .pipeline
            .fetch_json(ApiRequest::get(GAME_ENTRIES_PATH).with_query(query.to_query_pairs()))
            .await?;
        Ok(body.into())
    }

    /// Create an entry; the server assigns its id
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if the server rejects the payload
    pub async fn create_game_entry(&self, entry: &NewGameEntry) -> ApiResult<GameEntry> {
        self.pipeline
            .fetch_json(ApiRequest::post(GAME_ENTRIES_PATH).json(entry)?)
            .await
    }

    /// Replace an entry with `entry`. Any response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if the server rejects the payload
    pub async fn update_game_entry(&self, entry: &GameEntry) -> ApiResult<()> {
        self.pipeline
            .send_discarding_body(ApiRequest::put(game_entry_path(entry.id)).json(entry)?)
            .await
    }

    /// Delete an entry
    ///
    /// # Errors
    ///
    /// Returns any pipeline failure, including `Validation` with status 404 for an unknown id
    pub async fn delete_game_entry(&self, id: EntryId) -> ApiResult<()> {
        self.pipeline
            .send_discarding_body(ApiRequest::delete(game_entry_path(id)))
            .await
    }
}
