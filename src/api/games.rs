// ABOUTME: Game catalog lookup endpoint
// ABOUTME: Used by edit flows to offer the platforms a game was released on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use super::ApiClient;
use crate::http::ApiRequest;
use gameshelf_core::constants::endpoints::game_path;
use gameshelf_core::errors::ApiResult;
use gameshelf_core::models::Game;

impl ApiClient {
    /// Catalog metadata for one game
    ///
    /// # Errors
    ///
    /// Returns any pipeline failure, or `ApiError::Decode` for an unexpected body
    pub async fn get_game(&self, id: i64) -> ApiResult<Game> {
        self.pipeline.fetch_json(ApiRequest::get(game_path(id))).await
    }
}
