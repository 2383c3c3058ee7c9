// ABOUTME: Endpoints scoped to the authenticated user: profile and library statistics
// ABOUTME: Both require a bearer credential
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use super::ApiClient;
use crate::http::ApiRequest;
use gameshelf_core::constants::endpoints::{SELF_STATISTICS_PATH, SELF_USER_PATH};
use gameshelf_core::errors::ApiResult;
use gameshelf_core::models::{User, UserStatistics};

impl ApiClient {
    /// Profile of the logged-in user
    ///
    /// # Errors
    ///
    /// Returns any pipeline failure
    pub async fn get_self_user(&self) -> ApiResult<User> {
        self.pipeline.fetch_json(ApiRequest::get(SELF_USER_PATH)).await
    }

    /// Library statistics of the logged-in user
    ///
    /// # Errors
    ///
    /// Returns any pipeline failure
    pub async fn get_self_statistics(&self) -> ApiResult<UserStatistics> {
        self.pipeline
            .fetch_json(ApiRequest::get(SELF_STATISTICS_PATH))
            .await
    }
}
