// ABOUTME: Statistics action loading the user's aggregate library distributions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use super::{settle, Actions};
use crate::store::{ActionKind, Fulfilled};
use gameshelf_core::errors::ApiResult;
use gameshelf_core::models::UserStatistics;
use std::future::Future;

impl Actions {
    /// Fetch statistics into the store
    pub fn fetch_self_statistics(
        &self,
    ) -> impl Future<Output = ApiResult<UserStatistics>> + Send + 'static {
        let ticket = self.begin(ActionKind::FetchStatistics);
        let this = self.clone();
        async move {
            let result = this.api.get_self_statistics().await;
            settle(&this.store, ticket, result, |statistics| {
                Fulfilled::StatisticsLoaded(statistics.clone())
            })
            .await
        }
    }
}
