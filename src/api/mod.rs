// ABOUTME: Typed wrappers for every REST endpoint the client calls
// ABOUTME: Each method builds an ApiRequest and sends it through the shared RequestPipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

//! Endpoint wrappers
//!
//! `ApiClient` is split across one file per resource. It has no state of its
//! own beyond the pipeline handle, so cloning it is cheap.

mod auth;
mod game_entries;
mod games;
mod users;

use crate::config::ClientConfig;
use crate::credentials::CredentialStore;
use crate::http::{ReqwestTransport, RequestPipeline, Transport};
use std::sync::Arc;

/// Typed REST client for the GameShelf backend
#[derive(Clone)]
pub struct ApiClient {
    pipeline: Arc<RequestPipeline>,
}

impl ApiClient {
    /// Client sending through an existing pipeline
    #[must_use]
    pub const fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// Client using the reqwest transport configured from `config`
    #[must_use]
    pub fn from_config(config: &ClientConfig, credentials: Arc<dyn CredentialStore>) -> Self {
        let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new(&config.http));
        Self::new(Arc::new(RequestPipeline::new(
            config.api_base_url.clone(),
            transport,
            credentials,
        )))
    }

    /// Underlying pipeline
    #[must_use]
    pub fn pipeline(&self) -> &RequestPipeline {
        &self.pipeline
    }

    /// Credential store used by the pipeline
    #[must_use]
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        self.pipeline.credentials()
    }
}
