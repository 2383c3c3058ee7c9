// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and builders wiring the pipeline, store, and actions to a mock transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `gameshelf_client`

use gameshelf_client::{
    actions::Actions,
    api::ApiClient,
    credentials::{CredentialStore, MemoryCredentialStore},
    http::{RequestPipeline, Transport},
    models::CredentialPair,
    store::Store,
};
use std::sync::{Arc, Once};
use url::Url;

static INIT_LOGGER: Once = Once::new();

pub const TEST_BASE_URL: &str = "http://gameshelf.test/api";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Credential store that starts logged in when `pair` is given
pub fn credentials(pair: Option<CredentialPair>) -> Arc<MemoryCredentialStore> {
    Arc::new(pair.map_or_else(MemoryCredentialStore::new, MemoryCredentialStore::with_pair))
}

/// Pipeline over `transport` and `store`
pub fn pipeline(
    transport: Arc<dyn Transport>,
    store: Arc<dyn CredentialStore>,
) -> Arc<RequestPipeline> {
    init_test_logging();
    Arc::new(RequestPipeline::new(
        Url::parse(TEST_BASE_URL).unwrap(),
        transport,
        store,
    ))
}

/// Action handlers over `transport` and `store` with a fresh application store
pub fn actions(transport: Arc<dyn Transport>, store: Arc<dyn CredentialStore>) -> Actions {
    Actions::new(ApiClient::new(pipeline(transport, store)), Store::spawn())
}
