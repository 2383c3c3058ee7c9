// ABOUTME: Main library entry point for the GameShelf client
// ABOUTME: Authenticated REST pipeline with token refresh, a normalized entry cache, and action handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

#![deny(unsafe_code)]

//! # GameShelf Client
//!
//! Client core for a personal game library backed by a REST API. It keeps a
//! normalized, id-keyed cache of the user's game entries in sync with the
//! server and hides token expiry from callers.
//!
//! ## Architecture
//!
//! - **Credentials**: where the access/refresh pair lives (durable file or memory)
//! - **HTTP**: `RequestPipeline` attaches the bearer token and, on a 401,
//!   runs exactly one refresh no matter how many requests failed at once
//! - **API**: typed wrappers for each endpoint
//! - **Cache**: copy-on-write `EntityCache` plus pure selectors
//! - **Store**: single reducer task applying action events, publishing snapshots
//! - **Actions**: requested/fulfilled/rejected handlers front ends call
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gameshelf_client::actions::Actions;
//! use gameshelf_client::api::ApiClient;
//! use gameshelf_client::config::ClientConfig;
//! use gameshelf_client::credentials::FileCredentialStore;
//! use gameshelf_client::store::Store;
//! use gameshelf_client::models::GameEntryQuery;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let credentials = Arc::new(FileCredentialStore::open(&config.credentials_path).await?);
//! let actions = Actions::new(ApiClient::from_config(&config, credentials), Store::spawn());
//!
//! let user = actions.fetch_self_user().await?;
//! actions.fetch_game_entries(GameEntryQuery::for_user(user.id)).await?;
//! println!("{} entries", actions.store().snapshot().entries.len());
//! # Ok(())
//! # }
//! ```

/// Asynchronous action handlers
pub mod actions;

/// Typed endpoint wrappers
pub mod api;

/// Normalized game entry cache and selectors
pub mod cache;

/// Environment-driven configuration
pub mod config;

/// Credential store backends
pub mod credentials;

/// Request pipeline, transport, and token refresh
pub mod http;

/// Structured logging setup
pub mod logging;

/// Reducer-driven application store
pub mod store;

pub use gameshelf_core::{constants, errors, models};
