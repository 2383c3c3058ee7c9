// ABOUTME: Configuration module for the GameShelf client
// ABOUTME: Re-exports the environment-driven client settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

//! Client configuration
//!
//! Everything is read from environment variables at startup; see
//! [`ClientConfig::from_env`].

/// Environment and HTTP configuration
pub mod environment;

pub use environment::{ClientConfig, ConfigError, Environment, HttpClientConfig, LogLevel};
