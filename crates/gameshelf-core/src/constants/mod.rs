// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Endpoint paths, credential storage keys, HTTP defaults, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// REST endpoint paths relative to the configured API base URL
pub mod endpoints {
    /// User registration (public)
    pub const REGISTER_PATH: &str = "/users/register/";
    /// Token obtain pair (public)
    pub const LOGIN_PATH: &str = "/token/";
    /// Token refresh (public, refresh token travels in the body)
    pub const REFRESH_PATH: &str = "/token/refresh/";
    /// Authenticated user's own profile
    pub const SELF_USER_PATH: &str = "/users/self/";
    /// Authenticated user's aggregate statistics
    pub const SELF_STATISTICS_PATH: &str = "/users/self/statistics/";
    /// Game entry collection (list, create)
    pub const GAME_ENTRIES_PATH: &str = "/game-entries/";
    /// Game catalog collection
    pub const GAMES_PATH: &str = "/games/";

    /// Endpoints that never carry a bearer credential and never trigger a refresh
    pub const PUBLIC_PATHS: [&str; 3] = [REGISTER_PATH, LOGIN_PATH, REFRESH_PATH];

    /// Path for a single game entry (update, delete)
    #[must_use]
    pub fn game_entry_path(id: i64) -> String {
        format!("{GAME_ENTRIES_PATH}{id}/")
    }

    /// Path for a single catalog game
    #[must_use]
    pub fn game_path(id: i64) -> String {
        format!("{GAMES_PATH}{id}/")
    }

    /// Whether a path is exempt from bearer injection and refresh handling
    #[must_use]
    pub fn is_public(path: &str) -> bool {
        PUBLIC_PATHS.contains(&path)
    }
}

/// Keys used for persisted credentials
pub mod storage {
    /// Access token key
    pub const ACCESS_TOKEN_KEY: &str = "access_token";
    /// Refresh token key
    pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
    /// File name used by the durable credential store
    pub const CREDENTIALS_FILE_NAME: &str = "credentials.json";
    /// Directory name under the platform config dir
    pub const APP_DIR_NAME: &str = "gameshelf";
}

/// HTTP client defaults
pub mod http {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Header carrying the per-request correlation id
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
    /// Bearer scheme prefix for the Authorization header
    pub const BEARER_PREFIX: &str = "Bearer ";
    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("gameshelf-client/", env!("CARGO_PKG_VERSION"));
}

/// Environment variable names read by the client configuration
pub mod env_config {
    /// API base URL (required)
    pub const API_BASE_URL: &str = "GAMESHELF_API_BASE_URL";
    /// Request timeout override in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "GAMESHELF_HTTP_TIMEOUT_SECS";
    /// Connect timeout override in seconds
    pub const CONNECT_TIMEOUT_SECS: &str = "GAMESHELF_CONNECT_TIMEOUT_SECS";
    /// Credential file override
    pub const CREDENTIALS_PATH: &str = "GAMESHELF_CREDENTIALS_PATH";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "GAMESHELF_ENVIRONMENT";
}

/// Domain limits
pub mod limits {
    /// Highest rating a game entry may carry
    pub const MAX_RATING: u8 = 10;
}

/// Service names for structured logging
pub mod service_names {
    /// Client library service name
    pub const GAMESHELF_CLIENT: &str = "gameshelf-client";
}
