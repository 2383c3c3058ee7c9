// ABOUTME: Credential pair model holding the session's access and refresh tokens
// ABOUTME: Tokens are opaque and redacted from Debug output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Access/refresh token pair for the active session.
///
/// Both tokens are opaque; the client never inspects their contents.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPair {
    /// Short-lived bearer token attached to authenticated requests
    pub access: String,
    /// Longer-lived token exchanged for a new pair when `access` expires
    pub refresh: String,
}

impl CredentialPair {
    /// Create a pair from its two tokens
    #[must_use]
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }
}

impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("access", &"[REDACTED]")
            .field("refresh", &"[REDACTED]")
            .finish()
    }
}

/// Body of the token refresh call
#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest<'a> {
    /// Current refresh token
    pub refresh: &'a str,
}

/// Refresh responses may omit the refresh token when the server does not rotate it
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    /// New access token
    pub access: String,
    /// Rotated refresh token, if issued
    #[serde(default)]
    pub refresh: Option<String>,
}

impl RefreshResponse {
    /// Merge into a full pair, keeping the previous refresh token if none was rotated
    #[must_use]
    pub fn into_pair(self, previous_refresh: &str) -> CredentialPair {
        CredentialPair {
            access: self.access,
            refresh: self.refresh.unwrap_or_else(|| previous_refresh.to_owned()),
        }
    }
}
