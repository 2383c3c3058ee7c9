// ABOUTME: Error taxonomy surfaced to callers of API requests and asynchronous actions
// ABOUTME: Classifies network, authentication, validation, and server failures with HTTP detail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::storage::CredentialStoreError;

/// Coarse error classification used by front ends to decide what to show
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The request never reached the server or no response arrived
    Network,
    /// Session could not be authenticated (expired session, rejected credentials)
    Authentication,
    /// The server rejected the request (4xx other than 401)
    Validation,
    /// The server failed to process the request (5xx)
    Server,
    /// Client-side failure (decoding, storage, malformed request)
    Internal,
}

impl ErrorKind {
    /// Stable identifier for logs and display
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Network => "NETWORK",
            Self::Authentication => "AUTHENTICATION",
            Self::Validation => "VALIDATION",
            Self::Server => "SERVER",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by the request pipeline and by every action handler.
///
/// Errors are never swallowed by the client core: each rejection reaches its
/// caller exactly once, carrying enough detail to render a message.
#[non_exhaustive]
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Transport failure: connection refused, DNS, TLS, timeout, broken body stream
    #[error("Network error calling {path}: {message}")]
    Network {
        /// Endpoint path that was being called
        path: String,
        /// Transport error description
        message: String,
    },

    /// Token refresh failed; credentials were cleared and the user must log in again
    #[error("Session expired, please log in again")]
    SessionExpired,

    /// 401 that is not eligible for a refresh (public endpoint or replayed request)
    #[error("Unauthorized request to {path}")]
    Unauthorized {
        /// Endpoint path that returned 401
        path: String,
    },

    /// Server rejected the request (4xx other than 401)
    #[error("Request rejected with status {status}: {detail}")]
    Validation {
        /// HTTP status code
        status: u16,
        /// Structured detail returned by the server (`Value::Null` when absent)
        detail: Value,
    },

    /// Server failed to handle the request (5xx)
    #[error("Server error {status}: {detail}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Structured detail returned by the server (`Value::Null` when absent)
        detail: Value,
    },

    /// Status outside the 2xx, 4xx and 5xx ranges (an unfollowed redirect or an informational reply)
    #[error("Unexpected status {status}: {detail}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Structured detail returned by the server (`Value::Null` when absent)
        detail: Value,
    },

    /// Successful response whose body did not match the expected shape
    #[error("Failed to decode response from {path}: {message}")]
    Decode {
        /// Endpoint path that returned the body
        path: String,
        /// Deserialization error description
        message: String,
    },

    /// Request could not be built (bad base URL, unserializable payload)
    #[error("Invalid request: {reason}")]
    InvalidRequest {
        /// Why the request was rejected before sending
        reason: String,
    },

    /// Credential store could not be read or written
    #[error(transparent)]
    Storage(#[from] CredentialStoreError),
}

/// Result alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Build the error matching a non-success HTTP status.
    ///
    /// 401 maps to `Unauthorized`; the refresh flow decides separately whether a
    /// 401 is recoverable before this is surfaced.
    #[must_use]
    pub fn from_status(path: &str, status: u16, detail: Value) -> Self {
        match status {
            401 => Self::Unauthorized {
                path: path.to_owned(),
            },
            400..=499 => Self::Validation { status, detail },
            500..=599 => Self::Server { status, detail },
            _ => Self::UnexpectedStatus { status, detail },
        }
    }

    /// Create a network error
    #[must_use]
    pub fn network(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a decode error
    #[must_use]
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid request error
    #[must_use]
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Classify this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::Network,
            Self::SessionExpired | Self::Unauthorized { .. } => ErrorKind::Authentication,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Server { .. } => ErrorKind::Server,
            Self::UnexpectedStatus { .. }
            | Self::Decode { .. }
            | Self::InvalidRequest { .. }
            | Self::Storage(_) => ErrorKind::Internal,
        }
    }

    /// HTTP status associated with this error, if the server produced one
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Validation { status, .. }
            | Self::Server { status, .. }
            | Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided structured detail, if any
    #[must_use]
    pub const fn detail(&self) -> Option<&Value> {
        match self {
            Self::Validation { detail, .. }
            | Self::Server { detail, .. }
            | Self::UnexpectedStatus { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Whether this is an authentication failure (expired session or rejected credentials)
    #[must_use]
    pub const fn is_authentication(&self) -> bool {
        matches!(self.kind(), ErrorKind::Authentication)
    }

    /// Whether the caller should send the user back to the login screen
    #[must_use]
    pub const fn requires_login(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}
