// ABOUTME: Errors raised by credential store backends
// ABOUTME: Wraps I/O and serialization failures with the storage location for context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

/// Failure reading or writing persisted credentials
#[non_exhaustive]
#[derive(Debug, Clone, thiserror::Error)]
pub enum CredentialStoreError {
    /// Underlying file or storage I/O failed
    #[error("Credential storage I/O failed at {location}: {message}")]
    Io {
        /// Where the credentials live (file path or backend name)
        location: String,
        /// I/O error description
        message: String,
    },

    /// Persisted credentials could not be parsed or encoded
    #[error("Credential storage at {location} is corrupt: {message}")]
    Corrupt {
        /// Where the credentials live
        location: String,
        /// Serialization error description
        message: String,
    },
}

impl CredentialStoreError {
    /// Create an I/O error
    #[must_use]
    pub fn io(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a corruption error
    #[must_use]
    pub fn corrupt(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Corrupt {
            location: location.into(),
            message: message.into(),
        }
    }
}
