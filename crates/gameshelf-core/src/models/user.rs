// ABOUTME: User profile model and the login/registration request payloads
// ABOUTME: Passwords are redacted from Debug output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authenticated user's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identity
    pub id: i64,
    /// Display name
    pub username: String,
    /// Login email
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of the login call
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Body of the registration call
#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    /// Account email
    pub email: String,
    /// Desired username
    pub username: String,
    /// Account password
    pub password: String,
}

impl RegisterRequest {
    /// Login payload for the account being registered
    #[must_use]
    pub fn to_login(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
