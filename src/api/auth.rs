// ABOUTME: Session endpoints: login, registration, and logout
// ABOUTME: Login stores the returned credential pair; logout clears it locally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use super::ApiClient;
use crate::http::ApiRequest;
use crate::logging::ClientLogger;
use gameshelf_core::constants::endpoints::{LOGIN_PATH, REGISTER_PATH};
use gameshelf_core::errors::ApiResult;
use gameshelf_core::models::{CredentialPair, LoginRequest, RegisterRequest, User};

impl ApiClient {
    /// Obtain a credential pair and store it
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for wrong credentials, or any pipeline failure
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<()> {
        let result: ApiResult<CredentialPair> = self
            .pipeline
            .fetch_json(ApiRequest::post(LOGIN_PATH).json(request)?)
            .await;

        match result {
            Ok(pair) => {
                self.credentials().set(pair).await?;
                ClientLogger::log_auth_event("login", true, None);
                Ok(())
            }
            Err(error) => {
                ClientLogger::log_auth_event("login", false, Some(&error.to_string()));
                Err(error)
            }
        }
    }

    /// Create an account. Does not log in.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` with field details if the server rejects the account
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<User> {
        let user: User = self
            .pipeline
            .fetch_json(ApiRequest::post(REGISTER_PATH).json(request)?)
            .await?;
        ClientLogger::log_auth_event("register", true, Some(&user.username));
        Ok(user)
    }

    /// Forget the stored credentials. The backend keeps no session to end.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential store cannot be cleared
    pub async fn logout(&self) -> ApiResult<()> {
        self.credentials().clear().await?;
        ClientLogger::log_auth_event("logout", true, None);
        Ok(())
    }

    /// Whether credentials are currently stored
    ///
    /// # Errors
    ///
    /// Returns an error if the credential store cannot be read
    pub async fn is_logged_in(&self) -> ApiResult<bool> {
        Ok(self.credentials().get().await?.is_some())
    }
}
