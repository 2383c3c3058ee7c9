// ABOUTME: Session actions: login, register-then-login, logout, and loading the current user
// ABOUTME: Logout clears credentials and resets everything the store holds for the old session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use super::{settle, Actions};
use crate::store::{ActionKind, Fulfilled};
use gameshelf_core::errors::ApiResult;
use gameshelf_core::models::{LoginRequest, RegisterRequest, User};
use std::future::Future;

impl Actions {
    /// Log in and store the credential pair
    pub fn login(
        &self,
        request: LoginRequest,
    ) -> impl Future<Output = ApiResult<()>> + Send + 'static {
        let ticket = self.begin(ActionKind::Login);
        let this = self.clone();
        async move {
            let result = this.api.login(&request).await;
            settle(&this.store, ticket, result, |()| Fulfilled::LoggedIn).await
        }
    }

    /// Create an account, then log in with the same credentials
    pub fn register(
        &self,
        request: RegisterRequest,
    ) -> impl Future<Output = ApiResult<User>> + Send + 'static {
        let ticket = self.begin(ActionKind::Register);
        let this = self.clone();
        async move {
            let result = match this.api.register(&request).await {
                Ok(user) => this.api.login(&request.to_login()).await.map(|()| user),
                Err(error) => Err(error),
            };
            settle(&this.store, ticket, result, |user| {
                Fulfilled::Registered(user.clone())
            })
            .await
        }
    }

    /// Clear credentials and session data
    pub fn logout(&self) -> impl Future<Output = ApiResult<()>> + Send + 'static {
        let ticket = self.begin(ActionKind::Logout);
        let this = self.clone();
        async move {
            let result = this.api.logout().await;
            settle(&this.store, ticket, result, |()| Fulfilled::LoggedOut).await
        }
    }

    /// Load the logged-in user's profile into the store
    pub fn fetch_self_user(&self) -> impl Future<Output = ApiResult<User>> + Send + 'static {
        let ticket = self.begin(ActionKind::FetchSelfUser);
        let this = self.clone();
        async move {
            let result = this.api.get_self_user().await;
            settle(&this.store, ticket, result, |user| {
                Fulfilled::SelfUserLoaded(user.clone())
            })
            .await
        }
    }
}
