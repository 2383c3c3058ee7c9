// ABOUTME: Authenticated request pipeline shared by every API call
// ABOUTME: Attaches the bearer credential, classifies failures, and routes 401s through the refresh coordinator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use super::refresh::{RefreshCoordinator, RefreshTicket};
use super::request::{ApiRequest, ApiResponse};
use super::transport::Transport;
use crate::credentials::CredentialStore;
use crate::logging::ClientLogger;
use gameshelf_core::constants::endpoints::is_public;
use gameshelf_core::constants::http::{BEARER_PREFIX, REQUEST_ID_HEADER};
use gameshelf_core::errors::{ApiError, ApiResult};
use http::header::{HeaderName, HeaderValue, AUTHORIZATION};
use http::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

/// The client object every endpoint call goes through.
///
/// Constructed once at startup and shared behind an `Arc`; there is no
/// global instance. Tests build one around a scripted [`Transport`].
pub struct RequestPipeline {
    base_url: Url,
    transport: Arc<dyn Transport>,
    credentials: Arc<dyn CredentialStore>,
    refresh: RefreshCoordinator,
}

impl RequestPipeline {
    /// Pipeline sending through `transport` with credentials from `credentials`
    #[must_use]
    pub fn new(
        base_url: Url,
        transport: Arc<dyn Transport>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        let refresh = RefreshCoordinator::new(
            base_url.clone(),
            Arc::clone(&transport),
            Arc::clone(&credentials),
        );
        Self {
            base_url,
            transport,
            credentials,
            refresh,
        }
    }

    /// Base URL requests are resolved against
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Credential store used for bearer injection
    #[must_use]
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// Refresh coordinator guarding this pipeline's credentials
    #[must_use]
    pub const fn refresh_coordinator(&self) -> &RefreshCoordinator {
        &self.refresh
    }

    /// Send a request and return its 2xx response.
    ///
    /// A 401 on a protected endpoint triggers one refresh and one replay. A
    /// 401 on a public endpoint, or on the replay, is returned as
    /// `ApiError::Unauthorized`.
    ///
    /// # Errors
    ///
    /// Returns the classified failure: network, session expired, unauthorized,
    /// validation, server, or credential storage
    pub async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let path = request.path().to_owned();
        let public = is_public(&path);
        let caller_authorized = request.authorization().is_some();

        let ticket = self.refresh.ticket();
        let mut prepared = request;
        if !public && !caller_authorized {
            if let Some(pair) = self.credentials.get().await? {
                attach_bearer(&mut prepared, &pair.access)?;
            }
        }

        let response = self.send(&prepared).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return response.error_for_status(&path);
        }

        if public || caller_authorized {
            return Err(ApiError::Unauthorized { path });
        }

        self.replay_after_refresh(prepared, ticket).await
    }

    async fn replay_after_refresh(
        &self,
        mut request: ApiRequest,
        ticket: RefreshTicket,
    ) -> ApiResult<ApiResponse> {
        let access = self.refresh.recover(ticket).await?;
        attach_bearer(&mut request, &access)?;

        debug!(http.path = %request.path(), "Replaying request with refreshed credentials");
        let response = self.send(&request).await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            warn!(http.path = %request.path(), "Replayed request rejected again");
            return Err(ApiError::Unauthorized {
                path: request.path().to_owned(),
            });
        }
        response.error_for_status(request.path())
    }

    /// One transport round trip, tagged with a fresh request id
    async fn send(&self, request: &ApiRequest) -> ApiResult<ApiResponse> {
        let url = request.resolve(&self.base_url)?;
        let request_id = Uuid::new_v4().to_string();
        let mut tagged = request.clone();
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            tagged
                .headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }

        let started = Instant::now();
        let response = self.transport.send(url, &tagged).await.map_err(|e| {
            warn!(
                request.id = %request_id,
                http.method = %request.method(),
                http.path = %request.path(),
                "Transport failure: {}",
                e
            );
            ApiError::network(request.path(), e.to_string())
        })?;

        ClientLogger::log_api_request(
            &request_id,
            request.method().as_str(),
            request.path(),
            response.status().as_u16(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(response)
    }

    /// Execute and decode a JSON response body
    ///
    /// # Errors
    ///
    /// Returns any `execute` failure, or `ApiError::Decode` for an unexpected body
    pub async fn fetch_json<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let path = request.path().to_owned();
        self.execute(request).await?.decode(&path)
    }

    /// Execute and discard the response body
    ///
    /// # Errors
    ///
    /// Returns any `execute` failure
    pub async fn send_discarding_body(&self, request: ApiRequest) -> ApiResult<()> {
        self.execute(request).await.map(|_| ())
    }
}

fn attach_bearer(request: &mut ApiRequest, access: &str) -> ApiResult<()> {
    let value = HeaderValue::from_str(&format!("{BEARER_PREFIX}{access}"))
        .map_err(|_| ApiError::invalid_request("access token is not a valid header value"))?;
    request.headers_mut().insert(AUTHORIZATION, value);
    Ok(())
}
