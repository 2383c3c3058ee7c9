// ABOUTME: Transport seam between the request pipeline and the network
// ABOUTME: Production implementation uses a shared reqwest client configured with timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use super::request::{ApiRequest, ApiResponse};
use crate::config::HttpClientConfig;
use async_trait::async_trait;
use gameshelf_core::constants::http::USER_AGENT;
use reqwest::{Client, ClientBuilder};
use url::Url;

/// The request never produced a response
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    timed_out: bool,
}

impl TransportError {
    /// Transport failure with a description
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
        }
    }

    /// Transport failure caused by a timeout
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: true,
        }
    }

    /// Whether the failure was a timeout
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        self.timed_out
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::timeout(error.to_string())
        } else {
            Self::new(error.to_string())
        }
    }
}

/// Sends a fully prepared request and returns whatever the server answered.
///
/// Implementations must not interpret status codes: 4xx and 5xx are returned
/// as ordinary responses. Only failures that produce no response at all are
/// errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` to the already resolved `url`
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received
    async fn send(&self, url: Url, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Build the HTTP client used by [`ReqwestTransport`]
#[must_use]
pub fn build_http_client(config: &HttpClientConfig) -> Client {
    ClientBuilder::new()
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Transport with a client built from the timeout configuration
    #[must_use]
    pub fn new(config: &HttpClientConfig) -> Self {
        Self {
            client: build_http_client(config),
        }
    }

    /// Transport around an existing client
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, url: Url, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method().clone(), url)
            .headers(request.headers().clone());
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(ApiResponse::new(status, headers, body.to_vec()))
    }
}
