// ABOUTME: Scripted transport standing in for the network in pipeline and action tests
// ABOUTME: Records every request and answers through a handler closure, optionally after a delay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use async_trait::async_trait;
use gameshelf_client::constants::http::REQUEST_ID_HEADER;
use gameshelf_client::http::{ApiRequest, ApiResponse, Transport, TransportError};
use http::{Method, StatusCode};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

/// What the transport saw for one request
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub url: Url,
    pub authorization: Option<String>,
    pub request_id: Option<String>,
    pub body: Option<Value>,
}

impl RecordedRequest {
    pub fn has_bearer(&self, token: &str) -> bool {
        self.authorization.as_deref() == Some(&format!("Bearer {token}"))
    }
}

/// Scripted answer
#[derive(Debug, Clone)]
pub enum MockReply {
    Respond {
        status: StatusCode,
        body: Option<Value>,
        delay: Option<Duration>,
    },
    Fail(String),
}

impl MockReply {
    pub fn json(status: u16, body: Value) -> Self {
        Self::Respond {
            status: StatusCode::from_u16(status).unwrap(),
            body: Some(body),
            delay: None,
        }
    }

    pub fn ok(body: Value) -> Self {
        Self::json(200, body)
    }

    pub fn no_content() -> Self {
        Self::Respond {
            status: StatusCode::NO_CONTENT,
            body: None,
            delay: None,
        }
    }

    pub fn unauthorized() -> Self {
        Self::json(401, serde_json::json!({"detail": "Given token not valid for any token type"}))
    }

    pub fn network_failure(message: &str) -> Self {
        Self::Fail(message.to_owned())
    }

    pub fn after(self, delay: Duration) -> Self {
        match self {
            Self::Respond { status, body, .. } => Self::Respond {
                status,
                body,
                delay: Some(delay),
            },
            fail @ Self::Fail(_) => fail,
        }
    }
}

type Handler = dyn Fn(&RecordedRequest) -> MockReply + Send + Sync;

pub struct MockTransport {
    handler: Box<Handler>,
    recorded: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new(
        handler: impl Fn(&RecordedRequest) -> MockReply + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            handler: Box::new(handler),
            recorded: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn count(&self, path: &str) -> usize {
        self.recorded
            .lock()
            .unwrap()
            .iter()
            .filter(|request| request.path == path)
            .count()
    }

    pub fn last(&self, path: &str) -> Option<RecordedRequest> {
        self.recorded
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|request| request.path == path)
            .cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, url: Url, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let header = |name: &str| {
            request
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };
        let recorded = RecordedRequest {
            method: request.method().clone(),
            path: request.path().to_owned(),
            url,
            authorization: header("authorization"),
            request_id: header(REQUEST_ID_HEADER),
            body: request.body().cloned(),
        };
        self.recorded.lock().unwrap().push(recorded.clone());

        match (self.handler)(&recorded) {
            MockReply::Respond {
                status,
                body,
                delay,
            } => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                Ok(body.map_or_else(
                    || ApiResponse::empty(status),
                    |body| ApiResponse::from_json(status, &body),
                ))
            }
            MockReply::Fail(message) => Err(TransportError::new(message)),
        }
    }
}
