// ABOUTME: Single-flight token refresh shared by every request that receives a 401
// ABOUTME: One refresh call at a time; concurrent 401s wait for its outcome instead of refreshing again
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use super::request::ApiRequest;
use super::transport::Transport;
use crate::credentials::CredentialStore;
use crate::logging::ClientLogger;
use gameshelf_core::constants::endpoints::REFRESH_PATH;
use gameshelf_core::errors::{ApiError, ApiResult};
use gameshelf_core::models::{RefreshRequest, RefreshResponse};
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};
use url::Url;

/// Outcome delivered to every waiter: the access token to replay with
type RefreshOutcome = ApiResult<String>;

/// Observable coordinator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStatus {
    /// No refresh in flight
    Idle,
    /// A refresh call is outstanding
    Refreshing,
}

enum Phase {
    Idle,
    Refreshing {
        waiters: Vec<oneshot::Sender<RefreshOutcome>>,
    },
}

struct RefreshState {
    phase: Phase,
    /// Bumped every time a refresh settles
    generation: u64,
}

/// Snapshot of the refresh generation taken before a request is sent.
///
/// A 401 carrying an older ticket was answered for credentials that have
/// since been replaced, so it is replayed with the current pair instead of
/// triggering another refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

enum Next {
    Wait(oneshot::Receiver<RefreshOutcome>),
    Lead,
    UseCurrent,
}

/// Serializes token refreshes for one credential store.
///
/// # States
///
/// - **Idle**: the first 401 moves to `Refreshing` and becomes the leader,
///   issuing exactly one refresh call with the current refresh token.
/// - **Refreshing**: further 401s queue as waiters.
///
/// When the call settles the coordinator returns to `Idle` and hands every
/// waiter the same outcome. On failure the credential store is cleared and
/// everyone receives [`ApiError::SessionExpired`].
pub struct RefreshCoordinator {
    state: Mutex<RefreshState>,
    base_url: Url,
    transport: Arc<dyn Transport>,
    credentials: Arc<dyn CredentialStore>,
}

impl RefreshCoordinator {
    /// Coordinator refreshing through `transport` against `base_url`
    #[must_use]
    pub fn new(
        base_url: Url,
        transport: Arc<dyn Transport>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            state: Mutex::new(RefreshState {
                phase: Phase::Idle,
                generation: 0,
            }),
            base_url,
            transport,
            credentials,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, RefreshState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current state
    #[must_use]
    pub fn status(&self) -> RefreshStatus {
        match self.lock_state().phase {
            Phase::Idle => RefreshStatus::Idle,
            Phase::Refreshing { .. } => RefreshStatus::Refreshing,
        }
    }

    /// Capture the current generation before sending a request
    #[must_use]
    pub fn ticket(&self) -> RefreshTicket {
        RefreshTicket(self.lock_state().generation)
    }

    /// Recover from a 401 received for a request sent under `ticket`.
    ///
    /// Returns the access token the request should be replayed with.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SessionExpired` if the refresh failed, or a storage
    /// error if the new pair could not be persisted
    pub async fn recover(&self, ticket: RefreshTicket) -> RefreshOutcome {
        let next = {
            let mut guard = self.lock_state();
            let state = &mut *guard;
            let stale = state.generation != ticket.0;
            if let Phase::Refreshing { waiters } = &mut state.phase {
                let (tx, rx) = oneshot::channel();
                waiters.push(tx);
                debug!(refresh.waiters = waiters.len(), "Queued behind in-flight refresh");
                Next::Wait(rx)
            } else if stale {
                Next::UseCurrent
            } else {
                state.phase = Phase::Refreshing {
                    waiters: Vec::new(),
                };
                Next::Lead
            }
        };

        match next {
            Next::Wait(rx) => rx.await.unwrap_or_else(|_| {
                Err(ApiError::network(
                    REFRESH_PATH,
                    "refresh attempt was abandoned",
                ))
            }),
            // A failed refresh cleared the store, so an empty store means expired
            Next::UseCurrent => match self.credentials.get().await? {
                Some(pair) => Ok(pair.access),
                None => Err(ApiError::SessionExpired),
            },
            Next::Lead => {
                let mut guard = LeaderGuard {
                    coordinator: self,
                    settled: false,
                };
                let outcome = self.refresh_credentials().await;
                guard.settle(&outcome);
                outcome
            }
        }
    }

    /// Exchange the stored refresh token for a new pair
    async fn refresh_credentials(&self) -> RefreshOutcome {
        let Some(current) = self.credentials.get().await? else {
            ClientLogger::log_auth_event("refresh", false, Some("no stored credentials"));
            return Err(ApiError::SessionExpired);
        };

        info!("Access token rejected, refreshing session");
        match self.call_refresh(&current.refresh).await {
            Ok(response) => {
                let pair = response.into_pair(&current.refresh);
                let access = pair.access.clone();
                self.credentials.set(pair).await?;
                ClientLogger::log_auth_event("refresh", true, None);
                Ok(access)
            }
            Err(error) => {
                ClientLogger::log_auth_event("refresh", false, Some(&error.to_string()));
                if let Err(clear_error) = self.credentials.clear().await {
                    warn!("Failed to clear credentials after refresh failure: {}", clear_error);
                }
                Err(ApiError::SessionExpired)
            }
        }
    }

    async fn call_refresh(&self, refresh_token: &str) -> ApiResult<RefreshResponse> {
        let request = ApiRequest::post(REFRESH_PATH).json(&RefreshRequest {
            refresh: refresh_token,
        })?;
        let url = request.resolve(&self.base_url)?;
        let response = self
            .transport
            .send(url, &request)
            .await
            .map_err(|e| ApiError::network(REFRESH_PATH, e.to_string()))?;
        response
            .error_for_status(REFRESH_PATH)?
            .decode(REFRESH_PATH)
    }
}

/// Returns the coordinator to `Idle` even if the leading future is dropped mid-refresh
struct LeaderGuard<'a> {
    coordinator: &'a RefreshCoordinator,
    settled: bool,
}

impl LeaderGuard<'_> {
    fn settle(&mut self, outcome: &RefreshOutcome) {
        let waiters = {
            let mut state = self.coordinator.lock_state();
            state.generation += 1;
            take_waiters(&mut state)
        };
        self.settled = true;
        debug!(refresh.waiters = waiters.len(), "Refresh settled, releasing waiters");
        for waiter in waiters {
            // A waiter whose request was dropped no longer listens
            let _ = waiter.send(outcome.clone());
        }
    }
}

impl Drop for LeaderGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            // Dropping the senders wakes every waiter with an error
            let mut state = self.coordinator.lock_state();
            drop(take_waiters(&mut state));
        }
    }
}

fn take_waiters(state: &mut RefreshState) -> Vec<oneshot::Sender<RefreshOutcome>> {
    match mem::replace(&mut state.phase, Phase::Idle) {
        Phase::Refreshing { waiters } => waiters,
        Phase::Idle => Vec::new(),
    }
}
