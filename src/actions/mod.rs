// ABOUTME: Asynchronous action handlers wrapping API calls in a requested/fulfilled/rejected lifecycle
// ABOUTME: Phase events are sent to the store; results and errors are returned to the caller unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

//! Action handlers
//!
//! Every handler method is a plain function returning a future. The
//! `Requested` event is sent before the function returns, so it is observable
//! even if the future is never polled. When the future completes it sends
//! `Fulfilled` or `Rejected`, waits for the store to apply it, and then hands
//! the same result back to the caller. Nothing is retried here: the only
//! retry in the system is the transparent replay after a token refresh.

mod game_entries;
mod session;
mod statistics;

use crate::api::ApiClient;
use crate::cache::IssueSeq;
use crate::store::{ActionEvent, ActionKind, Fulfilled, Store};
use gameshelf_core::errors::ApiResult;

/// Issued action awaiting its outcome
#[derive(Debug, Clone, Copy)]
struct ActionTicket {
    seq: IssueSeq,
    kind: ActionKind,
}

/// Entry point for everything a front end can do
#[derive(Clone)]
pub struct Actions {
    api: ApiClient,
    store: Store,
}

impl Actions {
    /// Handlers calling `api` and reporting to `store`
    #[must_use]
    pub const fn new(api: ApiClient, store: Store) -> Self {
        Self { api, store }
    }

    /// Store the handlers report to
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// API client the handlers call
    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Allocate a sequence number and emit `Requested`
    fn begin(&self, kind: ActionKind) -> ActionTicket {
        let seq = self.store.issue_seq();
        self.store.dispatch_now(ActionEvent::Requested { seq, kind });
        ActionTicket { seq, kind }
    }
}

/// Report the outcome to the store and pass it through to the caller
async fn settle<T>(
    store: &Store,
    ticket: ActionTicket,
    result: ApiResult<T>,
    fulfil: impl FnOnce(&T) -> Fulfilled + Send,
) -> ApiResult<T> {
    match result {
        Ok(value) => {
            store
                .dispatch(ActionEvent::Fulfilled {
                    seq: ticket.seq,
                    payload: fulfil(&value),
                })
                .await;
            Ok(value)
        }
        Err(error) => {
            store
                .dispatch(ActionEvent::Rejected {
                    seq: ticket.seq,
                    kind: ticket.kind,
                    error: error.clone(),
                })
                .await;
            Err(error)
        }
    }
}
