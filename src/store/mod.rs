// ABOUTME: Application store owning the entity cache, statistics, and session user
// ABOUTME: A single reducer task applies action events in arrival order and publishes immutable snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

//! Store
//!
//! Action handlers never touch state directly. They send [`ActionEvent`]s
//! over an unbounded channel to one reducer task, which applies them in the
//! order they arrive and publishes a new [`StoreSnapshot`] after each one.
//! Readers either take the latest snapshot or subscribe to changes through a
//! `watch` channel.

/// Action lifecycle events
pub mod events;

pub use events::{ActionEvent, ActionKind, Fulfilled};

use crate::cache::{EntityCache, IssueSeq};
use crate::logging::ClientLogger;
use gameshelf_core::errors::ApiError;
use gameshelf_core::models::{User, UserStatistics};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tracing::{debug, info};

/// Capacity of the lifecycle event tap
const EVENT_TAP_CAPACITY: usize = 256;

/// Most recent failed action
#[derive(Debug, Clone)]
pub struct ActionFailure {
    /// Issue sequence number of the failed action
    pub seq: IssueSeq,
    /// Action that failed
    pub kind: ActionKind,
    /// Failure reported to the caller
    pub error: ApiError,
}

/// Immutable view of the store after some number of applied events
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    /// Number of events applied so far
    pub revision: u64,
    /// Normalized game entries
    pub entries: EntityCache,
    /// Latest statistics, once fetched
    pub statistics: Option<UserStatistics>,
    /// Current user, once fetched
    pub user: Option<User>,
    /// Actions requested but not yet settled
    pub pending: BTreeMap<IssueSeq, ActionKind>,
    /// Last rejection, cleared by the next fulfilment of the same action
    pub last_failure: Option<ActionFailure>,
    /// Set when a refresh failed and the user has to log in again
    pub session_expired: bool,
    statistics_as_of: Option<IssueSeq>,
    /// Actions issued before the last logout or expiry cannot repopulate session data
    session_floor: IssueSeq,
}

impl StoreSnapshot {
    /// Whether any action of `kind` is in flight
    #[must_use]
    pub fn is_loading(&self, kind: ActionKind) -> bool {
        self.pending.values().any(|pending| *pending == kind)
    }

    /// Id of the current user, if known
    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|user| user.id)
    }

    fn reset_session(&mut self, seq: IssueSeq) {
        self.session_floor = self.session_floor.max(seq);
        self.entries = EntityCache::new();
        self.statistics = None;
        self.statistics_as_of = None;
        self.user = None;
    }
}

/// Apply one event to a snapshot.
///
/// `Requested` only records the action as pending and `Rejected` never
/// touches cached data, except that an expired session drops everything
/// belonging to the old session. `Fulfilled` runs the matching cache
/// operation using the action's issue sequence number.
///
/// Logout and session expiry raise a floor: results carrying entries,
/// statistics or the user from actions issued before the reset are dropped.
pub fn reduce(state: &mut StoreSnapshot, event: ActionEvent) {
    match event {
        ActionEvent::Requested { seq, kind } => {
            state.pending.insert(seq, kind);
        }
        ActionEvent::Fulfilled { seq, payload } => {
            state.pending.remove(&seq);
            if state
                .last_failure
                .as_ref()
                .is_some_and(|failure| failure.kind == payload.kind())
            {
                state.last_failure = None;
            }
            if seq < state.session_floor && payload.carries_session_data() {
                debug!(
                    seq,
                    kind = payload.kind().as_str(),
                    "Dropping result issued before session reset"
                );
                return;
            }
            apply_fulfilled(state, seq, payload);
        }
        ActionEvent::Rejected { seq, kind, error } => {
            state.pending.remove(&seq);
            if matches!(error, ApiError::SessionExpired) && seq >= state.session_floor {
                state.reset_session(seq);
                state.session_expired = true;
            }
            state.last_failure = Some(ActionFailure { seq, kind, error });
        }
    }
}

fn apply_fulfilled(state: &mut StoreSnapshot, seq: IssueSeq, payload: Fulfilled) {
    match payload {
        Fulfilled::EntriesListed(entries) => {
            state.entries.replace_all_as_of(entries, seq);
        }
        Fulfilled::EntryCreated(entry) => {
            state.entries.upsert_as_of(entry, seq);
        }
        Fulfilled::EntryUpdated(entry) => {
            state.entries.overwrite_as_of(entry.id, entry, seq);
        }
        Fulfilled::EntryDeleted(id) => {
            state.entries.evict_as_of(id, seq);
        }
        Fulfilled::StatisticsLoaded(statistics) => {
            if !matches!(state.statistics_as_of, Some(applied) if applied > seq) {
                state.statistics = Some(statistics);
                state.statistics_as_of = Some(seq);
            }
        }
        Fulfilled::SelfUserLoaded(user) | Fulfilled::Registered(user) => {
            state.user = Some(user);
            state.session_expired = false;
        }
        Fulfilled::LoggedIn => {
            state.session_expired = false;
        }
        Fulfilled::LoggedOut => {
            state.reset_session(seq);
            state.session_expired = false;
            state.last_failure = None;
        }
    }
}

struct Envelope {
    event: ActionEvent,
    applied: Option<oneshot::Sender<u64>>,
}

/// Handle to the store. Cheap to clone; every clone talks to the same reducer.
#[derive(Clone)]
pub struct Store {
    sender: mpsc::UnboundedSender<Envelope>,
    snapshots: watch::Receiver<Arc<StoreSnapshot>>,
    events: broadcast::Sender<ActionEvent>,
    next_seq: Arc<AtomicU64>,
}

impl Store {
    /// Start the reducer task on the current tokio runtime
    #[must_use]
    pub fn spawn() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (publisher, snapshots) = watch::channel(Arc::new(StoreSnapshot::default()));
        let (events, _) = broadcast::channel(EVENT_TAP_CAPACITY);

        tokio::spawn(run_reducer(receiver, publisher, events.clone()));
        info!("Store reducer started");

        Self {
            sender,
            snapshots,
            events,
            next_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Latest published snapshot
    #[must_use]
    pub fn snapshot(&self) -> Arc<StoreSnapshot> {
        Arc::clone(&self.snapshots.borrow())
    }

    /// Receiver notified after every applied event
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<StoreSnapshot>> {
        self.snapshots.clone()
    }

    /// Receiver of every applied lifecycle event, in application order
    #[must_use]
    pub fn subscribe_events(&self) -> broadcast::Receiver<ActionEvent> {
        self.events.subscribe()
    }

    /// Derive a value from the latest snapshot
    pub fn select<T>(&self, selector: impl FnOnce(&StoreSnapshot) -> T) -> T {
        selector(&self.snapshots.borrow())
    }

    /// Allocate the next issue sequence number (starting at 1)
    #[must_use]
    pub fn issue_seq(&self) -> IssueSeq {
        self.next_seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Queue an event without waiting for it to be applied
    pub fn dispatch_now(&self, event: ActionEvent) {
        if self
            .sender
            .send(Envelope {
                event,
                applied: None,
            })
            .is_err()
        {
            debug!("Store reducer is gone, dropping event");
        }
    }

    /// Queue an event and wait until the reducer has applied it.
    ///
    /// Returns the revision of the snapshot that includes the event.
    pub async fn dispatch(&self, event: ActionEvent) -> u64 {
        let (tx, rx) = oneshot::channel();
        if self
            .sender
            .send(Envelope {
                event,
                applied: Some(tx),
            })
            .is_err()
        {
            debug!("Store reducer is gone, dropping event");
            return self.snapshots.borrow().revision;
        }
        match rx.await {
            Ok(revision) => revision,
            Err(_) => self.snapshots.borrow().revision,
        }
    }
}

async fn run_reducer(
    mut receiver: mpsc::UnboundedReceiver<Envelope>,
    publisher: watch::Sender<Arc<StoreSnapshot>>,
    events: broadcast::Sender<ActionEvent>,
) {
    let mut current = Arc::clone(&publisher.borrow());

    while let Some(Envelope { event, applied }) = receiver.recv().await {
        let failure = match &event {
            ActionEvent::Rejected { error, .. } => Some(error.to_string()),
            _ => None,
        };
        ClientLogger::log_action(
            event.kind().as_str(),
            event.seq(),
            event.phase(),
            failure.as_deref(),
        );

        let tap = (events.receiver_count() > 0).then(|| event.clone());

        let mut next = StoreSnapshot::clone(&current);
        reduce(&mut next, event);
        next.revision += 1;
        current = Arc::new(next);
        publisher.send_replace(Arc::clone(&current));

        if let Some(event) = tap {
            // Lagging or departed tap receivers are not the reducer's concern
            let _ = events.send(event);
        }
        if let Some(ack) = applied {
            let _ = ack.send(current.revision);
        }
    }

    debug!("Store reducer stopped");
}
