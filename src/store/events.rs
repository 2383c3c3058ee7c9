// ABOUTME: Lifecycle events emitted by asynchronous action handlers
// ABOUTME: Requested, Fulfilled, and Rejected phases keyed by the action's issue sequence number
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

use crate::cache::IssueSeq;
use gameshelf_core::errors::ApiError;
use gameshelf_core::models::{EntryId, GameEntry, User, UserStatistics};
use std::fmt;

/// Which action an event belongs to
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionKind {
    /// List game entries
    FetchEntries,
    /// Create a game entry
    CreateEntry,
    /// Update a game entry
    UpdateEntry,
    /// Delete a game entry
    DeleteEntry,
    /// Load the user's statistics
    FetchStatistics,
    /// Load the user's profile
    FetchSelfUser,
    /// Log in
    Login,
    /// Register and log in
    Register,
    /// Log out
    Logout,
}

impl ActionKind {
    /// Stable action name for logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FetchEntries => "game_entries/list",
            Self::CreateEntry => "game_entries/create",
            Self::UpdateEntry => "game_entries/update",
            Self::DeleteEntry => "game_entries/delete",
            Self::FetchStatistics => "users/statistics",
            Self::FetchSelfUser => "users/self",
            Self::Login => "session/login",
            Self::Register => "session/register",
            Self::Logout => "session/logout",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful action result, carrying what the reducer needs to apply it
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum Fulfilled {
    /// Full entry list from the server
    EntriesListed(Vec<GameEntry>),
    /// Entry created by the server
    EntryCreated(GameEntry),
    /// Entry as submitted by the client
    EntryUpdated(GameEntry),
    /// Entry confirmed deleted
    EntryDeleted(EntryId),
    /// Fresh statistics
    StatisticsLoaded(UserStatistics),
    /// Current user's profile
    SelfUserLoaded(User),
    /// Credentials stored
    LoggedIn,
    /// Account created and credentials stored
    Registered(User),
    /// Credentials cleared
    LoggedOut,
}

impl Fulfilled {
    /// Action this result completes
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::EntriesListed(_) => ActionKind::FetchEntries,
            Self::EntryCreated(_) => ActionKind::CreateEntry,
            Self::EntryUpdated(_) => ActionKind::UpdateEntry,
            Self::EntryDeleted(_) => ActionKind::DeleteEntry,
            Self::StatisticsLoaded(_) => ActionKind::FetchStatistics,
            Self::SelfUserLoaded(_) => ActionKind::FetchSelfUser,
            Self::LoggedIn => ActionKind::Login,
            Self::Registered(_) => ActionKind::Register,
            Self::LoggedOut => ActionKind::Logout,
        }
    }

    /// Whether applying this result writes entries, statistics or the user
    #[must_use]
    pub const fn carries_session_data(&self) -> bool {
        !matches!(self, Self::LoggedIn | Self::LoggedOut)
    }
}

/// One lifecycle phase of an action
#[derive(Debug, Clone)]
pub enum ActionEvent {
    /// Emitted synchronously when the action is invoked
    Requested {
        /// Issue sequence number
        seq: IssueSeq,
        /// Action invoked
        kind: ActionKind,
    },
    /// The call succeeded
    Fulfilled {
        /// Issue sequence number of the originating request
        seq: IssueSeq,
        /// Result to apply
        payload: Fulfilled,
    },
    /// The call failed
    Rejected {
        /// Issue sequence number of the originating request
        seq: IssueSeq,
        /// Action that failed
        kind: ActionKind,
        /// Why it failed
        error: ApiError,
    },
}

impl ActionEvent {
    /// Issue sequence number of the action this event belongs to
    #[must_use]
    pub const fn seq(&self) -> IssueSeq {
        match self {
            Self::Requested { seq, .. }
            | Self::Fulfilled { seq, .. }
            | Self::Rejected { seq, .. } => *seq,
        }
    }

    /// Phase name for logs
    #[must_use]
    pub const fn phase(&self) -> &'static str {
        match self {
            Self::Requested { .. } => "requested",
            Self::Fulfilled { .. } => "fulfilled",
            Self::Rejected { .. } => "rejected",
        }
    }

    /// Action this event belongs to
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::Requested { kind, .. } | Self::Rejected { kind, .. } => *kind,
            Self::Fulfilled { payload, .. } => payload.kind(),
        }
    }
}
