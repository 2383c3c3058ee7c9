// ABOUTME: Normalized game entry cache keyed by entry id with copy-on-write snapshots
// ABOUTME: Plain replace/upsert/overwrite/evict operations plus issue-order aware variants for the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

//! Entity cache
//!
//! The cache is a value: cloning it is cheap (two `Arc` bumps) and mutating a
//! clone copies the underlying map first, so a snapshot handed to a reader
//! never changes underneath it.
//!
//! Two families of operations exist:
//!
//! - The plain operations ([`EntityCache::replace_all`], [`EntityCache::upsert`],
//!   [`EntityCache::overwrite`], [`EntityCache::evict`]) apply unconditionally.
//! - The `*_as_of` operations take the issue sequence number of the action
//!   that produced the data. A write only lands if no later-issued write or
//!   delete for the same id has already been applied, and a list result only
//!   replaces entries that nothing newer has touched. The store uses these so
//!   that a slow list response cannot resurrect an entry deleted after the
//!   list was requested.

/// Pure read-only views over a cache snapshot
pub mod selectors;

use gameshelf_core::models::{EntryId, GameEntry};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Monotonic number assigned to an action when it is issued
pub type IssueSeq = u64;

/// Last sequenced mutation applied to an id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Written(IssueSeq),
    Evicted(IssueSeq),
}

impl Mark {
    const fn seq(self) -> IssueSeq {
        match self {
            Self::Written(seq) | Self::Evicted(seq) => seq,
        }
    }
}

/// Map from entry id to entry
#[derive(Debug, Clone, Default)]
pub struct EntityCache {
    entries: Arc<HashMap<EntryId, GameEntry>>,
    marks: Arc<HashMap<EntryId, Mark>>,
    synced_as_of: Option<IssueSeq>,
}

impl PartialEq for EntityCache {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl EntityCache {
    /// Empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache holding exactly `entries`
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = GameEntry>) -> Self {
        let mut cache = Self::new();
        cache.replace_all(entries);
        cache
    }

    /// Number of cached entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry by id
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&GameEntry> {
        self.entries.get(&id)
    }

    /// Whether an id is cached
    #[must_use]
    pub fn contains(&self, id: EntryId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Iterate over entries in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &GameEntry> {
        self.entries.values()
    }

    /// Cached ids in ascending order
    #[must_use]
    pub fn ids(&self) -> Vec<EntryId> {
        let mut ids: Vec<EntryId> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Whether two caches share the same underlying map allocation
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Replace the whole cache with `entries`, keyed by id.
    ///
    /// Afterwards the cache holds exactly the listed ids; a repeated id keeps
    /// the last occurrence. Any issue-order bookkeeping is discarded.
    pub fn replace_all(&mut self, entries: impl IntoIterator<Item = GameEntry>) {
        self.entries = Arc::new(entries.into_iter().map(|entry| (entry.id, entry)).collect());
        self.marks = Arc::new(HashMap::new());
        self.synced_as_of = None;
    }

    /// Insert or fully replace the entry under its own id
    pub fn upsert(&mut self, entry: GameEntry) {
        Arc::make_mut(&mut self.entries).insert(entry.id, entry);
    }

    /// Write `entry` under `id` regardless of what is cached there
    pub fn overwrite(&mut self, id: EntryId, entry: GameEntry) {
        Arc::make_mut(&mut self.entries).insert(id, entry);
    }

    /// Remove `id` if cached; removing an absent id is a no-op
    pub fn evict(&mut self, id: EntryId) {
        if self.entries.contains_key(&id) {
            Arc::make_mut(&mut self.entries).remove(&id);
        }
    }

    /// Whether a sequenced mutation issued at `seq` is superseded for `id`
    fn superseded(&self, id: EntryId, seq: IssueSeq) -> bool {
        self.marks.get(&id).is_some_and(|mark| mark.seq() > seq)
    }

    fn mark(&mut self, id: EntryId, mark: Mark) {
        Arc::make_mut(&mut self.marks).insert(id, mark);
    }

    /// [`upsert`](Self::upsert) for a write issued at `seq`.
    ///
    /// Returns `false` if a later-issued write or delete for the same id has
    /// already been applied.
    pub fn upsert_as_of(&mut self, entry: GameEntry, seq: IssueSeq) -> bool {
        self.overwrite_as_of(entry.id, entry, seq)
    }

    /// [`overwrite`](Self::overwrite) for a write issued at `seq`
    pub fn overwrite_as_of(&mut self, id: EntryId, entry: GameEntry, seq: IssueSeq) -> bool {
        if self.superseded(id, seq) {
            debug!(entry.id = id, action.seq = seq, "Skipping superseded write");
            return false;
        }
        self.overwrite(id, entry);
        self.mark(id, Mark::Written(seq));
        true
    }

    /// [`evict`](Self::evict) for a delete issued at `seq`; leaves a tombstone
    pub fn evict_as_of(&mut self, id: EntryId, seq: IssueSeq) -> bool {
        if self.superseded(id, seq) {
            debug!(entry.id = id, action.seq = seq, "Skipping superseded delete");
            return false;
        }
        self.evict(id);
        self.mark(id, Mark::Evicted(seq));
        true
    }

    /// Reconcile with a full list fetched by an action issued at `seq`.
    ///
    /// The list is authoritative except for ids written or deleted by actions
    /// issued after it: those keep their local state. A list issued before
    /// the last applied list is ignored entirely. Returns `false` when ignored.
    pub fn replace_all_as_of(
        &mut self,
        entries: impl IntoIterator<Item = GameEntry>,
        seq: IssueSeq,
    ) -> bool {
        if self.synced_as_of.is_some_and(|synced| synced > seq) {
            debug!(action.seq = seq, "Ignoring list result older than the last sync");
            return false;
        }

        let mut next: HashMap<EntryId, GameEntry> = HashMap::new();
        for entry in entries {
            if !self.superseded(entry.id, seq) {
                next.insert(entry.id, entry);
            }
        }

        for (id, mark) in self.marks.iter() {
            if let Mark::Written(written) = mark {
                if *written > seq {
                    if let Some(local) = self.entries.get(id) {
                        next.insert(*id, local.clone());
                    }
                }
            }
        }

        self.entries = Arc::new(next);
        Arc::make_mut(&mut self.marks).retain(|_, mark| mark.seq() > seq);
        self.synced_as_of = Some(seq);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gameshelf_core::models::GameEntryStatus;
    use std::collections::BTreeSet;

    fn entry(id: EntryId, status: GameEntryStatus) -> GameEntry {
        GameEntry {
            id,
            game_id: id * 10,
            user_id: 1,
            status,
            rating: None,
            platforms: BTreeSet::new(),
            review: None,
            game_name: None,
        }
    }

    #[test]
    fn test_mutation_does_not_affect_snapshot() {
        let mut cache = EntityCache::from_entries([entry(1, GameEntryStatus::Backlog)]);
        let snapshot = cache.clone();
        assert!(cache.shares_storage_with(&snapshot));

        cache.evict(1);

        assert!(snapshot.contains(1));
        assert!(!cache.contains(1));
        assert!(!cache.shares_storage_with(&snapshot));
    }

    #[test]
    fn test_evict_absent_keeps_storage() {
        let mut cache = EntityCache::from_entries([entry(1, GameEntryStatus::Backlog)]);
        let snapshot = cache.clone();
        cache.evict(99);
        assert!(cache.shares_storage_with(&snapshot));
    }

    #[test]
    fn test_superseded_write_is_skipped() {
        let mut cache = EntityCache::new();
        assert!(cache.evict_as_of(5, 8));
        assert!(!cache.upsert_as_of(entry(5, GameEntryStatus::Playing), 6));
        assert!(!cache.contains(5));
    }

    #[test]
    fn test_older_list_is_ignored_after_newer_sync() {
        let mut cache = EntityCache::new();
        assert!(cache.replace_all_as_of([entry(1, GameEntryStatus::Playing)], 10));
        assert!(!cache.replace_all_as_of([entry(2, GameEntryStatus::Playing)], 4));
        assert_eq!(cache.ids(), vec![1]);
    }
}
