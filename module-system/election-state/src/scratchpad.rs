use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::sync::{RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::event::Event;
use crate::storage::{Db, StorageKey};

/// Read access to state.
pub trait StateReader {
    /// Returns the raw bytes stored under `key`, if any.
    fn get(&self, key: &StorageKey) -> Option<Vec<u8>>;
}

/// Write access to state.
pub trait StateWriter: StateReader {
    /// Stores `value` under `key`.
    fn set(&mut self, key: &StorageKey, value: Vec<u8>);
}

type RevertableWrites = HashMap<StorageKey, Vec<u8>>;

/// A working set buffers the writes and events of a single call on top of the
/// committed state.
///
/// It holds the storage write lock for its whole lifetime. There are two ways
/// to finish it:
/// 1. [`WorkingSet::checkpoint`] applies every buffered write at once and
///    hands back the events.
/// 2. [`WorkingSet::revert`] drops the writes and events, leaving the storage
///    exactly as it was when the working set was opened.
pub struct WorkingSet<'a> {
    db: RwLockWriteGuard<'a, Db>,
    writes: RevertableWrites,
    events: Vec<Event>,
}

impl<'a> WorkingSet<'a> {
    pub(crate) fn new(db: RwLockWriteGuard<'a, Db>) -> Self {
        Self {
            db,
            writes: Default::default(),
            events: Default::default(),
        }
    }

    /// Commits the buffered writes to the storage and returns the events
    /// emitted while the working set was open.
    pub fn checkpoint(self) -> Vec<Event> {
        let WorkingSet {
            mut db,
            writes,
            events,
        } = self;

        debug!(
            writes = writes.len(),
            events = events.len(),
            "Committing working set"
        );
        db.extend(writes);

        events
    }

    /// Discards the buffered writes and events.
    pub fn revert(self) {
        debug!(
            writes = self.writes.len(),
            events = self.events.len(),
            "Reverting working set"
        );
    }

    /// Adds an event to the working set.
    pub fn add_event(&mut self, key: &str, value: &str) {
        self.events.push(Event::new(key, value));
    }

    /// Returns an immutable slice of all events that have been previously
    /// written to this working set.
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

impl Debug for WorkingSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkingSet")
            .field("pending_writes", &self.writes.len())
            .field("events", &self.events)
            .finish()
    }
}

impl StateReader for WorkingSet<'_> {
    fn get(&self, key: &StorageKey) -> Option<Vec<u8>> {
        self.writes
            .get(key)
            .or_else(|| self.db.get(key))
            .cloned()
    }
}

impl StateWriter for WorkingSet<'_> {
    fn set(&mut self, key: &StorageKey, value: Vec<u8>) {
        self.writes.insert(key.clone(), value);
    }
}

/// A consistent, read only view of the committed state.
///
/// Holds the storage read lock, so no working set can be committed while a
/// snapshot is alive.
pub struct StateSnapshot<'a> {
    db: RwLockReadGuard<'a, Db>,
}

impl<'a> StateSnapshot<'a> {
    pub(crate) fn new(db: RwLockReadGuard<'a, Db>) -> Self {
        Self { db }
    }
}

impl Debug for StateSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateSnapshot")
            .field("entries", &self.db.len())
            .finish()
    }
}

impl StateReader for StateSnapshot<'_> {
    fn get(&self, key: &StorageKey) -> Option<Vec<u8>> {
        self.db.get(key).cloned()
    }
}
