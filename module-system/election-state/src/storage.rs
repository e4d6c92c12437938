use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::scratchpad::{StateSnapshot, WorkingSet};

// separator == "/"
const DOMAIN_SEPARATOR: [u8; 1] = [47];

/// A unique identifier for each state variable in a module.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, BorshDeserialize, BorshSerialize, Serialize, Deserialize,
)]
pub struct Prefix {
    prefix: Vec<u8>,
}

impl Prefix {
    /// Creates a prefix from raw bytes.
    pub fn new(prefix: Vec<u8>) -> Self {
        Self { prefix }
    }

    /// Creates the prefix of a module: `module_path/module_name/`.
    pub fn new_module(module_path: &str, module_name: &str) -> Self {
        Self::combine(&[module_path, module_name])
    }

    /// Creates the prefix of a state variable: `module_path/module_name/storage_name/`.
    pub fn new_storage(module_path: &str, module_name: &str, storage_name: &str) -> Self {
        Self::combine(&[module_path, module_name, storage_name])
    }

    fn combine(parts: &[&str]) -> Self {
        let len = parts
            .iter()
            .map(|part| part.len() + DOMAIN_SEPARATOR.len())
            .sum();
        let mut prefix = Vec::with_capacity(len);
        for part in parts {
            prefix.extend(part.as_bytes());
            prefix.extend(DOMAIN_SEPARATOR);
        }
        Self { prefix }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.prefix
    }

    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.prefix))
    }
}

/// The key type used by the backing storage: a [`Prefix`] followed by the
/// encoded key of the state variable (empty for single values).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey {
    key: Vec<u8>,
}

impl StorageKey {
    /// Creates the key of a single value stored directly under `prefix`.
    pub fn singleton(prefix: &Prefix) -> Self {
        Self {
            key: prefix.as_bytes().to_vec(),
        }
    }

    /// Creates the key of a map entry.
    pub fn new(prefix: &Prefix, encoded_key: &[u8]) -> Self {
        let mut key = Vec::with_capacity(prefix.len() + encoded_key.len());
        key.extend(prefix.as_bytes());
        key.extend(encoded_key);
        Self { key }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.key))
    }
}

pub(crate) type Db = HashMap<StorageKey, Vec<u8>>;

/// Storage living in memory for the lifetime of one election.
///
/// Cloning the handle shares the underlying state. All mutations go through a
/// [`WorkingSet`], which holds the write lock until it is committed or
/// reverted, so at most one mutation is in flight at any time. Readers use a
/// [`StateSnapshot`] and never observe a half applied working set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    db: Arc<RwLock<Db>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a [`WorkingSet`], blocking until no other working set or snapshot
    /// is alive.
    pub fn working_set(&self) -> WorkingSet<'_> {
        // Storage is only modified by `WorkingSet::checkpoint`, which never
        // leaves it half written, so a poisoned lock still guards a valid state.
        let db = self.db.write().unwrap_or_else(PoisonError::into_inner);
        WorkingSet::new(db)
    }

    /// Opens a read only view of the committed state.
    pub fn snapshot(&self) -> StateSnapshot<'_> {
        let db = self.db.read().unwrap_or_else(PoisonError::into_inner);
        StateSnapshot::new(db)
    }
}
