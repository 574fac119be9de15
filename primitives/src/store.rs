//! Key-value store abstraction.
//!
//! The application sees storage through two traits:
//!
//! - [`KvStore`]: read and write the working state of the current block.
//! - [`CommitStore`]: additionally commit the working state to a new
//!   version, discard it, and read what was last committed.
//!
//! [`MemStore`] is the in-memory implementation used by tests and by
//! embedders without a durable backend. [`PrefixStore`] scopes any store to
//! a named partition.

use std::collections::BTreeMap;

use crate::commitment::state_root;
use crate::error::StoreResult;
use crate::state::StateOverlay;
use crate::types::{Hash, Version, ZERO_HASH};

/// Separator between a partition name and the keys stored under it.
pub const PARTITION_SEPARATOR: u8 = b'/';

/// Ordered byte-key → byte-value store.
pub trait KvStore {
    /// Read a value. Reads reflect committed state plus any writes made
    /// since the last commit.
    fn get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>>;

    /// Write a value, replacing any previous one. The write counts as
    /// applied only once this returns `Ok`.
    fn set(&mut self, key: &[u8], value: &[u8]) -> StoreResult<()>;
}

/// Outcome of a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitInfo {
    /// Version that was just committed.
    pub version: Version,
    /// Commitment over the full committed state.
    pub app_hash: Hash,
}

impl Default for CommitInfo {
    fn default() -> Self {
        Self {
            version: 0,
            app_hash: ZERO_HASH,
        }
    }
}

/// A versioned store that can persist its working state.
pub trait CommitStore: KvStore {
    /// Persist all writes since the last commit as a new version.
    fn commit(&mut self) -> StoreResult<CommitInfo>;

    /// Drop all writes since the last commit.
    fn discard(&mut self);

    /// Information about the last commit (`version == 0` before any).
    fn last_commit(&self) -> CommitInfo;

    /// Read a value from committed state only, ignoring pending writes.
    fn committed_get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>>;
}

// ── MemStore ──

/// In-memory versioned store.
///
/// Committed state lives in a `BTreeMap`; pending writes in a
/// `StateOverlay`. Each commit bumps the version by one.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    committed: BTreeMap<Vec<u8>, Vec<u8>>,
    overlay: StateOverlay,
    last_commit: CommitInfo,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed entries, for assertions.
    pub fn committed_state(&self) -> &BTreeMap<Vec<u8>, Vec<u8>> {
        &self.committed
    }

    /// Number of writes pending since the last commit.
    pub fn pending_writes(&self) -> usize {
        self.overlay.len()
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        match self.overlay.get(key) {
            Some(value) => Ok(Some(value.to_vec())),
            None => Ok(self.committed.get(key).cloned()),
        }
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> StoreResult<()> {
        self.overlay.set(key.to_vec(), value.to_vec());
        Ok(())
    }
}

impl CommitStore for MemStore {
    fn commit(&mut self) -> StoreResult<CommitInfo> {
        let writes = std::mem::take(&mut self.overlay).drain();
        self.committed.extend(writes);
        self.last_commit = CommitInfo {
            version: self.last_commit.version.saturating_add(1),
            app_hash: state_root(&self.committed),
        };
        Ok(self.last_commit)
    }

    fn discard(&mut self) {
        self.overlay.clear();
    }

    fn last_commit(&self) -> CommitInfo {
        self.last_commit
    }

    fn committed_get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.committed.get(key).cloned())
    }
}

// ── PrefixStore ──

/// Build the full key of `key` inside partition `name`.
pub fn partition_key(name: &str, key: &[u8]) -> Vec<u8> {
    let mut full = Vec::with_capacity(name.len() + 1 + key.len());
    full.extend_from_slice(name.as_bytes());
    full.push(PARTITION_SEPARATOR);
    full.extend_from_slice(key);
    full
}

/// A store handle scoped to one named partition of a parent store.
///
/// Every key is transparently prefixed with `"{name}/"`, so two partitions
/// never observe each other's writes.
pub struct PrefixStore<'a, S: KvStore + ?Sized> {
    parent: &'a mut S,
    name: &'a str,
}

impl<'a, S: KvStore + ?Sized> PrefixStore<'a, S> {
    pub fn new(parent: &'a mut S, name: &'a str) -> Self {
        Self { parent, name }
    }
}

impl<S: KvStore + ?Sized> KvStore for PrefixStore<'_, S> {
    fn get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        self.parent.get(&partition_key(self.name, key))
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> StoreResult<()> {
        self.parent.set(&partition_key(self.name, key), value)
    }
}
