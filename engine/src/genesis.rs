//! Genesis state and chain initialization.
//!
//! The genesis document is JSON:
//!
//! ```json
//! { "values": [ { "key": "hello", "value": "goodbye" } ] }
//! ```
//!
//! Entries are written in document order, so a later duplicate key wins.
//! The whole document is parsed before the first write; a malformed
//! document writes nothing.

use kvstore_primitives::{KvStore, PrefixStore};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::GenesisError;

/// One key/value pair to seed at genesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisEntry {
    pub key: String,
    pub value: String,
}

impl GenesisEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Initial application state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    #[serde(default)]
    pub values: Vec<GenesisEntry>,
}

impl GenesisState {
    /// Parse a genesis document.
    ///
    /// An empty (or whitespace-only) document is an empty genesis.
    pub fn from_json(bytes: &[u8]) -> Result<Self, GenesisError> {
        // Genesis tooling emits a zero-length app state for chains that start
        // empty; that is not a malformed document.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes).map_err(|err| GenesisError::Parse(err.to_string()))
    }

    /// The sample genesis used by local networks and tests.
    pub fn default_app_state() -> Self {
        Self {
            values: vec![
                GenesisEntry::new("hello", "goodbye"),
                GenesisEntry::new("foo", "bar"),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Seeds one store partition from a genesis document.
#[derive(Debug, Clone)]
pub struct GenesisInitializer {
    store_key: String,
}

impl GenesisInitializer {
    pub fn new(store_key: impl Into<String>) -> Self {
        Self {
            store_key: store_key.into(),
        }
    }

    /// Parse `app_state_bytes` and write every entry into the partition.
    ///
    /// Returns the number of entries applied.
    pub fn init_chain<S: KvStore + ?Sized>(
        &self,
        store: &mut S,
        app_state_bytes: &[u8],
    ) -> Result<usize, GenesisError> {
        let genesis = GenesisState::from_json(app_state_bytes)?;
        self.apply(store, &genesis)?;
        Ok(genesis.len())
    }

    /// Write an already parsed genesis state into the partition.
    pub fn apply<S: KvStore + ?Sized>(
        &self,
        store: &mut S,
        genesis: &GenesisState,
    ) -> Result<(), GenesisError> {
        let mut partition = PrefixStore::new(store, &self.store_key);
        for entry in &genesis.values {
            partition.set(entry.key.as_bytes(), entry.value.as_bytes())?;
        }
        info!(store = %self.store_key, entries = genesis.len(), "applied genesis state");
        Ok(())
    }
}
