//! Consensus-facing application.
//!
//! `Application` owns the store and drives the lifecycle:
//!
//! ```text
//! Uninitialized --init_chain--> Ready --finalize_block / commit--> Ready
//! ```
//!
//! The consensus layer calls `init_chain` once, then for every block
//! `finalize_block` followed by `commit`. All state-changing entry points
//! take `&mut self`, so a block always has exclusive access to the store.

use kvstore_primitives::{
    decode_tx, store::partition_key, types::hash_to_hex, BlockResult, CommitInfo, CommitStore,
    ExecutionResult, Hash, Version,
};
use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::executor::{decode_failure, BlockExecutor};
use crate::genesis::GenesisInitializer;

/// Lifecycle state of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Waiting for `init_chain`.
    Uninitialized,
    /// Genesis applied; blocks may be executed.
    Ready,
}

/// Information reported to the consensus layer on handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub name: String,
    pub last_block_height: Version,
    pub last_app_hash: Hash,
}

/// The kvstore state machine.
pub struct Application<S: CommitStore> {
    config: AppConfig,
    store: S,
    genesis: GenesisInitializer,
    executor: BlockExecutor,
    state: AppState,
}

impl<S: CommitStore> Application<S> {
    /// Create an application over `store`. The configuration is validated
    /// before anything touches the store.
    ///
    /// A store that already holds a committed version has had genesis
    /// applied, so the application resumes in `Ready` from that version.
    pub fn new(config: AppConfig, store: S) -> AppResult<Self> {
        config.validate()?;
        let last = store.last_commit();
        let state = if last.version > 0 {
            info!(
                app = %config.app_name,
                version = last.version,
                app_hash = %hash_to_hex(&last.app_hash),
                "resuming from committed state"
            );
            AppState::Ready
        } else {
            AppState::Uninitialized
        };
        Ok(Self {
            genesis: GenesisInitializer::new(config.store_key.clone()),
            executor: BlockExecutor::new(&config),
            config,
            store,
            state,
        })
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Seed the store from the genesis document.
    ///
    /// On failure every genesis write is discarded and the application stays
    /// `Uninitialized`; the caller is expected to abort startup.
    pub fn init_chain(&mut self, app_state_bytes: &[u8]) -> AppResult<()> {
        if self.state == AppState::Ready {
            return Err(AppError::AlreadyInitialized);
        }

        match self.genesis.init_chain(&mut self.store, app_state_bytes) {
            Ok(entries) => {
                self.state = AppState::Ready;
                info!(app = %self.config.app_name, entries, "chain initialized");
                Ok(())
            }
            Err(err) => {
                self.store.discard();
                error!(app = %self.config.app_name, error = %err, "genesis failed");
                Err(err.into())
            }
        }
    }

    /// Execute a block's transactions in order.
    pub fn finalize_block<T: AsRef<[u8]>>(&mut self, txs: &[T]) -> AppResult<BlockResult> {
        self.ensure_ready()?;
        Ok(self.executor.execute_block(&mut self.store, txs))
    }

    /// Mempool admission check: decode only, no state access.
    pub fn check_tx(&self, raw_tx: &[u8]) -> ExecutionResult {
        match decode_tx(raw_tx) {
            Ok(_) => ExecutionResult::default(),
            Err(err) => decode_failure(&self.config.codespace, &err),
        }
    }

    /// Persist the block's writes as a new store version.
    pub fn commit(&mut self) -> AppResult<CommitInfo> {
        self.ensure_ready()?;
        let info = self.store.commit()?;
        info!(
            version = info.version,
            app_hash = %hash_to_hex(&info.app_hash),
            "committed state"
        );
        Ok(info)
    }

    /// Read a key from the last committed state of the partition.
    pub fn query(&self, key: &[u8]) -> AppResult<Option<Vec<u8>>> {
        let value = self
            .store
            .committed_get(&partition_key(&self.config.store_key, key))?;
        debug!(found = value.is_some(), "query");
        Ok(value)
    }

    /// Read a key from the working state, including uncommitted writes.
    pub fn state_get(&self, key: &[u8]) -> AppResult<Option<Vec<u8>>> {
        Ok(self.store.get(&partition_key(&self.config.store_key, key))?)
    }

    pub fn info(&self) -> AppInfo {
        let last = self.store.last_commit();
        AppInfo {
            name: self.config.app_name.clone(),
            last_block_height: last.version,
            last_app_hash: last.app_hash,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn ensure_ready(&self) -> AppResult<()> {
        match self.state {
            AppState::Ready => Ok(()),
            AppState::Uninitialized => Err(AppError::NotInitialized),
        }
    }
}
