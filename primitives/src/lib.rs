//! `kvstore-primitives` — foundational types for the kvstore application.
//!
//! This crate provides the decoded command types, per-transaction result
//! types, result codes and errors, the transaction wire codec, gas metering,
//! and the versioned key-value store abstraction shared by the engine.

pub mod types;
pub mod error;
pub mod command;
pub mod codec;
pub mod execution;
pub mod gas;
pub mod crypto;
pub mod commitment;
pub mod state;
pub mod store;

// Re-export commonly used types at the crate root for convenience.
pub use types::{Hash, Version, ZERO_HASH};
pub use error::{DecodeError, ErrorCode, StoreError, StoreResult};
pub use command::{Command, WriteCommand};
pub use codec::{decode_tx, encode_tx, encode_write_tx};
pub use execution::{BlockResult, Event, EventAttribute, ExecutionResult};
pub use gas::GasMeter;
pub use state::StateOverlay;
pub use store::{CommitInfo, CommitStore, KvStore, MemStore, PrefixStore};
