//! Execution result types returned to the consensus layer.
//!
//! Every field is consensus-critical: two replicas executing the same block
//! against the same state must produce byte-identical values.

use crate::error::ErrorCode;

/// Result of executing a single transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Result code. `0` = success.
    pub code: u32,
    /// Application-defined return data.
    pub data: Vec<u8>,
    /// Human-readable, deterministic log text.
    pub log: String,
    /// Additional free-form information (not interpreted by consensus).
    pub info: String,
    /// Gas requested by the transaction. The application has no fee model,
    /// so this is always reported as-is.
    pub gas_wanted: i64,
    /// Gas metered while applying the transaction.
    pub gas_used: i64,
    /// Events emitted by the transaction, in emission order.
    pub events: Vec<Event>,
    /// Namespace for `code`. Empty on success.
    pub codespace: String,
}

impl ExecutionResult {
    /// Build a failure result with the given code, codespace, and log.
    ///
    /// Gas, data, and events stay at their zero values.
    pub fn failure(code: ErrorCode, codespace: &str, log: impl Into<String>) -> Self {
        Self {
            code: code.as_u32(),
            log: log.into(),
            codespace: codespace.to_owned(),
            ..Self::default()
        }
    }

    /// Returns true if the transaction executed successfully.
    pub fn succeeded(&self) -> bool {
        self.code == ErrorCode::Ok.as_u32()
    }
}

/// Emitted event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    /// Event type identifier.
    pub kind: String,
    /// Ordered key-value attributes.
    pub attributes: Vec<EventAttribute>,
}

impl Event {
    /// Create an event with no attributes.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, preserving insertion order.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(EventAttribute {
            key: key.into(),
            value: value.into(),
        });
        self
    }
}

/// A single key-value attribute within an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventAttribute {
    pub key: String,
    pub value: String,
}

/// Results for every transaction of a block, in block order.
///
/// `tx_results.len()` always equals the number of transactions submitted,
/// including those that failed to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockResult {
    pub tx_results: Vec<ExecutionResult>,
}

impl BlockResult {
    /// Returns the number of transaction results.
    pub fn len(&self) -> usize {
        self.tx_results.len()
    }

    /// Returns true if the block had no transactions.
    pub fn is_empty(&self) -> bool {
        self.tx_results.is_empty()
    }

    /// Number of transactions that succeeded.
    pub fn succeeded_count(&self) -> usize {
        self.tx_results.iter().filter(|r| r.succeeded()).count()
    }

    /// Sum of gas used across all transactions.
    pub fn gas_used(&self) -> i64 {
        self.tx_results
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.gas_used))
    }
}
