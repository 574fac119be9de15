//! Key/value write handler.
//!
//! The only code path that mutates application state during block
//! execution. Every result field is derived from the command bytes alone,
//! so replicas produce byte-identical results.

use kvstore_primitives::{
    gas::gas_cost_write,
    types::render_bytes,
    Command, ErrorCode, Event, ExecutionResult, GasMeter, KvStore, PrefixStore, WriteCommand,
};
use tracing::{debug, warn};

/// Event type emitted for every applied write.
pub const EVENT_KIND: &str = "kvstore";

/// Applies decoded commands to one store partition.
#[derive(Debug, Clone)]
pub struct KvStoreHandler {
    store_key: String,
    codespace: String,
}

impl KvStoreHandler {
    pub fn new(store_key: impl Into<String>, codespace: impl Into<String>) -> Self {
        Self {
            store_key: store_key.into(),
            codespace: codespace.into(),
        }
    }

    /// Partition this handler writes into.
    pub fn store_key(&self) -> &str {
        &self.store_key
    }

    /// Codespace attached to failure codes.
    pub fn codespace(&self) -> &str {
        &self.codespace
    }

    /// Apply one command to `store` and report the outcome.
    ///
    /// Never panics: a write the store refuses becomes an `Internal`
    /// failure result.
    pub fn apply<S: KvStore + ?Sized>(&self, store: &mut S, cmd: &Command) -> ExecutionResult {
        match cmd {
            Command::Write(write) => self.apply_write(store, write),
        }
    }

    fn apply_write<S: KvStore + ?Sized>(&self, store: &mut S, cmd: &WriteCommand) -> ExecutionResult {
        let mut gas = GasMeter::new();
        gas.consume(gas_cost_write(cmd.key().len(), cmd.value().len()));

        let key = render_bytes(cmd.key());
        let value = render_bytes(cmd.value());

        let mut partition = PrefixStore::new(store, &self.store_key);
        if let Err(err) = partition.set(cmd.key(), cmd.value()) {
            warn!(store = %self.store_key, %key, error = %err, "store rejected write");
            return ExecutionResult {
                gas_used: gas.consumed_i64(),
                ..ExecutionResult::failure(
                    ErrorCode::Internal,
                    &self.codespace,
                    format!("store write failed: {err}"),
                )
            };
        }

        debug!(store = %self.store_key, %key, %value, "applied write");

        let event = Event::new(EVENT_KIND)
            .with_attribute("action", "set")
            .with_attribute("key", key.clone())
            .with_attribute("value", value.clone());

        ExecutionResult {
            code: ErrorCode::Ok.as_u32(),
            log: format!("set {key}={value}"),
            gas_used: gas.consumed_i64(),
            events: vec![event],
            ..ExecutionResult::default()
        }
    }
}
