//! Block executor: turns an ordered batch of raw transactions into an
//! ordered batch of results.
//!
//! For each transaction, in block order:
//!
//! 1. Decode the raw bytes into a `Command`.
//! 2. On decode failure, record a `TxDecode` failure result and move on.
//! 3. Otherwise apply the command through the write handler and record its
//!    result.
//!
//! One result per input transaction, always. A bad transaction never aborts
//! the block, and there is no rollback: writes from earlier transactions
//! stay applied whatever happens later in the block.

use kvstore_primitives::{
    crypto::tx_hash, decode_tx, types::hash_to_hex, BlockResult, DecodeError, ErrorCode,
    ExecutionResult, KvStore,
};
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::handler::KvStoreHandler;

/// Executes blocks against one store partition.
///
/// Holds only configuration; all state lives in the store passed to
/// `execute_block`. Same store state + same transactions ⇒ same results.
#[derive(Debug, Clone)]
pub struct BlockExecutor {
    handler: KvStoreHandler,
}

impl BlockExecutor {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            handler: KvStoreHandler::new(config.store_key.clone(), config.codespace.clone()),
        }
    }

    /// Execute every transaction of a block in order.
    pub fn execute_block<S, T>(&self, store: &mut S, raw_txs: &[T]) -> BlockResult
    where
        S: KvStore + ?Sized,
        T: AsRef<[u8]>,
    {
        let mut tx_results = Vec::with_capacity(raw_txs.len());

        for (tx_index, raw_tx) in raw_txs.iter().enumerate() {
            let raw_tx = raw_tx.as_ref();
            let result = match decode_tx(raw_tx) {
                Ok(cmd) => self.handler.apply(store, &cmd),
                Err(err) => {
                    warn!(
                        tx_index,
                        tx_hash = %hash_to_hex(&tx_hash(raw_tx)),
                        error = %err,
                        "skipping undecodable transaction"
                    );
                    decode_failure(self.handler.codespace(), &err)
                }
            };
            tx_results.push(result);
        }

        let block = BlockResult { tx_results };
        debug!(
            txs = block.len(),
            succeeded = block.succeeded_count(),
            gas_used = block.gas_used(),
            "executed block"
        );
        block
    }
}

/// Result recorded for a transaction that failed to decode.
///
/// Everything but the code, codespace, and log stays at its zero value.
pub fn decode_failure(codespace: &str, err: &DecodeError) -> ExecutionResult {
    ExecutionResult::failure(ErrorCode::TxDecode, codespace, format!("tx decode failed: {err}"))
}
