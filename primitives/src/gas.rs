//! Gas metering for transaction results.
//!
//! The application has no fee model: gas is metered only so that each
//! `ExecutionResult` can report a deterministic `gas_used`. Nothing is
//! rejected for running out of gas.

/// Flat cost of a store write.
pub const G_WRITE_FLAT: u64 = 2000;

/// Per-byte cost of a store write (key + value bytes).
pub const G_WRITE_PER_BYTE: u64 = 30;

/// Compute the gas cost for a store write.
pub fn gas_cost_write(key_len: usize, value_len: usize) -> u64 {
    let bytes = (key_len as u64).saturating_add(value_len as u64);
    G_WRITE_FLAT.saturating_add(bytes.saturating_mul(G_WRITE_PER_BYTE))
}

/// Accumulates gas for a single transaction.
///
/// Pure integer arithmetic, saturating on overflow, so the same
/// transaction always reports the same amount on every replica.
#[derive(Debug, Clone, Default)]
pub struct GasMeter {
    consumed: u64,
}

impl GasMeter {
    pub fn new() -> Self {
        Self { consumed: 0 }
    }

    /// Add `amount` to the consumed total.
    pub fn consume(&mut self, amount: u64) {
        self.consumed = self.consumed.saturating_add(amount);
    }

    /// Returns the total gas consumed so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Consumed gas in the signed representation used by `ExecutionResult`.
    pub fn consumed_i64(&self) -> i64 {
        i64::try_from(self.consumed).unwrap_or(i64::MAX)
    }
}
