//! Result codes and error types for the kvstore application.
//!
//! `ErrorCode` values are reported to the consensus layer inside each
//! `ExecutionResult` and must never change once a chain is running.

use std::fmt;

/// Per-transaction result codes.
///
/// `0` = OK, non-zero = failure. Non-zero codes are always paired with the
/// application's codespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ErrorCode {
    Ok = 0,
    Internal = 1,
    TxDecode = 2,
}

impl ErrorCode {
    /// Return the u32 representation of this code.
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Returns true if this is the `Ok` variant.
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Internal => write!(f, "ERR_INTERNAL"),
            Self::TxDecode => write!(f, "ERR_TX_DECODE"),
        }
    }
}

/// Raw transaction bytes could not be turned into a command.
///
/// Recoverable: the block executor converts it into a failed result and
/// moves on to the next transaction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The buffer is not a valid protobuf encoding of a transaction.
    #[error("malformed transaction: {0}")]
    Malformed(String),

    /// The envelope decoded but carries no command.
    #[error("transaction carries no command")]
    MissingCommand,
}

impl From<prost::DecodeError> for DecodeError {
    fn from(err: prost::DecodeError) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// The store refused to acknowledge a write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backend rejected the write.
    #[error("write rejected: {0}")]
    WriteRejected(String),

    /// The backend failed while committing a new version.
    #[error("commit failed: {0}")]
    CommitFailed(String),
}

/// Convenience result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
