//! Engine error types.

use kvstore_primitives::StoreError;

/// Genesis could not be applied.
///
/// Fatal: the application must not start with partial or ambiguous
/// initial state.
#[derive(Debug, thiserror::Error)]
pub enum GenesisError {
    /// The genesis document is not valid JSON of the expected shape.
    #[error("genesis parse error: {0}")]
    Parse(String),

    /// The store refused a genesis write.
    #[error("genesis store error: {0}")]
    Store(#[from] StoreError),
}

/// Top-level error type for the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration is malformed or inconsistent.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// `init_chain` was called on an already initialized application.
    #[error("chain already initialized")]
    AlreadyInitialized,

    /// A block-level call arrived before `init_chain`.
    #[error("chain not initialized")]
    NotInitialized,

    /// Genesis failed; the application stays uninitialized.
    #[error(transparent)]
    Genesis(#[from] GenesisError),

    /// The store failed outside of transaction execution.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Convenience result type for the engine.
pub type AppResult<T> = Result<T, AppError>;
