//! `kvstore-engine` — deterministic block execution for the kvstore
//! application.
//!
//! The application accepts raw transactions from a consensus layer,
//! decodes them into key/value writes, applies them to a versioned store,
//! and reports one result per transaction.
//!
//! ## Architecture
//!
//! - [`genesis::GenesisInitializer`]: seeds the store from the genesis document
//! - [`handler::KvStoreHandler`]: applies one decoded command to the store
//! - [`executor::BlockExecutor`]: runs a block's transactions in order
//! - [`app::Application`]: lifecycle and consensus-facing entry points
//! - [`config::AppConfig`]: store partition, codespace, and app name

pub mod config;
pub mod error;
pub mod handler;
pub mod genesis;
pub mod executor;
pub mod app;

// Re-export key types for convenience
pub use app::{AppInfo, AppState, Application};
pub use config::AppConfig;
pub use error::{AppError, AppResult, GenesisError};
pub use executor::BlockExecutor;
pub use genesis::{GenesisEntry, GenesisInitializer, GenesisState};
pub use handler::KvStoreHandler;
