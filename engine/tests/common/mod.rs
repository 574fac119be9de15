//! Shared test helpers for integration tests.
//!
//! Provides application factories, genesis documents, transaction encoding,
//! and log capture used across all integration test files.

#![allow(dead_code)]

use kvstore_engine::{AppConfig, Application, GenesisEntry, GenesisState};
use kvstore_primitives::{encode_write_tx, MemStore};

/// The sample genesis document, as the consensus layer would deliver it.
pub const SAMPLE_GENESIS: &str = r#"{"values":[{"key":"hello","value":"goodbye"},{"key":"foo","value":"bar"}]}"#;

// ── Logging ──

/// Route `tracing` output to the test harness. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ── Application Builders ──

/// Fresh, uninitialized application over an empty in-memory store.
pub fn new_app() -> Application<MemStore> {
    init_tracing();
    Application::new(AppConfig::default(), MemStore::new()).expect("default config is valid")
}

/// Application that has applied `genesis`.
pub fn app_with_genesis(genesis: &[u8]) -> Application<MemStore> {
    let mut app = new_app();
    app.init_chain(genesis).expect("genesis should apply");
    app
}

/// Application initialized with the sample genesis.
pub fn sample_app() -> Application<MemStore> {
    app_with_genesis(SAMPLE_GENESIS.as_bytes())
}

// ── Genesis Builders ──

/// Serialize key/value pairs into a genesis document.
pub fn genesis_doc(pairs: &[(&str, &str)]) -> Vec<u8> {
    let state = GenesisState {
        values: pairs
            .iter()
            .map(|(k, v)| GenesisEntry::new(*k, *v))
            .collect(),
    };
    serde_json::to_vec(&state).expect("genesis serializes")
}

// ── Transaction Encoding ──

/// Encode a UTF-8 key/value write.
pub fn write_tx(key: &str, value: &str) -> Vec<u8> {
    encode_write_tx(key.as_bytes(), value.as_bytes())
}

/// Bytes that are not a valid transaction.
pub fn garbage_tx() -> Vec<u8> {
    b"this is not a transaction".to_vec()
}
