//! Genesis integration tests: initialization through the application.

mod common;

use kvstore_engine::{AppError, AppState, GenesisError, GenesisState};

use common::*;

#[test]
fn test_sample_genesis_values() {
    let app = sample_app();
    assert_eq!(app.state(), AppState::Ready);
    assert_eq!(app.state_get(b"hello").unwrap(), Some(b"goodbye".to_vec()));
    assert_eq!(app.state_get(b"foo").unwrap(), Some(b"bar".to_vec()));
}

#[test]
fn test_default_app_state_matches_sample_document() {
    let doc = serde_json::to_vec(&GenesisState::default_app_state()).unwrap();
    let app = app_with_genesis(&doc);
    assert_eq!(app.state_get(b"hello").unwrap(), Some(b"goodbye".to_vec()));
    assert_eq!(app.state_get(b"foo").unwrap(), Some(b"bar".to_vec()));
}

#[test]
fn test_duplicate_keys_last_wins() {
    let app = app_with_genesis(&genesis_doc(&[("k", "v1"), ("k", "v2")]));
    assert_eq!(app.state_get(b"k").unwrap(), Some(b"v2".to_vec()));
}

#[test]
fn test_empty_genesis() {
    let app = app_with_genesis(b"");
    assert_eq!(app.state(), AppState::Ready);
    assert_eq!(app.state_get(b"hello").unwrap(), None);
}

#[test]
fn test_malformed_genesis_aborts_with_detail() {
    let mut app = new_app();
    let err = app.init_chain(br#"{"values":[{"key":"a","value":"1"}"#).unwrap_err();

    match &err {
        AppError::Genesis(GenesisError::Parse(detail)) => assert!(!detail.is_empty()),
        other => panic!("expected genesis parse error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("genesis parse error"));
    assert_eq!(app.state(), AppState::Uninitialized);
    assert_eq!(app.state_get(b"a").unwrap(), None);
    assert!(app.store().committed_state().is_empty());
}

#[test]
fn test_genesis_with_unicode_and_empty_value() {
    let app = app_with_genesis(&genesis_doc(&[("ключ", "значение"), ("empty", "")]));
    assert_eq!(
        app.state_get("ключ".as_bytes()).unwrap(),
        Some("значение".as_bytes().to_vec())
    );
    assert_eq!(app.state_get(b"empty").unwrap(), Some(Vec::new()));
}
