//! Write buffer for uncommitted state.
//!
//! Writes made while a block executes are buffered here and are visible to
//! later reads in the same block. `commit` on the owning store drains the
//! buffer into committed state; `clear` discards it.

use std::collections::BTreeMap;

/// Pending writes layered over committed state.
///
/// `BTreeMap` keeps iteration in key order, so draining is deterministic.
#[derive(Debug, Clone, Default)]
pub struct StateOverlay {
    writes: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl StateOverlay {
    pub fn new() -> Self {
        Self {
            writes: BTreeMap::new(),
        }
    }

    /// Buffer a write. A later write to the same key replaces it.
    pub fn set(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.writes.insert(key, value);
    }

    /// Look up a buffered value. `None` means the caller must fall through
    /// to committed state.
    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.writes.get(key).map(Vec::as_slice)
    }

    /// Consume the overlay, yielding writes in ascending key order.
    pub fn drain(self) -> BTreeMap<Vec<u8>, Vec<u8>> {
        self.writes
    }

    /// Discard all buffered writes.
    pub fn clear(&mut self) {
        self.writes.clear();
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_set_and_get() {
        let mut overlay = StateOverlay::new();
        overlay.set(b"key1".to_vec(), b"value1".to_vec());
        assert_eq!(overlay.get(b"key1"), Some(&b"value1"[..]));
        assert_eq!(overlay.get(b"missing"), None);
    }

    #[test]
    fn test_overlay_overwrite() {
        let mut overlay = StateOverlay::new();
        overlay.set(b"key1".to_vec(), b"v1".to_vec());
        overlay.set(b"key1".to_vec(), b"v2".to_vec());
        assert_eq!(overlay.get(b"key1"), Some(&b"v2"[..]));
        assert_eq!(overlay.len(), 1);
    }

    #[test]
    fn test_overlay_drain_order() {
        let mut overlay = StateOverlay::new();
        overlay.set(b"c".to_vec(), b"3".to_vec());
        overlay.set(b"a".to_vec(), b"1".to_vec());
        overlay.set(b"b".to_vec(), b"2".to_vec());

        let keys: Vec<Vec<u8>> = overlay.drain().into_keys().collect();
        assert_eq!(keys, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn test_overlay_clear() {
        let mut overlay = StateOverlay::new();
        overlay.set(b"key1".to_vec(), b"value1".to_vec());
        assert!(!overlay.is_empty());
        overlay.clear();
        assert!(overlay.is_empty());
    }
}
