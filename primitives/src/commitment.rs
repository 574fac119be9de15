//! App hash computation.
//!
//! The app hash committed after every block is the root of a binary Merkle
//! tree over all committed entries, taken in ascending key order. Leaves and
//! internal nodes are domain-separated so a leaf can never be confused with
//! an internal node.

use std::collections::BTreeMap;

use crate::crypto::hash_blake3;
use crate::types::{Hash, ZERO_HASH};

/// Domain separator for leaf nodes.
const LEAF_PREFIX: u8 = 0x00;
/// Domain separator for internal nodes.
const INTERNAL_PREFIX: u8 = 0x01;

/// Compute the root hash of a sorted key-value set.
///
/// Empty set returns `ZERO_HASH`. A single entry returns its leaf hash.
pub fn state_root(entries: &BTreeMap<Vec<u8>, Vec<u8>>) -> Hash {
    let leaves: Vec<Hash> = entries.iter().map(|(k, v)| hash_leaf(k, v)).collect();
    root_from_leaves(leaves)
}

/// H(LEAF_PREFIX || key_len_le32 || key || value)
fn hash_leaf(key: &[u8], value: &[u8]) -> Hash {
    let key_len = (key.len() as u32).to_le_bytes();
    let mut data = Vec::with_capacity(1 + 4 + key.len() + value.len());
    data.push(LEAF_PREFIX);
    data.extend_from_slice(&key_len);
    data.extend_from_slice(key);
    data.extend_from_slice(value);
    hash_blake3(&data)
}

/// H(INTERNAL_PREFIX || left || right)
fn hash_internal(left: &Hash, right: &Hash) -> Hash {
    let mut data = [0u8; 1 + 32 + 32];
    data[0] = INTERNAL_PREFIX;
    data[1..33].copy_from_slice(left);
    data[33..65].copy_from_slice(right);
    hash_blake3(&data)
}

/// Pair hashes level by level; an odd trailing node is promoted unchanged.
fn root_from_leaves(mut level: Vec<Hash>) -> Hash {
    if level.is_empty() {
        return ZERO_HASH;
    }

    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => hash_internal(left, right),
                _ => pair[0],
            })
            .collect();
    }

    level[0]
}
