//! Hash functions.
//!
//! - SHA-256 identifies raw transactions (the hash the consensus layer uses).
//! - BLAKE3 builds the state commitment.

use crate::types::Hash;

/// Compute BLAKE3 hash of the input data.
pub fn hash_blake3(data: &[u8]) -> Hash {
    *blake3::hash(data).as_bytes()
}

/// Compute SHA-256 hash of the input data.
pub fn hash_sha256(data: &[u8]) -> Hash {
    use sha2::Digest;
    let result = sha2::Sha256::digest(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Hash of a raw transaction.
pub fn tx_hash(raw_tx: &[u8]) -> Hash {
    hash_sha256(raw_tx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        let h = hash_sha256(b"");
        assert_eq!(
            h[..4],
            [0xe3, 0xb0, 0xc4, 0x42],
            "SHA-256 of empty input"
        );
    }

    #[test]
    fn test_blake3_deterministic() {
        assert_eq!(hash_blake3(b"kvstore"), hash_blake3(b"kvstore"));
        assert_ne!(hash_blake3(b"a"), hash_blake3(b"b"));
    }

    #[test]
    fn test_tx_hash_is_sha256() {
        assert_eq!(tx_hash(b"tx"), hash_sha256(b"tx"));
    }
}
