//! Core type aliases and constants for the kvstore application.

use std::fmt::Write;

/// 32-byte hash used for app hashes and transaction hashes.
pub type Hash = [u8; 32];

/// Committed store version (one per finalized block, genesis commits version 1).
pub type Version = u64;

/// A zero-valued hash (32 zero bytes). App hash of an empty store.
pub const ZERO_HASH: Hash = [0u8; 32];

/// Default application name reported by `info`.
pub const DEFAULT_APP_NAME: &str = "kvstore";

/// Default store partition the application writes into.
pub const DEFAULT_STORE_KEY: &str = "main";

/// Default codespace attached to non-zero result codes.
pub const DEFAULT_CODESPACE: &str = "kvstore";

/// Convert a `Hash` to a hex string for display purposes.
pub fn hash_to_hex(hash: &Hash) -> String {
    let mut s = String::with_capacity(66);
    s.push_str("0x");
    for byte in hash {
        let _ = write!(s, "{:02x}", byte);
    }
    s
}

/// Render uninterpreted key/value bytes as text.
///
/// Invalid UTF-8 sequences become U+FFFD, so the output depends only on the
/// input bytes and is identical on every replica.
pub fn render_bytes(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_to_hex() {
        let hash = [0xab; 32];
        let hex = hash_to_hex(&hash);
        assert_eq!(hex.len(), 66);
        assert!(hex.starts_with("0x"));
        assert!(hex[2..].chars().all(|c| c == 'a' || c == 'b'));
    }

    #[test]
    fn test_render_bytes_utf8() {
        assert_eq!(render_bytes(b"foo"), "foo");
    }

    #[test]
    fn test_render_bytes_invalid_utf8_is_stable() {
        let a = render_bytes(&[0x66, 0xff, 0x6f]);
        let b = render_bytes(&[0x66, 0xff, 0x6f]);
        assert_eq!(a, b);
        assert_eq!(a, "f\u{fffd}o");
    }
}
