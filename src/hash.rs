//! SHA-256 string hashing.
//!
//! Digests are rendered as 64 lowercase hex characters, the same form used
//! for content hashes elsewhere in the crate's callers.

use sha2::{Digest, Sha256};

/// Hash the UTF-8 bytes of `data` and return the lowercase hex digest.
pub fn compute_hash(data: &str) -> String {
    compute_hash_bytes(data.as_bytes())
}

/// Hash raw bytes and return the lowercase hex digest.
pub fn compute_hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
