//! Seller API key generation and hashing.
//!
//! Keys are `bw_` followed by 48 random alphanumeric characters. Only the
//! SHA-256 hex digest and a short display prefix are ever persisted; the
//! plaintext is shown to the seller exactly once at creation time.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Length of the random part of the key (alphanumeric characters).
pub const KEY_LENGTH: usize = 48;

/// Number of leading characters (including the `bw_` tag) kept for display.
pub const KEY_PREFIX_LENGTH: usize = 11;

/// Fixed tag identifying Broadway keys in logs and support tickets.
const KEY_TAG: &str = "bw_";

/// The result of generating a new API key.
pub struct GeneratedApiKey {
    /// The plaintext key (returned to the seller once, never stored).
    pub plaintext: String,
    /// The first [`KEY_PREFIX_LENGTH`] characters for identification.
    pub prefix: String,
    /// SHA-256 hex digest of the plaintext (stored in the database).
    pub hash: String,
}

/// Generate a new random API key.
pub fn generate_api_key() -> GeneratedApiKey {
    let random: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(KEY_LENGTH)
        .map(char::from)
        .collect();
    let plaintext = format!("{KEY_TAG}{random}");

    let prefix = plaintext[..KEY_PREFIX_LENGTH].to_string();
    let hash = hash_api_key(&plaintext);

    GeneratedApiKey {
        plaintext,
        prefix,
        hash,
    }
}

/// Compute the SHA-256 hex digest of a plaintext key.
///
/// Used at creation (to store the hash) and at authentication (to look the
/// key up by hash).
pub fn hash_api_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    format!("{:x}", hasher.finalize())
}
