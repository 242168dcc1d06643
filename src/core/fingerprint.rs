//! Deterministic token fingerprints.
//!
//! A fingerprint is the lowercase hex SHA-256 digest of the token text,
//! optionally truncated to a shorter display length. The digest runs on
//! tokio's blocking pool so callers await a single suspension point.

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::error::NonceError;

/// Length of a full hex-encoded SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Default number of hex characters kept by [`shorten`].
pub const DEFAULT_SHORT_LENGTH: usize = 12;

/// A (possibly truncated) lowercase hex digest of a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Borrow the hex text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of hex characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length fingerprint.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the SHA-256 digest of `text` as 64 lowercase hex characters.
///
/// # Errors
///
/// Returns [`NonceError::DigestUnavailable`] if the blocking digest task
/// is cancelled or panics.
pub async fn digest_hex(text: &str) -> Result<String, NonceError> {
    let bytes = Zeroizing::new(text.as_bytes().to_vec());
    let digest = tokio::task::spawn_blocking(move || Sha256::digest(bytes.as_slice()))
        .await
        .map_err(|e| NonceError::DigestUnavailable {
            reason: if e.is_cancelled() {
                "digest task was cancelled".to_string()
            } else {
                "digest task panicked".to_string()
            },
        })?;

    tracing::trace!(input_len = text.len(), "computed sha-256 digest");
    Ok(hex::encode(digest))
}

/// Fingerprint `text` and keep the first `length` hex characters.
///
/// A `length` above [`DIGEST_HEX_LEN`] yields the full digest; nothing is
/// padded. Shorter fingerprints are display identifiers only and become
/// more collision-prone as `length` shrinks.
///
/// # Errors
///
/// Same as [`digest_hex`].
pub async fn shorten(text: &str, length: usize) -> Result<Fingerprint, NonceError> {
    let mut hex = digest_hex(text).await?;
    hex.truncate(length.min(DIGEST_HEX_LEN));
    Ok(Fingerprint(hex))
}
