//! Structural token decoding.
//!
//! Splits a raw token into its three dot-separated segments and turns the
//! middle (claims) segment into a JSON object. Nothing is verified: the
//! header and signature segments are only checked for presence.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};
use zeroize::Zeroizing;

use crate::error::InvalidToken;

/// Claim names mapped to their JSON values.
pub type Claims = Map<String, Value>;

/// Standard-alphabet engine that tolerates missing padding and stray
/// trailing bits, matching the leniency of browser `atob`.
const FORGIVING_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode the claims of a `header.claims.signature` token.
///
/// The claims segment is mapped from the URL-safe alphabet back to
/// standard base64 (`-` to `+`, `_` to `/`), decoded, and parsed as a
/// JSON object.
///
/// # Errors
///
/// Returns [`InvalidToken`] if the token is not exactly three non-empty
/// segments, the claims segment is not base64, or the decoded bytes are
/// not a JSON object. Every variant means the same thing to callers: the
/// token has no readable claims.
pub fn decode_claims(token: &str) -> Result<Claims, InvalidToken> {
    let segments: Vec<&str> = token.split('.').collect();
    let [header, claims, signature] = segments.as_slice() else {
        return Err(InvalidToken::Structure);
    };
    if header.is_empty() || claims.is_empty() || signature.is_empty() {
        return Err(InvalidToken::Structure);
    }

    let standard = to_standard_base64(claims);
    let bytes = Zeroizing::new(
        FORGIVING_STANDARD
            .decode(standard.as_bytes())
            .map_err(|_| InvalidToken::Encoding)?,
    );

    serde_json::from_slice(&bytes).map_err(|_| InvalidToken::Json)
}

/// Map a URL-safe base64 segment onto the standard alphabet, dropping
/// ASCII whitespace.
fn to_standard_base64(segment: &str) -> Zeroizing<String> {
    Zeroizing::new(
        segment
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .map(|c| match c {
                '-' => '+',
                '_' => '/',
                other => other,
            })
            .collect(),
    )
}
