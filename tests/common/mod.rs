//! Shared test fixtures and helper utilities.
//!
//! Provides pre-built tokens with known claims and digests for the CLI
//! integration tests.
#![allow(dead_code)]

/// A valid HS256-signed JWT for testing.
///
/// Header: `{"alg":"HS256","typ":"JWT"}`
/// Payload: `{"sub":"1234567890","name":"Test User","iat":1516239022}`
pub const VALID_HS256_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IlRlc3QgVXNlciIsImlhdCI6MTUxNjIzOTAyMn0.\
     SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

/// SHA-256 of [`VALID_HS256_TOKEN`] in lowercase hex.
pub const VALID_HS256_DIGEST: &str =
    "ab974334e5b1773f78186b86ed642d55477ab8d5e20a842555f26be576908c6d";

/// A malformed token with only two parts (missing signature).
pub const MALFORMED_TOKEN_TWO_PARTS: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

/// Three segments whose claims segment is base64 for "not json".
pub const NON_JSON_CLAIMS_TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.bm90IGpzb24.sig";

/// A completely invalid token string.
pub const INVALID_TOKEN: &str = "not-a-valid-jwt";

/// HMAC secret used to sign generated fixtures. Signatures are never
/// checked by the tool; this only makes the fixtures realistic.
pub const HMAC_TEST_SECRET: &str = "fixture-signing-secret";

/// Create an HS256-signed token with the given claims.
pub fn create_hs256_token(claims: &serde_json::Value) -> String {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(HMAC_TEST_SECRET.as_bytes());
    encode(&header, claims, &key).unwrap()
}

/// Claims shaped like an identity token from a hosted sign-in flow.
pub fn id_token_claims() -> serde_json::Value {
    serde_json::json!({
        "iss": "https://accounts.example.com",
        "aud": "client-123.apps.example.com",
        "sub": "110169484474386276334",
        "email": "zoë@example.com",
        "email_verified": true,
        "nonce": "n-0S6_WzA2Mj",
        "iat": 1516239022,
        "exp": 4102444800u64
    })
}

/// A credential response document wrapping `token`.
pub fn credential_response(token: &str) -> String {
    serde_json::json!({ "credential": token, "select_by": "btn" }).to_string()
}
