//! Domain error types for nonce-term.
//!
//! All business-logic errors are defined here using `thiserror`.
//! These errors are converted to user-friendly messages at the CLI boundary.

use thiserror::Error;

/// Why a token could not be decoded into claims.
///
/// Callers treat every variant as the same "invalid token" outcome; the
/// variant only records which decoding step rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidToken {
    /// The token is not three non-empty, dot-separated segments.
    #[error("expected three non-empty 'header.claims.signature' segments")]
    Structure,

    /// The claims segment is not valid base64.
    #[error("claims segment is not valid base64")]
    Encoding,

    /// The claims segment does not hold a JSON object.
    #[error("claims segment is not a JSON object")]
    Json,
}

/// Errors that can occur while receiving, decoding, or fingerprinting a token.
#[derive(Debug, Error)]
pub enum NonceError {
    /// The token could not be decoded into claims.
    #[error("invalid token structure: {0}")]
    InvalidTokenStructure(#[from] InvalidToken),

    /// The SHA-256 digest could not be computed.
    #[error("digest unavailable: {reason}")]
    DigestUnavailable {
        /// Description of the failure.
        reason: String,
    },

    /// No token was provided via any input method.
    #[error("no token provided: pass a token as an argument, via --token-env, or through stdin")]
    NoTokenProvided,

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },

    /// The environment variable name cannot be looked up.
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvVarName {
        /// The rejected name.
        name: String,
    },

    /// Reading the token from stdin failed.
    #[error("failed to read token from stdin: {reason}")]
    InputRead {
        /// Description of the read failure.
        reason: String,
    },

    /// The input was expected to be a sign-in credential response document.
    #[error("invalid credential response: {reason}")]
    InvalidCredentialResponse {
        /// Description of the parsing failure.
        reason: String,
    },
}
