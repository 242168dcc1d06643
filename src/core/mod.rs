//! Core token logic.
//!
//! Decoding and fingerprinting are stateless functions over the raw token
//! text; the session module holds the presentation state that sequences
//! them. Nothing here touches the terminal.

pub mod codec;
pub mod fingerprint;
pub mod session;
pub mod token;
