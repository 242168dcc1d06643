//! The raw token as received from the sign-in collaborator.

use std::fmt;

use serde::{Deserialize, Deserializer};
use zeroize::Zeroizing;

/// An opaque identity token string.
///
/// Nothing about the contents is validated at rest; structure is only
/// checked when the token is decoded. The buffer is zeroized on drop and
/// the custom `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct RawToken(Zeroizing<String>);

impl RawToken {
    /// Wrap a token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Zeroizing::new(token.into()))
    }

    /// Borrow the token text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Number of characters in the token.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<&str> for RawToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for RawToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl<'de> Deserialize<'de> for RawToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Custom `Debug` that redacts the token to prevent accidental leakage.
impl fmt::Debug for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let token = RawToken::from("header.secret-claims.sig");
        let debug_output = format!("{token:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("secret-claims"));
    }

    #[test]
    fn test_as_str_returns_original_text() {
        let token = RawToken::new(String::from("a.b.c"));
        assert_eq!(token.as_str(), "a.b.c");
    }

    #[test]
    fn test_char_len_counts_characters_not_bytes() {
        assert_eq!(RawToken::from("zoë").char_len(), 3);
    }

    #[test]
    fn test_deserialize_from_json_string() {
        let token: RawToken = serde_json::from_str(r#""a.b.c""#).unwrap();
        assert_eq!(token.as_str(), "a.b.c");
    }
}
