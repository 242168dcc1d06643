//! Presentation-side session state.
//!
//! Tracks the single token currently on display, the last shortened value
//! computed for it, and whether the full token is expanded. The decoding and
//! fingerprinting functions stay stateless; this is the only place state
//! lives.

use serde::Deserialize;

use crate::core::codec::{self, Claims};
use crate::core::fingerprint::{self, Fingerprint};
use crate::core::token::RawToken;
use crate::error::{InvalidToken, NonceError};

/// Receiver for tokens delivered by a sign-in flow.
pub trait CredentialSink {
    /// Accept a freshly issued raw token.
    fn receive_token(&mut self, token: RawToken);
}

/// The document a sign-in flow hands back once the user has authenticated.
///
/// Only `credential` is required; the remaining fields are informational.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialResponse {
    /// The issued identity token.
    pub credential: RawToken,
    /// How the credential was selected (e.g. `btn`, `auto`).
    #[serde(default)]
    pub select_by: Option<String>,
    /// The client the credential was issued to.
    #[serde(default, alias = "clientId")]
    pub client_id: Option<String>,
}

impl CredentialResponse {
    /// Parse a credential response from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`NonceError::InvalidCredentialResponse`] if the document is
    /// not JSON, lacks a `credential` string, or the credential is blank.
    pub fn from_json(input: &str) -> Result<Self, NonceError> {
        let mut response: Self = serde_json::from_str(input).map_err(|e| {
            NonceError::InvalidCredentialResponse {
                reason: e.to_string(),
            }
        })?;

        let trimmed = response.credential.as_str().trim();
        if trimmed.is_empty() {
            return Err(NonceError::InvalidCredentialResponse {
                reason: "credential is empty".to_string(),
            });
        }
        if trimmed.len() != response.credential.as_str().len() {
            response.credential = RawToken::from(trimmed);
        }
        Ok(response)
    }
}

/// State of the token currently being shown.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<RawToken>,
    shortened: Option<Fingerprint>,
    expanded: bool,
}

impl CredentialSink for Session {
    /// Replace the current token. The shortened value and expansion flag
    /// belong to the previous token and are reset.
    fn receive_token(&mut self, token: RawToken) {
        self.current = Some(token);
        self.shortened = None;
        self.expanded = false;
    }
}

impl Session {
    /// An empty session with no token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept the credential carried by a sign-in response.
    pub fn receive_response(&mut self, response: CredentialResponse) {
        tracing::debug!(
            select_by = response.select_by.as_deref().unwrap_or("unknown"),
            client_id = response.client_id.as_deref().unwrap_or("unknown"),
            "received credential response"
        );
        self.receive_token(response.credential);
    }

    /// The token on display, if one has been received.
    pub fn current_token(&self) -> Option<&RawToken> {
        self.current.as_ref()
    }

    /// Whether the full token is shown rather than a preview.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip between the preview and the full token; returns the new state.
    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Decode the current token's claims.
    ///
    /// Returns `None` when no token has been received.
    pub fn visualize(&self) -> Option<Result<Claims, InvalidToken>> {
        self.current
            .as_ref()
            .map(|token| codec::decode_claims(token.as_str()))
    }

    /// Fingerprint the current token and remember the result.
    ///
    /// Returns `Ok(None)` when no token has been received.
    ///
    /// # Errors
    ///
    /// Propagates [`NonceError::DigestUnavailable`].
    pub async fn shorten(&mut self, length: usize) -> Result<Option<&Fingerprint>, NonceError> {
        let Some(token) = &self.current else {
            return Ok(None);
        };
        let fingerprint = fingerprint::shorten(token.as_str(), length).await?;
        Ok(Some(self.shortened.insert(fingerprint)))
    }

    /// The last shortened value for the current token, as a copy action
    /// would use it.
    pub fn shortened(&self) -> Option<&Fingerprint> {
        self.shortened.as_ref()
    }

    /// Full digest of the current token. Not remembered.
    ///
    /// # Errors
    ///
    /// Propagates [`NonceError::DigestUnavailable`].
    pub async fn digest(&self) -> Result<Option<String>, NonceError> {
        match &self.current {
            Some(token) => fingerprint::digest_hex(token.as_str()).await.map(Some),
            None => Ok(None),
        }
    }
}
