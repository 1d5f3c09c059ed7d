//! The contract-state collaborator: current token URI lookup.
//!
//! The reducer's only external call with latency. It is made exactly
//! once per artwork, at mint, synchronously; a failure is fatal for that
//! single event's processing, never for the stream.

use std::collections::HashMap;

use thiserror::Error;

/// Failure to retrieve a token's current URI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("token URI unavailable for token {token_id} on contract {contract}: {reason}")]
pub struct UriError {
    /// The contract that was queried.
    pub contract: String,
    /// The token id that was queried.
    pub token_id: String,
    /// Human-readable failure description.
    pub reason: String,
}

/// Retrieves a contract's current on-chain token URI.
pub trait TokenUriSource {
    /// Returns the current URI for `token_id` on `contract`.
    ///
    /// # Errors
    ///
    /// Returns [`UriError`] if the value cannot be retrieved; the caller
    /// treats this as fatal for the event being processed.
    fn current_token_uri(&self, contract: &str, token_id: &str) -> Result<String, UriError>;
}

/// Fixed-map [`TokenUriSource`] for tests and offline replays.
///
/// Unknown tokens produce an error, which is how mint-time fetch
/// failures are exercised.
#[derive(Debug, Clone, Default)]
pub struct StaticUriSource {
    uris: HashMap<String, String>,
}

impl StaticUriSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a URI for a token id (builder pattern).
    #[must_use]
    pub fn with_uri(mut self, token_id: impl Into<String>, uri: impl Into<String>) -> Self {
        self.uris.insert(token_id.into(), uri.into());
        self
    }

    /// Registers a URI for a token id.
    pub fn insert(&mut self, token_id: impl Into<String>, uri: impl Into<String>) {
        self.uris.insert(token_id.into(), uri.into());
    }
}

impl TokenUriSource for StaticUriSource {
    fn current_token_uri(&self, contract: &str, token_id: &str) -> Result<String, UriError> {
        self.uris
            .get(token_id)
            .cloned()
            .ok_or_else(|| UriError {
                contract: contract.to_string(),
                token_id: token_id.to_string(),
                reason: "no URI registered".to_string(),
            })
    }
}
