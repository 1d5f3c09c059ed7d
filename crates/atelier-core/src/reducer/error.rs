//! Reducer error taxonomy.
//!
//! Three kinds of trouble, with three severities:
//!
//! - A missing primary entity drops the event: reported through
//!   [`DropReason`], never an `Err`.
//! - A dangling current-bid/current-sale reference skips only that
//!   sub-entity's mutation; the handler logs it and applies the rest.
//! - An identifier collision or a mint-time URI fetch failure is an
//!   [`IndexError`]: it indicates a defect or an unretrievable
//!   dependency and aborts processing of that event.

use thiserror::Error;

use crate::uri::UriError;

/// Fatal errors for the event being processed.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A derived key already denotes a different logical event.
    ///
    /// This is a key-derivation defect, not a data anomaly: the store
    /// must never be silently overwritten.
    #[error("identifier collision: {kind} key {key} already denotes a different event")]
    IdentifierCollision {
        /// The entity kind whose key collided.
        kind: &'static str,
        /// The derived key.
        key: String,
    },

    /// The mint-time token URI fetch failed.
    #[error("token URI fetch failed for artwork {token_id}")]
    UriFetch {
        /// The token being minted.
        token_id: String,
        /// The underlying retrieval failure.
        #[source]
        source: UriError,
    },
}

/// Why an event was dropped without mutating state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropReason {
    /// A non-mint event referenced an artwork that was never minted.
    #[error("artwork not found: {token_id}")]
    ArtworkNotFound {
        /// The unknown token id.
        token_id: String,
    },

    /// A distinct mint transfer arrived for an artwork that already
    /// exists. Redeliveries of the original mint are recognized by the
    /// apply loop and never reach this.
    #[error("artwork already minted: {token_id}")]
    AlreadyMinted {
        /// The token id that already exists.
        token_id: String,
    },
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The event's mutations were committed, or the event was a
    /// redelivery whose mutations were already in place.
    Applied,
    /// The event was dropped; no state was mutated.
    Dropped(DropReason),
}

impl ApplyOutcome {
    /// Returns `true` if the event was committed.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}
