//! Source contract events and their canonical normalization.
//!
//! Three contracts feed the reducer: two successive generations of the
//! token contract and the marketplace/auction contract paired with the
//! second generation. They emit semantically equivalent but differently
//! named events; [`router::normalize`] resolves the version-specific
//! shapes once, at the boundary, so the state machines only ever see the
//! canonical [`MarketEvent`] operations.

pub mod raw;
pub mod router;

pub use raw::{MarketplaceEvent, RawEvent, TokenEventV1, TokenEventV2};

use serde::{Deserialize, Serialize};

/// One delivered event with its on-chain provenance.
///
/// The delivery mechanism guarantees exactly-once delivery in the total
/// order defined by (block height, block-wide log index); the reducer
/// itself never reorders or retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Address of the emitting contract.
    pub contract: String,

    /// Block height.
    pub block: u64,

    /// Block timestamp, seconds since epoch.
    pub timestamp: u64,

    /// Transaction hash.
    pub tx_hash: String,

    /// Block-wide event index.
    pub log_index: u32,

    /// The version-specific event payload.
    pub event: RawEvent,
}

impl EventEnvelope {
    /// Returns this event's position in the stream order.
    #[must_use]
    pub const fn position(&self) -> StreamPosition {
        StreamPosition {
            block: self.block,
            log_index: self.log_index,
        }
    }
}

/// A position in the delivered event stream.
///
/// (block height, block-wide log index) strictly orders every delivered
/// event. The reducer records, per artwork, the position of the last
/// event reduced into it, which is how redeliveries are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StreamPosition {
    /// Block height.
    pub block: u64,

    /// Block-wide event index.
    pub log_index: u32,
}

/// Canonical, version-agnostic marketplace operations.
///
/// Mint and withdrawal are not distinct variants: both arrive as
/// [`MarketEvent::Transferred`] and are recognized by the birth address
/// in the state machine, matching the source contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketEvent {
    /// Ownership moved, including mints (from = birth address) and
    /// withdrawals (to = birth address).
    Transferred {
        /// Token id.
        token_id: String,
        /// Sending address.
        from: String,
        /// Receiving address.
        to: String,
    },

    /// The token's display URI was rewritten.
    UriUpdated {
        /// Token id.
        token_id: String,
        /// The new URI.
        uri: String,
    },

    /// A sale listing was created or had its price changed.
    SalePriceSet {
        /// Token id.
        token_id: String,
        /// Asking price.
        amount: u128,
    },

    /// The active sale listing completed.
    SaleCompleted {
        /// Token id.
        token_id: String,
        /// Buying address.
        buyer: String,
        /// Amount paid.
        amount: u128,
    },

    /// A new bid was raised.
    BidRaised {
        /// Token id.
        token_id: String,
        /// Bidding address.
        bidder: String,
        /// Bid amount.
        amount: u128,
    },

    /// The current bid was withdrawn by its bidder.
    BidCancelled {
        /// Token id.
        token_id: String,
        /// Bidding address.
        bidder: String,
    },

    /// The current bid was accepted by the owner.
    BidAccepted {
        /// Token id.
        token_id: String,
        /// Accepting (selling) address.
        seller: String,
        /// Amount paid.
        amount: u128,
    },

    /// The royalty percentage changed.
    RoyaltyFeeSet {
        /// New percentage, `[0, 100]`.
        pct: u64,
    },

    /// The primary-sale income percentage changed.
    PrimaryIncomeFractionSet {
        /// New percentage, `[0, 100]`.
        pct: u64,
    },
}

impl MarketEvent {
    /// Returns the artwork this operation targets, if any.
    ///
    /// Fee changes target the market singleton and return `None`.
    #[must_use]
    pub fn token_id(&self) -> Option<&str> {
        match self {
            Self::Transferred { token_id, .. }
            | Self::UriUpdated { token_id, .. }
            | Self::SalePriceSet { token_id, .. }
            | Self::SaleCompleted { token_id, .. }
            | Self::BidRaised { token_id, .. }
            | Self::BidCancelled { token_id, .. }
            | Self::BidAccepted { token_id, .. } => Some(token_id),
            Self::RoyaltyFeeSet { .. } | Self::PrimaryIncomeFractionSet { .. } => None,
        }
    }
}
