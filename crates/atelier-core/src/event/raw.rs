//! Version-specific event shapes of the three source contracts.
//!
//! Field names follow each contract's own vocabulary; nothing here is
//! interpreted. Normalization to the canonical operations happens in
//! [`super::router`].

use serde::{Deserialize, Serialize};

/// Events from the first-generation token contract, which carried its
/// own marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenEventV1 {
    /// Ownership transfer, including mint and withdrawal.
    Transfer {
        /// Sending address.
        from: String,
        /// Receiving address.
        to: String,
        /// Token id.
        token_id: String,
    },

    /// A sale price was set on a token.
    SalePriceSet {
        /// Token id.
        token_id: String,
        /// Asking price.
        amount: u128,
    },

    /// A bid was placed.
    Bid {
        /// Token id.
        token_id: String,
        /// Bidding address.
        bidder: String,
        /// Bid amount.
        amount: u128,
    },

    /// A bid was withdrawn.
    CancelBid {
        /// Token id.
        token_id: String,
        /// Bidding address.
        bidder: String,
    },

    /// A bid was accepted by the owner.
    AcceptBid {
        /// Token id.
        token_id: String,
        /// Accepting address.
        seller: String,
        /// Amount paid.
        amount: u128,
    },

    /// A listed token was bought outright.
    Sold {
        /// Token id.
        token_id: String,
        /// Buying address.
        buyer: String,
        /// Amount paid.
        amount: u128,
    },
}

/// Events from the second-generation token contract, which handles
/// ownership and metadata only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenEventV2 {
    /// Ownership transfer, including mint and withdrawal.
    Transfer {
        /// Sending address.
        from: String,
        /// Receiving address.
        to: String,
        /// Token id.
        token_id: String,
    },

    /// The token URI was rewritten.
    TokenUriUpdated {
        /// Token id.
        token_id: String,
        /// The new URI.
        uri: String,
    },
}

/// Events from the marketplace/auction contract paired with the
/// second-generation token contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketplaceEvent {
    /// A sale price was set on a token.
    SetSalePrice {
        /// Token id.
        token_id: String,
        /// Asking price.
        amount: u128,
    },

    /// A bid was placed.
    Bid {
        /// Token id.
        token_id: String,
        /// Bidding address.
        bidder: String,
        /// Bid amount.
        amount: u128,
    },

    /// A bid was withdrawn.
    CancelBid {
        /// Token id.
        token_id: String,
        /// Bidding address.
        bidder: String,
    },

    /// A bid was accepted by the owner.
    AcceptBid {
        /// Token id.
        token_id: String,
        /// Accepting address.
        seller: String,
        /// Amount paid.
        amount: u128,
    },

    /// A listed token was bought outright.
    Sold {
        /// Token id.
        token_id: String,
        /// Buying address.
        buyer: String,
        /// Amount paid.
        amount: u128,
    },

    /// The royalty percentage was changed.
    RoyaltyFeeSet {
        /// New percentage.
        pct: u64,
    },

    /// The primary-sale income percentage was changed.
    PrimaryIncomeFractionSet {
        /// New percentage.
        pct: u64,
    },
}

/// Tagged union over the three emitting contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawEvent {
    /// First-generation token contract.
    TokenV1(TokenEventV1),
    /// Second-generation token contract.
    TokenV2(TokenEventV2),
    /// Marketplace/auction contract.
    Marketplace(MarketplaceEvent),
}
