//! Bid, sale, and transfer records.
//!
//! Bids and sales are created once and mutated in place through their
//! terminal states; transfers are immutable audit entries. None of these
//! transitions is reversible.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BidStatus {
    /// Raised and not yet resolved.
    Open,
    /// Withdrawn by the bidder, or refunded when superseded.
    Cancelled,
    /// Accepted by the owner; the sale it implies has completed.
    Accepted,
}

/// A bid on an artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    /// Composite storage key (token id, timestamp, bidder, log index).
    pub id: String,

    /// Address of the bidding account.
    pub bidder: String,

    /// Bid amount.
    pub price: u128,

    /// Block timestamp when the bid was raised.
    pub time_raised: u64,

    /// Current lifecycle status.
    pub status: BidStatus,

    /// Block timestamp of cancellation, if cancelled.
    pub time_cancelled: Option<u64>,

    /// Block timestamp of acceptance, if accepted.
    pub time_accepted: Option<u64>,

    /// Address of the accepting owner, if accepted.
    pub accepted_by: Option<String>,
}

impl Bid {
    /// Creates a newly raised, open bid.
    #[must_use]
    pub fn open(
        id: impl Into<String>,
        bidder: impl Into<String>,
        price: u128,
        time_raised: u64,
    ) -> Self {
        Self {
            id: id.into(),
            bidder: bidder.into(),
            price,
            time_raised,
            status: BidStatus::Open,
            time_cancelled: None,
            time_accepted: None,
            accepted_by: None,
        }
    }

    /// Returns `true` if the bid has not reached a terminal state.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.status, BidStatus::Open)
    }
}

/// A sale listing on an artwork.
///
/// A listing that completes gets `is_sold = true`; a listing superseded
/// by an accepted bid stays unsold in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    /// Composite storage key (token id, timestamp, log index).
    pub id: String,

    /// Address of the listing owner.
    pub seller: String,

    /// Asking price. Updated in place while the listing is active.
    pub price: u128,

    /// Block timestamp when the listing was created.
    pub time_raised: u64,

    /// Whether the sale completed.
    pub is_sold: bool,

    /// Address of the buyer, once sold.
    pub buyer: Option<String>,

    /// Block timestamp of completion, once sold.
    pub time_sold: Option<u64>,
}

impl Sale {
    /// Creates a new active listing.
    #[must_use]
    pub fn listed(
        id: impl Into<String>,
        seller: impl Into<String>,
        price: u128,
        time_raised: u64,
    ) -> Self {
        Self {
            id: id.into(),
            seller: seller.into(),
            price,
            time_raised,
            is_sold: false,
            buyer: None,
            time_sold: None,
        }
    }
}

/// An ordinary ownership transfer (neither mint nor withdrawal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Composite storage key (token id, timestamp, log index).
    pub id: String,

    /// Sending address.
    pub from: String,

    /// Receiving address.
    pub to: String,

    /// Block timestamp of the transfer.
    pub timestamp: u64,
}

impl Transfer {
    /// Creates a transfer audit entry.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        timestamp: u64,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            timestamp,
        }
    }
}
