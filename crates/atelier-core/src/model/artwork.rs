//! The artwork record: one non-fungible token and its marketplace history.

use serde::{Deserialize, Serialize};

use crate::event::StreamPosition;

/// Marketplace status of an artwork.
///
/// Status is driven by listing and sale/bid completion, not by raw
/// transfers: an ordinary transfer changes the owner but leaves the
/// status where the last marketplace action put it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtworkStatus {
    /// Minted, never listed or sold.
    Created,
    /// Listed for sale before any completed sale.
    OnPrimarySale,
    /// Listed for sale after at least one completed sale.
    OnSecondarySale,
    /// At least one completed sale (direct or accepted bid).
    Sold,
    /// Transferred back to the birth address.
    Withdrawn,
}

impl ArtworkStatus {
    /// Returns the status name as a static string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::OnPrimarySale => "OnPrimarySale",
            Self::OnSecondarySale => "OnSecondarySale",
            Self::Sold => "Sold",
            Self::Withdrawn => "Withdrawn",
        }
    }
}

/// The indexed representation of one token.
///
/// `bids`, `sales`, and `transfers` are append-only lists of sub-entity
/// keys in event order. `current_bid` and `current_sale` reference the
/// single non-terminal bid/sale, when one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Token id, also the storage key.
    pub token_id: String,

    /// Address of the minting account. Never changes.
    pub artist: String,

    /// Address of the current owner.
    pub owner: String,

    /// Display URI, fetched from the contract at mint and overwritten
    /// in place on URI-update events. No history is kept.
    pub uri: String,

    /// Current marketplace status.
    pub status: ArtworkStatus,

    /// Block timestamp of the mint.
    pub time_created: u64,

    /// Stream position of the last event reduced into this artwork.
    /// Events at or before it are redeliveries and are skipped, which
    /// also covers events that predate the mint: they were dropped on
    /// first delivery and stay inert on redelivery.
    pub reduced_through: Option<StreamPosition>,

    /// Block timestamp of the most recent ordinary transfer.
    pub time_last_transferred: Option<u64>,

    /// Block timestamp of the withdrawal, if withdrawn.
    pub time_withdrawn: Option<u64>,

    /// Key of the single open bid, if one exists.
    pub current_bid: Option<String>,

    /// Key of the single active (unsold) sale listing, if one exists.
    pub current_sale: Option<String>,

    /// Amount of the most recent completed sale.
    pub last_transfer_price: Option<u128>,

    /// Amount of the first completed sale. Set at most once; its
    /// presence is what distinguishes secondary from primary financial
    /// treatment.
    pub first_transfer_price: Option<u128>,

    /// Keys of every bid ever raised, in event order.
    pub bids: Vec<String>,

    /// Keys of every sale listing ever created, in event order.
    pub sales: Vec<String>,

    /// Keys of every ordinary transfer, in event order.
    pub transfers: Vec<String>,
}

impl Artwork {
    /// Creates a freshly minted artwork owned by its artist.
    #[must_use]
    pub fn new(
        token_id: impl Into<String>,
        artist: impl Into<String>,
        uri: impl Into<String>,
        time_created: u64,
    ) -> Self {
        let artist = artist.into();
        Self {
            token_id: token_id.into(),
            owner: artist.clone(),
            artist,
            uri: uri.into(),
            status: ArtworkStatus::Created,
            time_created,
            reduced_through: None,
            time_last_transferred: None,
            time_withdrawn: None,
            current_bid: None,
            current_sale: None,
            last_transfer_price: None,
            first_transfer_price: None,
            bids: Vec::new(),
            sales: Vec::new(),
            transfers: Vec::new(),
        }
    }

    /// Returns `true` if the artwork has had at least one completed sale.
    #[must_use]
    pub const fn has_sold_before(&self) -> bool {
        self.first_transfer_price.is_some()
    }

    /// Returns `true` if an event at `position` has already been reduced
    /// into this artwork.
    #[must_use]
    pub fn already_reduced(&self, position: StreamPosition) -> bool {
        self.reduced_through
            .is_some_and(|reduced| position <= reduced)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_new_artwork_initial_state() {
        let artwork = Artwork::new("1", "0xaa", "ipfs://x", 100);
        assert_eq!(artwork.artist, "0xaa");
        assert_eq!(artwork.owner, "0xaa");
        assert_eq!(artwork.status, ArtworkStatus::Created);
        assert_eq!(artwork.time_created, 100);
        assert!(artwork.bids.is_empty());
        assert!(artwork.sales.is_empty());
        assert!(artwork.transfers.is_empty());
        assert!(artwork.current_bid.is_none());
        assert!(artwork.current_sale.is_none());
        assert!(!artwork.has_sold_before());
        assert!(artwork.reduced_through.is_none());
    }

    #[test]
    fn test_already_reduced_is_strict_on_position() {
        let mut artwork = Artwork::new("1", "0xaa", "ipfs://x", 100);
        let position = StreamPosition {
            block: 100,
            log_index: 3,
        };
        assert!(!artwork.already_reduced(position));

        artwork.reduced_through = Some(position);
        assert!(artwork.already_reduced(position));
        assert!(artwork.already_reduced(StreamPosition {
            block: 100,
            log_index: 2,
        }));
        assert!(artwork.already_reduced(StreamPosition {
            block: 99,
            log_index: 9,
        }));
        // Later in the same block, and later blocks, are new events.
        assert!(!artwork.already_reduced(StreamPosition {
            block: 100,
            log_index: 4,
        }));
        assert!(!artwork.already_reduced(StreamPosition {
            block: 101,
            log_index: 0,
        }));
    }

    #[test]
    fn test_status_names() {
        assert_eq!(ArtworkStatus::Created.as_str(), "Created");
        assert_eq!(ArtworkStatus::OnPrimarySale.as_str(), "OnPrimarySale");
        assert_eq!(ArtworkStatus::OnSecondarySale.as_str(), "OnSecondarySale");
        assert_eq!(ArtworkStatus::Sold.as_str(), "Sold");
        assert_eq!(ArtworkStatus::Withdrawn.as_str(), "Withdrawn");
    }
}
