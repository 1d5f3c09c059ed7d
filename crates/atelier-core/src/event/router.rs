//! Maps version-specific event shapes onto the canonical operations.
//!
//! Resolution happens exactly once, here. The state machines never see a
//! contract-version distinction.

use super::raw::{MarketplaceEvent, RawEvent, TokenEventV1, TokenEventV2};
use super::MarketEvent;

/// Normalizes a raw contract event to its canonical operation.
#[must_use]
pub fn normalize(raw: &RawEvent) -> MarketEvent {
    match raw {
        RawEvent::TokenV1(event) => normalize_v1(event),
        RawEvent::TokenV2(event) => normalize_v2(event),
        RawEvent::Marketplace(event) => normalize_marketplace(event),
    }
}

fn normalize_v1(event: &TokenEventV1) -> MarketEvent {
    match event {
        TokenEventV1::Transfer { from, to, token_id } => MarketEvent::Transferred {
            token_id: token_id.clone(),
            from: from.clone(),
            to: to.clone(),
        },
        TokenEventV1::SalePriceSet { token_id, amount } => MarketEvent::SalePriceSet {
            token_id: token_id.clone(),
            amount: *amount,
        },
        TokenEventV1::Bid {
            token_id,
            bidder,
            amount,
        } => MarketEvent::BidRaised {
            token_id: token_id.clone(),
            bidder: bidder.clone(),
            amount: *amount,
        },
        TokenEventV1::CancelBid { token_id, bidder } => MarketEvent::BidCancelled {
            token_id: token_id.clone(),
            bidder: bidder.clone(),
        },
        TokenEventV1::AcceptBid {
            token_id,
            seller,
            amount,
        } => MarketEvent::BidAccepted {
            token_id: token_id.clone(),
            seller: seller.clone(),
            amount: *amount,
        },
        TokenEventV1::Sold {
            token_id,
            buyer,
            amount,
        } => MarketEvent::SaleCompleted {
            token_id: token_id.clone(),
            buyer: buyer.clone(),
            amount: *amount,
        },
    }
}

fn normalize_v2(event: &TokenEventV2) -> MarketEvent {
    match event {
        TokenEventV2::Transfer { from, to, token_id } => MarketEvent::Transferred {
            token_id: token_id.clone(),
            from: from.clone(),
            to: to.clone(),
        },
        TokenEventV2::TokenUriUpdated { token_id, uri } => MarketEvent::UriUpdated {
            token_id: token_id.clone(),
            uri: uri.clone(),
        },
    }
}

fn normalize_marketplace(event: &MarketplaceEvent) -> MarketEvent {
    match event {
        MarketplaceEvent::SetSalePrice { token_id, amount } => MarketEvent::SalePriceSet {
            token_id: token_id.clone(),
            amount: *amount,
        },
        MarketplaceEvent::Bid {
            token_id,
            bidder,
            amount,
        } => MarketEvent::BidRaised {
            token_id: token_id.clone(),
            bidder: bidder.clone(),
            amount: *amount,
        },
        MarketplaceEvent::CancelBid { token_id, bidder } => MarketEvent::BidCancelled {
            token_id: token_id.clone(),
            bidder: bidder.clone(),
        },
        MarketplaceEvent::AcceptBid {
            token_id,
            seller,
            amount,
        } => MarketEvent::BidAccepted {
            token_id: token_id.clone(),
            seller: seller.clone(),
            amount: *amount,
        },
        MarketplaceEvent::Sold {
            token_id,
            buyer,
            amount,
        } => MarketEvent::SaleCompleted {
            token_id: token_id.clone(),
            buyer: buyer.clone(),
            amount: *amount,
        },
        MarketplaceEvent::RoyaltyFeeSet { pct } => MarketEvent::RoyaltyFeeSet { pct: *pct },
        MarketplaceEvent::PrimaryIncomeFractionSet { pct } => {
            MarketEvent::PrimaryIncomeFractionSet { pct: *pct }
        },
    }
}
