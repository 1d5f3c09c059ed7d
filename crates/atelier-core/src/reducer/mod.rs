//! The per-entity state machines that fold events into stored state.
//!
//! One [`MarketIndexer`] owns the injected collaborators (entity store,
//! URI source, configuration) and applies one event at a time. Each
//! `apply` is a short, synchronous, total function of (stored state,
//! event) to (stored state, outcome): a bounded number of store reads,
//! at most a few writes, and no external call except the single
//! mint-time URI fetch.
//!
//! # Artwork State Machine
//!
//! ```text
//!                mint transfer (from = birth)
//!    (absent) ─────────────────────────────────────► Created
//!
//!    Created ──SalePriceSet──► OnPrimarySale ─┐
//!    Sold    ──SalePriceSet──► OnSecondarySale ├─Sold / AcceptBid──► Sold
//!                                              ┘
//!    any ──transfer to birth──► Withdrawn
//!    any non-withdrawn ──ordinary transfer──► (status unchanged, owner moves)
//! ```
//!
//! Ordinary transfers deliberately do not touch `status`: status is
//! driven by marketplace actions only, so a post-sale transfer leaves
//! the artwork `Sold` even though ownership moved outside the venue.
//!
//! # Redelivery
//!
//! Each artwork records the stream position (block, log index) of the
//! last event reduced into it. An incoming artwork event at or before
//! that position is a redelivery and is skipped wholesale, so replaying
//! any already-reduced prefix is a no-op. This also covers events that
//! were dropped because the artwork did not exist yet: they sit before
//! the mint's position, so a redelivery after the mint stays inert
//! instead of being applied retroactively.
//!
//! # Single-active-slot invariants
//!
//! At most one open bid and one unsold listing exist per artwork, and
//! `current_bid` / `current_sale` reference exactly them. A newer bid
//! supersedes (cancels) the open one; completion of either path clears
//! both slots.

mod accounts;
mod artwork;
mod error;
mod market;
mod runner;


pub use error::{ApplyOutcome, DropReason, IndexError};
pub use runner::RunReport;

use tracing::debug;

use crate::config::IndexerConfig;
use crate::event::{router, EventEnvelope, MarketEvent};
use crate::store::EntityStore;
use crate::uri::TokenUriSource;

/// Folds ordered marketplace events into an entity store.
#[derive(Debug)]
pub struct MarketIndexer<S, U> {
    store: S,
    uris: U,
    config: IndexerConfig,
}

impl<S: EntityStore, U: TokenUriSource> MarketIndexer<S, U> {
    /// Creates an indexer with default configuration.
    #[must_use]
    pub fn new(store: S, uris: U) -> Self {
        Self::with_config(store, uris, IndexerConfig::default())
    }

    /// Creates an indexer with the given configuration.
    #[must_use]
    pub fn with_config(store: S, uris: U, config: IndexerConfig) -> Self {
        Self {
            store,
            uris,
            config,
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the indexer, returning the store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Applies one delivered event.
    ///
    /// All of the event's mutations are written before this returns; the
    /// caller must not deliver the next event earlier. Missing-entity
    /// conditions are reported via [`ApplyOutcome::Dropped`] and logged,
    /// never raised. A redelivered event is skipped and reported as
    /// applied: its mutations are already in place.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::IdentifierCollision`] if a derived key
    /// already denotes a different logical event, and
    /// [`IndexError::UriFetch`] if the mint-time URI lookup fails. Both
    /// are fatal for this event only.
    pub fn apply(&mut self, envelope: &EventEnvelope) -> Result<ApplyOutcome, IndexError> {
        self.apply_fee_schedule(envelope.block);

        let event = router::normalize(&envelope.event);
        debug!(
            "apply(): block={} tx={} log={} {:?}",
            envelope.block, envelope.tx_hash, envelope.log_index, event
        );

        // Redelivery gate: anything at or before the artwork's last
        // reduced position has already been folded in (or was dropped
        // before the artwork existed) and must not mutate state again.
        if let Some(token_id) = event.token_id() {
            if let Some(artwork) = self.store.artwork(token_id) {
                if artwork.already_reduced(envelope.position()) {
                    debug!(
                        "apply(): redelivered event skipped: artwork {token_id} block={} log={}",
                        envelope.block, envelope.log_index
                    );
                    return Ok(ApplyOutcome::Applied);
                }
            }
        }

        match event {
            MarketEvent::Transferred { token_id, from, to } => {
                self.handle_transfer(envelope, &token_id, &from, &to)
            },
            MarketEvent::UriUpdated { token_id, uri } => {
                self.handle_uri_updated(envelope, &token_id, &uri)
            },
            MarketEvent::SalePriceSet { token_id, amount } => {
                self.handle_sale_price_set(envelope, &token_id, amount)
            },
            MarketEvent::SaleCompleted {
                token_id,
                buyer,
                amount,
            } => self.handle_sold(envelope, &token_id, &buyer, amount),
            MarketEvent::BidRaised {
                token_id,
                bidder,
                amount,
            } => self.handle_bid_raised(envelope, &token_id, &bidder, amount),
            MarketEvent::BidCancelled { token_id, bidder } => {
                self.handle_bid_cancelled(envelope, &token_id, &bidder)
            },
            MarketEvent::BidAccepted {
                token_id,
                seller,
                amount,
            } => self.handle_bid_accepted(envelope, &token_id, &seller, amount),
            MarketEvent::RoyaltyFeeSet { pct } => {
                self.set_royalty_fee(pct);
                Ok(ApplyOutcome::Applied)
            },
            MarketEvent::PrimaryIncomeFractionSet { pct } => {
                self.set_primary_income_fraction(pct);
                Ok(ApplyOutcome::Applied)
            },
        }
    }
}
