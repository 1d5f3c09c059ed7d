//! The artwork state machine: mint, transfer, withdrawal, URI updates,
//! and the sale/bid lifecycles.
//!
//! Every handler loads the artwork, mutates it and its zero-or-one
//! active sub-entities, and writes everything back before returning.
//! Missing artworks drop the event; dangling sub-entity references skip
//! only that sub-entity's mutation. Redeliveries never reach these
//! handlers (the apply loop filters them against the artwork's last
//! reduced stream position), so an existing record under a freshly
//! derived key always indicates key aliasing and is escalated.

use tracing::{debug, error};

use super::error::{ApplyOutcome, DropReason, IndexError};
use super::MarketIndexer;
use crate::event::EventEnvelope;
use crate::ident;
use crate::model::{Artwork, ArtworkStatus, Bid, BidStatus, Sale, Transfer};
use crate::store::EntityStore;
use crate::uri::TokenUriSource;

impl<S: EntityStore, U: TokenUriSource> MarketIndexer<S, U> {
    /// Handles a transfer event: mint, withdrawal, or ordinary transfer,
    /// distinguished by the birth address.
    pub(super) fn handle_transfer(
        &mut self,
        envelope: &EventEnvelope,
        token_id: &str,
        from: &str,
        to: &str,
    ) -> Result<ApplyOutcome, IndexError> {
        if from == self.config.birth_address {
            return self.handle_mint(envelope, token_id, to);
        }

        let Some(mut artwork) = self.store.artwork(token_id) else {
            error!("handle_transfer(): artwork not found: {token_id}");
            return Ok(ApplyOutcome::Dropped(DropReason::ArtworkNotFound {
                token_id: token_id.to_string(),
            }));
        };
        artwork.reduced_through = Some(envelope.position());

        if to == self.config.birth_address {
            artwork.time_withdrawn = Some(envelope.timestamp);
            artwork.status = ArtworkStatus::Withdrawn;
            debug!(
                "handle_transfer(): artwork withdrawn: {token_id} at {}",
                envelope.timestamp
            );
            self.store.put_artwork(artwork);
            return Ok(ApplyOutcome::Applied);
        }

        let key = ident::transfer_key(token_id, envelope.timestamp, envelope.log_index);
        if self.store.transfer(&key).is_some() {
            return Err(IndexError::IdentifierCollision {
                kind: "transfer",
                key,
            });
        }

        self.get_or_create_account(from);
        self.get_or_create_account(to);
        self.store
            .put_transfer(Transfer::new(key.clone(), from, to, envelope.timestamp));

        artwork.transfers.push(key);
        artwork.owner = to.to_string();
        artwork.time_last_transferred = Some(envelope.timestamp);
        // Status is deliberately untouched: ownership moved outside the
        // marketplace, so the last marketplace-driven status stands.
        debug!("handle_transfer(): artwork transferred: {token_id} {from} -> {to}");
        self.store.put_artwork(artwork);
        Ok(ApplyOutcome::Applied)
    }

    /// Mints an artwork, fetching its URI from the emitting contract.
    fn handle_mint(
        &mut self,
        envelope: &EventEnvelope,
        token_id: &str,
        to: &str,
    ) -> Result<ApplyOutcome, IndexError> {
        // Redelivered mints are filtered by the apply loop; reaching
        // here with an existing artwork means a genuinely distinct mint
        // for the same token.
        if self.store.artwork(token_id).is_some() {
            error!("handle_transfer(): mint for existing artwork: {token_id}");
            return Ok(ApplyOutcome::Dropped(DropReason::AlreadyMinted {
                token_id: token_id.to_string(),
            }));
        }

        // The one external call, made exactly once per artwork. Failure
        // is fatal for this event only.
        let uri = self
            .uris
            .current_token_uri(&envelope.contract, token_id)
            .map_err(|source| IndexError::UriFetch {
                token_id: token_id.to_string(),
                source,
            })?;

        self.get_or_create_account(to);
        let mut artwork = Artwork::new(token_id, to, uri, envelope.timestamp);
        artwork.reduced_through = Some(envelope.position());
        debug!(
            "handle_transfer(): artwork created: {token_id} artist {to} uri {} at {}",
            artwork.uri, envelope.timestamp
        );
        self.store.put_artwork(artwork);
        Ok(ApplyOutcome::Applied)
    }

    /// Handles a URI-update event: in-place overwrite, no history.
    pub(super) fn handle_uri_updated(
        &mut self,
        envelope: &EventEnvelope,
        token_id: &str,
        uri: &str,
    ) -> Result<ApplyOutcome, IndexError> {
        let Some(mut artwork) = self.store.artwork(token_id) else {
            error!("handle_uri_updated(): artwork not found: {token_id}");
            return Ok(ApplyOutcome::Dropped(DropReason::ArtworkNotFound {
                token_id: token_id.to_string(),
            }));
        };
        artwork.reduced_through = Some(envelope.position());
        artwork.uri = uri.to_string();
        debug!("handle_uri_updated(): {token_id} -> {uri}");
        self.store.put_artwork(artwork);
        Ok(ApplyOutcome::Applied)
    }

    /// Handles a listing event: reprices the active sale if one exists,
    /// otherwise creates a new listing and makes it current.
    pub(super) fn handle_sale_price_set(
        &mut self,
        envelope: &EventEnvelope,
        token_id: &str,
        amount: u128,
    ) -> Result<ApplyOutcome, IndexError> {
        let Some(mut artwork) = self.store.artwork(token_id) else {
            error!("handle_sale_price_set(): artwork not found: {token_id}");
            return Ok(ApplyOutcome::Dropped(DropReason::ArtworkNotFound {
                token_id: token_id.to_string(),
            }));
        };
        artwork.reduced_through = Some(envelope.position());

        if let Some(sale_id) = artwork.current_sale.clone() {
            match self.store.sale(&sale_id) {
                Some(mut sale) => {
                    sale.price = amount;
                    debug!("handle_sale_price_set(): repriced {sale_id} to {amount}");
                    self.store.put_sale(sale);
                },
                None => {
                    error!("handle_sale_price_set(): current sale not found: {sale_id}");
                },
            }
            self.store.put_artwork(artwork);
            return Ok(ApplyOutcome::Applied);
        }

        let key = ident::sale_key(token_id, envelope.timestamp, envelope.log_index);
        if self.store.sale(&key).is_some() {
            return Err(IndexError::IdentifierCollision { kind: "sale", key });
        }

        self.get_or_create_account(&artwork.owner);
        let sale = Sale::listed(key.clone(), artwork.owner.clone(), amount, envelope.timestamp);
        self.store.put_sale(sale);

        artwork.sales.push(key.clone());
        artwork.current_sale = Some(key);
        artwork.status = if artwork.status == ArtworkStatus::Created {
            ArtworkStatus::OnPrimarySale
        } else {
            ArtworkStatus::OnSecondarySale
        };
        debug!(
            "handle_sale_price_set(): {token_id} listed at {amount}, status {}",
            artwork.status.as_str()
        );
        self.store.put_artwork(artwork);
        Ok(ApplyOutcome::Applied)
    }

    /// Handles a direct-sale completion.
    pub(super) fn handle_sold(
        &mut self,
        envelope: &EventEnvelope,
        token_id: &str,
        buyer: &str,
        amount: u128,
    ) -> Result<ApplyOutcome, IndexError> {
        let Some(mut artwork) = self.store.artwork(token_id) else {
            error!("handle_sold(): artwork not found: {token_id}");
            return Ok(ApplyOutcome::Dropped(DropReason::ArtworkNotFound {
                token_id: token_id.to_string(),
            }));
        };
        artwork.reduced_through = Some(envelope.position());
        let timestamp = envelope.timestamp;

        // The payout fires only when the listing actually transitions to
        // sold; a completion without an active listing settles nothing.
        let mut completed = false;
        match artwork.current_sale.clone() {
            Some(sale_id) => match self.store.sale(&sale_id) {
                Some(mut sale) if !sale.is_sold => {
                    self.get_or_create_account(buyer);
                    sale.is_sold = true;
                    sale.buyer = Some(buyer.to_string());
                    sale.time_sold = Some(timestamp);
                    debug!("handle_sold(): sale completed: {sale_id} buyer {buyer} at {amount}");
                    self.store.put_sale(sale);
                    completed = true;
                },
                Some(_) => {
                    error!("handle_sold(): current sale already sold: {sale_id}");
                },
                None => {
                    error!("handle_sold(): current sale not found: {sale_id}");
                },
            },
            None => {
                error!("handle_sold(): no active sale for artwork: {token_id}");
            },
        }

        // An open bid orphaned by a direct sale is refunded by the venue.
        self.retire_open_bid(&mut artwork, timestamp);
        artwork.current_bid = None;
        artwork.current_sale = None;
        artwork.last_transfer_price = Some(amount);
        if completed {
            self.settle_sale(&mut artwork, amount);
            artwork.status = ArtworkStatus::Sold;
        }
        self.store.put_artwork(artwork);
        Ok(ApplyOutcome::Applied)
    }

    /// Handles a raised bid: the previous open bid, if any, is
    /// superseded (the venue refunds it), keeping exactly one open bid
    /// per artwork.
    pub(super) fn handle_bid_raised(
        &mut self,
        envelope: &EventEnvelope,
        token_id: &str,
        bidder: &str,
        amount: u128,
    ) -> Result<ApplyOutcome, IndexError> {
        let Some(mut artwork) = self.store.artwork(token_id) else {
            error!("handle_bid_raised(): artwork not found: {token_id}");
            return Ok(ApplyOutcome::Dropped(DropReason::ArtworkNotFound {
                token_id: token_id.to_string(),
            }));
        };
        artwork.reduced_through = Some(envelope.position());
        let timestamp = envelope.timestamp;

        let key = ident::bid_key(token_id, timestamp, bidder, envelope.log_index);
        if self.store.bid(&key).is_some() {
            return Err(IndexError::IdentifierCollision { kind: "bid", key });
        }

        self.retire_open_bid(&mut artwork, timestamp);
        self.get_or_create_account(bidder);
        self.store
            .put_bid(Bid::open(key.clone(), bidder, amount, timestamp));

        artwork.bids.push(key.clone());
        artwork.current_bid = Some(key);
        debug!("handle_bid_raised(): {token_id} bid {amount} by {bidder} at {timestamp}");
        self.store.put_artwork(artwork);
        Ok(ApplyOutcome::Applied)
    }

    /// Handles a bid cancellation: the current bid goes terminal and the
    /// slot is cleared.
    pub(super) fn handle_bid_cancelled(
        &mut self,
        envelope: &EventEnvelope,
        token_id: &str,
        bidder: &str,
    ) -> Result<ApplyOutcome, IndexError> {
        let Some(mut artwork) = self.store.artwork(token_id) else {
            error!("handle_bid_cancelled(): artwork not found: {token_id}");
            return Ok(ApplyOutcome::Dropped(DropReason::ArtworkNotFound {
                token_id: token_id.to_string(),
            }));
        };
        artwork.reduced_through = Some(envelope.position());

        match artwork.current_bid.take() {
            Some(bid_id) => match self.store.bid(&bid_id) {
                Some(mut bid) if bid.is_open() => {
                    bid.status = BidStatus::Cancelled;
                    bid.time_cancelled = Some(envelope.timestamp);
                    debug!("handle_bid_cancelled(): bid cancelled: {bid_id} by {bidder}");
                    self.store.put_bid(bid);
                },
                Some(_) => {
                    error!("handle_bid_cancelled(): current bid already terminal: {bid_id}");
                },
                None => {
                    error!("handle_bid_cancelled(): current bid not found: {bid_id}");
                },
            },
            None => {
                error!("handle_bid_cancelled(): no current bid for artwork: {token_id}");
            },
        }

        self.store.put_artwork(artwork);
        Ok(ApplyOutcome::Applied)
    }

    /// Handles an accepted bid: the bid goes terminal, both current
    /// slots clear, and the sale settles.
    pub(super) fn handle_bid_accepted(
        &mut self,
        envelope: &EventEnvelope,
        token_id: &str,
        seller: &str,
        amount: u128,
    ) -> Result<ApplyOutcome, IndexError> {
        let Some(mut artwork) = self.store.artwork(token_id) else {
            error!("handle_bid_accepted(): artwork not found: {token_id}");
            return Ok(ApplyOutcome::Dropped(DropReason::ArtworkNotFound {
                token_id: token_id.to_string(),
            }));
        };
        artwork.reduced_through = Some(envelope.position());
        let timestamp = envelope.timestamp;

        let mut completed = false;
        match artwork.current_bid.clone() {
            Some(bid_id) => match self.store.bid(&bid_id) {
                Some(mut bid) if bid.is_open() => {
                    self.get_or_create_account(seller);
                    bid.status = BidStatus::Accepted;
                    bid.accepted_by = Some(seller.to_string());
                    bid.time_accepted = Some(timestamp);
                    debug!("handle_bid_accepted(): bid accepted: {bid_id} by {seller}");
                    self.store.put_bid(bid);
                    completed = true;
                },
                Some(_) => {
                    error!("handle_bid_accepted(): current bid already terminal: {bid_id}");
                },
                None => {
                    error!("handle_bid_accepted(): current bid not found: {bid_id}");
                },
            },
            None => {
                error!("handle_bid_accepted(): no current bid for artwork: {token_id}");
            },
        }

        // A still-active listing is superseded, not completed: it stays
        // unsold in the history.
        artwork.current_bid = None;
        artwork.current_sale = None;
        artwork.last_transfer_price = Some(amount);
        if completed {
            self.settle_sale(&mut artwork, amount);
            artwork.status = ArtworkStatus::Sold;
        }
        self.store.put_artwork(artwork);
        Ok(ApplyOutcome::Applied)
    }

    /// Marks the artwork's open current bid, if any, as cancelled.
    ///
    /// Used when a newer bid supersedes it and when a direct sale
    /// orphans it; in both cases the venue refunds the bidder. Does not
    /// touch the `current_bid` slot itself.
    fn retire_open_bid(&mut self, artwork: &mut Artwork, timestamp: u64) {
        let Some(bid_id) = artwork.current_bid.clone() else {
            return;
        };
        match self.store.bid(&bid_id) {
            Some(mut bid) if bid.is_open() => {
                bid.status = BidStatus::Cancelled;
                bid.time_cancelled = Some(timestamp);
                debug!("retire_open_bid(): bid superseded: {bid_id}");
                self.store.put_bid(bid);
            },
            Some(_) => {},
            None => {
                error!("retire_open_bid(): current bid not found: {bid_id}");
            },
        }
    }
}
