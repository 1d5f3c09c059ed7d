//! In-memory entity store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::EntityStore;
use crate::model::{Account, Artwork, Bid, Market, Sale, Transfer};

/// `HashMap`-backed [`EntityStore`].
///
/// The canonical store for tests and in-process hosting. Equality
/// compares full snapshots, which is what the determinism and
/// idempotent-replay tests rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    artworks: HashMap<String, Artwork>,
    accounts: HashMap<String, Account>,
    bids: HashMap<String, Bid>,
    sales: HashMap<String, Sale>,
    transfers: HashMap<String, Transfer>,
    market: Option<Market>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of artworks stored.
    #[must_use]
    pub fn artwork_count(&self) -> usize {
        self.artworks.len()
    }

    /// Returns the number of accounts stored.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Returns the number of bid records stored.
    #[must_use]
    pub fn bid_count(&self) -> usize {
        self.bids.len()
    }

    /// Returns the number of sale records stored.
    #[must_use]
    pub fn sale_count(&self) -> usize {
        self.sales.len()
    }

    /// Returns the number of transfer records stored.
    #[must_use]
    pub fn transfer_count(&self) -> usize {
        self.transfers.len()
    }
}

impl EntityStore for MemoryStore {
    fn artwork(&self, token_id: &str) -> Option<Artwork> {
        self.artworks.get(token_id).cloned()
    }

    fn put_artwork(&mut self, artwork: Artwork) {
        self.artworks.insert(artwork.token_id.clone(), artwork);
    }

    fn account(&self, address: &str) -> Option<Account> {
        self.accounts.get(address).cloned()
    }

    fn put_account(&mut self, account: Account) {
        self.accounts.insert(account.address.clone(), account);
    }

    fn bid(&self, key: &str) -> Option<Bid> {
        self.bids.get(key).cloned()
    }

    fn put_bid(&mut self, bid: Bid) {
        self.bids.insert(bid.id.clone(), bid);
    }

    fn sale(&self, key: &str) -> Option<Sale> {
        self.sales.get(key).cloned()
    }

    fn put_sale(&mut self, sale: Sale) {
        self.sales.insert(sale.id.clone(), sale);
    }

    fn transfer(&self, key: &str) -> Option<Transfer> {
        self.transfers.get(key).cloned()
    }

    fn put_transfer(&mut self, transfer: Transfer) {
        self.transfers.insert(transfer.id.clone(), transfer);
    }

    fn market(&self) -> Option<Market> {
        self.market
    }

    fn put_market(&mut self, market: Market) {
        self.market = Some(market);
    }
}
