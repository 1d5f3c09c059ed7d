//! The keyed load/save interface the reducer depends on.
//!
//! The reducer performs a bounded number of reads and writes per event
//! through this trait and nothing else, so the hosting platform decides
//! where entities actually live. The only contract is last-write-wins
//! with read-your-writes within a single handler invocation. Not-found
//! is an `Option`, not an error.

mod memory;

pub use memory::MemoryStore;

use crate::model::{Account, Artwork, Bid, Market, Sale, Transfer};

/// Keyed get/put for each entity kind.
pub trait EntityStore {
    /// Loads an artwork by token id.
    fn artwork(&self, token_id: &str) -> Option<Artwork>;

    /// Stores an artwork under its token id.
    fn put_artwork(&mut self, artwork: Artwork);

    /// Loads an account by address.
    fn account(&self, address: &str) -> Option<Account>;

    /// Stores an account under its address.
    fn put_account(&mut self, account: Account);

    /// Loads a bid by derived key.
    fn bid(&self, key: &str) -> Option<Bid>;

    /// Stores a bid under its derived key.
    fn put_bid(&mut self, bid: Bid);

    /// Loads a sale by derived key.
    fn sale(&self, key: &str) -> Option<Sale>;

    /// Stores a sale under its derived key.
    fn put_sale(&mut self, sale: Sale);

    /// Loads a transfer by derived key.
    fn transfer(&self, key: &str) -> Option<Transfer>;

    /// Stores a transfer under its derived key.
    fn put_transfer(&mut self, transfer: Transfer);

    /// Loads the market singleton.
    fn market(&self) -> Option<Market>;

    /// Stores the market singleton.
    fn put_market(&mut self, market: Market);
}
