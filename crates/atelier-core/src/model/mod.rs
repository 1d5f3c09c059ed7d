//! Entity records maintained by the reducer.
//!
//! Amounts are `u128` in the currency's smallest unit. Timestamps are
//! `u64` seconds since epoch (block timestamps). Addresses and token ids
//! are strings, as delivered by the source contracts.
//!
//! Artwork, bid, and sale records are state machines mutated in place;
//! account and transfer records are append-only accumulators and audit
//! entries. Nothing is ever deleted.

pub mod account;
pub mod artwork;
pub mod market;
pub mod trade;

pub use account::Account;
pub use artwork::{Artwork, ArtworkStatus};
pub use market::Market;
pub use trade::{Bid, BidStatus, Sale, Transfer};
