//! Event-to-state reducer for a two-generation NFT marketplace.
//!
//! This crate consumes a chronologically ordered stream of domain events
//! emitted by two successive generations of an artwork-ownership contract
//! and a separate marketplace/auction contract, and folds them into a
//! normalized snapshot of artworks, accounts, bids, sales, transfers, and
//! global market fees.
//!
//! # Architecture
//!
//! ```text
//! Raw contract events --> router (normalize) --> MarketIndexer --> EntityStore
//!                                                     |
//!                                              TokenUriSource
//!                                              (mint-time fetch)
//! ```
//!
//! # Key Concepts
//!
//! - **[`event`]**: the version-specific event shapes of the three source
//!   contracts and the canonical operations they normalize to.
//! - **[`reducer`]**: per-entity state machines that apply one event at a
//!   time, maintaining the single-active-bid / single-active-sale
//!   invariants and the royalty / primary-income accounting.
//! - **[`store`]**: the keyed load/save interface the reducer depends on,
//!   with an in-memory implementation for hosting and tests.
//!
//! # Determinism
//!
//! Applying the same ordered event sequence to an empty store always
//! produces the same final state, and redelivering a sequence to an
//! already-reduced store leaves it unchanged: each artwork records the
//! stream position of the last event reduced into it, and anything at or
//! before that position is skipped. Sub-entity keys are derived from
//! event content (token id, timestamp, log index, actor), never from
//! store state, so distinct same-block events never alias and replays
//! cannot double-append history or double-credit accumulators.

pub mod config;
pub mod event;
pub mod ident;
pub mod model;
pub mod reducer;
pub mod store;
pub mod uri;

pub use config::{FeeSchedule, IndexerConfig, BIRTH_ADDRESS};
pub use event::{EventEnvelope, MarketEvent, RawEvent, StreamPosition};
pub use model::{Account, Artwork, ArtworkStatus, Bid, BidStatus, Market, Sale, Transfer};
pub use reducer::{ApplyOutcome, DropReason, IndexError, MarketIndexer, RunReport};
pub use store::{EntityStore, MemoryStore};
pub use uri::{StaticUriSource, TokenUriSource, UriError};
