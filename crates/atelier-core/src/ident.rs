//! Identifier derivation for sub-entity records.
//!
//! Transfer, sale, and bid records need keys that never collide for
//! distinct events. A bare transaction hash does not satisfy that: one
//! transaction can emit several bid events for different artworks or
//! bidders. Keys are therefore composed from the artwork token id, the
//! block timestamp, the block-wide log index, and (for bids) the bidder
//! address, so two distinct events in the same block derive distinct
//! keys.
//!
//! Redelivery recognition does not live here: the reducer tracks, per
//! artwork, the stream position of the last reduced event and skips
//! anything at or before it. An existing record under a freshly derived
//! key therefore always indicates aliasing and is escalated as an
//! identifier collision.

/// Derives the storage key for a transfer record.
#[must_use]
pub fn transfer_key(token_id: &str, timestamp: u64, log_index: u32) -> String {
    format!("{token_id}:{timestamp}:{log_index}")
}

/// Derives the storage key for a sale record.
#[must_use]
pub fn sale_key(token_id: &str, timestamp: u64, log_index: u32) -> String {
    format!("{token_id}:{timestamp}:{log_index}")
}

/// Derives the storage key for a bid record.
///
/// The bidder address keeps bid keys self-describing in logs and
/// snapshots; uniqueness comes from the log index.
#[must_use]
pub fn bid_key(token_id: &str, timestamp: u64, bidder: &str, log_index: u32) -> String {
    format!("{token_id}:{timestamp}:{bidder}:{log_index}")
}
