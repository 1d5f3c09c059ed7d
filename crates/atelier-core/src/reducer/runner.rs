//! Batch driver: feeds an ordered event sequence through the indexer.

use super::error::{ApplyOutcome, DropReason, IndexError};
use super::MarketIndexer;
use crate::event::EventEnvelope;
use crate::store::EntityStore;
use crate::uri::TokenUriSource;

/// Result of running a batch of events to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Number of events whose mutations were committed.
    pub events_applied: u64,

    /// Drop reports, one per dropped event, in stream order.
    pub drops: Vec<DropReason>,
}

impl RunReport {
    /// Number of events dropped without mutating state.
    #[must_use]
    pub fn events_dropped(&self) -> u64 {
        self.drops.len() as u64
    }
}

impl<S: EntityStore, U: TokenUriSource> MarketIndexer<S, U> {
    /// Applies an ordered sequence of events, one at a time.
    ///
    /// Dropped events are recorded in the report and processing
    /// continues; the first fatal error stops the run with the store
    /// reflecting every event before the failing one.
    ///
    /// # Errors
    ///
    /// Returns the first [`IndexError`] raised by [`Self::apply`].
    pub fn run_batch(&mut self, events: &[EventEnvelope]) -> Result<RunReport, IndexError> {
        let mut report = RunReport::default();
        for envelope in events {
            match self.apply(envelope)? {
                ApplyOutcome::Applied => report.events_applied += 1,
                ApplyOutcome::Dropped(reason) => report.drops.push(reason),
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::event::{RawEvent, TokenEventV2};
    use crate::store::MemoryStore;
    use crate::uri::StaticUriSource;
    use crate::BIRTH_ADDRESS;

    fn transfer_envelope(token_id: &str, from: &str, to: &str, timestamp: u64) -> EventEnvelope {
        EventEnvelope {
            contract: "0xc0".to_string(),
            block: timestamp,
            timestamp,
            tx_hash: format!("0xtx{timestamp}"),
            log_index: 0,
            event: RawEvent::TokenV2(TokenEventV2::Transfer {
                from: from.to_string(),
                to: to.to_string(),
                token_id: token_id.to_string(),
            }),
        }
    }

    #[test]
    fn test_run_batch_counts_applied_and_dropped() {
        let uris = StaticUriSource::new().with_uri("1", "ipfs://x");
        let mut indexer = MarketIndexer::new(MemoryStore::new(), uris);

        let events = vec![
            transfer_envelope("1", BIRTH_ADDRESS, "0xaa", 100),
            transfer_envelope("1", "0xaa", "0xbb", 200),
            // Unknown artwork: dropped, stream continues.
            transfer_envelope("9", "0xaa", "0xbb", 300),
        ];

        let report = indexer.run_batch(&events).unwrap();
        assert_eq!(report.events_applied, 2);
        assert_eq!(report.events_dropped(), 1);
        assert_eq!(
            report.drops[0],
            DropReason::ArtworkNotFound {
                token_id: "9".to_string(),
            }
        );
    }

    #[test]
    fn test_run_batch_stops_at_fatal_error() {
        // No URI registered: the mint fails fatally.
        let mut indexer = MarketIndexer::new(MemoryStore::new(), StaticUriSource::new());
        let events = vec![transfer_envelope("1", BIRTH_ADDRESS, "0xaa", 100)];
        let err = indexer.run_batch(&events).unwrap_err();
        assert!(matches!(err, IndexError::UriFetch { .. }));
    }
}
