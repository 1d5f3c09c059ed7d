//! Market fee registry and the royalty / primary-income computation.

use tracing::debug;

use super::MarketIndexer;
use crate::model::{Artwork, Market};
use crate::store::EntityStore;
use crate::uri::TokenUriSource;

impl<S: EntityStore, U: TokenUriSource> MarketIndexer<S, U> {
    /// Loads the market singleton, initializing it to the default fee
    /// fractions on first access.
    pub(super) fn get_or_create_market(&mut self) -> Market {
        if let Some(market) = self.store.market() {
            return market;
        }
        let market = Market::default();
        self.store.put_market(market);
        debug!(
            "market initialized: primary={}% royalty={}%",
            market.primary_income_pct, market.royalty_pct
        );
        market
    }

    /// Overwrites the primary-sale income percentage.
    ///
    /// Range `[0, 100]` is the caller's contract; out-of-range values
    /// are not handled defensively here.
    pub(super) fn set_primary_income_fraction(&mut self, pct: u64) {
        let mut market = self.get_or_create_market();
        market.primary_income_pct = pct;
        self.store.put_market(market);
        debug!("primary income fraction set: {pct}%");
    }

    /// Overwrites the royalty percentage.
    pub(super) fn set_royalty_fee(&mut self, pct: u64) {
        let mut market = self.get_or_create_market();
        market.royalty_pct = pct;
        self.store.put_market(market);
        debug!("royalty fee set: {pct}%");
    }

    /// Fires the block-scheduled royalty change, at most once.
    ///
    /// Called before dispatching every event. The `schedule_applied`
    /// flag lives on the market record, so replays over an
    /// already-updated store cannot fire it again, and events jittering
    /// around the boundary cannot fire it twice.
    pub(super) fn apply_fee_schedule(&mut self, block: u64) {
        let Some(schedule) = self.config.royalty_schedule else {
            return;
        };
        if block < schedule.block {
            return;
        }
        let mut market = self.get_or_create_market();
        if market.schedule_applied {
            return;
        }
        market.royalty_pct = schedule.royalty_pct;
        market.schedule_applied = true;
        self.store.put_market(market);
        debug!(
            "scheduled royalty change fired at block {block}: {}%",
            schedule.royalty_pct
        );
    }

    /// Royalty / primary-income computation for one completed sale.
    ///
    /// Fires exactly once per sale that actually completed (direct sale
    /// or accepted bid). The artwork's first completed sale is primary:
    /// it pins `first_transfer_price` and credits the artist the
    /// primary-income fraction. Every later sale is secondary and
    /// credits the royalty fee. The fractions used are whatever the
    /// registry holds at this moment; integer division truncates toward
    /// zero.
    pub(super) fn settle_sale(&mut self, artwork: &mut Artwork, amount: u128) {
        let market = self.get_or_create_market();
        let artist = artwork.artist.clone();
        if artwork.has_sold_before() {
            let royalty = amount * u128::from(market.royalty_pct) / 100;
            self.credit_royalty(&artist, royalty);
            debug!(
                "secondary sale settled: artwork {} amount {amount} royalty {royalty} to {artist}",
                artwork.token_id
            );
        } else {
            artwork.first_transfer_price = Some(amount);
            let income = amount * u128::from(market.primary_income_pct) / 100;
            self.credit_primary_income(&artist, income);
            debug!(
                "primary sale settled: artwork {} amount {amount} income {income} to {artist}",
                artwork.token_id
            );
        }
    }
}
