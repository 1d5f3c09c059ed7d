//! The global market fee registry singleton.

use serde::{Deserialize, Serialize};

/// Default percentage of a primary sale credited to the artist.
pub const DEFAULT_PRIMARY_INCOME_PCT: u64 = 85;

/// Default royalty percentage on secondary sales.
pub const DEFAULT_ROYALTY_PCT: u64 = 3;

/// Global market parameters, stored under a fixed singleton key.
///
/// Fee changes apply prospectively: the values held at the moment a sale
/// completes are the values used for that sale's payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    /// Percentage of a primary sale credited to the artist.
    pub primary_income_pct: u64,

    /// Royalty percentage on secondary sales.
    pub royalty_pct: u64,

    /// Whether the block-scheduled royalty change has already fired.
    /// Stored durably so a replay over an already-updated store cannot
    /// fire it twice.
    pub schedule_applied: bool,
}

impl Market {
    /// The fixed storage key of the singleton record.
    pub const KEY: &'static str = "market";
}

impl Default for Market {
    fn default() -> Self {
        Self {
            primary_income_pct: DEFAULT_PRIMARY_INCOME_PCT,
            royalty_pct: DEFAULT_ROYALTY_PCT,
            schedule_applied: false,
        }
    }
}
