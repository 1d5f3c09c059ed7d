//! Account records: one per distinct address ever seen.

use serde::{Deserialize, Serialize};

/// An address-keyed account with income accumulators.
///
/// Accumulators are monotonically non-decreasing, in the currency's
/// smallest unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The address, also the storage key.
    pub address: String,

    /// Total credited from primary sales of this account's artworks.
    pub total_primary_income: u128,

    /// Total royalties credited from secondary sales.
    pub total_royalty: u128,
}

impl Account {
    /// Creates an account with zeroed accumulators.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            total_primary_income: 0,
            total_royalty: 0,
        }
    }
}
