//! Reducer configuration injected by the hosting platform.

use serde::{Deserialize, Serialize};

/// The canonical sentinel address meaning "no prior owner".
///
/// A transfer from this address mints an artwork; a transfer to it
/// withdraws one.
pub const BIRTH_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// A one-shot royalty fee change scheduled at a known block height.
///
/// This models a historical protocol parameter change that was applied
/// on-chain without a corresponding fee-change event. It fires exactly
/// once, on the first event at or past the scheduled block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Block height at or after which the change takes effect.
    pub block: u64,

    /// The royalty percentage to force-set.
    pub royalty_pct: u64,
}

/// Configuration for the market indexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexerConfig {
    /// Address treated as the mint/withdraw sentinel.
    #[serde(default = "default_birth_address")]
    pub birth_address: String,

    /// Optional scheduled royalty change.
    #[serde(default)]
    pub royalty_schedule: Option<FeeSchedule>,
}

fn default_birth_address() -> String {
    BIRTH_ADDRESS.to_string()
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            birth_address: default_birth_address(),
            royalty_schedule: None,
        }
    }
}
