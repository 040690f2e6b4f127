//! # Engine Configuration

use serde::{Deserialize, Serialize};

/// Engine configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Records per page in paginated views.
    pub page_size: usize,

    /// Validity window, in days, baked into the reveal challenge.
    pub window_days: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            window_days: 30,
        }
    }
}

impl EngineConfig {
    /// Config for tests (smaller pages).
    pub fn for_testing() -> Self {
        Self {
            page_size: 2,
            ..Self::default()
        }
    }
}
