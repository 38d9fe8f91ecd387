//! General client defaults.

use serde::{Deserialize, Serialize};

/// Default number of entries requested per listing.
const fn default_limit() -> u32 {
    25
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for entry listings.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Default number of surrounding entries; 0 sends none.
    #[serde(default)]
    pub default_context_size: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_context_size: 0,
        }
    }
}
