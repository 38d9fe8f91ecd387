//! Shift labelling settings.

use elog_core::normalize::Normalizer;
use elog_core::shift::ShiftCutoff;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShiftConfig {
    /// Instant at which entries switch from "Morning shift" to "Day shift".
    #[serde(default)]
    pub cutoff: ShiftCutoff,
}

impl ShiftConfig {
    #[must_use]
    pub const fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.cutoff)
    }
}
