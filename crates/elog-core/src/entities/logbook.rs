use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A logbook as listed on the administration screen.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Logbook {
    pub id: String,
    pub name: String,
}
