use serde::{Deserialize, Serialize};

/// Maps a full US state name to its two-letter abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateLookup {
    pub state: String,
    pub abbreviation: String,
}
