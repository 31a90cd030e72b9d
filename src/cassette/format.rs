//! Cassette data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single draw from a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number across the whole cassette.
    pub seq: u64,
    /// Port name (`"clock"` or `"entropy"`).
    pub port: String,
    /// Method invoked on the port.
    pub method: String,
    /// Arguments passed to the method, `null` when there are none.
    #[serde(default)]
    pub input: serde_json::Value,
    /// Value the port returned.
    pub output: serde_json::Value,
}

/// A named, timestamped sequence of interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was written.
    pub recorded_at: DateTime<Utc>,
    /// Ordered list of interactions.
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}
