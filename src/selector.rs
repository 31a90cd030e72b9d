//! The closed set of generator selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Names one of the five generation strategies.
///
/// The string keys are part of the public contract and are matched exactly:
/// no trimming, no case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selector {
    /// `crypto.randomUUID`: UUID v4 from the operating system CSPRNG.
    #[serde(rename = "crypto.randomUUID")]
    CryptoRandom,
    /// `uuidv4`: UUID v4 built by the `uuid` crate.
    #[serde(rename = "uuidv4")]
    UuidV4,
    /// `guid-typescript`: UUID v4 text from the [`Guid`](crate::Guid) value type.
    #[serde(rename = "guid-typescript")]
    TypedGuid,
    /// `timestamp`: epoch milliseconds plus a random suffix.
    #[serde(rename = "timestamp")]
    Timestamp,
    /// `randomNumber`: same algorithm as `timestamp`, registered separately.
    #[serde(rename = "randomNumber")]
    RandomNumber,
}

impl Selector {
    /// Every selector, in registration order.
    pub const ALL: [Selector; 5] = [
        Selector::CryptoRandom,
        Selector::UuidV4,
        Selector::TypedGuid,
        Selector::Timestamp,
        Selector::RandomNumber,
    ];

    /// The selector's string key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Selector::CryptoRandom => "crypto.randomUUID",
            Selector::UuidV4 => "uuidv4",
            Selector::TypedGuid => "guid-typescript",
            Selector::Timestamp => "timestamp",
            Selector::RandomNumber => "randomNumber",
        }
    }

    /// One-line description used by `freeguid list`.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Selector::CryptoRandom => "UUID v4 from the operating system's secure random source",
            Selector::UuidV4 => "UUID v4 built by the uuid library",
            Selector::TypedGuid => "UUID v4 text from the Guid value type",
            Selector::Timestamp => "epoch milliseconds and a random number below 1000000",
            Selector::RandomNumber => "same as timestamp, under its own name",
        }
    }

    /// Whether this strategy yields canonical UUID v4 text.
    #[must_use]
    pub fn is_uuid(self) -> bool {
        matches!(self, Selector::CryptoRandom | Selector::UuidV4 | Selector::TypedGuid)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::ALL
            .into_iter()
            .find(|selector| selector.as_str() == s)
            .ok_or_else(|| Error::UnrecognizedSelector(s.to_string()))
    }
}
