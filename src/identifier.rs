//! Classifying identifier strings by shape.

use serde::Serialize;

use crate::generator::SUFFIX_BOUND;
use crate::guid::Guid;

/// The shape of an identifier produced by one of the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum IdentifierShape {
    /// Canonical UUID v4 text.
    UuidV4,
    /// `<epoch-millis>-<suffix>` with `suffix` below one million.
    TimestampComposite {
        /// Milliseconds since the Unix epoch.
        millis: u64,
        /// Random suffix.
        suffix: u32,
    },
    /// Anything else.
    Unrecognized,
}

impl IdentifierShape {
    /// Classifies `id`.
    #[must_use]
    pub fn classify(id: &str) -> Self {
        if Guid::parse(id).is_some() {
            return Self::UuidV4;
        }
        Self::composite(id).unwrap_or(Self::Unrecognized)
    }

    fn composite(id: &str) -> Option<Self> {
        let (millis, suffix) = id.split_once('-')?;
        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(millis) || !all_digits(suffix) {
            return None;
        }
        let millis = millis.parse().ok()?;
        let suffix = suffix.parse().ok().filter(|&n| n < SUFFIX_BOUND)?;
        Some(Self::TimestampComposite { millis, suffix })
    }

    /// Short label printed by `freeguid inspect`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::UuidV4 => "uuid-v4",
            Self::TimestampComposite { .. } => "timestamp-composite",
            Self::Unrecognized => "unrecognized",
        }
    }
}
