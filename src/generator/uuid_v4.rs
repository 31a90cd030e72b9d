//! `uuidv4` strategy.

use std::sync::Arc;

use uuid::Builder;

use super::GuidGenerator;
use crate::ports::Entropy;
use crate::selector::Selector;

/// UUID v4 assembled by the `uuid` crate from general-purpose random bytes.
pub struct UuidV4Generator {
    entropy: Arc<dyn Entropy>,
}

impl UuidV4Generator {
    /// Creates the generator over `entropy`.
    #[must_use]
    pub fn new(entropy: Arc<dyn Entropy>) -> Self {
        Self { entropy }
    }
}

impl GuidGenerator for UuidV4Generator {
    fn generate(&self) -> String {
        Builder::from_random_bytes(self.entropy.random_bytes()).into_uuid().to_string()
    }

    fn selector(&self) -> Selector {
        Selector::UuidV4
    }
}
