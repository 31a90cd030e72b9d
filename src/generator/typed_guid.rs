//! `guid-typescript` strategy.

use std::sync::Arc;

use super::GuidGenerator;
use crate::guid::Guid;
use crate::ports::Entropy;
use crate::selector::Selector;

/// Builds a [`Guid`] value and renders it as text.
pub struct TypedGuidGenerator {
    entropy: Arc<dyn Entropy>,
}

impl TypedGuidGenerator {
    /// Creates the generator over `entropy`.
    #[must_use]
    pub fn new(entropy: Arc<dyn Entropy>) -> Self {
        Self { entropy }
    }
}

impl GuidGenerator for TypedGuidGenerator {
    fn generate(&self) -> String {
        Guid::create(self.entropy.as_ref()).to_string()
    }

    fn selector(&self) -> Selector {
        Selector::TypedGuid
    }
}
