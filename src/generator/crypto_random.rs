//! `crypto.randomUUID` strategy.

use std::sync::Arc;

use uuid::Builder;

use super::GuidGenerator;
use crate::ports::Entropy;
use crate::selector::Selector;

/// UUID v4 drawn from the secure entropy channel.
pub struct CryptoRandomGenerator {
    entropy: Arc<dyn Entropy>,
}

impl CryptoRandomGenerator {
    /// Creates the generator over `entropy`.
    #[must_use]
    pub fn new(entropy: Arc<dyn Entropy>) -> Self {
        Self { entropy }
    }
}

impl GuidGenerator for CryptoRandomGenerator {
    fn generate(&self) -> String {
        Builder::from_random_bytes(self.entropy.secure_bytes()).into_uuid().to_string()
    }

    fn selector(&self) -> Selector {
        Selector::CryptoRandom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveEntropy;
    use crate::identifier::IdentifierShape;

    #[test]
    fn produces_uuid_v4_text() {
        let gen = CryptoRandomGenerator::new(Arc::new(LiveEntropy));
        let id = gen.generate();
        assert_eq!(id.len(), 36);
        assert_eq!(IdentifierShape::classify(&id), IdentifierShape::UuidV4);
        assert_ne!(id, gen.generate());
    }
}
