//! Selector-to-generator factory.

use std::sync::Arc;

use super::{
    CryptoRandomGenerator, GuidGenerator, RandomNumberGenerator, TimestampGenerator,
    TypedGuidGenerator, UuidV4Generator,
};
use crate::context::ServiceContext;
use crate::error::Error;
use crate::ports::{Clock, Entropy};
use crate::selector::Selector;

/// Builds generators wired to one context's clock and entropy.
///
/// Every call returns a new instance; nothing is cached.
#[derive(Clone)]
pub struct GeneratorFactory {
    clock: Arc<dyn Clock>,
    entropy: Arc<dyn Entropy>,
}

impl GeneratorFactory {
    /// Creates a factory sharing `ctx`'s ports.
    #[must_use]
    pub fn new(ctx: &ServiceContext) -> Self {
        Self::with_ports(Arc::clone(&ctx.clock), Arc::clone(&ctx.entropy))
    }

    /// Creates a factory over explicit ports.
    #[must_use]
    pub fn with_ports(clock: Arc<dyn Clock>, entropy: Arc<dyn Entropy>) -> Self {
        Self { clock, entropy }
    }

    /// Creates the generator registered under `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedSelector`] unless `selector` is exactly one
    /// of the keys in [`Selector::ALL`].
    pub fn create(&self, selector: &str) -> Result<Box<dyn GuidGenerator>, Error> {
        match selector.parse::<Selector>() {
            Ok(parsed) => Ok(self.create_for(parsed)),
            Err(err) => {
                log::warn!("rejected generator type {selector:?}");
                Err(err)
            }
        }
    }

    /// Creates the generator for an already-parsed selector.
    #[must_use]
    pub fn create_for(&self, selector: Selector) -> Box<dyn GuidGenerator> {
        log::debug!("creating {selector} generator");
        let clock = Arc::clone(&self.clock);
        let entropy = Arc::clone(&self.entropy);
        match selector {
            Selector::CryptoRandom => Box::new(CryptoRandomGenerator::new(entropy)),
            Selector::UuidV4 => Box::new(UuidV4Generator::new(entropy)),
            Selector::TypedGuid => Box::new(TypedGuidGenerator::new(entropy)),
            Selector::Timestamp => Box::new(TimestampGenerator::new(clock, entropy)),
            Selector::RandomNumber => Box::new(RandomNumberGenerator::new(clock, entropy)),
        }
    }
}
