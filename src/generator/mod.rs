//! The identifier-generator capability, its five variants, and the factory
//! that picks one by selector.

pub mod composite;
pub mod crypto_random;
pub mod factory;
pub mod typed_guid;
pub mod uuid_v4;

pub use composite::{RandomNumberGenerator, TimestampGenerator, SUFFIX_BOUND};
pub use crypto_random::CryptoRandomGenerator;
pub use factory::GeneratorFactory;
pub use typed_guid::TypedGuidGenerator;
pub use uuid_v4::UuidV4Generator;

use crate::selector::Selector;

/// Produces new identifier strings.
///
/// Implementations are stateless apart from their injected clock and entropy
/// handles, and `generate` never fails.
pub trait GuidGenerator: Send + Sync {
    /// Returns a freshly generated, non-empty identifier.
    fn generate(&self) -> String;

    /// The selector this generator is registered under.
    fn selector(&self) -> Selector;
}
