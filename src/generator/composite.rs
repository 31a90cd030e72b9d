//! `timestamp` and `randomNumber` strategies.
//!
//! Both produce `<epoch-millis>-<n>` with `n` uniform in `[0, 1_000_000)`.
//! They are kept as two registered generators because each selector is
//! part of the public contract.

use std::sync::Arc;

use super::GuidGenerator;
use crate::ports::{Clock, Entropy};
use crate::selector::Selector;

/// Exclusive upper bound of the random suffix.
pub const SUFFIX_BOUND: u32 = 1_000_000;

fn timestamp_with_suffix(clock: &dyn Clock, entropy: &dyn Entropy) -> String {
    // Pre-epoch clocks only exist in tests; clamp so the text stays all digits.
    let millis = clock.now().timestamp_millis().max(0);
    let suffix = entropy.below(SUFFIX_BOUND);
    format!("{millis}-{suffix}")
}

/// Generator registered as `timestamp`.
pub struct TimestampGenerator {
    clock: Arc<dyn Clock>,
    entropy: Arc<dyn Entropy>,
}

impl TimestampGenerator {
    /// Creates the generator over `clock` and `entropy`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, entropy: Arc<dyn Entropy>) -> Self {
        Self { clock, entropy }
    }
}

impl GuidGenerator for TimestampGenerator {
    fn generate(&self) -> String {
        timestamp_with_suffix(self.clock.as_ref(), self.entropy.as_ref())
    }

    fn selector(&self) -> Selector {
        Selector::Timestamp
    }
}

/// Generator registered as `randomNumber`.
pub struct RandomNumberGenerator {
    clock: Arc<dyn Clock>,
    entropy: Arc<dyn Entropy>,
}

impl RandomNumberGenerator {
    /// Creates the generator over `clock` and `entropy`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, entropy: Arc<dyn Entropy>) -> Self {
        Self { clock, entropy }
    }
}

impl GuidGenerator for RandomNumberGenerator {
    fn generate(&self) -> String {
        timestamp_with_suffix(self.clock.as_ref(), self.entropy.as_ref())
    }

    fn selector(&self) -> Selector {
        Selector::RandomNumber
    }
}
