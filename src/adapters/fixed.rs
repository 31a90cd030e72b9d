//! Deterministic adapters: a frozen clock and seeded entropy.

use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::clock::Clock;
use crate::ports::entropy::{Entropy, UUID_BYTES};

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock frozen at `instant`.
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Creates a clock frozen at the given Unix epoch milliseconds.
    ///
    /// Out-of-range values fall back to the epoch itself.
    #[must_use]
    pub fn at_millis(millis: i64) -> Self {
        let instant = Utc.timestamp_millis_opt(millis).single().unwrap_or_default();
        Self::new(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Entropy drawn from a seeded `StdRng`.
///
/// Both the "secure" and general-purpose draws come from the same seeded
/// stream, so this must never be used outside tests and reproducible runs.
pub struct SeededEntropy {
    rng: Mutex<StdRng>,
}

impl SeededEntropy {
    /// Creates a seeded entropy source.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl Entropy for SeededEntropy {
    fn secure_bytes(&self) -> [u8; UUID_BYTES] {
        self.random_bytes()
    }

    fn random_bytes(&self) -> [u8; UUID_BYTES] {
        self.rng.lock().expect("seeded rng lock poisoned").gen()
    }

    fn below(&self, bound: u32) -> u32 {
        self.rng.lock().expect("seeded rng lock poisoned").gen_range(0..bound)
    }
}
