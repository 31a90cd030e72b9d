//! Live adapter for the `Entropy` port.

use rand::rngs::OsRng;
use rand::{Rng, RngCore};

use crate::ports::entropy::{Entropy, UUID_BYTES};

/// Live entropy backed by the operating system CSPRNG and the thread-local PRNG.
pub struct LiveEntropy;

impl Entropy for LiveEntropy {
    fn secure_bytes(&self) -> [u8; UUID_BYTES] {
        let mut bytes = [0u8; UUID_BYTES];
        OsRng.fill_bytes(&mut bytes);
        bytes
    }

    fn random_bytes(&self) -> [u8; UUID_BYTES] {
        rand::thread_rng().gen()
    }

    fn below(&self, bound: u32) -> u32 {
        rand::thread_rng().gen_range(0..bound)
    }
}
