//! Replaying adapter for the `Entropy` port.

use std::sync::Mutex;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::entropy::{Entropy, UUID_BYTES};

/// Replays recorded random draws from a cassette.
pub struct ReplayingEntropy {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingEntropy {
    /// Creates replaying entropy from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Entropy for ReplayingEntropy {
    fn secure_bytes(&self) -> [u8; UUID_BYTES] {
        next_output(&self.replayer, "entropy", "secure_bytes")
    }

    fn random_bytes(&self) -> [u8; UUID_BYTES] {
        next_output(&self.replayer, "entropy", "random_bytes")
    }

    fn below(&self, bound: u32) -> u32 {
        let value: u32 = next_output(&self.replayer, "entropy", "below");
        assert!(value < bound, "entropy::below: recorded {value} is not below {bound}");
        value
    }
}
