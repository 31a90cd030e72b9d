//! Recording adapter for the `Entropy` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::entropy::{Entropy, UUID_BYTES};

/// Records every random draw while delegating to an inner source.
pub struct RecordingEntropy {
    inner: Box<dyn Entropy>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingEntropy {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn Entropy>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Entropy for RecordingEntropy {
    fn secure_bytes(&self) -> [u8; UUID_BYTES] {
        let result = self.inner.secure_bytes();
        record_interaction(&self.recorder, "entropy", "secure_bytes", &(), &result);
        result
    }

    fn random_bytes(&self) -> [u8; UUID_BYTES] {
        let result = self.inner.random_bytes();
        record_interaction(&self.recorder, "entropy", "random_bytes", &(), &result);
        result
    }

    fn below(&self, bound: u32) -> u32 {
        let result = self.inner.below(bound);
        record_interaction(&self.recorder, "entropy", "below", &json!({ "bound": bound }), &result);
        result
    }
}
