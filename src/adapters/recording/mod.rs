//! Recording adapters that capture every draw into a cassette.

pub mod clock;
pub mod entropy;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

pub use clock::RecordingClock;
pub use entropy::RecordingEntropy;

/// Serialize `input`/`output` and append them to the shared recorder.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize + ?Sized,
    O: Serialize + ?Sized,
{
    let input_json = serde_json::to_value(input).expect("failed to serialize recording input");
    let output_json = serde_json::to_value(output).expect("failed to serialize recording output");

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}
