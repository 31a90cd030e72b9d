//! Replaying adapters that serve draws from a cassette.

pub mod clock;
pub mod entropy;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;

pub use clock::ReplayingClock;
pub use entropy::ReplayingEntropy;

/// Pop the next recorded output for `port`/`method` and deserialize it.
pub(crate) fn next_output<T: DeserializeOwned>(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> T {
    let output = {
        let mut replayer = replayer.lock().expect("replayer lock poisoned");
        replayer.next_interaction(port, method).output
    };
    serde_json::from_value(output)
        .unwrap_or_else(|e| panic!("{port}::{method}: recorded output has the wrong shape: {e}"))
}
