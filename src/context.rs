//! Service context bundling the clock and entropy ports.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::fixed::{FixedClock, SeededEntropy};
use crate::adapters::live::{LiveClock, LiveEntropy};
use crate::adapters::recording::{RecordingClock, RecordingEntropy};
use crate::adapters::replaying::{ReplayingClock, ReplayingEntropy};
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::config::SourceMode;
use crate::error::Error;
use crate::ports::clock::Clock;
use crate::ports::entropy::Entropy;

/// Name written into cassettes recorded by the CLI.
const SESSION_NAME: &str = "freeguid-session";

/// The ports every generator draws from.
///
/// Constructors wire up different adapters (live, fixed, recording,
/// replaying). Handles are shared, so a factory built from the context keeps
/// working after the context itself is gone.
pub struct ServiceContext {
    /// Clock for timestamp-based identifiers.
    pub clock: Arc<dyn Clock>,
    /// Randomness for every identifier.
    pub entropy: Arc<dyn Entropy>,
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// System clock and real random number generators.
    #[must_use]
    pub fn live() -> Self {
        Self { clock: Arc::new(LiveClock), entropy: Arc::new(LiveEntropy), recorder: None }
    }

    /// Clock frozen at `millis` and entropy seeded with `seed`.
    #[must_use]
    pub fn fixed(millis: i64, seed: u64) -> Self {
        Self {
            clock: Arc::new(FixedClock::at_millis(millis)),
            entropy: Arc::new(SeededEntropy::new(seed)),
            recorder: None,
        }
    }

    /// Live sources whose draws are recorded into a cassette at `path`.
    ///
    /// Nothing is written until [`ServiceContext::finish`] is called.
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, SESSION_NAME)));
        Self {
            clock: Arc::new(RecordingClock::new(Box::new(LiveClock), Arc::clone(&recorder))),
            entropy: Arc::new(RecordingEntropy::new(Box::new(LiveEntropy), Arc::clone(&recorder))),
            recorder: Some(recorder),
        }
    }

    /// Sources served from the cassette at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, Error> {
        let cassette = crate::cassette::load(path)?;
        log::debug!(
            "replaying {} interactions from {}",
            cassette.interactions.len(),
            path.display()
        );
        // Separate replayers keep the clock and entropy streams independent.
        Ok(Self {
            clock: Arc::new(ReplayingClock::new(CassetteReplayer::for_port(&cassette, "clock"))),
            entropy: Arc::new(ReplayingEntropy::new(CassetteReplayer::for_port(
                &cassette, "entropy",
            ))),
            recorder: None,
        })
    }

    /// Builds the context selected by configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a replay cassette cannot be loaded.
    pub fn from_sources(sources: &SourceMode) -> Result<Self, Error> {
        match sources {
            SourceMode::Live => Ok(Self::live()),
            SourceMode::Record(path) => Ok(Self::recording(path)),
            SourceMode::Replay(path) => Self::replaying(path),
        }
    }

    /// Whether this context records its draws.
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recorder.is_some()
    }

    /// Writes the cassette of a recording context and returns its path.
    ///
    /// Returns `Ok(None)` for contexts that do not record.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, Error> {
        let Some(recorder) = self.recorder else {
            return Ok(None);
        };
        let path = recorder.lock().expect("recorder lock poisoned").write()?;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;

    #[test]
    fn fixed_context_is_deterministic() {
        let a = ServiceContext::fixed(1_700_000_000_000, 9);
        let b = ServiceContext::fixed(1_700_000_000_000, 9);
        assert_eq!(a.clock.now(), b.clock.now());
        assert_eq!(a.entropy.random_bytes(), b.entropy.random_bytes());
        assert!(!a.is_recording());
        assert_eq!(a.finish().unwrap(), None);
    }

    #[test]
    fn recording_then_replaying_serves_same_draws() {
        let dir = std::env::temp_dir().join("freeguid_ctx_record_replay");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("session.cassette.yaml");

        let ctx = ServiceContext::recording(&path);
        assert!(ctx.is_recording());
        let now = ctx.clock.now();
        let bytes = ctx.entropy.secure_bytes();
        let n = ctx.entropy.below(1_000_000);
        assert_eq!(ctx.finish().unwrap(), Some(path.clone()));

        let cassette: Cassette =
            serde_yaml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(cassette.name, SESSION_NAME);
        assert_eq!(cassette.interactions.len(), 3);

        let replay = ServiceContext::replaying(&path).unwrap();
        assert_eq!(replay.entropy.below(1_000_000), n);
        assert_eq!(replay.clock.now(), now);
        assert_eq!(replay.entropy.secure_bytes(), bytes);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_missing_cassette_fails() {
        let path = std::env::temp_dir().join("freeguid_ctx_missing.cassette.yaml");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(ServiceContext::replaying(&path), Err(Error::Cassette { .. })));
    }

    #[test]
    fn from_sources_picks_adapter() {
        let ctx = ServiceContext::from_sources(&SourceMode::Live).unwrap();
        assert!(!ctx.is_recording());
        let path = std::env::temp_dir().join("freeguid_ctx_never_written.yaml");
        let ctx = ServiceContext::from_sources(&SourceMode::Record(path)).unwrap();
        assert!(ctx.is_recording());
    }
}
