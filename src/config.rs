//! Runtime configuration read from the environment.
//!
//! `main` calls [`load_dotenv`] before this runs, so every key below can
//! also live in a `.env` file.

use std::env;
use std::path::PathBuf;

use crate::error::Error;
use crate::selector::Selector;

/// Selector used by `generate` when neither `--type` nor the environment picks one.
pub const DEFAULT_SELECTOR: Selector = Selector::CryptoRandom;

/// Environment key overriding the default generator type.
pub const DEFAULT_TYPE_VAR: &str = "FREEGUID_DEFAULT_TYPE";
/// Environment key naming a cassette to record into.
pub const RECORD_VAR: &str = "FREEGUID_RECORD";
/// Environment key naming a cassette to replay from.
pub const REPLAY_VAR: &str = "FREEGUID_REPLAY";

/// Loads `.env` from the working directory or its parents.
///
/// A missing file is fine since every setting has a default. A file that
/// exists but cannot be read or parsed is reported and otherwise ignored.
pub fn load_dotenv() {
    if let Some(err) = dotenv_failure(dotenvy::dotenv()) {
        log::warn!("ignoring .env file: {err}");
    }
}

fn dotenv_failure<T>(result: Result<T, dotenvy::Error>) -> Option<dotenvy::Error> {
    match result {
        Ok(_) => None,
        Err(err) if err.not_found() => None,
        Err(err) => Some(err),
    }
}

/// Where the clock and entropy come from for this run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SourceMode {
    /// System clock and real random number generators.
    #[default]
    Live,
    /// Live sources, with every draw written to a cassette at the path.
    Record(PathBuf),
    /// Every draw served from the cassette at the path.
    Replay(PathBuf),
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Generator type used when `--type` is absent. Validated when used, so
    /// a bad value surfaces as an unrecognized generator type.
    pub default_type: String,
    /// Clock and entropy wiring.
    pub sources: SourceMode,
}

impl Default for Config {
    fn default() -> Self {
        Self { default_type: DEFAULT_SELECTOR.as_str().to_string(), sources: SourceMode::Live }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when recording and replaying are both requested.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when recording and replaying are both requested.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let sources = match (get(RECORD_VAR), get(REPLAY_VAR)) {
            (Some(_), Some(_)) => {
                return Err(Error::Config(format!(
                    "{RECORD_VAR} and {REPLAY_VAR} cannot both be set"
                )));
            }
            (Some(path), None) => SourceMode::Record(PathBuf::from(path)),
            (None, Some(path)) => SourceMode::Replay(PathBuf::from(path)),
            (None, None) => SourceMode::Live,
        };

        let default_type =
            get(DEFAULT_TYPE_VAR).unwrap_or_else(|| DEFAULT_SELECTOR.as_str().to_string());

        Ok(Self { default_type, sources })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, Error> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]).unwrap(), Config::default());
    }

    #[test]
    fn default_type_override_is_kept_verbatim() {
        let config = config_from(&[(DEFAULT_TYPE_VAR, "Timestamp")]).unwrap();
        assert_eq!(config.default_type, "Timestamp");
    }

    #[test]
    fn record_and_replay_paths() {
        let config = config_from(&[(RECORD_VAR, "/tmp/a.yaml")]).unwrap();
        assert_eq!(config.sources, SourceMode::Record(PathBuf::from("/tmp/a.yaml")));

        let config = config_from(&[(REPLAY_VAR, "/tmp/b.yaml"), (RECORD_VAR, "")]).unwrap();
        assert_eq!(config.sources, SourceMode::Replay(PathBuf::from("/tmp/b.yaml")));
    }

    #[test]
    fn missing_dotenv_is_not_a_failure() {
        let path = std::env::temp_dir().join("freeguid_no_such.env");
        let _ = std::fs::remove_file(&path);
        assert!(dotenv_failure(dotenvy::from_path(&path)).is_none());
    }

    #[test]
    fn malformed_dotenv_is_reported() {
        let dir = std::env::temp_dir().join("freeguid_bad_dotenv_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(".env");
        std::fs::write(&path, "FREEGUID_UNUSED_KEY='unterminated\n").unwrap();

        let err = dotenv_failure(dotenvy::from_path(&path)).expect("parse error surfaces");
        assert!(!err.not_found());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn record_and_replay_conflict() {
        let err = config_from(&[(RECORD_VAR, "a"), (REPLAY_VAR, "b")]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
