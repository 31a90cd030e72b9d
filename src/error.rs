//! Error type shared by the library and the CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by `freeguid`.
#[derive(Error, Debug)]
pub enum Error {
    /// The factory was asked for a generator type it does not know.
    #[error("unrecognized generator type: {0}")]
    UnrecognizedSelector(String),
    /// `freeguid inspect` was given a string no generator could have produced.
    #[error("unrecognized identifier: {0}")]
    UnrecognizedIdentifier(String),
    /// Conflicting or malformed configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// A cassette file could not be read or written.
    #[error("cassette {}: {source}", path.display())]
    Cassette {
        /// Cassette file path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// A cassette file is not valid cassette YAML.
    #[error("cassette {}: {source}", path.display())]
    CassetteFormat {
        /// Cassette file path.
        path: PathBuf,
        /// Underlying YAML failure.
        source: serde_yaml::Error,
    },
    /// Command-line arguments could not be parsed.
    #[error(transparent)]
    Cli(#[from] clap::Error),
    /// Writing command output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Encoding command output as JSON failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_selector_names_the_input() {
        let err = Error::UnrecognizedSelector("not-a-real-type".into());
        assert_eq!(err.to_string(), "unrecognized generator type: not-a-real-type");
    }
}
