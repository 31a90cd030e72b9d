//! Cassettes: YAML records of clock and entropy draws.
//!
//! Recording a run captures every value the generators consumed; replaying
//! the cassette feeds the same values back and reproduces the identifiers.

pub mod format;
pub mod recorder;
pub mod replayer;

use std::path::Path;

use crate::error::Error;
use format::Cassette;

/// Reads and parses a cassette file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid cassette.
pub fn load(path: &Path) -> Result<Cassette, Error> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::Cassette { path: path.to_path_buf(), source })?;
    serde_yaml::from_str(&content)
        .map_err(|source| Error::CassetteFormat { path: path.to_path_buf(), source })
}
