//! Records interactions into a cassette file.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, Interaction};
use crate::error::Error;

/// Accumulates interactions and writes them as a YAML cassette.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    interactions: Vec<Interaction>,
    next_seq: u64,
}

impl CassetteRecorder {
    /// Create a recorder that will write to `path` on [`CassetteRecorder::write`].
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), interactions: Vec::new(), next_seq: 0 }
    }

    /// Record an interaction. The `seq` field is assigned automatically.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        self.interactions.push(Interaction {
            seq: self.next_seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        });
        self.next_seq += 1;
    }

    /// Write everything recorded so far to disk and return the path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn write(&self) -> Result<PathBuf, Error> {
        let cassette = Cassette {
            name: self.name.clone(),
            recorded_at: Utc::now(),
            interactions: self.interactions.clone(),
        };
        let yaml = serde_yaml::to_string(&cassette)
            .map_err(|source| Error::CassetteFormat { path: self.path.clone(), source })?;
        std::fs::write(&self.path, yaml)
            .map_err(|source| Error::Cassette { path: self.path.clone(), source })?;
        log::info!("wrote {} interactions to {}", self.interactions.len(), self.path.display());
        Ok(self.path.clone())
    }
}
