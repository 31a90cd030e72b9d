//! `freeguid inspect` command.

use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Error;
use crate::identifier::IdentifierShape;

#[derive(Serialize)]
struct Report<'a> {
    id: &'a str,
    #[serde(flatten)]
    shape: IdentifierShape,
}

/// Execute the `inspect` command.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedIdentifier`] when `id` has no known shape,
/// or an output error if writing fails.
pub fn run(id: &str, format: OutputFormat, out: &mut dyn Write) -> Result<(), Error> {
    let shape = IdentifierShape::classify(id);
    if shape == IdentifierShape::Unrecognized {
        return Err(Error::UnrecognizedIdentifier(id.to_string()));
    }

    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", shape.label())?;
            if let IdentifierShape::TimestampComposite { millis, suffix } = shape {
                let when = i64::try_from(millis)
                    .ok()
                    .and_then(chrono::DateTime::from_timestamp_millis)
                    .map_or_else(|| "out of range".to_string(), |t| t.to_rfc3339());
                writeln!(out, "timestamp: {millis} ({when})")?;
                writeln!(out, "suffix: {suffix}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &Report { id, shape })?;
            writeln!(out)?;
        }
    }
    Ok(())
}
