//! `freeguid generate` command.

use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Error;
use crate::generator::GeneratorFactory;
use crate::selector::Selector;

/// One generated identifier in JSON output.
#[derive(Debug, Serialize)]
struct GeneratedId {
    selector: Selector,
    id: String,
}

/// Execute the `generate` command.
///
/// A fresh generator is created for every identifier.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedSelector`] for an unknown `generator_type`,
/// or an output error if writing fails.
pub fn run(
    factory: &GeneratorFactory,
    generator_type: &str,
    count: u32,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), Error> {
    let selector: Selector = generator_type.parse()?;
    log::debug!("generating {count} identifier(s) with {selector}");

    let ids = (0..count).map(|_| factory.create_for(selector).generate());
    match format {
        OutputFormat::Text => {
            for id in ids {
                writeln!(out, "{id}")?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<GeneratedId> = ids.map(|id| GeneratedId { selector, id }).collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
