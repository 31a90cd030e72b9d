//! Core library entry for `freeguid`.
//!
//! Five interchangeable GUID generation strategies sit behind the
//! [`GuidGenerator`](generator::GuidGenerator) trait. A
//! [`GeneratorFactory`](generator::GeneratorFactory) picks one by its
//! selector string and wires it to the clock and entropy of a
//! [`ServiceContext`](context::ServiceContext).

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod guid;
pub mod identifier;
pub mod ports;
pub mod selector;

pub use error::Error;
pub use guid::Guid;
pub use selector::Selector;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns [`Error::Cli`] when argument parsing fails (this includes
/// `--help` and `--version`), or the command's error when execution fails.
pub fn run<I, T>(args: I) -> Result<(), Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args)?;
    commands::dispatch(&cli.command)
}
