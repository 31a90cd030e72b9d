//! Command dispatch and handlers.

pub mod generate;
pub mod inspect;
pub mod list;

use std::io::{self, Write};

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::generator::GeneratorFactory;

/// Dispatch a parsed command to its handler, writing to stdout.
///
/// Configuration comes from the environment. When `FREEGUID_RECORD` is set,
/// every clock and entropy draw is written to a cassette once the command
/// completes, even if it failed.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the selected command fails,
/// or the cassette cannot be written.
pub fn dispatch(command: &Command) -> Result<(), Error> {
    let config = Config::from_env()?;
    let ctx = ServiceContext::from_sources(&config.sources)?;

    let result = {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        dispatch_with_context(command, &ctx, &config, &mut out)
    };

    if let Some(path) = ctx.finish()? {
        eprintln!("Recording saved to: {}", path.display());
    }

    result
}

/// Dispatch a command with an explicit context, configuration, and output.
///
/// # Errors
///
/// Returns an error if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), Error> {
    match command {
        Command::Generate { generator, count, format } => {
            let generator_type = generator.as_deref().unwrap_or(&config.default_type);
            generate::run(&GeneratorFactory::new(ctx), generator_type, *count, *format, out)
        }
        Command::List => list::run(&config.default_type, out),
        Command::Inspect { id, format } => inspect::run(id, *format, out),
    }
}
