//! Binary entrypoint for the `freeguid` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    pretty_env_logger::init();
    freeguid::config::load_dotenv();

    match freeguid::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        // clap renders its own usage, help, and version output and exit codes.
        Err(freeguid::Error::Cli(err)) => err.exit(),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
