//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for `freeguid`.
#[derive(Debug, Parser)]
#[command(name = "freeguid", version, about = "Generate GUIDs with interchangeable strategies")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate identifiers.
    Generate {
        /// Generator type; see `freeguid list`. Defaults to `FREEGUID_DEFAULT_TYPE`
        /// or `crypto.randomUUID`.
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        generator: Option<String>,
        /// How many identifiers to print.
        #[arg(
            short = 'n',
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        count: u32,
        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the available generator types.
    List,
    /// Report which generator shape an identifier has.
    Inspect {
        /// Identifier to classify.
        id: String,
        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one item per line.
    Text,
    /// Pretty-printed JSON.
    Json,
}
