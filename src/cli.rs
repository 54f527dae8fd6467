//! Command-line argument parser.

use std::path::PathBuf;

use clap::Parser;

use crate::config::RunConfig;

/// txt2morse: convert ASCII text into a Morse code WAV file
#[derive(Parser, Debug)]
#[command(name = "txt2morse")]
#[command(about = "Convert ASCII text into Morse code audio (44.1 kHz mono WAV)")]
#[command(version)]
pub struct Cli {
    /// Text file to encode
    pub input: PathBuf,

    /// WAV file to write
    pub output: PathBuf,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a JSON summary of the run on stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parses command-line arguments.
    ///
    /// Exits with a usage message when the arguments are wrong.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Merges flags with environment defaults. Flags can only turn options on.
    pub fn run_config(&self, env: RunConfig) -> RunConfig {
        RunConfig {
            quiet: self.quiet || env.quiet,
            json: self.json || env.json,
        }
    }
}
