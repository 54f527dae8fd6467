//! txt2morse: convert a text file into a Morse code WAV file.

use std::time::Instant;

use txt2morse::cli::Cli;
use txt2morse::config::{RunConfig, SynthConfig};
use txt2morse::encoder::{CHAR_GAP_UNITS, SIGNAL_GAP_UNITS, WORD_GAP_UNITS};
use txt2morse::error::Result;
use txt2morse::pipeline::encode_file;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let run_config = cli.run_config(RunConfig::from_env());
    let synth = SynthConfig::default();

    if !run_config.quiet {
        print_header(&cli, &synth);
    }

    let start_time = Instant::now();
    let stats = encode_file(&cli.input, &cli.output)?;
    let elapsed = start_time.elapsed();

    if !run_config.quiet {
        eprintln!("Encoding complete!");
        eprintln!("  Time: {:.2}s", elapsed.as_secs_f32());
        eprintln!("  Characters: {}", stats.characters);
        eprintln!("  Segments: {}", stats.segments);
        eprintln!("  Samples: {}", stats.samples);
        eprintln!("  Audio duration: {:.2}s", stats.duration_sec);
        if stats.stopped_early {
            eprintln!("  Note: stopped at first non-ASCII byte");
        }
        eprintln!("Saved to: {}", cli.output.display());
    }

    if run_config.json {
        let report = serde_json::json!({ "config": synth, "stats": stats });
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Warning: could not serialize summary: {}", e),
        }
    }

    Ok(())
}

/// Prints the run parameters.
fn print_header(cli: &Cli, synth: &SynthConfig) {
    eprintln!("=== txt2morse ===");
    eprintln!("Input: {}", cli.input.display());
    eprintln!("Output: {}", cli.output.display());
    eprintln!(
        "Tone: {} Hz, amplitude {}, {} Hz mono",
        synth.frequency_hz, synth.amplitude, synth.sample_rate
    );
    eprintln!(
        "Unit: {} samples ({:.1} ms); gaps {}/{}/{} units",
        synth.unit_samples(),
        1000.0 / synth.units_per_second as f32,
        SIGNAL_GAP_UNITS,
        CHAR_GAP_UNITS,
        WORD_GAP_UNITS
    );
    eprintln!();
}
