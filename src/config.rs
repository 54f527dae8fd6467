//! Runtime configuration module.
//!
//! Holds the fixed synthesis constants (sample rate, tone, Morse speed) and
//! the per-run options that only affect reporting.

use serde::{Deserialize, Serialize};

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per PCM sample.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Sidetone frequency in Hz.
pub const TONE_FREQUENCY_HZ: f64 = 800.0;

/// Peak amplitude of the tone, in i16 sample units.
pub const TONE_AMPLITUDE: i16 = 32000;

/// Morse units per second. Fixes the sending speed at roughly 17 WPM.
pub const UNITS_PER_SECOND: u32 = 14;

/// Constants that drive waveform synthesis.
///
/// Timing and tone are deliberately not tunable. [`SynthConfig::default`] is
/// the only configuration the binary ever uses; the struct exists so the
/// values travel together and can be reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,

    /// Tone frequency in Hz.
    pub frequency_hz: f64,

    /// Peak tone amplitude.
    pub amplitude: i16,

    /// Timing units per second of audio.
    pub units_per_second: u32,

    /// Channel count of the written file.
    pub channels: u16,

    /// Bit depth of the written file.
    pub bits_per_sample: u16,
}

impl SynthConfig {
    /// Creates a SynthConfig with the fixed default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of one Morse timing unit in samples.
    ///
    /// Integer division truncates: 44100 / 14 = 3150.
    pub fn unit_samples(&self) -> usize {
        (self.sample_rate / self.units_per_second) as usize
    }

    /// Converts a whole number of units to a sample count.
    pub fn units_to_samples(&self, units: u32) -> usize {
        self.unit_samples() * units as usize
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.sample_rate == 0 {
            return Some("sample_rate must be > 0".to_string());
        }

        if self.units_per_second == 0 || self.units_per_second > self.sample_rate {
            return Some(format!(
                "units_per_second must be between 1 and sample_rate ({}), got {}",
                self.sample_rate, self.units_per_second
            ));
        }

        // Nyquist
        if self.frequency_hz <= 0.0 || self.frequency_hz * 2.0 >= self.sample_rate as f64 {
            return Some(format!(
                "frequency_hz must be between 0 and {} Hz, got {}",
                self.sample_rate / 2,
                self.frequency_hz
            ));
        }

        if self.amplitude <= 0 {
            return Some(format!("amplitude must be > 0, got {}", self.amplitude));
        }

        if self.channels != CHANNELS || self.bits_per_sample != BITS_PER_SAMPLE {
            return Some(format!(
                "only {}-channel {}-bit output is supported",
                CHANNELS, BITS_PER_SAMPLE
            ));
        }

        None
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            frequency_hz: TONE_FREQUENCY_HZ,
            amplitude: TONE_AMPLITUDE,
            units_per_second: UNITS_PER_SECOND,
            channels: CHANNELS,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }
}

/// Options for a single command-line run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Suppress progress output on stderr.
    pub quiet: bool,

    /// Print the run summary as JSON on stdout.
    pub json: bool,
}

impl RunConfig {
    /// Creates a RunConfig from environment variables.
    ///
    /// Reads `TXT2MORSE_QUIET` (`1`, `true`, `yes` enable quiet mode).
    /// Falls back to defaults for unset variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(quiet) = std::env::var("TXT2MORSE_QUIET") {
            config.quiet = parse_flag(&quiet).unwrap_or(false);
        }

        config
    }
}

/// Parses a boolean-ish environment value.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
