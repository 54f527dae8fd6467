//! Sine tone and silence generation.
//!
//! Samples are produced lazily, one block per segment, so nothing larger
//! than a single sample is held between calls.

use std::f64::consts::PI;

use crate::config::SynthConfig;

/// Produces tone and silence blocks for a fixed [`SynthConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ToneSynth {
    config: SynthConfig,
}

impl ToneSynth {
    /// Creates a synthesizer for the given configuration.
    pub fn new(config: SynthConfig) -> Self {
        Self { config }
    }

    /// The configuration samples are generated with.
    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// A tone of `duration` samples. Phase starts at zero for every tone.
    pub fn tone(&self, duration: usize) -> ToneSamples {
        ToneSamples {
            index: 0,
            len: duration,
            phase_step: 2.0 * PI * self.config.frequency_hz / self.config.sample_rate as f64,
            amplitude: self.config.amplitude as f64,
        }
    }

    /// `duration` samples of silence.
    pub fn silence(&self, duration: usize) -> SilenceSamples {
        SilenceSamples { remaining: duration }
    }
}

impl Default for ToneSynth {
    fn default() -> Self {
        Self::new(SynthConfig::default())
    }
}

/// Finite sequence of sine samples.
#[derive(Debug, Clone)]
pub struct ToneSamples {
    index: usize,
    len: usize,
    phase_step: f64,
    amplitude: f64,
}

impl Iterator for ToneSamples {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        if self.index >= self.len {
            return None;
        }
        let value = (self.amplitude * (self.phase_step * self.index as f64).sin()).round();
        self.index += 1;
        // amplitude <= i16::MAX, so the cast never saturates
        Some(value as i16)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ToneSamples {}

/// Finite sequence of zero samples.
#[derive(Debug, Clone)]
pub struct SilenceSamples {
    remaining: usize,
}

impl Iterator for SilenceSamples {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SilenceSamples {}
