//! WAV file sink for audio output.
//!
//! Writes 16-bit mono PCM using the hound crate.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::config::SynthConfig;
use crate::error::{MorseError, Result};

use super::sink::AudioSink;

/// Builds the hound spec for a synthesis configuration.
pub fn wav_spec(config: &SynthConfig) -> WavSpec {
    WavSpec {
        channels: config.channels,
        sample_rate: config.sample_rate,
        bits_per_sample: config.bits_per_sample,
        sample_format: SampleFormat::Int,
    }
}

/// Streaming WAV sink.
///
/// The RIFF header is finalized by [`AudioSink::close`]. If the sink is
/// dropped without being closed, hound still patches the header on drop but
/// any error is lost.
pub struct WavSink<W: Write + Seek> {
    writer: WavWriter<W>,
    samples_written: usize,
}

impl WavSink<BufWriter<File>> {
    /// Creates (or truncates) the WAV file at `path`.
    pub fn create(path: &Path, config: &SynthConfig) -> Result<Self> {
        let writer = WavWriter::create(path, wav_spec(config))
            .map_err(|e| MorseError::output_open_failed(path.display(), e))?;
        Ok(Self {
            writer,
            samples_written: 0,
        })
    }
}

impl<W: Write + Seek> WavSink<W> {
    /// Wraps an arbitrary seekable writer, e.g. an in-memory cursor.
    pub fn new(inner: W, config: &SynthConfig) -> Result<Self> {
        let writer = WavWriter::new(inner, wav_spec(config)).map_err(MorseError::output_write_failed)?;
        Ok(Self {
            writer,
            samples_written: 0,
        })
    }

    /// Number of samples written so far.
    pub fn samples_written(&self) -> usize {
        self.samples_written
    }
}

impl<W: Write + Seek> AudioSink for WavSink<W> {
    fn write<I>(&mut self, samples: I) -> Result<()>
    where
        I: IntoIterator<Item = i16>,
    {
        for sample in samples {
            self.writer
                .write_sample(sample)
                .map_err(MorseError::output_write_failed)?;
            self.samples_written += 1;
        }
        Ok(())
    }

    fn close(self) -> Result<()> {
        self.writer.finalize().map_err(MorseError::output_write_failed)
    }
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f32 {
    sample_count as f32 / sample_rate as f32
}
