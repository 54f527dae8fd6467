//! Text to Morse audio pipeline.
//!
//! Reads input one byte at a time, resolves it, and emits its segments to
//! the sink before reading the next byte.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::audio::{samples_to_duration, AudioSink, ToneSynth, WavSink};
use crate::config::SynthConfig;
use crate::encoder::{emit_character, plan_character};
use crate::error::{MorseError, Result};
use crate::morse::{CharacterIndex, Resolution, SignalSymbol, SignalTable};

/// Summary of one encoding run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncodeStats {
    /// Bytes that produced audio (word spaces included).
    pub characters: usize,
    /// Newline bytes that were dropped.
    pub skipped: usize,
    /// Sink writes, one per segment.
    pub segments: usize,
    /// Samples written.
    pub samples: usize,
    /// Length of the written audio in seconds.
    pub duration_sec: f32,
    /// True if a byte above 0x7f ended the input.
    pub stopped_early: bool,
}

/// Encodes everything readable from `reader` into `sink`.
///
/// The sink is not closed; the caller owns it.
pub fn encode_stream<R: Read, S: AudioSink>(
    reader: R,
    index: &CharacterIndex<'_>,
    synth: &ToneSynth,
    sink: &mut S,
) -> Result<EncodeStats> {
    let config = synth.config();
    let mut stats = EncodeStats::default();

    for byte in BufReader::new(reader).bytes() {
        let byte = byte.map_err(MorseError::input_read_failed)?;
        match index.resolve(byte) {
            Resolution::Stop => {
                stats.stopped_early = true;
                break;
            }
            Resolution::Skip => stats.skipped += 1,
            Resolution::Signal(entry) => {
                let segments = emit_character(sink, synth, entry.symbols())?;
                stats.characters += 1;
                stats.segments += segments;
                stats.samples += config.units_to_samples(entry_units(entry.symbols()));
            }
        }
    }

    stats.duration_sec = samples_to_duration(stats.samples, config.sample_rate);
    Ok(stats)
}

fn entry_units(symbols: &[SignalSymbol]) -> u32 {
    plan_character(symbols)
        .iter()
        .map(|segment| segment.units)
        .sum()
}

/// Converts the text file at `input` into a WAV file at `output`.
///
/// The input is opened first, so a missing input never leaves an output
/// file behind. Both handles are released on every return path.
pub fn encode_file(input: &Path, output: &Path) -> Result<EncodeStats> {
    let input_file = open_input(input)?;

    let config = SynthConfig::default();
    let mut sink = WavSink::create(output, &config)?;

    let table = SignalTable::standard();
    let index = CharacterIndex::build(&table);
    let synth = ToneSynth::new(config);

    let stats = encode_stream(input_file, &index, &synth, &mut sink)?;
    sink.close()?;

    Ok(stats)
}

fn open_input(path: &Path) -> Result<File> {
    let file = File::open(path).map_err(|e| MorseError::input_open_failed(path.display(), e))?;

    // Directories open fine on Unix and only fail on read.
    let metadata = file
        .metadata()
        .map_err(|e| MorseError::input_open_failed(path.display(), e))?;
    if metadata.is_dir() {
        return Err(MorseError::input_open_failed(
            path.display(),
            io::Error::new(io::ErrorKind::InvalidInput, "path is a directory"),
        ));
    }

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::MemorySink;
    use crate::encoder::Segment;
    use crate::error::ErrorCode;
    use tempfile::tempdir;

    fn encode_bytes(input: &[u8]) -> (MemorySink, EncodeStats) {
        let table = SignalTable::standard();
        let index = CharacterIndex::build(&table);
        let synth = ToneSynth::default();
        let mut sink = MemorySink::new();
        let stats = encode_stream(input, &index, &synth, &mut sink).unwrap();
        (sink, stats)
    }

    /// Written blocks as segments, recovered from their length and content.
    fn segments_of(sink: &MemorySink) -> Vec<Segment> {
        let unit = SynthConfig::default().unit_samples();
        sink.blocks()
            .iter()
            .map(|block| {
                let units = (block.len() / unit) as u32;
                if block.iter().any(|s| *s != 0) {
                    Segment::tone(units)
                } else {
                    Segment::silence(units)
                }
            })
            .collect()
    }

    fn plan_text(table: &SignalTable, text: &str) -> Vec<Segment> {
        text.chars()
            .flat_map(|c| plan_character(table.lookup(c).unwrap().symbols()))
            .collect()
    }

    #[test]
    fn sos_is_concatenation_of_characters() {
        let table = SignalTable::standard();
        let (sink, stats) = encode_bytes(b"SOS");

        let segments = segments_of(&sink);
        assert_eq!(segments, plan_text(&table, "SOS"));
        assert!(!segments.contains(&Segment::silence(6)));
        assert_eq!(stats.characters, 3);
        assert_eq!(stats.segments, 21);
        assert_eq!(stats.samples, sink.sample_count());
    }

    #[test]
    fn newlines_contribute_nothing() {
        let (with_newlines, stats) = encode_bytes(b"\nE\n\nT\n");
        let (without, _) = encode_bytes(b"ET");
        assert_eq!(with_newlines, without);
        assert_eq!(stats.skipped, 4);
        assert_eq!(stats.characters, 2);
    }

    #[test]
    fn lowercase_matches_uppercase() {
        let (lower, _) = encode_bytes(b"paris");
        let (upper, _) = encode_bytes(b"PARIS");
        assert_eq!(lower, upper);
    }

    #[test]
    fn space_and_unknown_bytes_become_word_gaps() {
        let (sink, stats) = encode_bytes(b"E E\x01#");
        let segments = segments_of(&sink);
        assert_eq!(
            segments,
            vec![
                Segment::tone(1),
                Segment::silence(1),
                Segment::silence(2),
                Segment::silence(6),
                Segment::tone(1),
                Segment::silence(1),
                Segment::silence(2),
                Segment::silence(6),
                Segment::silence(6),
            ]
        );
        assert_eq!(stats.characters, 5);
    }

    #[test]
    fn high_byte_stops_input() {
        let (sink, stats) = encode_bytes(b"E\xc3\xa9T");
        let (only_e, _) = encode_bytes(b"E");
        assert_eq!(sink, only_e);
        assert!(stats.stopped_early);
        assert_eq!(stats.characters, 1);
    }

    #[test]
    fn empty_input_writes_nothing() {
        let (sink, stats) = encode_bytes(b"");
        assert!(sink.blocks().is_empty());
        assert_eq!(stats, EncodeStats::default());
    }

    #[test]
    fn stats_duration_matches_samples() {
        let (_, stats) = encode_bytes(b"E");
        // 1 + 1 + 2 units at 14 units per second
        assert_eq!(stats.samples, 4 * 3150);
        assert!((stats.duration_sec - 4.0 / 14.0).abs() < 1e-6);
    }

    #[test]
    fn encode_file_writes_wav() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.wav");
        std::fs::write(&input, "sos\n").unwrap();

        let stats = encode_file(&input, &output).unwrap();

        let mut reader = hound::WavReader::open(&output).unwrap();
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.spec().sample_rate, 44100);
        assert_eq!(reader.spec().bits_per_sample, 16);
        assert_eq!(reader.len() as usize, stats.samples);

        let (expected, _) = encode_bytes(b"SOS");
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, expected.samples().collect::<Vec<_>>());
    }

    #[test]
    fn missing_input_creates_no_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("missing.txt");
        let output = dir.path().join("out.wav");

        let err = encode_file(&input, &output).unwrap_err();

        assert_eq!(err.code, ErrorCode::InputOpenFailed);
        assert!(!output.exists());
    }

    #[test]
    fn directory_input_is_rejected_before_output() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.wav");

        let err = encode_file(dir.path(), &output).unwrap_err();

        assert_eq!(err.code, ErrorCode::InputOpenFailed);
        assert!(!output.exists());
    }

    #[test]
    fn unwritable_output_fails() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        std::fs::write(&input, "E").unwrap();
        let output = dir.path().join("missing-dir").join("out.wav");

        let err = encode_file(&input, &output).unwrap_err();

        assert_eq!(err.code, ErrorCode::OutputOpenFailed);
        assert!(!output.exists());
    }
}
