//! Signal sequence to audio segment emission.
//!
//! Timing, in units:
//!
//! | Element              | Units |
//! |----------------------|-------|
//! | dot                  | 1     |
//! | dash                 | 3     |
//! | gap after a signal   | 1     |
//! | gap after character  | 2     |
//! | word space           | 6     |
//!
//! The signal gap and the character gap both follow the last signal of a
//! character, so characters end up separated by 3 units of silence.

use serde::{Deserialize, Serialize};

use crate::audio::{AudioSink, ToneSynth};
use crate::error::Result;
use crate::morse::SignalSymbol;

/// Tone length of a dot.
pub const DOT_UNITS: u32 = 1;
/// Tone length of a dash.
pub const DASH_UNITS: u32 = 3;
/// Silence after every dot or dash.
pub const SIGNAL_GAP_UNITS: u32 = 1;
/// Silence appended after each non-space character.
pub const CHAR_GAP_UNITS: u32 = 2;
/// Silence for a word space.
pub const WORD_GAP_UNITS: u32 = 6;

/// Whether a segment sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Tone,
    Silence,
}

/// One contiguous block of tone or silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub units: u32,
}

impl Segment {
    pub const fn tone(units: u32) -> Self {
        Self {
            kind: SegmentKind::Tone,
            units,
        }
    }

    pub const fn silence(units: u32) -> Self {
        Self {
            kind: SegmentKind::Silence,
            units,
        }
    }

    /// Writes this segment to the sink as a single block.
    pub fn write_to<S: AudioSink>(&self, sink: &mut S, synth: &ToneSynth) -> Result<()> {
        let samples = synth.config().units_to_samples(self.units);
        match self.kind {
            SegmentKind::Tone => sink.write(synth.tone(samples)),
            SegmentKind::Silence => sink.write(synth.silence(samples)),
        }
    }
}

/// Expands one character's symbols into the segments it produces.
///
/// Walks until End. A WordSpace ends the character immediately, without the
/// trailing character gap.
pub fn plan_character(symbols: &[SignalSymbol]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(symbols.len() * 2 + 1);

    for symbol in symbols {
        match symbol {
            SignalSymbol::Dot => {
                segments.push(Segment::tone(DOT_UNITS));
                segments.push(Segment::silence(SIGNAL_GAP_UNITS));
            }
            SignalSymbol::Dash => {
                segments.push(Segment::tone(DASH_UNITS));
                segments.push(Segment::silence(SIGNAL_GAP_UNITS));
            }
            SignalSymbol::WordSpace => {
                segments.push(Segment::silence(WORD_GAP_UNITS));
                return segments;
            }
            SignalSymbol::CharSpace => {}
            SignalSymbol::End => break,
        }
    }

    segments.push(Segment::silence(CHAR_GAP_UNITS));
    segments
}

/// Emits the audio for one character, one sink write per segment.
///
/// Returns the number of segments written.
pub fn emit_character<S: AudioSink>(
    sink: &mut S,
    synth: &ToneSynth,
    symbols: &[SignalSymbol],
) -> Result<usize> {
    let segments = plan_character(symbols);
    for segment in &segments {
        segment.write_to(sink, synth)?;
    }
    Ok(segments.len())
}
