//! Audio output module.
//!
//! Provides tone synthesis and the sinks that persist generated samples.

pub mod sink;
pub mod tone;
pub mod wav;

// Re-export commonly used items
pub use sink::{AudioSink, MemorySink};
pub use tone::{SilenceSamples, ToneSamples, ToneSynth};
pub use wav::{samples_to_duration, WavSink};
