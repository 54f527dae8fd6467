//! txt2morse: convert ASCII text into Morse code audio.
//!
//! Text is read byte by byte, mapped to dot/dash sequences, and rendered as
//! an 800 Hz sine tone in a 44.1 kHz mono 16-bit WAV file.
//!
//! # Modules
//!
//! - [`morse`]: Signal table and byte resolver
//! - [`audio`]: Tone synthesis and audio sinks (WAV, in-memory)
//! - [`encoder`]: Timing model and per-character segment emission
//! - [`pipeline`]: Stream and file level encoding
//! - [`config`]: Fixed synthesis constants and run options
//! - [`error`]: Error types and codes (MorseError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use txt2morse::{
//!     audio::{MemorySink, ToneSynth},
//!     morse::{CharacterIndex, SignalTable},
//!     pipeline::encode_stream,
//! };
//!
//! let table = SignalTable::standard();
//! let index = CharacterIndex::build(&table);
//! let mut sink = MemorySink::new();
//! let stats = encode_stream(&b"SOS"[..], &index, &ToneSynth::default(), &mut sink)?;
//! assert_eq!(stats.characters, 3);
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod encoder;
pub mod error;
pub mod morse;
pub mod pipeline;

// Re-export commonly used types at crate root for convenience
pub use config::{RunConfig, SynthConfig};
pub use error::{ErrorCode, MorseError, Result};
pub use pipeline::{encode_file, encode_stream, EncodeStats};
