//! Morse signal data.
//!
//! - [`table`]: Character to signal-symbol mapping
//! - [`resolver`]: Byte-level lookup with the default-to-space policy

pub mod resolver;
pub mod table;

pub use resolver::{CharacterIndex, Resolution};
pub use table::{SignalEntry, SignalSymbol, SignalTable};
