//! Byte to signal-entry resolution.
//!
//! The index is total over 7-bit ASCII: anything without an entry resolves
//! to the word-space entry instead of failing.

use std::collections::HashMap;

use super::table::{SignalEntry, SignalTable};

/// Highest byte value accepted as input.
pub const MAX_ASCII: u8 = 0x7f;

/// Outcome of resolving one input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'t> {
    /// Byte is outside 7-bit ASCII; input ends here.
    Stop,
    /// Byte produces no output and takes no time.
    Skip,
    /// Byte maps to this entry.
    Signal(&'t SignalEntry),
}

/// Lookup from input bytes to signal entries.
///
/// Built once from a [`SignalTable`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct CharacterIndex<'t> {
    entries: HashMap<u8, &'t SignalEntry>,
    word_space: &'t SignalEntry,
}

impl<'t> CharacterIndex<'t> {
    /// Builds the index for a validated table.
    ///
    /// Only ASCII characters are indexed; the table's own validation already
    /// rejects anything else.
    pub fn build(table: &'t SignalTable) -> Self {
        let mut entries = HashMap::with_capacity(table.len());
        let mut word_space = None;

        for entry in table.entries() {
            if entry.character() == ' ' {
                word_space = Some(entry);
            }
            if let Ok(byte) = u8::try_from(entry.character()) {
                if byte <= MAX_ASCII {
                    entries.insert(byte, entry);
                }
            }
        }

        Self {
            entries,
            word_space: word_space.unwrap_or_else(|| {
                // SignalTable::validate guarantees a space entry.
                unreachable!("signal table has no space entry")
            }),
        }
    }

    /// The default entry for unmapped bytes.
    pub fn word_space(&self) -> &'t SignalEntry {
        self.word_space
    }

    /// Resolves one input byte.
    pub fn resolve(&self, byte: u8) -> Resolution<'t> {
        match byte {
            b if b > MAX_ASCII => Resolution::Stop,
            b'\n' => Resolution::Skip,
            b => {
                let folded = b.to_ascii_uppercase();
                Resolution::Signal(self.entries.get(&folded).copied().unwrap_or(self.word_space))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morse::table::SignalSymbol::{Dash, Dot, End, WordSpace};

    fn symbols_for(index: &CharacterIndex<'_>, byte: u8) -> &'static [crate::morse::SignalSymbol] {
        match index.resolve(byte) {
            Resolution::Signal(entry) => entry.symbols(),
            other => panic!("byte {:#04x} resolved to {:?}", byte, other),
        }
    }

    #[test]
    fn uppercase_and_digits_resolve_to_table_entries() {
        let table = SignalTable::standard();
        let index = CharacterIndex::build(&table);
        for c in (b'A'..=b'Z').chain(b'0'..=b'9') {
            let expected = table.lookup(c as char).unwrap().symbols();
            assert_eq!(symbols_for(&index, c), expected);
        }
        assert_eq!(symbols_for(&index, b'A'), &[Dot, Dash, End]);
    }

    #[test]
    fn lowercase_folds_to_uppercase() {
        let table = SignalTable::standard();
        let index = CharacterIndex::build(&table);
        for c in b'a'..=b'z' {
            assert_eq!(symbols_for(&index, c), symbols_for(&index, c.to_ascii_uppercase()));
        }
    }

    #[test]
    fn unmapped_bytes_default_to_word_space() {
        let table = SignalTable::standard();
        let index = CharacterIndex::build(&table);
        for byte in [0x00, 0x01, b'\t', b'\r', b'#', b'%', b'~', 0x7f] {
            assert_eq!(symbols_for(&index, byte), &[WordSpace, End], "byte {:#04x}", byte);
        }
        assert_eq!(index.word_space().character(), ' ');
    }

    #[test]
    fn every_ascii_byte_resolves() {
        let table = SignalTable::standard();
        let index = CharacterIndex::build(&table);
        for byte in 0..=MAX_ASCII {
            match index.resolve(byte) {
                Resolution::Signal(_) => {}
                Resolution::Skip => assert_eq!(byte, b'\n'),
                Resolution::Stop => panic!("ASCII byte {:#04x} stopped input", byte),
            }
        }
    }

    #[test]
    fn newline_is_skipped() {
        let table = SignalTable::standard();
        let index = CharacterIndex::build(&table);
        assert_eq!(index.resolve(b'\n'), Resolution::Skip);
    }

    #[test]
    fn high_bytes_stop_input() {
        let table = SignalTable::standard();
        let index = CharacterIndex::build(&table);
        assert_eq!(index.resolve(0x80), Resolution::Stop);
        assert_eq!(index.resolve(0xc3), Resolution::Stop);
        assert_eq!(index.resolve(0xff), Resolution::Stop);
    }
}
