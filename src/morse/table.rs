//! Signal table mapping characters to Morse symbol sequences.
//!
//! Every sequence is terminated by [`SignalSymbol::End`]. The space character
//! maps to a single [`SignalSymbol::WordSpace`] and doubles as the fallback
//! for anything the table does not cover.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MorseError, Result};

/// One element of a Morse encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSymbol {
    /// Short tone, one unit.
    Dot,
    /// Long tone, three units.
    Dash,
    /// Structural marker between characters. Produces no audio itself.
    CharSpace,
    /// Gap between words.
    WordSpace,
    /// Terminates every sequence.
    End,
}

impl SignalSymbol {
    /// Returns true for symbols that produce a tone.
    pub fn is_sounding(&self) -> bool {
        matches!(self, SignalSymbol::Dot | SignalSymbol::Dash)
    }

    fn as_char(&self) -> Option<char> {
        match self {
            SignalSymbol::Dot => Some('.'),
            SignalSymbol::Dash => Some('-'),
            SignalSymbol::CharSpace => Some(' '),
            SignalSymbol::WordSpace => Some('/'),
            SignalSymbol::End => None,
        }
    }
}

/// A character together with its End-terminated symbol sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalEntry {
    character: char,
    symbols: &'static [SignalSymbol],
}

impl SignalEntry {
    /// Creates an entry. Validity is checked by [`SignalTable::from_entries`].
    pub const fn new(character: char, symbols: &'static [SignalSymbol]) -> Self {
        Self { character, symbols }
    }

    /// The source character.
    pub fn character(&self) -> char {
        self.character
    }

    /// The full symbol sequence, including the trailing End.
    pub fn symbols(&self) -> &'static [SignalSymbol] {
        self.symbols
    }

    /// Renders the sequence as dots and dashes, e.g. `.-` for 'A'.
    pub fn pattern(&self) -> String {
        self.symbols.iter().filter_map(SignalSymbol::as_char).collect()
    }

    fn check(&self) -> Option<String> {
        if !self.character.is_ascii() {
            return Some(format!("{:?} is not 7-bit ASCII", self.character));
        }

        match self.symbols.split_last() {
            None => Some(format!("{:?} has an empty sequence", self.character)),
            Some((last, _)) if *last != SignalSymbol::End => {
                Some(format!("{:?} is not terminated by End", self.character))
            }
            Some((_, body)) if body.contains(&SignalSymbol::End) => {
                Some(format!("{:?} has End before the last symbol", self.character))
            }
            Some(_) => None,
        }
    }
}

impl fmt::Display for SignalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' {}", self.character.escape_default(), self.pattern())
    }
}

use SignalSymbol::{Dash, Dot, End, WordSpace};

const WORD_SPACE_SYMBOLS: &[SignalSymbol] = &[WordSpace, End];

const STANDARD_ENTRIES: &[SignalEntry] = &[
    SignalEntry::new('A', &[Dot, Dash, End]),
    SignalEntry::new('B', &[Dash, Dot, Dot, Dot, End]),
    SignalEntry::new('C', &[Dash, Dot, Dash, Dot, End]),
    SignalEntry::new('D', &[Dash, Dot, Dot, End]),
    SignalEntry::new('E', &[Dot, End]),
    SignalEntry::new('F', &[Dot, Dot, Dash, Dot, End]),
    SignalEntry::new('G', &[Dash, Dash, Dot, End]),
    SignalEntry::new('H', &[Dot, Dot, Dot, Dot, End]),
    SignalEntry::new('I', &[Dot, Dot, End]),
    SignalEntry::new('J', &[Dot, Dash, Dash, Dash, End]),
    SignalEntry::new('K', &[Dash, Dot, Dash, End]),
    SignalEntry::new('L', &[Dot, Dash, Dot, Dot, End]),
    SignalEntry::new('M', &[Dash, Dash, End]),
    SignalEntry::new('N', &[Dash, Dot, End]),
    SignalEntry::new('O', &[Dash, Dash, Dash, End]),
    SignalEntry::new('P', &[Dot, Dash, Dash, Dot, End]),
    SignalEntry::new('Q', &[Dash, Dash, Dot, Dash, End]),
    SignalEntry::new('R', &[Dot, Dash, Dot, End]),
    SignalEntry::new('S', &[Dot, Dot, Dot, End]),
    SignalEntry::new('T', &[Dash, End]),
    SignalEntry::new('U', &[Dot, Dot, Dash, End]),
    SignalEntry::new('V', &[Dot, Dot, Dot, Dash, End]),
    SignalEntry::new('W', &[Dot, Dash, Dash, End]),
    SignalEntry::new('X', &[Dash, Dot, Dot, Dash, End]),
    SignalEntry::new('Y', &[Dash, Dot, Dash, Dash, End]),
    SignalEntry::new('Z', &[Dash, Dash, Dot, Dot, End]),
    SignalEntry::new('0', &[Dash, Dash, Dash, Dash, Dash, End]),
    SignalEntry::new('1', &[Dot, Dash, Dash, Dash, Dash, End]),
    SignalEntry::new('2', &[Dot, Dot, Dash, Dash, Dash, End]),
    SignalEntry::new('3', &[Dot, Dot, Dot, Dash, Dash, End]),
    SignalEntry::new('4', &[Dot, Dot, Dot, Dot, Dash, End]),
    SignalEntry::new('5', &[Dot, Dot, Dot, Dot, Dot, End]),
    SignalEntry::new('6', &[Dash, Dot, Dot, Dot, Dot, End]),
    SignalEntry::new('7', &[Dash, Dash, Dot, Dot, Dot, End]),
    SignalEntry::new('8', &[Dash, Dash, Dash, Dot, Dot, End]),
    SignalEntry::new('9', &[Dash, Dash, Dash, Dash, Dot, End]),
    SignalEntry::new('.', &[Dot, Dash, Dot, Dash, Dot, Dash, End]),
    SignalEntry::new(',', &[Dash, Dash, Dot, Dot, Dash, Dash, End]),
    SignalEntry::new('?', &[Dot, Dot, Dash, Dash, Dot, Dot, End]),
    SignalEntry::new('\'', &[Dot, Dash, Dash, Dash, Dash, Dot, End]),
    SignalEntry::new('!', &[Dash, Dot, Dash, Dot, Dash, Dash, End]),
    SignalEntry::new('/', &[Dash, Dot, Dot, Dash, Dot, End]),
    SignalEntry::new('(', &[Dash, Dot, Dash, Dash, Dot, End]),
    SignalEntry::new(')', &[Dash, Dot, Dash, Dash, Dot, Dash, End]),
    SignalEntry::new('&', &[Dot, Dash, Dot, Dot, Dot, End]),
    SignalEntry::new(':', &[Dash, Dash, Dash, Dot, Dot, Dot, End]),
    SignalEntry::new(';', &[Dash, Dot, Dash, Dot, Dash, Dot, End]),
    SignalEntry::new('=', &[Dash, Dot, Dot, Dot, Dash, End]),
    SignalEntry::new('+', &[Dot, Dash, Dot, Dash, Dot, End]),
    SignalEntry::new('-', &[Dash, Dot, Dot, Dot, Dot, Dash, End]),
    SignalEntry::new('_', &[Dot, Dot, Dash, Dash, Dot, Dash, End]),
    SignalEntry::new('"', &[Dot, Dash, Dot, Dot, Dash, Dot, End]),
    SignalEntry::new('$', &[Dot, Dot, Dot, Dash, Dot, Dot, Dash, End]),
    SignalEntry::new('@', &[Dot, Dash, Dash, Dot, Dash, Dot, End]),
    SignalEntry::new(' ', WORD_SPACE_SYMBOLS),
];

/// Immutable, validated collection of signal entries.
#[derive(Debug, Clone)]
pub struct SignalTable {
    entries: Vec<SignalEntry>,
}

impl SignalTable {
    /// Returns the built-in table: A-Z, 0-9, common punctuation and space.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_ENTRIES.to_vec(),
        }
    }

    /// Builds a table from arbitrary entries, rejecting any that break the
    /// table invariants.
    pub fn from_entries(entries: impl IntoIterator<Item = SignalEntry>) -> Result<Self> {
        let table = Self {
            entries: entries.into_iter().collect(),
        };
        match table.validate() {
            Some(reason) => Err(MorseError::invalid_signal_table(reason)),
            None => Ok(table),
        }
    }

    /// Checks the table invariants.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if let Some(problem) = entry.check() {
                return Some(problem);
            }
            if !seen.insert(entry.character) {
                return Some(format!("duplicate entry for {:?}", entry.character));
            }
        }

        match self.lookup(' ') {
            None => Some("missing entry for space".to_string()),
            Some(space) if space.symbols != WORD_SPACE_SYMBOLS => {
                Some(format!("space must map to [WordSpace, End], got {:?}", space.symbols))
            }
            Some(_) => None,
        }
    }

    /// Finds the entry for a character. No case folding is applied.
    pub fn lookup(&self, character: char) -> Option<&SignalEntry> {
        self.entries.iter().find(|entry| entry.character == character)
    }

    /// Iterates the entries in table order.
    pub fn entries(&self) -> impl Iterator<Item = &SignalEntry> {
        self.entries.iter()
    }

    /// Number of entries, space included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SignalTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_is_valid() {
        let table = SignalTable::standard();
        assert_eq!(table.validate(), None);
        assert_eq!(table.len(), 55);
    }

    #[test]
    fn every_sequence_is_end_terminated() {
        for entry in SignalTable::standard().entries() {
            let symbols = entry.symbols();
            assert_eq!(symbols.last(), Some(&End), "{}", entry);
            assert_eq!(symbols.iter().filter(|s| **s == End).count(), 1, "{}", entry);
        }
    }

    #[test]
    fn letters_and_digits_are_present_and_distinct() {
        let table = SignalTable::standard();
        let mut patterns = HashSet::new();
        for c in ('A'..='Z').chain('0'..='9') {
            let entry = table.lookup(c).unwrap_or_else(|| panic!("missing {}", c));
            assert!(entry.symbols().iter().all(|s| *s == End || s.is_sounding()));
            assert!(patterns.insert(entry.pattern()), "duplicate pattern for {}", c);
        }
    }

    #[test]
    fn known_patterns() {
        let table = SignalTable::standard();
        assert_eq!(table.lookup('A').unwrap().symbols(), &[Dot, Dash, End]);
        assert_eq!(table.lookup('S').unwrap().pattern(), "...");
        assert_eq!(table.lookup('O').unwrap().pattern(), "---");
        assert_eq!(table.lookup('0').unwrap().pattern(), "-----");
        assert_eq!(table.lookup('$').unwrap().pattern(), "...-..-");
        assert_eq!(table.lookup('@').unwrap().pattern(), ".--.-.");
        assert_eq!(table.lookup(' ').unwrap().symbols(), &[WordSpace, End]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = SignalTable::standard();
        assert!(table.lookup('a').is_none());
        assert!(table.lookup('#').is_none());
    }

    #[test]
    fn rejects_duplicates() {
        let entries = [
            SignalEntry::new('E', &[Dot, End]),
            SignalEntry::new('E', &[Dash, End]),
            SignalEntry::new(' ', WORD_SPACE_SYMBOLS),
        ];
        let err = SignalTable::from_entries(entries).unwrap_err();
        assert!(err.message.contains("duplicate"));
    }

    #[test]
    fn rejects_unterminated_and_empty() {
        let unterminated = [
            SignalEntry::new('T', &[Dash]),
            SignalEntry::new(' ', WORD_SPACE_SYMBOLS),
        ];
        assert!(SignalTable::from_entries(unterminated).is_err());

        let empty = [
            SignalEntry::new('T', &[]),
            SignalEntry::new(' ', WORD_SPACE_SYMBOLS),
        ];
        assert!(SignalTable::from_entries(empty).is_err());

        let early_end = [
            SignalEntry::new('T', &[Dash, End, Dot, End]),
            SignalEntry::new(' ', WORD_SPACE_SYMBOLS),
        ];
        assert!(SignalTable::from_entries(early_end).is_err());
    }

    #[test]
    fn requires_space_entry() {
        let no_space = [SignalEntry::new('E', &[Dot, End])];
        assert!(SignalTable::from_entries(no_space).is_err());

        let wrong_space = [SignalEntry::new(' ', &[Dot, End])];
        assert!(SignalTable::from_entries(wrong_space).is_err());
    }

    #[test]
    fn entry_display() {
        let table = SignalTable::standard();
        assert_eq!(table.lookup('K').unwrap().to_string(), "'K' -.-");
        assert_eq!(table.lookup(' ').unwrap().pattern(), "/");
    }
}
