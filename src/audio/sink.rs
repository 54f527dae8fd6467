//! Audio sink abstraction.
//!
//! A sink is append-only: blocks are written in chronological order and the
//! sink is closed exactly once, which `close(self)` enforces by value.

use crate::error::Result;

/// Destination for generated sample blocks.
pub trait AudioSink {
    /// Appends one block of samples.
    fn write<I>(&mut self, samples: I) -> Result<()>
    where
        I: IntoIterator<Item = i16>;

    /// Flushes and releases the sink.
    fn close(self) -> Result<()>
    where
        Self: Sized;
}

/// Sink that keeps every written block in memory.
///
/// Used to inspect segment structure without touching the filesystem.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySink {
    blocks: Vec<Vec<i16>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks in the order they were written.
    pub fn blocks(&self) -> &[Vec<i16>] {
        &self.blocks
    }

    /// All samples concatenated.
    pub fn samples(&self) -> impl Iterator<Item = i16> + '_ {
        self.blocks.iter().flatten().copied()
    }

    /// Total number of samples written.
    pub fn sample_count(&self) -> usize {
        self.blocks.iter().map(Vec::len).sum()
    }
}

impl AudioSink for MemorySink {
    fn write<I>(&mut self, samples: I) -> Result<()>
    where
        I: IntoIterator<Item = i16>,
    {
        self.blocks.push(samples.into_iter().collect());
        Ok(())
    }

    fn close(self) -> Result<()> {
        Ok(())
    }
}
