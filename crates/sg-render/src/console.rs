//! Sortie console : une ligne par rangée, caractères séparés d'un espace.

use std::io::Write;

use anyhow::{Context, Result};
use sg_core::grid::CharGrid;

use crate::sink::AsciiSink;

/// Writes grids to any [`Write`] destination, one row per line. Each
/// character is followed by a space so the art keeps a roughly square
/// aspect in terminal fonts.
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl ConsoleSink<std::io::Stdout> {
    /// Sink over the process stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            writer: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Sink over an arbitrary writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> AsciiSink for ConsoleSink<W> {
    fn emit(&mut self, grid: &CharGrid) -> Result<()> {
        for row in grid.rows() {
            for &ch in row {
                write!(self.writer, "{ch} ").context("console write failed")?;
            }
            writeln!(self.writer).context("console write failed")?;
        }
        self.writer.flush().context("console flush failed")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_become_space_separated_lines() {
        let mut grid = CharGrid::new(2, 2);
        grid.set(0, 0, 'a');
        grid.set(1, 0, 'b');
        grid.set(0, 1, 'c');
        grid.set(1, 1, 'd');

        let mut sink = ConsoleSink::new(Vec::new());
        sink.emit(&grid).expect("in-memory write");
        let out = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(out, "a b \nc d \n");
    }

    #[test]
    fn empty_grid_emits_nothing() {
        let grid = CharGrid::new(0, 0);
        let mut sink = ConsoleSink::new(Vec::new());
        sink.emit(&grid).expect("in-memory write");
        assert!(sink.into_inner().is_empty());
    }
}
