use anyhow::Result;
use sg_core::grid::CharGrid;

/// Destination d'une grille de caractères rendue.
pub trait AsciiSink {
    /// Write one rendered grid to the destination.
    ///
    /// # Errors
    /// Returns an error when writing to the underlying destination fails.
    fn emit(&mut self, grid: &CharGrid) -> Result<()>;
}
