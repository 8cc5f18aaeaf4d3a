//! Sortie HTML : page autonome avec police à chasse fixe, réécrite à
//! chaque rendu.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use sg_core::grid::CharGrid;

use crate::sink::AsciiSink;

const DEFAULT_FONT: &str = "Courier New";

/// Writes each grid as a standalone HTML page at a fixed path, overwriting
/// any previous render.
pub struct HtmlSink {
    path: PathBuf,
    font: String,
}

impl HtmlSink {
    /// Sink writing to `path` with the default font.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            font: DEFAULT_FONT.to_string(),
        }
    }

    /// Destination path of the page.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn page(&self, grid: &CharGrid) -> String {
        let mut body = String::with_capacity(grid.cells.len() * 2);
        for row in grid.rows() {
            for &ch in row {
                match ch {
                    '&' => body.push_str("&amp;"),
                    '<' => body.push_str("&lt;"),
                    '>' => body.push_str("&gt;"),
                    _ => body.push(ch),
                }
            }
            body.push('\n');
        }

        let mut page = String::new();
        // write! sur String est infaillible.
        let _ = writeln!(page, "<!DOCTYPE html>");
        let _ = writeln!(page, "<html>");
        let _ = writeln!(page, "<body style=\"background-color: white;\">");
        let _ = writeln!(
            page,
            "<pre style=\"font-family: '{}', monospace; letter-spacing: 2px;\">",
            self.font
        );
        page.push_str(&body);
        let _ = writeln!(page, "</pre>");
        let _ = writeln!(page, "</body>");
        let _ = writeln!(page, "</html>");
        page
    }
}

impl AsciiSink for HtmlSink {
    fn emit(&mut self, grid: &CharGrid) -> Result<()> {
        let page = self.page(grid);
        std::fs::write(&self.path, page)
            .with_context(|| format!("cannot write {}", self.path.display()))?;
        log::info!(
            "wrote {}×{} grid to {}",
            grid.width,
            grid.height,
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(rows: &[&str]) -> CharGrid {
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = CharGrid::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                grid.set(x, y, ch);
            }
        }
        grid
    }

    #[test]
    fn writes_a_monospace_page() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.html");
        let mut sink = HtmlSink::new(&path);
        sink.emit(&grid_of(&["@#", "#@"])).expect("write");

        let page = std::fs::read_to_string(&path).expect("read back");
        assert!(page.contains("Courier New"));
        assert!(page.contains("@#\n#@\n"));
        assert!(page.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn markup_characters_are_escaped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.html");
        let mut sink = HtmlSink::new(&path);
        sink.emit(&grid_of(&["<&>"])).expect("write");

        let page = std::fs::read_to_string(&path).expect("read back");
        assert!(page.contains("&lt;&amp;&gt;"));
    }

    #[test]
    fn each_render_overwrites_the_previous_one() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.html");
        let mut sink = HtmlSink::new(&path);
        sink.emit(&grid_of(&["AAAA"])).expect("first write");
        sink.emit(&grid_of(&["B"])).expect("second write");

        let page = std::fs::read_to_string(&path).expect("read back");
        assert!(page.contains("B\n"));
        assert!(!page.contains("AAAA"));
    }
}
