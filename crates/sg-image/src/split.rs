//! Partitioning of a padded raster into a grid of sub-images.

use sg_core::config::PartitionMode;
use sg_core::error::CoreError;

use crate::raster::Raster;

/// Grid of sub-images covering a padded raster. Row-major cells.
pub struct SubImageGrid {
    /// Sub-images, row-major.
    pub cells: Vec<Raster>,
    /// Number of columns (the partition resolution).
    pub cols: usize,
    /// Number of rows.
    pub rows: usize,
}

/// Split a padded raster into `resolution` columns of sub-images.
///
/// Cell width is `padded_width / resolution`. The row dimension depends on
/// the partition mode:
///
/// - [`PartitionMode::WidthCoupled`] reuses the column cell size for the
///   rows (square cells), so the grid is generally non-square unless the
///   padded raster is. Historical behavior, kept for output-shape
///   compatibility.
/// - [`PartitionMode::Symmetric`] derives the cell height from the
///   resolution as well, yielding a `resolution × resolution` grid on
///   evenly divisible inputs.
///
/// The caller bounds the resolution to `[max(1, w/h), w]`; this function
/// does not re-validate, but refuses degenerate zero-sized cells instead of
/// producing ragged grids.
///
/// # Errors
/// Returns [`CoreError::InvalidDimensions`] when a cell dimension comes out
/// zero (resolution larger than the width, or width-coupled cells taller
/// than the image).
pub fn split(
    padded: &Raster,
    resolution: u32,
    mode: PartitionMode,
) -> Result<SubImageGrid, CoreError> {
    let width = padded.width();
    let height = padded.height();
    let cell_w = width / resolution;
    let cell_h = match mode {
        PartitionMode::WidthCoupled => cell_w,
        PartitionMode::Symmetric => height / resolution,
    };
    if cell_w == 0 || cell_h == 0 || cell_h > height {
        return Err(CoreError::InvalidDimensions { width, height });
    }

    let cols = resolution as usize;
    let rows = (height / cell_h) as usize;
    let mut cells = Vec::with_capacity(cols * rows);
    for row in 0..rows as u32 {
        for col in 0..resolution {
            cells.push(copy_region(padded, col * cell_w, row * cell_h, cell_w, cell_h));
        }
    }

    log::trace!("split {width}×{height} at resolution {resolution} into {cols}×{rows} cells");
    Ok(SubImageGrid { cells, cols, rows })
}

fn copy_region(source: &Raster, x0: u32, y0: u32, w: u32, h: u32) -> Raster {
    let src_stride = (source.width() * 3) as usize;
    let row_bytes = (w * 3) as usize;
    let mut data = Vec::with_capacity((w * h * 3) as usize);
    for y in y0..y0 + h {
        let start = y as usize * src_stride + (x0 * 3) as usize;
        data.extend_from_slice(&source.data[start..start + row_bytes]);
    }
    Raster::from_rgb(data, w, h)
}
