//! Reduction of sub-images to scalar brightness values.

use rayon::prelude::*;

use sg_core::config::PartitionMode;
use sg_core::error::CoreError;
use sg_core::grid::BrightnessGrid;

use crate::raster::Raster;
use crate::split::split;

const RED_FACTOR: f64 = 0.2126;
const GREEN_FACTOR: f64 = 0.7152;
const BLUE_FACTOR: f64 = 0.0722;
const MAX_RGB: f64 = 255.0;

/// Weighted luminance of a sub-image, averaged over all pixels, in [0, 1].
///
/// # Example
/// ```
/// use sg_image::brightness::region_brightness;
/// use sg_image::raster::Raster;
/// let white = Raster::filled(2, 2, (255, 255, 255));
/// assert!((region_brightness(&white) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn region_brightness(cell: &Raster) -> f64 {
    let mut sum = 0.0;
    for y in 0..cell.height() {
        for x in 0..cell.width() {
            let (r, g, b) = cell.pixel(x, y);
            sum += f64::from(r) * RED_FACTOR + f64::from(g) * GREEN_FACTOR + f64::from(b) * BLUE_FACTOR;
        }
    }
    sum / (f64::from(cell.width()) * f64::from(cell.height()) * MAX_RGB)
}

/// Partition a padded raster and reduce every cell to its brightness.
///
/// # Errors
/// Propagates [`CoreError::InvalidDimensions`] from the split.
pub fn brightness_grid(
    padded: &Raster,
    resolution: u32,
    mode: PartitionMode,
) -> Result<BrightnessGrid, CoreError> {
    let grid = split(padded, resolution, mode)?;
    let values: Vec<f64> = grid.cells.par_iter().map(region_brightness).collect();
    Ok(BrightnessGrid::from_values(values, grid.cols, grid.rows))
}
