/// Image transformation pipeline for subglyph.
///
/// Owns the raster entity, power-of-two padding, sub-image partitioning,
/// per-cell luminance reduction, and the session brightness cache.

pub mod brightness;
pub mod cache;
pub mod pad;
pub mod raster;
pub mod split;

pub use brightness::{brightness_grid, region_brightness};
pub use cache::{BrightnessCache, CacheKey};
pub use pad::pad;
pub use raster::{Raster, RasterId};
pub use split::{SubImageGrid, split};
