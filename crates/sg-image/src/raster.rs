use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a raster, distinct per construction (not per content).
///
/// Clones share the id of the original, so a clone still hits the same
/// cache entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RasterId(u64);

/// Grille de pixels RGB, row-major, 3 bytes par pixel. Immuable après
/// construction.
///
/// # Example
/// ```
/// use sg_image::raster::Raster;
/// let raster = Raster::filled(4, 2, (255, 255, 255));
/// assert_eq!(raster.pixel(3, 1), (255, 255, 255));
/// ```
#[derive(Clone, Debug)]
pub struct Raster {
    pub(crate) data: Vec<u8>,
    pub(crate) width: u32,
    pub(crate) height: u32,
    id: RasterId,
}

impl Raster {
    /// Build a raster from raw RGB bytes. Length must be `width * height * 3`.
    #[must_use]
    pub fn from_rgb(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(data.len(), (width * height * 3) as usize);
        Self {
            data,
            width,
            height,
            id: RasterId(NEXT_ID.fetch_add(1, Ordering::Relaxed)),
        }
    }

    /// Build a raster filled with a single color.
    #[must_use]
    pub fn filled(width: u32, height: u32, (r, g, b): (u8, u8, u8)) -> Self {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&[r, g, b]);
        }
        Self::from_rgb(data, width, height)
    }

    /// Build a raster by evaluating a pixel function at every coordinate.
    ///
    /// # Example
    /// ```
    /// use sg_image::raster::Raster;
    /// let raster = Raster::from_fn(2, 2, |x, _| if x == 0 { (0, 0, 0) } else { (255, 255, 255) });
    /// assert_eq!(raster.pixel(0, 1), (0, 0, 0));
    /// ```
    #[must_use]
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> (u8, u8, u8)) -> Self {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let (r, g, b) = f(x, y);
                data.extend_from_slice(&[r, g, b]);
            }
        }
        Self::from_rgb(data, width, height)
    }

    /// Decode an image file into a raster.
    ///
    /// # Errors
    /// Returns an error if the file is missing or cannot be decoded; callers
    /// treat this as a fatal startup error.
    pub fn load(path: &Path) -> Result<Self> {
        let img = image::open(path).with_context(|| format!("cannot load {}", path.display()))?;
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        log::debug!("loaded {} ({width}×{height})", path.display());
        Ok(Self::from_rgb(rgb.into_raw(), width, height))
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Identity of this raster.
    #[must_use]
    pub fn id(&self) -> RasterId {
        self.id
    }

    /// Accès au pixel (x, y) → (r, g, b).
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = ((y * self.width + x) * 3) as usize;
        (self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }
}
