//! Moteur de rendu : pad → cache → réduction de luminosité → correspondance.

use std::sync::Arc;

use sg_core::config::{ComparisonPolicy, PartitionMode, SessionConfig};
use sg_core::error::CoreError;
use sg_core::grid::CharGrid;
use sg_glyph::font::BitmapFont;
use sg_image::{BrightnessCache, CacheKey, Raster, brightness_grid, pad};
use sg_match::BrightnessMatcher;

/// Session de rendu sur une image fixe.
///
/// The image is padded once at construction; every render resolves the
/// brightness grid through the session cache, so re-rendering at an
/// already-seen resolution recomputes nothing.
pub struct Engine {
    image: Raster,
    padded: Raster,
    matcher: BrightnessMatcher<BitmapFont>,
    cache: BrightnessCache,
    resolution: u32,
    partition: PartitionMode,
}

impl Engine {
    /// Build a session over an image from the loaded configuration.
    ///
    /// The initial resolution is clamped into the image's valid range.
    #[must_use]
    pub fn new(image: Raster, config: &SessionConfig) -> Self {
        let padded = pad(&image);
        let mut matcher = BrightnessMatcher::builtin(config.charset.chars());
        matcher.set_policy(config.policy);

        let min = min_resolution(&padded);
        let max = padded.width();
        let resolution = config.resolution.clamp(min, max);
        if resolution != config.resolution {
            log::warn!(
                "resolution {} clamped to {resolution} (valid range [{min}, {max}])",
                config.resolution
            );
        }

        Self {
            image,
            padded,
            matcher,
            cache: BrightnessCache::new(config.cache_capacity),
            resolution,
            partition: config.partition,
        }
    }

    /// Current partition resolution (columns).
    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Change the partition resolution.
    ///
    /// # Errors
    /// Returns [`CoreError::ResolutionOutOfRange`] when the requested value
    /// leaves `[max(1, w/h), w]` of the padded image.
    pub fn set_resolution(&mut self, resolution: u32) -> Result<(), CoreError> {
        let min = min_resolution(&self.padded);
        let max = self.padded.width();
        if resolution < min || resolution > max {
            return Err(CoreError::ResolutionOutOfRange {
                requested: resolution,
                min,
                max,
            });
        }
        self.resolution = resolution;
        Ok(())
    }

    /// Replace the comparison policy used by the matcher.
    pub fn set_policy(&mut self, policy: ComparisonPolicy) {
        self.matcher.set_policy(policy);
    }

    /// Insert a character into the active set.
    pub fn add_char(&mut self, ch: char) {
        self.matcher.add(ch);
    }

    /// Remove a character from the active set.
    pub fn remove_char(&mut self, ch: char) {
        self.matcher.remove(ch);
    }

    /// Characters of the active set, ordered by code point.
    #[must_use]
    pub fn chars(&self) -> std::collections::BTreeSet<char> {
        self.matcher.chars()
    }

    /// Size of the active set.
    #[must_use]
    pub fn charset_len(&self) -> usize {
        self.matcher.len()
    }

    /// (hits, misses) of the session brightness cache.
    #[must_use]
    pub fn cache_stats(&self) -> (u64, u64) {
        (self.cache.hits(), self.cache.misses())
    }

    /// Render the image at the current resolution and policy.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyCharset`] when the active set is empty, or
    /// [`CoreError::InvalidDimensions`] when the partition degenerates.
    pub fn render(&mut self) -> Result<CharGrid, CoreError> {
        let key = CacheKey {
            id: self.image.id(),
            resolution: self.resolution,
            mode: self.partition,
        };
        let brightness = match self.cache.get(key) {
            Some(grid) => grid,
            None => {
                let grid = Arc::new(brightness_grid(
                    &self.padded,
                    self.resolution,
                    self.partition,
                )?);
                self.cache.put(key, Arc::clone(&grid));
                grid
            }
        };

        let mut art = CharGrid::new(brightness.width, brightness.height);
        for y in 0..brightness.height {
            for x in 0..brightness.width {
                art.set(x, y, self.matcher.match_char(brightness.get(x, y))?);
            }
        }
        log::debug!(
            "rendered {}×{} at resolution {}",
            art.width,
            art.height,
            self.resolution
        );
        Ok(art)
    }
}

/// Smallest resolution that still yields at least one row of cells.
fn min_resolution(padded: &Raster) -> u32 {
    (padded.width() / padded.height()).max(1)
}
