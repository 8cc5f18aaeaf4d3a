/// Glyph rasterization for subglyph.
///
/// Provides the fixed-resolution builtin bitmap font and the raw-brightness
/// derivation every matcher builds on. All glyph masks share the same 5×5
/// resolution; a character's raw brightness is its on-pixel fraction.

pub mod brightness;
pub mod font;

pub use brightness::GlyphSource;
pub use font::{BitmapFont, MASK_HEIGHT, MASK_PIXELS, MASK_WIDTH};
