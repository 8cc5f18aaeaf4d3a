//! Raw brightness derivation from glyph masks.

use crate::font::{BitmapFont, MASK_PIXELS};

/// Supplies boolean glyph masks at the fixed 5×5 resolution.
///
/// Implémenté par : `BitmapFont`. Test doubles substitute fixed tables.
///
/// # Example
/// ```
/// use sg_glyph::brightness::GlyphSource;
/// use sg_glyph::font::BitmapFont;
/// let font = BitmapFont;
/// assert_eq!(font.raw_brightness(' '), 0.0);
/// ```
pub trait GlyphSource {
    /// 25-bit on/off mask for a character (row-major, LSB first).
    fn mask(&self, ch: char) -> u32;

    /// Fraction of "on" pixels in the character's mask, in [0, 1].
    ///
    /// Always computed as an integer count over the fixed mask size, so two
    /// characters with the same on-pixel count land in the exact same value.
    fn raw_brightness(&self, ch: char) -> f64 {
        f64::from(self.mask(ch).count_ones()) / MASK_PIXELS as f64
    }
}

impl GlyphSource for BitmapFont {
    fn mask(&self, ch: char) -> u32 {
        self.bitmap(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_brightness_in_unit_range() {
        let font = BitmapFont;
        for code in 32u8..=126 {
            let b = font.raw_brightness(char::from(code));
            assert!((0.0..=1.0).contains(&b), "out of range for {code}: {b}");
        }
    }

    #[test]
    fn equal_counts_share_the_exact_value() {
        let font = BitmapFont;
        // '/' and '\\' both have 5 on-pixels.
        assert_eq!(font.mask('/').count_ones(), font.mask('\\').count_ones());
        assert!(font.raw_brightness('/') == font.raw_brightness('\\'));
    }

    #[test]
    fn space_is_darkest() {
        let font = BitmapFont;
        assert_eq!(font.raw_brightness(' '), 0.0);
        assert!(font.raw_brightness('@') > font.raw_brightness('.'));
    }
}
