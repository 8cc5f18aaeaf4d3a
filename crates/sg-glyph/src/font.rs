//! Builtin bitmap font: hardcoded 5×5 masks for common glyphs, with a
//! density-based fill pattern for the rest of printable ASCII.

/// Glyph mask width in pixels.
pub const MASK_WIDTH: usize = 5;
/// Glyph mask height in pixels.
pub const MASK_HEIGHT: usize = 5;
/// Total pixels per glyph mask. Constant across all characters.
pub const MASK_PIXELS: usize = MASK_WIDTH * MASK_HEIGHT;

/// Fixed-resolution rasterizer backed by hardcoded 5×5 bitmaps.
///
/// # Example
/// ```
/// use sg_glyph::font::BitmapFont;
/// let font = BitmapFont;
/// assert_eq!(font.bitmap(' '), 0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BitmapFont;

impl BitmapFont {
    /// 25-bit glyph mask for a character (row-major, LSB first).
    #[must_use]
    pub fn bitmap(self, ch: char) -> u32 {
        glyph_bitmap(ch)
    }
}

/// Hardcoded 5×5 bitmap for a character (row-major, LSB first).
///
/// Characters without an explicit bitmap get a centre-out fill pattern
/// sized by an estimated stroke density.
///
/// # Example
/// ```
/// use sg_glyph::font::glyph_bitmap;
/// assert_eq!(glyph_bitmap(' '), 0);
/// assert_ne!(glyph_bitmap('#'), 0);
/// ```
#[must_use]
pub fn glyph_bitmap(ch: char) -> u32 {
    match ch {
        ' ' => 0b00000_00000_00000_00000_00000,
        '.' => 0b00000_00000_00000_00100_00000,
        '\'' | '`' => 0b00100_00100_00000_00000_00000,
        ',' => 0b00000_00000_00000_00100_01000,
        ':' => 0b00000_00100_00000_00100_00000,
        ';' => 0b00000_00100_00000_00100_01000,
        '-' => 0b00000_00000_11111_00000_00000,
        '_' => 0b00000_00000_00000_00000_11111,
        '=' => 0b00000_11111_00000_11111_00000,
        '|' => 0b00100_00100_00100_00100_00100,
        '+' => 0b00100_00100_11111_00100_00100,
        '*' => 0b00000_10101_01110_10101_00000,
        '/' => 0b00001_00010_00100_01000_10000,
        '\\' => 0b10000_01000_00100_00010_00001,
        '!' => 0b00100_00100_00100_00000_00100,
        '<' => 0b00010_00100_01000_00100_00010,
        '>' => 0b01000_00100_00010_00100_01000,
        '(' => 0b00010_00100_00100_00100_00010,
        ')' => 0b01000_00100_00100_00100_01000,
        '[' => 0b01110_01000_01000_01000_01110,
        ']' => 0b01110_00010_00010_00010_01110,
        '?' => 0b01110_10001_00110_00000_00100,
        '0' => 0b01110_10011_10101_11001_01110,
        '1' => 0b00100_01100_00100_00100_01110,
        '2' => 0b01110_10001_00110_01000_11111,
        '3' => 0b11110_00001_00110_00001_11110,
        '4' => 0b00110_01010_10010_11111_00010,
        '5' => 0b11111_10000_11110_00001_11110,
        '6' => 0b01110_10000_11110_10001_01110,
        '7' => 0b11111_00001_00010_00100_00100,
        '8' => 0b01110_10001_01110_10001_01110,
        '9' => 0b01110_10001_01111_00001_01110,
        'O' => 0b01110_10001_10001_10001_01110,
        '#' => 0b01010_11111_01010_11111_01010,
        '@' => 0b01110_10001_10111_10001_01110,
        '%' => 0b11001_11010_00100_01011_10011,
        '$' => 0b01111_10100_01110_00101_11110,
        'A' => 0b01110_10001_11111_10001_10001,
        'M' => 0b10001_11011_10101_10001_10001,
        'W' => 0b10001_10001_10101_11011_10001,
        _ => estimate_density(ch),
    }
}

fn estimate_density(ch: char) -> u32 {
    let density = match ch {
        'a'..='z' => 12,
        'A'..='Z' => 14,
        '0'..='9' => 13,
        _ => 8,
    };
    // Centre-out fill pattern
    let order: [u32; 25] = [
        12, 7, 2, 8, 14, 6, 1, 0, 3, 9, 11, 5, 4, 10, 16, 13, 17, 18, 19, 23, 20, 21, 22, 24, 15,
    ];
    let mut bm = 0u32;
    for &bit in order.iter().take(density) {
        bm |= 1 << bit;
    }
    bm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_fit_in_25_bits() {
        for code in 32u8..=126 {
            let bm = glyph_bitmap(char::from(code));
            assert_eq!(bm & !0x01FF_FFFF, 0, "mask overflows for {code}");
        }
    }

    #[test]
    fn space_is_empty_and_hash_is_dense() {
        assert_eq!(glyph_bitmap(' ').count_ones(), 0);
        assert!(glyph_bitmap('#').count_ones() > 10);
    }

    #[test]
    fn fallback_density_by_class() {
        assert_eq!(glyph_bitmap('x').count_ones(), 12);
        assert_eq!(glyph_bitmap('X').count_ones(), 14);
        assert_eq!(glyph_bitmap('~').count_ones(), 8);
    }
}
