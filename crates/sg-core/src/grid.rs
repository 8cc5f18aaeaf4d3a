/// Grille de sortie ASCII. Row-major, une cellule par sous-image.
///
/// # Example
/// ```
/// use sg_core::grid::CharGrid;
/// let mut grid = CharGrid::new(4, 2);
/// grid.set(0, 0, '@');
/// assert_eq!(grid.get(0, 0), '@');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid {
    /// Flat array of characters, row-major.
    pub cells: Vec<char>,
    /// Width in characters (columns).
    pub width: usize,
    /// Height in characters (rows).
    pub height: usize,
}

impl CharGrid {
    /// Crée une grille pré-remplie d'espaces.
    ///
    /// # Example
    /// ```
    /// use sg_core::grid::CharGrid;
    /// let grid = CharGrid::new(80, 24);
    /// assert_eq!(grid.cells.len(), 80 * 24);
    /// ```
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![' '; width * height],
            width,
            height,
        }
    }

    /// Set the character at position (x, y).
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, ch: char) {
        self.cells[y * self.width + x] = ch;
    }

    /// Get the character at position (x, y).
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x]
    }

    /// Iterate over rows as character slices, top to bottom.
    ///
    /// # Example
    /// ```
    /// use sg_core::grid::CharGrid;
    /// let grid = CharGrid::new(3, 2);
    /// assert_eq!(grid.rows().count(), 2);
    /// ```
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width.max(1))
    }
}

/// Grille de luminosité par cellule, valeurs dans [0, 1]. Row-major.
///
/// One scalar per sub-image of the partitioned padded image.
///
/// # Example
/// ```
/// use sg_core::grid::BrightnessGrid;
/// let grid = BrightnessGrid::new(4, 4);
/// assert_eq!(grid.get(3, 3), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BrightnessGrid {
    /// Flat array of brightness values, row-major.
    pub values: Vec<f64>,
    /// Width in cells (columns).
    pub width: usize,
    /// Height in cells (rows).
    pub height: usize,
}

impl BrightnessGrid {
    /// Create a zeroed grid.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            values: vec![0.0; width * height],
            width,
            height,
        }
    }

    /// Build a grid from row-major values. Length must be `width * height`.
    #[must_use]
    pub fn from_values(values: Vec<f64>, width: usize, height: usize) -> Self {
        debug_assert_eq!(values.len(), width * height);
        Self {
            values,
            width,
            height,
        }
    }

    /// Set the brightness at position (x, y).
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        self.values[y * self.width + x] = value;
    }

    /// Get the brightness at position (x, y).
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.values[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_grid_roundtrip() {
        let mut grid = CharGrid::new(3, 2);
        grid.set(2, 1, '#');
        assert_eq!(grid.get(2, 1), '#');
        assert_eq!(grid.get(0, 0), ' ');
    }

    #[test]
    fn char_grid_rows_are_width_sized() {
        let grid = CharGrid::new(5, 3);
        for row in grid.rows() {
            assert_eq!(row.len(), 5);
        }
    }

    #[test]
    fn brightness_grid_roundtrip() {
        let mut grid = BrightnessGrid::new(2, 2);
        grid.set(1, 0, 0.75);
        assert!((grid.get(1, 0) - 0.75).abs() < f64::EPSILON);
    }
}
