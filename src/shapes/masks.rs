//! Pixel-art masks for the masked shapes.

/// A binary pixel-art mask, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    pub width: u32,
    pub height: u32,
    cells: &'static [u8],
}

impl Mask {
    /// Wrap mask data. `cells` must hold `width * height` entries.
    pub const fn new(width: u32, height: u32, cells: &'static [u8]) -> Self {
        assert!(cells.len() == (width * height) as usize);
        Self { width, height, cells }
    }

    #[inline]
    pub fn is_on(&self, col: u32, row: u32) -> bool {
        col < self.width && row < self.height && self.cells[(row * self.width + col) as usize] == 1
    }

    /// Coordinates `(col, row)` of every lit cell, row by row.
    pub fn on_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == 1)
            .map(move |(i, _)| (i as u32 % width, i as u32 / width))
    }
}

#[rustfmt::skip]
const HEART_CELLS: [u8; 11 * 10] = [
    0,0,0,1,1,0,0,0,1,1,0,
    0,0,1,1,1,1,0,1,1,1,1,
    0,1,1,1,1,1,1,1,1,1,1,
    1,1,1,1,1,1,1,1,1,1,1,
    1,1,1,1,1,1,1,1,1,1,1,
    0,1,1,1,1,1,1,1,1,1,0,
    0,0,1,1,1,1,1,1,1,0,0,
    0,0,0,1,1,1,1,1,0,0,0,
    0,0,0,0,1,1,1,0,0,0,0,
    0,0,0,0,0,1,0,0,0,0,0,
];

#[rustfmt::skip]
const STAR_CELLS: [u8; 16 * 16] = [
    1,0,0,0,0,0,0,1,0,0,0,0,0,0,0,1,
    0,1,0,0,0,0,0,1,0,0,0,0,0,0,1,0,
    0,0,1,0,0,0,0,1,0,0,0,0,0,1,0,0,
    0,0,0,1,0,0,0,1,0,0,0,0,1,0,0,0,
    0,0,0,0,1,0,0,1,0,0,0,1,0,0,0,0,
    0,0,0,0,0,1,0,1,0,0,1,0,0,0,0,0,
    0,0,0,0,0,0,1,1,0,1,0,0,0,0,0,0,
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,
    0,0,0,0,0,0,0,1,1,0,0,0,0,0,0,0,
    0,0,0,0,0,0,1,1,0,1,0,0,0,0,0,0,
    0,0,0,0,0,1,0,1,0,0,1,0,0,0,0,0,
    0,0,0,0,1,0,0,1,0,0,0,1,0,0,0,0,
    0,0,0,1,0,0,0,1,0,0,0,0,1,0,0,0,
    0,0,1,0,0,0,0,1,0,0,0,0,0,1,0,0,
    0,1,0,0,0,0,0,1,0,0,0,0,0,0,1,0,
    1,0,0,0,0,0,0,1,0,0,0,0,0,0,0,1,
];

/// 11×10 heart.
pub const HEART: Mask = Mask::new(11, 10, &HEART_CELLS);

/// 16×16 eight-armed star.
pub const STAR: Mask = Mask::new(16, 16, &STAR_CELLS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert_eq!((HEART.width, HEART.height), (11, 10));
        assert_eq!((STAR.width, STAR.height), (16, 16));
    }

    #[test]
    fn test_star_center_row_is_solid() {
        assert!((0..16).all(|col| STAR.is_on(col, 7)));
        assert!((0..16).all(|row| STAR.is_on(7, row)));
    }

    #[test]
    fn test_heart_tip() {
        let last_row: Vec<_> = HEART.on_cells().filter(|&(_, row)| row == 9).collect();
        assert_eq!(last_row, vec![(5, 9)]);
    }

    #[test]
    fn test_out_of_range_is_off() {
        assert!(!STAR.is_on(16, 0));
        assert!(!HEART.is_on(0, 10));
    }
}
