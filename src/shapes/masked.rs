//! Hearts and stars: rotated, scaled pixel-art masks.

use super::masks::Mask;
use crate::raster::{place, Framebuffer};
use glam::{IVec2, Vec2};

/// Blit every lit cell of `mask` around `anchor`.
///
/// Cells are centred on the mask's midpoint, scaled, rotated and truncated to
/// a pixel. Each landed pixel and its eight neighbours are painted, which
/// closes the gaps that scaling and rotation open between samples. A cell
/// whose own pixel falls off the buffer paints nothing.
pub fn draw_mask(fb: &mut Framebuffer, anchor: IVec2, mask: &Mask, scale: f32, angle: f32, argb: u32) {
    let center = Vec2::new(mask.width as f32 / 2.0, mask.height as f32 / 2.0);

    for (col, row) in mask.on_cells() {
        let local = Vec2::new(col as f32, row as f32) - center;
        let pixel = place(anchor, local, scale, angle);
        if !fb.contains(pixel.x, pixel.y) {
            continue;
        }
        for dy in -1..=1 {
            for dx in -1..=1 {
                fb.put(pixel.x + dx, pixel.y + dy, argb);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::masks::{HEART, STAR};

    const INK: u32 = 0xFFAB_CDEF;

    #[test]
    fn test_star_lands_on_mask_cells() {
        let mut fb = Framebuffer::new(100, 100);
        draw_mask(&mut fb, IVec2::new(50, 50), &STAR, 1.0, 0.0, INK);

        // Every lit cell maps to (42 + col, 42 + row).
        for (col, row) in STAR.on_cells() {
            assert_eq!(fb.get(42 + col as i32, 42 + row as i32), Some(INK));
        }
        for (x, y, p) in fb.lit_pixels() {
            assert_eq!(p, INK);
            assert!((41..=58).contains(&x) && (41..=58).contains(&y));
        }
    }

    #[test]
    fn test_scale_spreads_heart() {
        let mut small = Framebuffer::new(100, 100);
        let mut big = Framebuffer::new(100, 100);
        draw_mask(&mut small, IVec2::new(50, 50), &HEART, 1.0, 0.0, INK);
        draw_mask(&mut big, IVec2::new(50, 50), &HEART, 1.5, 0.0, INK);
        assert!(big.lit_count() > small.lit_count());
    }

    #[test]
    fn test_off_buffer_cells_skip_neighbours() {
        let mut fb = Framebuffer::new(100, 100);
        // Anchor at the left edge: cells with negative x are dropped whole.
        draw_mask(&mut fb, IVec2::new(0, 50), &STAR, 1.0, 0.0, INK);
        assert!(fb.lit_count() > 0);
        assert!(fb.lit_pixels().all(|(x, _, _)| x <= 8));
    }

    #[test]
    fn test_star_lights_only_cells_and_their_neighbours() {
        let mut fb = Framebuffer::new(100, 100);
        draw_mask(&mut fb, IVec2::new(50, 50), &STAR, 1.0, 0.0, INK);

        let cells: Vec<(i32, i32)> = STAR
            .on_cells()
            .map(|(col, row)| (42 + col as i32, 42 + row as i32))
            .collect();
        assert!(!cells.is_empty());

        for (x, y, _) in fb.lit_pixels() {
            let near_cell = cells
                .iter()
                .any(|&(cx, cy)| (x - cx).abs() <= 1 && (y - cy).abs() <= 1);
            assert!(near_cell, "stray pixel at ({}, {})", x, y);
        }

        // Every cell's 3x3 block is painted.
        for &(cx, cy) in &cells {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    assert_eq!(fb.get(cx + dx, cy + dy), Some(INK));
                }
            }
        }
    }
}
