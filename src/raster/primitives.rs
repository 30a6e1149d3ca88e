//! Stateless drawing primitives.
//!
//! All coordinates are buffer-local pixels. Nothing here allocates, and every
//! write goes through [`Framebuffer::put`], so callers never need to clip.

use super::Framebuffer;
use glam::{IVec2, Vec2};

/// Rotate `v` by `angle` radians (y down, so positive angles turn clockwise
/// on screen).
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

/// Map a shape-local point to a buffer pixel: scale, rotate, offset from
/// `anchor`, then truncate toward zero.
#[inline]
pub fn place(anchor: IVec2, local: Vec2, scale: f32, angle: f32) -> IVec2 {
    let p = anchor.as_vec2() + rotate(local * scale, angle);
    IVec2::new(p.x as i32, p.y as i32)
}

/// Integer Bresenham line, both endpoints included.
pub fn draw_line(fb: &mut Framebuffer, from: IVec2, to: IVec2, argb: u32) {
    let (mut x, mut y) = (from.x, from.y);
    let dx = (to.x - x).abs();
    let dy = (to.y - y).abs();
    let sx = if x < to.x { 1 } else { -1 };
    let sy = if y < to.y { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        fb.put(x, y, argb);
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

/// Scanline fill of a triangle with a horizontal base.
///
/// Rows run from the apex down to `base_y`. On each row the left and right
/// edges are interpolated linearly from the apex toward `base_left` and
/// `base_right`. Returns `false` without drawing when the apex sits on the
/// base row.
pub fn fill_flat_triangle(
    fb: &mut Framebuffer,
    apex: IVec2,
    base_y: i32,
    base_left: i32,
    base_right: i32,
    argb: u32,
) -> bool {
    let rows = base_y - apex.y;
    if rows == 0 {
        return false;
    }

    let (top, bottom) = if rows > 0 { (apex.y, base_y) } else { (base_y, apex.y) };
    for y in top..=bottom {
        let progress = (y - apex.y) as f32 / rows as f32;
        let left = apex.x + ((base_left - apex.x) as f32 * progress) as i32;
        let right = apex.x + ((base_right - apex.x) as f32 * progress) as i32;
        for x in left.min(right)..=left.max(right) {
            fb.put(x, y, argb);
        }
    }
    true
}
