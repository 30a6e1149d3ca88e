//! Fire: a cluster of flickering triangle flamelets.

use super::Pose;
use crate::color::flame_color;
use crate::raster::{fill_flat_triangle, Framebuffer};
use glam::IVec2;
use rand::Rng;

/// Alpha for a flame with `life` seconds left.
///
/// Flickers as `0.5 + 0.5·sin(15·life)`, so the rate is tied to the
/// particle's remaining life rather than the wall clock.
#[inline]
pub fn flicker_alpha(life: f32) -> u8 {
    ((0.5 + 0.5 * (life * 15.0).sin()) * 255.0) as u8
}

/// Draw 3 to 5 flamelets around the pose's anchor.
///
/// Each flamelet leans by up to ±15°, is sized by a random 50–100% of the
/// particle's scale (10 px wide, 15 px tall at scale 1) and sits up to 5 px
/// above the anchor with ±2 px of sideways jitter. Flamelets too small to
/// have any height are skipped. Returns how many were drawn.
pub fn draw_fire<R: Rng>(fb: &mut Framebuffer, pose: &Pose, rng: &mut R) -> usize {
    let alpha = flicker_alpha(pose.life);
    let count = rng.gen_range(3..6);
    let mut drawn = 0;

    for _ in 0..count {
        let lean = ((rng.gen_range(0..30) - 15) as f32).to_radians();
        let size = pose.scale * (0.5 + rng.gen_range(0..50) as f32 / 100.0);
        let base_width = (size * 10.0) as i32;
        let height = size * 15.0;

        let tx = pose.anchor.x + rng.gen_range(0..4) - 2;
        let ty = pose.anchor.y - rng.gen_range(0..6);
        let argb = flame_color(rng).with_alpha(alpha);

        let apex = IVec2::new(
            tx + (height * lean.sin()) as i32,
            ty - (height * lean.cos()) as i32,
        );
        let half = base_width / 2;
        if fill_flat_triangle(fb, apex, ty, tx - half, tx + half, argb) {
            drawn += 1;
        }
    }
    drawn
}
