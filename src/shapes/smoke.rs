//! Smoke: a soft, noisy, semi-transparent disc.

use super::Pose;
use crate::raster::Framebuffer;
use rand::Rng;

/// Strongest alpha smoke ever reaches.
pub const MAX_SMOKE_ALPHA: f32 = 150.0;

/// Draw a puff of radius `8 × scale` pixels.
///
/// Alpha falls off as `(1 - d/r)²` from the centre, gets ±0.1 of noise per
/// pixel and tops out at [`MAX_SMOKE_ALPHA`]. Puffs smaller than a pixel
/// are not drawn.
pub fn draw_smoke<R: Rng>(fb: &mut Framebuffer, pose: &Pose, rng: &mut R) {
    let radius = (pose.scale * 8.0) as i32;
    if radius <= 0 {
        return;
    }
    let r = radius as f32;

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let x = pose.anchor.x + dx;
            let y = pose.anchor.y + dy;
            if !fb.contains(x, y) {
                continue;
            }

            let dist = ((dx * dx + dy * dy) as f32).sqrt();
            if dist > r {
                continue;
            }

            let falloff = (1.0 - dist / r).powi(2);
            let noise = rng.gen_range(0..20) as f32 / 100.0 - 0.1;
            let alpha = (falloff + noise).clamp(0.0, 1.0);
            fb.put(x, y, pose.color.with_alpha((alpha * MAX_SMOKE_ALPHA) as u8));
        }
    }
}
