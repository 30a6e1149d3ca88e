//! Sparks: jagged electric arcs.

use super::Pose;
use crate::raster::{draw_line, Framebuffer};
use glam::IVec2;
use rand::Rng;

/// Draw 2 to 4 arcs radiating from the anchor.
///
/// Each arc runs 10–40 px in a random whole-degree direction through 3 to 6
/// points. Interior points sit on the chord, pushed sideways by up to a
/// quarter of the arc length.
pub fn draw_sparks<R: Rng>(fb: &mut Framebuffer, pose: &Pose, rng: &mut R) {
    let argb = pose.color.opaque();
    let start = pose.anchor;
    let origin = start.as_vec2();

    let arms = rng.gen_range(2..5);
    for _ in 0..arms {
        let points = rng.gen_range(3..7);
        let length: i32 = rng.gen_range(10..41);
        let heading = (rng.gen_range(0..360) as f32).to_radians();

        let tip = origin + glam::Vec2::from_angle(heading) * length as f32;
        let end = IVec2::new(tip.x as i32, tip.y as i32);

        let chord = end.as_vec2() - origin;
        let normal = chord.perp().normalize_or_zero();

        let mut prev = start;
        for i in 1..points - 1 {
            let t = i as f32 / (points - 1) as f32;
            let on_chord = origin + chord * t;
            let push = (rng.gen_range(0..length / 2 + 1) - length / 4) as f32;
            let point = IVec2::new(
                on_chord.x as i32 + (normal.x * push) as i32,
                on_chord.y as i32 + (normal.y * push) as i32,
            );
            draw_line(fb, prev, point, argb);
            prev = point;
        }
        draw_line(fb, prev, end, argb);
    }
}
