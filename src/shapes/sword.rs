//! Sword: a composite shape built from four parts.
//!
//! The sword is defined in its own frame, point down, hilt at the bottom:
//!
//! | Part | Local region | Color |
//! |------|--------------|-------|
//! | Blade | `|x| ≤ 3`, `-50 ≤ y ≤ 0` | silver `C0C0C0` |
//! | Guard | `|x| ≤ 10`, `0 ≤ y ≤ 4` | gold `FFD700` |
//! | Hilt | `|x| ≤ 2`, `4 ≤ y ≤ 14` | brown `8B4513` |
//! | Pommel | within 3 of `(0, 14)` | dark gray `696969` |
//!
//! Overlapping points belong to the first matching part in that order.

use super::Pose;
use crate::color::Rgb;
use crate::raster::{place, Framebuffer};
use glam::Vec2;
use std::ops::RangeInclusive;

/// Local x range scanned when drawing.
pub const LOCAL_X: RangeInclusive<i32> = -20..=20;
/// Local y range scanned when drawing.
pub const LOCAL_Y: RangeInclusive<i32> = -60..=20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwordPart {
    Blade,
    Guard,
    Hilt,
    Pommel,
}

impl SwordPart {
    /// Which part, if any, covers the local point `(x, y)`.
    pub fn classify(x: i32, y: i32) -> Option<SwordPart> {
        if x.abs() <= 3 && (-50..=0).contains(&y) {
            Some(SwordPart::Blade)
        } else if x.abs() <= 10 && (0..=4).contains(&y) {
            Some(SwordPart::Guard)
        } else if x.abs() <= 2 && (4..=14).contains(&y) {
            Some(SwordPart::Hilt)
        } else if x * x + (y - 14) * (y - 14) <= 9 {
            Some(SwordPart::Pommel)
        } else {
            None
        }
    }

    pub const fn color(self) -> Rgb {
        match self {
            SwordPart::Blade => Rgb(0xC0C0C0),
            SwordPart::Guard => Rgb(0xFFD700),
            SwordPart::Hilt => Rgb(0x8B4513),
            SwordPart::Pommel => Rgb(0x696969),
        }
    }
}

/// Scan the local bounding box and paint every point that belongs to a part.
///
/// Points are scaled and rotated about the anchor one by one, so at large
/// scales the sword is drawn as a lattice of dots.
pub fn draw_sword(fb: &mut Framebuffer, pose: &Pose) {
    for ly in LOCAL_Y {
        for lx in LOCAL_X {
            let Some(part) = SwordPart::classify(lx, ly) else {
                continue;
            };
            let local = Vec2::new(lx as f32, ly as f32);
            let pixel = place(pose.anchor, local, pose.scale, pose.angle);
            fb.put(pixel.x, pixel.y, part.color().opaque());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_classify_priority() {
        assert_eq!(SwordPart::classify(0, -50), Some(SwordPart::Blade));
        // Blade wins over guard on the shared row.
        assert_eq!(SwordPart::classify(0, 0), Some(SwordPart::Blade));
        assert_eq!(SwordPart::classify(8, 0), Some(SwordPart::Guard));
        // Guard wins over hilt on the shared row.
        assert_eq!(SwordPart::classify(1, 4), Some(SwordPart::Guard));
        assert_eq!(SwordPart::classify(1, 10), Some(SwordPart::Hilt));
        assert_eq!(SwordPart::classify(3, 14), Some(SwordPart::Pommel));
        assert_eq!(SwordPart::classify(0, 17), Some(SwordPart::Pommel));
        assert_eq!(SwordPart::classify(11, 2), None);
        assert_eq!(SwordPart::classify(0, -51), None);
        assert_eq!(SwordPart::classify(0, 18), None);
    }

    #[test]
    fn test_unrotated_unit_sword() {
        let mut fb = Framebuffer::new(60, 100);
        let pose = Pose {
            anchor: IVec2::new(30, 60),
            scale: 1.0,
            angle: 0.0,
            life: 0.4,
            color: Rgb::gray(100),
        };
        draw_sword(&mut fb, &pose);

        assert_eq!(fb.get(30, 10), Some(0xFFC0_C0C0));
        assert_eq!(fb.get(38, 62), Some(0xFFFF_D700));
        assert_eq!(fb.get(31, 70), Some(0xFF8B_4513));
        assert_eq!(fb.get(30, 77), Some(0xFF69_6969));
        assert_eq!(fb.get(30, 9), Some(0));
        assert_eq!(fb.get(45, 60), Some(0));
    }

    #[test]
    fn test_half_scale_sword_is_smaller() {
        let mut full = Framebuffer::new(60, 100);
        let mut half = Framebuffer::new(60, 100);
        let mut pose = Pose {
            anchor: IVec2::new(30, 60),
            scale: 1.0,
            angle: 0.3,
            life: 0.4,
            color: Rgb::gray(100),
        };
        draw_sword(&mut full, &pose);
        pose.scale = 0.5;
        draw_sword(&mut half, &pose);
        assert!(half.lit_count() < full.lit_count());
    }
}
