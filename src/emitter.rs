//! Per-kind emission patterns.
//!
//! An emitter turns one pointer movement (`from` → `to`) into zero or more
//! freshly initialised particles. Every kind uses one of two patterns:
//!
//! | Type | Kinds | Description |
//! |------|-------|-------------|
//! | [`Emitter::Trail`] | Stars, Fire, Sparks, Smoke, Sword | Evenly spaced along the movement |
//! | [`Emitter::Scatter`] | Hearts | One particle thrown from the pointer |
//!
//! # Trail density
//!
//! A trail emits `max(1, floor(dist / spacing))` particles at the interior
//! points `t = (i + 1) / (n + 1)` of the segment, never on its endpoints.
//! Smaller spacing means a denser trail:
//!
//! | Kind | spacing | life (s) | scale | spins | rises |
//! |------|---------|----------|-------|-------|-------|
//! | Stars | 10 | 0.3–0.5 | 0.5–1.5 | yes | yes |
//! | Fire | 4 | 0.3–0.5 | 1.0–1.1 | no | no |
//! | Sparks | 2 | 0.1–0.2 | 1.0–2.0 | yes | no |
//! | Smoke | 10 | 0.3–0.5 | 1.0–1.5 | no | yes |
//! | Sword | 10 | 0.3–0.5 | 0.5 | yes | yes |

use crate::color::spawn_color;
use crate::kind::ParticleKind;
use crate::particle::Particle;
use crate::spawn::SpawnContext;
use glam::Vec2;
use rand::Rng;
use std::ops::Range;

/// Particle emission pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum Emitter {
    /// Particles spread evenly along the pointer's path.
    ///
    /// Each particle flies off in a random whole-degree direction at
    /// `speed` pixels per second, halved on both axes. With `rise` set, the
    /// halved vertical component is then forced upward, so rising kinds
    /// leave at half speed too.
    Trail {
        /// Distance in pixels between consecutive particles.
        spacing: f32,
        /// Initial speed range, whole pixels per second (half open).
        speed: Range<i32>,
        /// Lifetime range in seconds.
        life: Range<f32>,
        /// Initial scale range.
        scale: Range<f32>,
        /// Random initial angle and spin.
        rotate: bool,
        /// Force the vertical velocity upward.
        rise: bool,
    },

    /// A single particle thrown upward from near the pointer.
    ///
    /// Fires only when the pointer moved more than `threshold` pixels
    /// since the previous observation.
    Scatter {
        /// Minimum movement, exclusive.
        threshold: f32,
        /// Positional jitter on each axis, whole pixels (half open).
        jitter: Range<i32>,
        /// Launch angle range in whole degrees from horizontal (half open).
        spread: Range<i32>,
        /// Launch speed range, whole pixels per second (half open).
        speed: Range<i32>,
        /// Fixed lifetime in seconds.
        life: f32,
        /// Initial scale range.
        scale: Range<f32>,
    },
}

impl Emitter {
    /// The emission pattern a kind uses.
    pub fn for_kind(kind: ParticleKind) -> Emitter {
        let trail = |spacing, life, scale, rotate, rise| Emitter::Trail {
            spacing,
            speed: 25..55,
            life,
            scale,
            rotate,
            rise,
        };

        match kind {
            ParticleKind::Hearts => Emitter::Scatter {
                threshold: 5.0,
                jitter: -30..20,
                spread: -80..80,
                speed: 150..200,
                life: 0.9,
                scale: 1.0..1.5,
            },
            ParticleKind::Stars => trail(10.0, 0.3..0.5, 0.5..1.5, true, true),
            ParticleKind::Fire => trail(4.0, 0.3..0.5, 1.0..1.1, false, false),
            ParticleKind::Sparks => trail(2.0, 0.1..0.2, 1.0..2.0, true, false),
            ParticleKind::Smoke => trail(10.0, 0.3..0.5, 1.0..1.5, false, true),
            ParticleKind::Sword => trail(10.0, 0.3..0.5, 0.5..0.5, true, true),
        }
    }

    /// Emit the particles for one pointer movement into `out`.
    ///
    /// Returns the number of particles appended.
    pub fn emit<R: Rng>(
        &self,
        kind: ParticleKind,
        from: Vec2,
        to: Vec2,
        rng: &mut R,
        out: &mut Vec<Particle>,
    ) -> usize {
        let mut ctx = SpawnContext::new(rng);
        let dist = from.distance(to);

        match self {
            Emitter::Trail {
                spacing,
                speed,
                life,
                scale,
                rotate,
                rise,
            } => {
                if !(dist > 0.0) {
                    return 0;
                }
                let count = trail_count(dist, *spacing);
                out.reserve(count as usize);

                for i in 0..count {
                    ctx.at(i, count);
                    let position = from.lerp(to, ctx.progress());

                    let heading = ctx.random_degrees();
                    let speed = ctx.random_int(speed.start, speed.end) as f32;
                    let mut velocity = ctx.velocity_at(heading, speed) * 0.5;
                    if *rise {
                        velocity.y = -velocity.y.abs();
                    }

                    let (angle, spin) = if *rotate {
                        (ctx.random_degrees(), ctx.random_spin())
                    } else {
                        (0.0, 0.0)
                    };

                    let lifetime = ctx.random_range(life.start, life.end);
                    let size = ctx.random_range(scale.start, scale.end);
                    let color = spawn_color(kind, ctx.rng());

                    out.push(
                        Particle::new(kind, position, lifetime)
                            .with_velocity(velocity)
                            .with_rotation(angle, spin)
                            .with_scale(size)
                            .with_color(color),
                    );
                }
                count as usize
            }

            Emitter::Scatter {
                threshold,
                jitter,
                spread,
                speed,
                life,
                scale,
            } => {
                if !(dist > *threshold) {
                    return 0;
                }

                let heading = (ctx.random_int(spread.start, spread.end) as f32).to_radians();
                let speed = ctx.random_int(speed.start, speed.end) as f32;
                let mut velocity = ctx.velocity_at(heading, speed);
                velocity.y = -velocity.y.abs();

                let offset = Vec2::new(
                    ctx.random_int(jitter.start, jitter.end) as f32,
                    ctx.random_int(jitter.start, jitter.end) as f32,
                );

                // Scale moves in half-percent steps.
                let steps = ((scale.end - scale.start) * 200.0).round() as i32;
                let size = scale.start + ctx.random_int(0, steps) as f32 / 200.0;

                let angle = ctx.random_degrees();
                let spin = ctx.random_spin();
                let color = spawn_color(kind, ctx.rng());

                out.push(
                    Particle::new(kind, to + offset, *life)
                        .with_velocity(velocity)
                        .with_rotation(angle, spin)
                        .with_scale(size)
                        .with_color(color),
                );
                1
            }
        }
    }
}

/// Number of trail particles for a movement of `dist` pixels.
///
/// Zero for no movement, otherwise at least one.
#[inline]
pub fn trail_count(dist: f32, spacing: f32) -> u32 {
    if !(dist > 0.0) {
        return 0;
    }
    if !(spacing > 0.0) {
        return 1;
    }
    ((dist / spacing).floor() as u32).max(1)
}
