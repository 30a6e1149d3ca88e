//! Per-tick particle update rules.
//!
//! Each tick every live particle goes through the same fixed sequence, then
//! expired particles are removed:
//!
//! | Step | Applies to | Rule |
//! |------|------------|------|
//! | 1 | Hearts | `vx *= 1.01`, `vy *= 1.03`, small horizontal drift, `vy -= 5·dt` |
//! | 2 | all | `position += velocity·dt` |
//! | 3 | all but Fire, Hearts | `vy += gravity·dt` |
//! | 4 | all but Fire, Smoke | `angle += rotation_speed·dt` |
//! | 5 | all | `life -= dt` |
//! | 6 | all | shrink `scale` by the fade curve |
//! | 7 | all | drop particles with `life <= 0` |
//!
//! # Fade
//!
//! The fade curve is a cubic ease-out of the remaining life ratio:
//! `1 - (1 - ratio)³`. It is 1 for a fresh particle and 0 at expiry.
//! [`FadeMode`] decides whether it is applied to the spawn-time scale or to
//! the already-shrunk scale of the previous tick.
//!
//! ```ignore
//! let lifecycle = Lifecycle::new().with_fade(FadeMode::Compounding);
//! let removed = lifecycle.step(&mut pool, 1.0 / 60.0, &mut rng);
//! ```

use crate::kind::ParticleKind;
use crate::particle::Particle;
use crate::pool::ParticlePool;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Downward acceleration in pixels per second squared.
pub const DEFAULT_GRAVITY: f32 = 20.0;

/// How the fade curve shrinks a particle's scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeMode {
    /// `scale = base_scale * fade_factor(ratio)`.
    #[default]
    FromBase,
    /// `scale *= fade_factor(ratio)` every tick. Shrinks much faster.
    Compounding,
}

/// Cubic ease-out of the life ratio, clamped to `[0, 1]`.
#[inline]
pub fn fade_factor(ratio: f32) -> f32 {
    let inv = 1.0 - ratio.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// The update rules applied to every particle each tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lifecycle {
    gravity: f32,
    fade: FadeMode,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            fade: FadeMode::default(),
        }
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_fade(mut self, fade: FadeMode) -> Self {
        self.fade = fade;
        self
    }

    #[inline]
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    #[inline]
    pub fn fade(&self) -> FadeMode {
        self.fade
    }

    /// Advance one particle by `dt` seconds. Negative `dt` counts as zero.
    pub fn advance<R: Rng>(&self, p: &mut Particle, dt: f32, rng: &mut R) {
        let dt = dt.max(0.0);

        if p.kind == ParticleKind::Hearts {
            p.velocity.x *= 1.01;
            p.velocity.y *= 1.03;
            p.velocity.x += (rng.gen_range(0..5) - 2) as f32 * 0.05;
            p.velocity.y -= 5.0 * dt;
        }

        p.position += p.velocity * dt;

        if p.kind.feels_gravity() {
            p.velocity.y += self.gravity * dt;
        }
        if p.kind.spins() {
            p.angle += p.rotation_speed * dt;
        }

        p.life -= dt;

        let fade = fade_factor(p.life_ratio());
        p.scale = match self.fade {
            FadeMode::FromBase => p.base_scale * fade,
            FadeMode::Compounding => p.scale * fade,
        };
    }

    /// Advance every particle in `pool`, then cull the expired ones.
    ///
    /// Returns the number of particles removed.
    pub fn step<R: Rng>(&self, pool: &mut ParticlePool, dt: f32, rng: &mut R) -> usize {
        for p in pool.iter_mut() {
            self.advance(p, dt, rng);
        }
        pool.retain_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn test_fade_factor_endpoints_and_monotonic() {
        assert_eq!(fade_factor(0.0), 0.0);
        assert_eq!(fade_factor(1.0), 1.0);
        assert_eq!(fade_factor(-1.0), 0.0);
        assert_eq!(fade_factor(2.0), 1.0);

        let mut prev = 0.0;
        for i in 0..=1000 {
            let f = fade_factor(i as f32 / 1000.0);
            assert!(f >= prev);
            prev = f;
        }
    }

    #[test]
    fn test_gravity_and_integration_order() {
        let lifecycle = Lifecycle::new();
        let mut p = Particle::new(ParticleKind::Stars, Vec2::ZERO, 1.0)
            .with_velocity(Vec2::new(10.0, 0.0));
        lifecycle.advance(&mut p, 0.5, &mut rng());

        // Position uses the velocity from before gravity.
        assert_eq!(p.position, Vec2::new(5.0, 0.0));
        assert_eq!(p.velocity.y, 10.0);
    }

    #[test]
    fn test_fire_ignores_gravity_and_rotation() {
        let lifecycle = Lifecycle::new();
        let mut p = Particle::new(ParticleKind::Fire, Vec2::ZERO, 1.0).with_rotation(0.3, 2.0);
        lifecycle.advance(&mut p, 0.1, &mut rng());
        assert_eq!(p.velocity, Vec2::ZERO);
        assert_eq!(p.angle, 0.3);
    }

    #[test]
    fn test_smoke_falls_but_does_not_spin() {
        let lifecycle = Lifecycle::new();
        let mut p = Particle::new(ParticleKind::Smoke, Vec2::ZERO, 1.0).with_rotation(0.0, 2.0);
        lifecycle.advance(&mut p, 0.1, &mut rng());
        assert!(p.velocity.y > 0.0);
        assert_eq!(p.angle, 0.0);
    }

    #[test]
    fn test_sword_spins() {
        let lifecycle = Lifecycle::new();
        let mut p = Particle::new(ParticleKind::Sword, Vec2::ZERO, 1.0).with_rotation(0.0, 2.0);
        lifecycle.advance(&mut p, 0.25, &mut rng());
        assert!((p.angle - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_hearts_accelerate_and_rise() {
        let lifecycle = Lifecycle::new();
        let mut p = Particle::new(ParticleKind::Hearts, Vec2::ZERO, 0.9)
            .with_velocity(Vec2::new(100.0, -100.0));
        lifecycle.advance(&mut p, 0.1, &mut rng());

        // vy: -100 * 1.03 - 0.5, no gravity.
        assert!((p.velocity.y - (-103.5)).abs() < 1e-3);
        // vx: 101 plus at most 0.1 of drift.
        assert!((p.velocity.x - 101.0).abs() <= 0.1 + 1e-4);
        assert!(p.position.y < 0.0);
    }

    #[test]
    fn test_fade_from_base_tracks_curve() {
        let lifecycle = Lifecycle::new();
        let mut p = Particle::new(ParticleKind::Stars, Vec2::ZERO, 1.0).with_scale(2.0);
        let mut r = rng();
        for _ in 0..5 {
            lifecycle.advance(&mut p, 0.1, &mut r);
        }
        let expected = 2.0 * fade_factor(0.5);
        assert!((p.scale - expected).abs() < 1e-4);
    }

    #[test]
    fn test_compounding_shrinks_faster() {
        let base = Lifecycle::new();
        let compounding = Lifecycle::new().with_fade(FadeMode::Compounding);
        let mut a = Particle::new(ParticleKind::Stars, Vec2::ZERO, 1.0);
        let mut b = a;
        let mut r = rng();
        for _ in 0..5 {
            base.advance(&mut a, 0.1, &mut r);
            compounding.advance(&mut b, 0.1, &mut r);
        }
        assert!(b.scale < a.scale);
    }

    #[test]
    fn test_compounding_multiplies_current_scale() {
        let lifecycle = Lifecycle::new().with_fade(FadeMode::Compounding);
        let mut p = Particle::new(ParticleKind::Stars, Vec2::ZERO, 1.0).with_scale(2.0);
        let mut r = rng();

        let before = p.scale;
        lifecycle.advance(&mut p, 0.25, &mut r);
        let expected = before * fade_factor(p.life / p.max_life);
        assert!((p.scale - expected).abs() < 1e-6);

        let before = p.scale;
        lifecycle.advance(&mut p, 0.25, &mut r);
        let expected = before * fade_factor(0.5);
        assert!((p.scale - expected).abs() < 1e-6);
        assert!((p.scale - 2.0 * fade_factor(0.75) * fade_factor(0.5)).abs() < 1e-5);
        // base_scale is never touched.
        assert_eq!(p.base_scale, 2.0);
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let lifecycle = Lifecycle::new();
        let mut p = Particle::new(ParticleKind::Sparks, Vec2::ZERO, 0.2)
            .with_velocity(Vec2::ONE);
        lifecycle.advance(&mut p, -1.0, &mut rng());
        assert_eq!(p.life, 0.2);
        assert_eq!(p.position, Vec2::ZERO);
    }

    #[test]
    fn test_step_culls_expired() {
        let lifecycle = Lifecycle::new();
        let mut pool = ParticlePool::new(10);
        pool.push(Particle::new(ParticleKind::Sparks, Vec2::ZERO, 0.1));
        pool.push(Particle::new(ParticleKind::Smoke, Vec2::ZERO, 0.5));

        let removed = lifecycle.step(&mut pool, 0.1, &mut rng());
        assert_eq!(removed, 1);
        assert_eq!(pool.len(), 1);
        assert!(pool.iter().all(|p| p.life > 0.0));
    }
}
