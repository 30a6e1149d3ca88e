//! The particle value type.
//!
//! Particles live in global desktop coordinates. They are created by the
//! [`Spawner`](crate::spawn::Spawner), advanced by the
//! [`Lifecycle`](crate::lifecycle::Lifecycle) and read by the shape
//! renderers. Nothing else touches them.

use crate::color::Rgb;
use crate::kind::ParticleKind;
use glam::Vec2;

/// Smallest lifetime a particle may be created with.
pub const MIN_LIFE: f32 = 1e-3;

/// One short-lived visual particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Position in global coordinates.
    pub position: Vec2,
    /// Velocity in pixels per second.
    pub velocity: Vec2,
    /// Remaining lifetime in seconds.
    pub life: f32,
    /// Lifetime at creation. Always positive.
    pub max_life: f32,
    pub color: Rgb,
    /// Rotation in radians.
    pub angle: f32,
    /// Radians per second.
    pub rotation_speed: f32,
    /// Current draw scale, shrunk by the fade curve.
    pub scale: f32,
    /// Draw scale at creation.
    pub base_scale: f32,
    pub kind: ParticleKind,
}

impl Particle {
    /// A stationary, unrotated particle with unit scale.
    ///
    /// `life` is clamped to at least [`MIN_LIFE`] so the fade ratio never
    /// divides by zero.
    pub fn new(kind: ParticleKind, position: Vec2, life: f32) -> Self {
        let life = if life.is_finite() { life.max(MIN_LIFE) } else { MIN_LIFE };
        Self {
            position,
            velocity: Vec2::ZERO,
            life,
            max_life: life,
            color: Rgb::WHITE,
            angle: 0.0,
            rotation_speed: 0.0,
            scale: 1.0,
            base_scale: 1.0,
            kind,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Set both the current and the base scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self.base_scale = scale;
        self
    }

    /// Set the initial angle and spin rate.
    pub fn with_rotation(mut self, angle: f32, rotation_speed: f32) -> Self {
        self.angle = angle;
        self.rotation_speed = rotation_speed;
        self
    }

    /// Remaining life as a fraction of the initial life, in `[0, 1]`.
    #[inline]
    pub fn life_ratio(&self) -> f32 {
        (self.life.max(0.0) / self.max_life).min(1.0)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}
