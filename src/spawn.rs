//! Pointer tracking and spawn-time randomness.
//!
//! [`Spawner`] watches the pointer from tick to tick and turns each movement
//! into a burst of new particles. The shape of the burst comes from the
//! active kind's [`Emitter`]; the random draws go through a [`SpawnContext`].
//!
//! ```ignore
//! let mut spawner = Spawner::new();
//! let mut pool = ParticlePool::new(5000);
//!
//! spawner.observe(IVec2::new(100, 100), ParticleKind::Fire, &mut rng, &mut pool); // 0, first sighting
//! spawner.observe(IVec2::new(120, 100), ParticleKind::Fire, &mut rng, &mut pool); // 5
//! ```

use crate::emitter::Emitter;
use crate::kind::ParticleKind;
use crate::particle::Particle;
use crate::pool::ParticlePool;
use glam::{IVec2, Vec2};
use log::debug;
use rand::Rng;

/// Random helpers handed to emitters while they build a burst.
///
/// Integer helpers mirror the modulo-style ranges the trail effects were
/// tuned with: [`random_int`](Self::random_int) is half open, so
/// `random_int(25, 55)` yields `25 + [0, 30)`.
pub struct SpawnContext<'a, R> {
    /// Index of the particle being spawned within the burst.
    pub index: u32,
    /// Number of particles in the burst.
    pub count: u32,
    rng: &'a mut R,
}

impl<'a, R: Rng> SpawnContext<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { index: 0, count: 1, rng }
    }

    /// Move on to particle `index` of `count`.
    #[inline]
    pub fn at(&mut self, index: u32, count: u32) -> &mut Self {
        self.index = index;
        self.count = count.max(1);
        self
    }

    /// Interpolation parameter for the current particle, strictly inside
    /// `(0, 1)`: `(index + 1) / (count + 1)`.
    #[inline]
    pub fn progress(&self) -> f32 {
        (self.index + 1) as f32 / (self.count + 1) as f32
    }

    /// Direct access to the generator, for the color generators.
    #[inline]
    pub fn rng(&mut self) -> &mut R {
        &mut *self.rng
    }

    // ========== Random primitives ==========

    /// Random f32 in `[0, 1)`.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in `[min, max)`. Returns `min` for an empty range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Random i32 in `[min, max)`. Returns `min` for an empty range.
    #[inline]
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Random whole-degree angle in `[0°, 360°)`, returned in radians.
    #[inline]
    pub fn random_degrees(&mut self) -> f32 {
        (self.random_int(0, 360) as f32).to_radians()
    }

    /// Random spin rate in `[-3, 3]` rad/s, in steps of 0.01.
    #[inline]
    pub fn random_spin(&mut self) -> f32 {
        self.random_int(-300, 301) as f32 / 100.0
    }

    /// True with probability `1 / n`.
    #[inline]
    pub fn one_in(&mut self, n: u32) -> bool {
        n <= 1 || self.rng.gen_range(0..n) == 0
    }

    // ========== Velocity helpers ==========

    /// Velocity of magnitude `speed` pointing along `angle` (radians,
    /// screen space, y down).
    #[inline]
    pub fn velocity_at(&self, angle: f32, speed: f32) -> Vec2 {
        Vec2::from_angle(angle) * speed
    }
}

/// Tracks the last pointer position and emits particles as it moves.
#[derive(Debug, Default, Clone)]
pub struct Spawner {
    last: Option<IVec2>,
    scratch: Vec<Particle>,
}

impl Spawner {
    /// A spawner that has not seen the pointer yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last observed pointer position, if any.
    #[inline]
    pub fn last_position(&self) -> Option<IVec2> {
        self.last
    }

    /// Forget the tracked position. The next observation emits nothing.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Observe the pointer at `pointer` and append this tick's burst to
    /// `pool`.
    ///
    /// The first observation only records the position. The tracked position
    /// is always updated, even when nothing is emitted or the pool is full.
    /// Returns the number of particles the pool accepted.
    pub fn observe<R: Rng>(
        &mut self,
        pointer: IVec2,
        kind: ParticleKind,
        rng: &mut R,
        pool: &mut ParticlePool,
    ) -> usize {
        let Some(last) = self.last.replace(pointer) else {
            return 0;
        };

        let from = last.as_vec2();
        let to = pointer.as_vec2();
        let emitted = Emitter::for_kind(kind).emit(kind, from, to, rng, &mut self.scratch);
        if emitted == 0 {
            return 0;
        }

        let accepted = pool.extend(self.scratch.drain(..));
        debug!(
            "{} burst: {} emitted, {} accepted over {:.1}px",
            kind,
            emitted,
            accepted,
            from.distance(to)
        );
        accepted
    }
}
