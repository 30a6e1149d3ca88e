//! The simulation context and frame orchestrator.
//!
//! [`Simulation`] owns everything one trail effect needs: the active kind,
//! the spawner's pointer tracking, the particle pool, the update rules, the
//! framebuffer and the random generator. One call to [`Simulation::tick`]
//! runs a whole frame:
//!
//! 1. spawn along the pointer's movement since the last tick
//! 2. advance every particle by `dt` and cull the expired ones
//! 3. clear the framebuffer and draw every live particle in spawn order
//!
//! ```ignore
//! let mut sim = Simulation::with_seed(1920, 1080, 42)
//!     .with_origin(IVec2::new(-1920, 0));
//!
//! sim.select_kind(3); // fire
//! let frame = sim.tick(Some(IVec2::new(-1000, 500)), 1.0 / 60.0);
//! compositor.present(frame.as_bytes());
//! ```

use crate::config::TrailConfig;
use crate::error::ConfigError;
use crate::input::PointerSource;
use crate::kind::ParticleKind;
use crate::lifecycle::Lifecycle;
use crate::particle::Particle;
use crate::pool::ParticlePool;
use crate::raster::Framebuffer;
use crate::shapes;
use crate::spawn::Spawner;
use crate::time::FrameClock;
use glam::IVec2;
use log::{info, trace, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A running trail effect.
pub struct Simulation<R: Rng = SmallRng> {
    kind: ParticleKind,
    spawner: Spawner,
    pool: ParticlePool,
    lifecycle: Lifecycle,
    framebuffer: Framebuffer,
    rng: R,
}

impl Simulation<SmallRng> {
    /// A simulation drawing into a `width × height` buffer, seeded from
    /// entropy.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_rng(width, height, SmallRng::from_entropy())
    }

    /// A reproducible simulation: the same seed and inputs give the same
    /// frames.
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        Self::with_rng(width, height, SmallRng::seed_from_u64(seed))
    }

    /// Build from a validated configuration.
    pub fn from_config(config: &TrailConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sim = match config.seed {
            Some(seed) => Self::with_seed(config.width, config.height, seed),
            None => Self::new(config.width, config.height),
        };
        Ok(sim
            .with_origin(config.origin())
            .with_kind(config.kind)
            .with_capacity(config.max_particles)
            .with_lifecycle(
                Lifecycle::new()
                    .with_gravity(config.gravity)
                    .with_fade(config.fade),
            ))
    }
}

impl<R: Rng> Simulation<R> {
    /// A simulation using the given generator for every random draw.
    pub fn with_rng(width: u32, height: u32, rng: R) -> Self {
        Self {
            kind: ParticleKind::default(),
            spawner: Spawner::new(),
            pool: ParticlePool::default(),
            lifecycle: Lifecycle::default(),
            framebuffer: Framebuffer::new(width, height),
            rng,
        }
    }

    /// Place the framebuffer's top-left corner at `origin` in global space.
    pub fn with_origin(mut self, origin: IVec2) -> Self {
        self.framebuffer.set_origin(origin);
        self
    }

    pub fn with_kind(mut self, kind: ParticleKind) -> Self {
        self.kind = kind;
        self
    }

    /// Replace the pool with an empty one holding at most `capacity`
    /// particles.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.pool = ParticlePool::new(capacity);
        self
    }

    pub fn with_lifecycle(mut self, lifecycle: Lifecycle) -> Self {
        self.lifecycle = lifecycle;
        self
    }

    // ========== Kind selection ==========

    /// Select the active kind by menu id. Unknown ids select Smoke.
    ///
    /// Returns the kind now active.
    pub fn select_kind(&mut self, id: u32) -> ParticleKind {
        let kind = ParticleKind::from_id(id);
        if kind.id() != id {
            warn!("unknown particle kind id {}, falling back to {}", id, kind);
        } else {
            info!("selected {} (id {})", kind, id);
        }
        self.kind = kind;
        kind
    }

    pub fn set_kind(&mut self, kind: ParticleKind) {
        info!("selected {} (id {})", kind, kind.id());
        self.kind = kind;
    }

    #[inline]
    pub fn active_kind(&self) -> ParticleKind {
        self.kind
    }

    // ========== Frame stages ==========

    /// Observe the pointer at its global position and spawn along its
    /// movement. Returns the number of particles added.
    pub fn spawn(&mut self, pointer: IVec2) -> usize {
        self.spawner
            .observe(pointer, self.kind, &mut self.rng, &mut self.pool)
    }

    /// Advance every particle by `dt` seconds and cull the expired ones.
    /// Returns the number removed.
    pub fn update(&mut self, dt: f32) -> usize {
        self.lifecycle.step(&mut self.pool, dt, &mut self.rng)
    }

    /// Clear the framebuffer and draw every live particle. Returns the
    /// number drawn; particles anchored off the buffer are skipped.
    pub fn render(&mut self) -> usize {
        self.framebuffer.clear();
        shapes::draw_all(&mut self.framebuffer, self.pool.iter(), &mut self.rng)
    }

    /// Run one full frame: spawn at `pointer` (if any), update by `dt`,
    /// render.
    pub fn tick(&mut self, pointer: Option<IVec2>, dt: f32) -> &Framebuffer {
        let spawned = pointer.map_or(0, |p| self.spawn(p));
        let removed = self.update(dt);
        let drawn = self.render();
        trace!(
            "tick dt={:.4}: +{} -{} live={} drawn={}",
            dt,
            spawned,
            removed,
            self.pool.len(),
            drawn
        );
        &self.framebuffer
    }

    /// Poll `pointer` once and `clock` for the delta, then [`tick`](Self::tick).
    pub fn run_frame<P>(&mut self, pointer: &mut P, clock: &mut FrameClock) -> &Framebuffer
    where
        P: PointerSource + ?Sized,
    {
        let position = pointer.position();
        let dt = clock.tick();
        self.tick(position, dt)
    }

    // ========== State ==========

    /// Live particles in draw order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        self.pool.as_slice()
    }

    #[inline]
    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    #[inline]
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// The last rendered frame.
    #[inline]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Move the framebuffer in global space, e.g. when the desktop layout
    /// changes.
    pub fn set_origin(&mut self, origin: IVec2) {
        self.framebuffer.set_origin(origin);
    }

    /// Resize the framebuffer, clearing it.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.framebuffer.resize(width, height);
    }

    /// Drop every particle and forget the pointer.
    pub fn reset(&mut self) {
        self.pool.clear();
        self.spawner.reset();
        self.framebuffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FixedPointer;
    use crate::lifecycle::FadeMode;

    #[test]
    fn test_select_kind_by_menu_id() {
        let mut sim = Simulation::with_seed(10, 10, 0);
        assert_eq!(sim.active_kind(), ParticleKind::Smoke);
        assert_eq!(sim.select_kind(3), ParticleKind::Fire);
        assert_eq!(sim.active_kind(), ParticleKind::Fire);
        assert_eq!(sim.select_kind(99), ParticleKind::Smoke);
        assert_eq!(sim.active_kind(), ParticleKind::Smoke);
    }

    #[test]
    fn test_first_tick_spawns_nothing() {
        let mut sim = Simulation::with_seed(100, 100, 1).with_kind(ParticleKind::Stars);
        sim.tick(Some(IVec2::new(50, 50)), 0.016);
        assert!(sim.particles().is_empty());
        assert_eq!(sim.framebuffer().lit_count(), 0);
    }

    #[test]
    fn test_tick_spawns_updates_and_renders() {
        let mut sim = Simulation::with_seed(200, 200, 2).with_kind(ParticleKind::Stars);
        sim.tick(Some(IVec2::new(50, 100)), 0.016);
        let frame = sim.tick(Some(IVec2::new(150, 100)), 0.016);
        assert!(frame.lit_count() > 0);
        assert_eq!(sim.particles().len(), 10);
    }

    #[test]
    fn test_no_pointer_keeps_tracking() {
        let mut sim = Simulation::with_seed(100, 100, 3).with_kind(ParticleKind::Fire);
        sim.tick(Some(IVec2::new(10, 10)), 0.0);
        sim.tick(None, 0.0);
        sim.tick(Some(IVec2::new(30, 10)), 0.0);
        assert_eq!(sim.particles().len(), 5);
    }

    #[test]
    fn test_capacity_caps_particles() {
        let mut sim = Simulation::with_seed(100, 100, 4)
            .with_kind(ParticleKind::Sparks)
            .with_capacity(8);
        sim.tick(Some(IVec2::ZERO), 0.0);
        sim.tick(Some(IVec2::new(90, 0)), 0.0);
        assert_eq!(sim.particles().len(), 8);
        assert!(sim.pool().is_saturated());
    }

    #[test]
    fn test_from_config() {
        let config = TrailConfig {
            kind: ParticleKind::Hearts,
            seed: Some(9),
            fade: FadeMode::Compounding,
            width: 64,
            height: 32,
            origin: [10, 20],
            ..Default::default()
        };
        let sim = Simulation::from_config(&config).unwrap();
        assert_eq!(sim.active_kind(), ParticleKind::Hearts);
        assert_eq!(sim.framebuffer().width(), 64);
        assert_eq!(sim.framebuffer().origin(), IVec2::new(10, 20));
        assert_eq!(sim.lifecycle().fade(), FadeMode::Compounding);
        assert_eq!(sim.pool().capacity(), 5000);

        let bad = TrailConfig {
            width: 0,
            ..Default::default()
        };
        assert!(Simulation::from_config(&bad).is_err());
    }

    #[test]
    fn test_run_frame_with_fixed_clock() {
        let mut sim = Simulation::with_seed(100, 100, 5).with_kind(ParticleKind::Smoke);
        let mut clock = FrameClock::default().with_fixed_delta(0.01);
        let mut pointer = FixedPointer::at(IVec2::new(20, 50));
        sim.run_frame(&mut pointer, &mut clock);
        pointer.move_to(IVec2::new(60, 50));
        sim.run_frame(&mut pointer, &mut clock);
        assert_eq!(sim.particles().len(), 4);
        assert_eq!(clock.frame(), 2);
    }

    #[test]
    fn test_same_seed_same_frames() {
        let run = |seed| {
            let mut sim = Simulation::with_seed(120, 120, seed).with_kind(ParticleKind::Sparks);
            for i in 0..10 {
                sim.tick(Some(IVec2::new(10 + i * 9, 60)), 1.0 / 60.0);
            }
            sim.framebuffer().clone()
        };
        assert_eq!(run(77), run(77));
    }

    #[test]
    fn test_reset() {
        let mut sim = Simulation::with_seed(100, 100, 6).with_kind(ParticleKind::Fire);
        sim.tick(Some(IVec2::ZERO), 0.0);
        sim.tick(Some(IVec2::new(40, 40)), 0.0);
        assert!(!sim.particles().is_empty());
        sim.reset();
        assert!(sim.particles().is_empty());
        sim.tick(Some(IVec2::new(80, 80)), 0.0);
        assert!(sim.particles().is_empty());
    }
}
