//! # mouse-trails - cursor trail particle effects
//!
//! A small particle engine that follows the mouse pointer and rasterizes its
//! particles in software, straight into an ARGB pixel buffer sized for a
//! transparent desktop overlay.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mouse_trails::prelude::*;
//!
//! let mut sim = Simulation::with_seed(800, 600, 42);
//! sim.select_kind(2); // stars
//!
//! let mut pointer = ScriptedPointer::circle(Vec2::new(400.0, 300.0), 150.0, 64)
//!     .with_speed(8.0)
//!     .looping(true);
//! let mut clock = FrameClock::default().with_fixed_delta(1.0 / 60.0);
//!
//! for _ in 0..120 {
//!     sim.run_frame(&mut pointer, &mut clock);
//! }
//! sim.framebuffer().save_png("stars.png")?;
//! ```
//!
//! ## Core Concepts
//!
//! ### Kinds
//!
//! Exactly one [`ParticleKind`] is active at a time. External menus select
//! kinds by number through [`Simulation::select_kind`]:
//!
//! | id | kind | look |
//! |----|------|------|
//! | 1 | Smoke | soft gray puffs that drift up and fall back |
//! | 2 | Stars | spinning pixel-art stars |
//! | 3 | Fire | flickering orange flamelets |
//! | 4 | Sparks | blue electric arcs |
//! | 5 | Hearts | pink hearts thrown upward |
//! | 6 | Sword | tiny spinning swords |
//!
//! Any other id selects Smoke.
//!
//! ### The frame
//!
//! [`Simulation::tick`] spawns along the pointer's movement, advances every
//! particle, then clears and redraws the [`Framebuffer`]. Particles live in
//! global desktop coordinates; the framebuffer's origin maps them into
//! buffer-local pixels, so a buffer covering a secondary monitor at
//! `(-1920, 0)` works unchanged.
//!
//! ### Randomness
//!
//! Every random draw goes through the simulation's generator. Seed it with
//! [`Simulation::with_seed`] (or `seed` in [`TrailConfig`]) and identical
//! pointer input produces identical frames.
//!
//! ## Cargo features
//!
//! - `viewer` - a winit + wgpu window that shows the framebuffer live
//!   (`trails-viewer` binary)

pub mod color;
pub mod config;
pub mod emitter;
pub mod error;
pub mod input;
pub mod kind;
pub mod lifecycle;
pub mod particle;
pub mod pool;
pub mod raster;
pub mod shapes;
pub mod simulation;
pub mod spawn;
pub mod time;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use color::Rgb;
pub use config::TrailConfig;
pub use emitter::Emitter;
pub use error::{ConfigError, SnapshotError};
pub use glam::{IVec2, Vec2};
pub use input::{FixedPointer, PointerSource, ScriptedPointer};
pub use kind::ParticleKind;
pub use lifecycle::{fade_factor, FadeMode, Lifecycle};
pub use particle::Particle;
pub use pool::ParticlePool;
pub use raster::Framebuffer;
pub use simulation::Simulation;
pub use spawn::{SpawnContext, Spawner};
pub use time::FrameClock;
pub use trails_derive::MenuIds;

#[cfg(feature = "viewer")]
pub use error::ViewerError;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use mouse_trails::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgb;
    pub use crate::config::TrailConfig;
    pub use crate::input::{FixedPointer, PointerSource, ScriptedPointer};
    pub use crate::kind::ParticleKind;
    pub use crate::lifecycle::{FadeMode, Lifecycle};
    pub use crate::particle::Particle;
    pub use crate::raster::Framebuffer;
    pub use crate::simulation::Simulation;
    pub use crate::time::FrameClock;
    pub use crate::MenuIds;
    pub use glam::{IVec2, Vec2};
}
