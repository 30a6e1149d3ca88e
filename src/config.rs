//! JSON configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "kind": "fire", "max_particles": 2000, "seed": 7 }
//! ```

use crate::error::ConfigError;
use crate::kind::ParticleKind;
use crate::lifecycle::{FadeMode, DEFAULT_GRAVITY};
use crate::pool::DEFAULT_CAPACITY;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Settings for a trail simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Kind active at start.
    pub kind: ParticleKind,
    /// Particle cap; spawns beyond it are dropped.
    pub max_particles: usize,
    /// How fading shrinks particles.
    pub fade: FadeMode,
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Target time between frames.
    pub frame_interval_ms: u64,
    /// Downward acceleration in px/s².
    pub gravity: f32,
    /// Framebuffer width in pixels.
    pub width: u32,
    /// Framebuffer height in pixels.
    pub height: u32,
    /// Global position of the framebuffer's top-left pixel.
    pub origin: [i32; 2],
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            kind: ParticleKind::default(),
            max_particles: DEFAULT_CAPACITY,
            fade: FadeMode::default(),
            seed: None,
            frame_interval_ms: 16,
            gravity: DEFAULT_GRAVITY,
            width: 800,
            height: 600,
            origin: [0, 0],
        }
    }
}

impl TrailConfig {
    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_particles == 0 {
            return Err(ConfigError::Invalid("max_particles must be at least 1".into()));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid("frame_interval_ms must be at least 1".into()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "framebuffer size {}x{} is empty",
                self.width, self.height
            )));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::Invalid("gravity must be a finite number".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    #[inline]
    pub fn origin(&self) -> IVec2 {
        IVec2::from_array(self.origin)
    }

    /// Save to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TrailConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
