//! Bounded storage for live particles.

use crate::particle::Particle;
use log::{debug, warn};

/// Default particle cap.
pub const DEFAULT_CAPACITY: usize = 5000;

/// The live particle collection.
///
/// Particles are kept in spawn order, which is also draw order. When the pool
/// is full, new particles are dropped; live ones are never evicted.
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    capacity: usize,
    saturated: bool,
}

impl ParticlePool {
    /// An empty pool holding at most `capacity` particles.
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: Vec::new(),
            capacity,
            saturated: false,
        }
    }

    /// Append one particle. Returns `false` if the pool is full.
    pub fn push(&mut self, particle: Particle) -> bool {
        if self.particles.len() >= self.capacity {
            self.note_saturated();
            return false;
        }
        self.particles.push(particle);
        true
    }

    /// Append particles until the pool is full. Returns how many were kept.
    pub fn extend<I: IntoIterator<Item = Particle>>(&mut self, particles: I) -> usize {
        let room = self.capacity.saturating_sub(self.particles.len());
        let before = self.particles.len();
        let mut offered = 0usize;
        for particle in particles {
            offered += 1;
            if offered <= room {
                self.particles.push(particle);
            }
        }
        if offered > room {
            self.note_saturated();
        }
        self.particles.len() - before
    }

    /// Drop every particle whose life has run out. Returns how many went.
    pub fn retain_alive(&mut self) -> usize {
        let before = self.particles.len();
        self.particles.retain(Particle::is_alive);
        let removed = before - self.particles.len();

        if removed > 0 {
            debug!("culled {} expired particles, {} live", removed, self.particles.len());
        }
        if self.saturated && self.particles.len() < self.capacity {
            self.saturated = false;
        }
        removed
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.saturated = false;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether spawns were rejected since the pool last had room.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    #[inline]
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    /// Warn once per saturation episode.
    fn note_saturated(&mut self) {
        if !self.saturated {
            warn!(
                "particle pool full ({} particles), dropping new spawns",
                self.capacity
            );
            self.saturated = true;
        }
    }
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<'a> IntoIterator for &'a ParticlePool {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
