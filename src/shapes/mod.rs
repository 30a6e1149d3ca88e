//! Per-kind shape renderers.
//!
//! Every particle is drawn by exactly one renderer, picked by its kind:
//!
//! | Kind | Renderer | Look |
//! |------|----------|------|
//! | Hearts | [`masked::draw_mask`] with [`masks::HEART`] | opaque pixel-art heart |
//! | Stars | [`masked::draw_mask`] with [`masks::STAR`] | opaque pixel-art star |
//! | Fire | [`fire::draw_fire`] | flickering flamelets |
//! | Sparks | [`sparks::draw_sparks`] | jagged arcs |
//! | Smoke | [`smoke::draw_smoke`] | soft translucent puff |
//! | Sword | [`sword::draw_sword`] | four-part composite |
//!
//! Renderers overwrite pixels; there is no blending between particles, so the
//! particle drawn last wins wherever shapes overlap.

pub mod fire;
pub mod masked;
pub mod masks;
pub mod smoke;
pub mod sparks;
pub mod sword;

use crate::color::Rgb;
use crate::kind::ParticleKind;
use crate::particle::Particle;
use crate::raster::Framebuffer;
use glam::IVec2;
use rand::Rng;

/// What a renderer needs to know about a particle, in buffer-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Integer anchor pixel.
    pub anchor: IVec2,
    pub scale: f32,
    pub angle: f32,
    /// Remaining life in seconds.
    pub life: f32,
    pub color: Rgb,
}

impl Pose {
    /// The pose of `p` inside `fb`, or `None` when its anchor lies outside
    /// the buffer.
    pub fn of(p: &Particle, fb: &Framebuffer) -> Option<Pose> {
        let anchor = fb.to_local(p.position);
        fb.contains(anchor.x, anchor.y).then_some(Pose {
            anchor,
            scale: p.scale,
            angle: p.angle,
            life: p.life,
            color: p.color,
        })
    }
}

/// Draw one particle. Returns `false` if it was culled for lying off the
/// buffer.
pub fn draw<R: Rng>(fb: &mut Framebuffer, p: &Particle, rng: &mut R) -> bool {
    let Some(pose) = Pose::of(p, fb) else {
        return false;
    };

    match p.kind {
        ParticleKind::Hearts => {
            masked::draw_mask(fb, pose.anchor, &masks::HEART, pose.scale, pose.angle, pose.color.opaque())
        }
        ParticleKind::Stars => {
            masked::draw_mask(fb, pose.anchor, &masks::STAR, pose.scale, pose.angle, pose.color.opaque())
        }
        ParticleKind::Fire => {
            fire::draw_fire(fb, &pose, rng);
        }
        ParticleKind::Sparks => sparks::draw_sparks(fb, &pose, rng),
        ParticleKind::Smoke => smoke::draw_smoke(fb, &pose, rng),
        ParticleKind::Sword => sword::draw_sword(fb, &pose),
    }
    true
}

/// Draw `particles` in order on top of whatever `fb` holds. Returns how many
/// were drawn.
pub fn draw_all<'a, R, I>(fb: &mut Framebuffer, particles: I, rng: &mut R) -> usize
where
    R: Rng,
    I: IntoIterator<Item = &'a Particle>,
{
    let mut drawn = 0;
    for p in particles {
        if draw(fb, p, rng) {
            drawn += 1;
        }
    }
    drawn
}
