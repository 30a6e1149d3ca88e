//! Packed colors and per-kind color generators.
//!
//! Particle colors are 24-bit RGB packed as `0x00RRGGBB`. The framebuffer
//! stores straight-alpha ARGB packed as `0xAARRGGBB`; [`Rgb::with_alpha`]
//! bridges the two.

use crate::kind::ParticleKind;
use rand::Rng;

/// A packed 24-bit RGB color (`0x00RRGGBB`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Pure white, used when a kind has no generator.
    pub const WHITE: Rgb = Rgb(0xFF_FF_FF);

    /// Pack three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Gray with equal channels.
    #[inline]
    pub const fn gray(shade: u8) -> Self {
        Rgb::new(shade, shade, shade)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// ARGB pixel with the given alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> u32 {
        ((alpha as u32) << 24) | (self.0 & 0x00FF_FFFF)
    }

    /// Fully opaque ARGB pixel.
    #[inline]
    pub const fn opaque(self) -> u32 {
        self.with_alpha(255)
    }
}

/// Split an ARGB pixel into `(a, r, g, b)`.
#[inline]
pub const fn unpack_argb(pixel: u32) -> (u8, u8, u8, u8) {
    (
        (pixel >> 24) as u8,
        (pixel >> 16) as u8,
        (pixel >> 8) as u8,
        pixel as u8,
    )
}

/// Random color for a freshly spawned particle of `kind`.
pub fn spawn_color<R: Rng>(kind: ParticleKind, rng: &mut R) -> Rgb {
    match kind {
        ParticleKind::Hearts => heart_color(rng),
        ParticleKind::Stars => star_color(rng),
        ParticleKind::Fire => ember_color(rng),
        ParticleKind::Sparks => spark_color(rng),
        ParticleKind::Smoke => smoke_color(rng),
        ParticleKind::Sword => sword_color(),
    }
}

/// Pink to purple, with a one-in-five chance of saturated red.
pub fn heart_color<R: Rng>(rng: &mut R) -> Rgb {
    let r = rng.gen_range(200..226);
    let g = rng.gen_range(0..121);
    let b = rng.gen_range(150..=255);

    if rng.gen_range(0..5) == 0 {
        return Rgb::new(255, rng.gen_range(0..60), rng.gen_range(80..120));
    }
    Rgb::new(r, g, b)
}

/// Near white with a yellow cast.
pub fn star_color<R: Rng>(rng: &mut R) -> Rgb {
    Rgb::new(
        rng.gen_range(200..=255),
        rng.gen_range(200..=255),
        rng.gen_range(180..=255),
    )
}

/// Orange to red, no blue.
pub fn ember_color<R: Rng>(rng: &mut R) -> Rgb {
    Rgb::new(rng.gen_range(200..=255), rng.gen_range(50..130), 0)
}

/// Blue-green, no red.
pub fn spark_color<R: Rng>(rng: &mut R) -> Rgb {
    Rgb::new(0, rng.gen_range(100..156), rng.gen_range(200..=255))
}

/// Random mid gray.
pub fn smoke_color<R: Rng>(rng: &mut R) -> Rgb {
    Rgb::gray(rng.gen_range(100..200))
}

/// Swords are always the same mid gray; their parts carry their own colors.
pub fn sword_color() -> Rgb {
    Rgb::gray(100)
}

/// Flamelet fill: one of two orange bands picked per triangle.
pub fn flame_color<R: Rng>(rng: &mut R) -> Rgb {
    let g = if rng.gen_range(0..3) == 0 {
        rng.gen_range(80..180)
    } else {
        rng.gen_range(150..200)
    };
    Rgb::new(255, g, 0)
}
