//! Software rasterization into an ARGB framebuffer.
//!
//! - [`Framebuffer`] - the pixel array plus its placement in global space
//! - [`primitives`] - rotation, Bresenham lines, scanline triangles

mod framebuffer;
pub mod primitives;

pub use framebuffer::Framebuffer;
pub use primitives::{draw_line, fill_flat_triangle, place, rotate};
