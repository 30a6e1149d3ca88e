//! The ARGB overlay buffer.

use crate::color::unpack_argb;
use crate::error::SnapshotError;
use glam::{IVec2, Vec2};
use std::path::Path;

/// A row-major buffer of packed `0xAARRGGBB` pixels, origin top-left.
///
/// The buffer covers a window of the global coordinate space starting at
/// `origin`; [`to_local`](Self::to_local) maps global positions into it.
/// Every write is bounds checked, out-of-buffer writes are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
    origin: IVec2,
}

impl Framebuffer {
    /// A transparent buffer at the global origin.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize],
            width,
            height,
            origin: IVec2::ZERO,
        }
    }

    /// Place the buffer's top-left corner at `origin` in global space.
    pub fn with_origin(mut self, origin: IVec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn set_origin(&mut self, origin: IVec2) {
        self.origin = origin;
    }

    /// Change the size, clearing every pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width as usize * height as usize, 0);
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn origin(&self) -> IVec2 {
        self.origin
    }

    /// Fill with transparent black.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Whether `(x, y)` is a buffer-local pixel.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Write one pixel. Out-of-buffer coordinates are ignored.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, argb: u32) {
        if self.contains(x, y) {
            let i = self.index(x, y);
            self.pixels[i] = argb;
        }
    }

    /// Read one pixel.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.contains(x, y).then(|| self.pixels[self.index(x, y)])
    }

    /// Buffer-local pixel for a global position.
    ///
    /// Each axis truncates toward zero first, then subtracts the origin.
    #[inline]
    pub fn to_local(&self, global: Vec2) -> IVec2 {
        IVec2::new(global.x as i32, global.y as i32) - self.origin
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.pixels
    }

    /// The pixels as bytes, native endian. On little-endian hosts each
    /// pixel reads B, G, R, A.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels with non-zero alpha.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p >> 24 != 0).count()
    }

    /// Every pixel with non-zero alpha as `(x, y, argb)`.
    pub fn lit_pixels(&self) -> impl Iterator<Item = (i32, i32, u32)> + '_ {
        let width = self.width.max(1) as usize;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, &p)| p >> 24 != 0)
            .map(move |(i, &p)| ((i % width) as i32, (i / width) as i32, p))
    }

    /// Convert to a straight-alpha RGBA image.
    pub fn to_image(&self) -> Result<image::RgbaImage, SnapshotError> {
        let size = SnapshotError::Size {
            width: self.width,
            height: self.height,
        };
        if self.width == 0 || self.height == 0 {
            return Err(size);
        }

        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &pixel in &self.pixels {
            let (a, r, g, b) = unpack_argb(pixel);
            bytes.extend_from_slice(&[r, g, b, a]);
        }
        image::RgbaImage::from_raw(self.width, self.height, bytes).ok_or(size)
    }

    /// Write the buffer as a PNG file, creating parent directories.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        self.to_image()?
            .save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_is_bounds_checked() {
        let mut fb = Framebuffer::new(4, 3);
        fb.put(-1, 0, 0xFF00_0000);
        fb.put(4, 0, 0xFF00_0000);
        fb.put(0, 3, 0xFF00_0000);
        assert_eq!(fb.lit_count(), 0);

        fb.put(3, 2, 0xFF12_3456);
        assert_eq!(fb.get(3, 2), Some(0xFF12_3456));
        assert_eq!(fb.get(4, 2), None);
        assert_eq!(fb.as_slice()[11], 0xFF12_3456);
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(2, 2);
        fb.put(1, 1, 0xFFFF_FFFF);
        fb.clear();
        assert!(fb.as_slice().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_to_local_translates_and_truncates() {
        let fb = Framebuffer::new(10, 10).with_origin(IVec2::new(100, 200));
        assert_eq!(fb.to_local(Vec2::new(105.9, 205.2)), IVec2::new(5, 5));
        assert_eq!(fb.to_local(Vec2::new(99.5, 199.5)), IVec2::new(-1, -1));
    }

    #[test]
    fn test_lit_pixels_coordinates() {
        let mut fb = Framebuffer::new(5, 5);
        fb.put(2, 3, 0x8000_00FF);
        let lit: Vec<_> = fb.lit_pixels().collect();
        assert_eq!(lit, vec![(2, 3, 0x8000_00FF)]);
    }

    #[test]
    fn test_bytes_match_pixels() {
        let mut fb = Framebuffer::new(1, 1);
        fb.put(0, 0, 0x1122_3344);
        assert_eq!(fb.as_bytes(), &0x1122_3344u32.to_ne_bytes());
    }

    #[test]
    fn test_to_image_straight_rgba() {
        let mut fb = Framebuffer::new(2, 1);
        fb.put(1, 0, 0x80FF_8000);
        let img = fb.to_image().unwrap();
        assert_eq!(img.get_pixel(1, 0).0, [0xFF, 0x80, 0x00, 0x80]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_empty_buffer_cannot_export() {
        let fb = Framebuffer::new(0, 8);
        assert!(matches!(fb.to_image(), Err(SnapshotError::Size { .. })));
    }

    #[test]
    fn test_save_png_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frames").join("f0.png");
        let mut fb = Framebuffer::new(3, 3);
        fb.put(1, 1, 0xFFFF_0000);
        fb.save_png(&path).unwrap();

        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back.get_pixel(1, 1).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_resize_clears() {
        let mut fb = Framebuffer::new(2, 2);
        fb.put(0, 0, 0xFFFF_FFFF);
        fb.resize(3, 1);
        assert_eq!(fb.as_slice().len(), 3);
        assert_eq!(fb.lit_count(), 0);
    }
}
