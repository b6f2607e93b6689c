//! Fixed-size RGBA pixel buffer.

use bytemuck::{Pod, Zeroable};

/// One RGBA8 pixel
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

/// W×H grid of RGBA pixels, row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Framebuffer {
    /// Create a fully transparent buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Raw RGBA8 bytes, suitable for texture upload or PNG encoding
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Fill the `size`×`size` block at (x, y), clipped at the right and bottom edges
    pub fn fill_block(&mut self, x: u32, y: u32, size: u32, color: Rgba) {
        let x_end = (x + size).min(self.width);
        let y_end = (y + size).min(self.height);
        for py in y..y_end {
            let start = self.index(x, py);
            let end = start + (x_end - x) as usize;
            self.pixels[start..end].fill(color);
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_count() {
        let fb = Framebuffer::new(240, 282);
        assert_eq!(fb.pixels().len(), 240 * 282);
        assert_eq!(fb.as_bytes().len(), 240 * 282 * 4);
    }

    #[test]
    fn test_fill_block_clips_at_edges() {
        let red = Rgba::new(255, 0, 0, 255);
        let mut fb = Framebuffer::new(4, 4);
        fb.fill_block(3, 3, 3, red);
        assert_eq!(fb.get(3, 3), Some(red));
        assert_eq!(fb.get(2, 3), Some(Rgba::TRANSPARENT));
        assert_eq!(fb.pixels().iter().filter(|&&p| p == red).count(), 1);
    }

    #[test]
    fn test_zero_sized() {
        let fb = Framebuffer::new(0, 10);
        assert!(fb.is_empty());
        assert_eq!(fb.get(0, 0), None);
    }
}
