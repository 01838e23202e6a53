//! In-memory raster written by the renderer.

/// RGBA8 image buffer, row-major with (0, 0) at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 4]>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 255]; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let index = self.index(x, y);
        self.pixels[index] = rgba;
    }

    /// Copy a row-major block of pixels into the buffer with its top-left at (x, y).
    pub fn blit(&mut self, x: u32, y: u32, width: u32, block: &[[u8; 4]]) {
        if width == 0 {
            return;
        }
        for (row, chunk) in block.chunks(width as usize).enumerate() {
            let start = self.index(x, y + row as u32);
            self.pixels[start..start + chunk.len()].copy_from_slice(chunk);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let image = ImageBuffer::new(3, 2);
        assert_eq!(image.pixels.len(), 6);
        assert!(image.pixels.iter().all(|p| *p == [0, 0, 0, 255]));
    }

    #[test]
    fn test_row_major_addressing() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, [1, 2, 3, 4]);

        assert_eq!(image.get(2, 1), [1, 2, 3, 4]);
        assert_eq!(image.pixels[5], [1, 2, 3, 4]);
    }

    #[test]
    fn test_blit() {
        let mut image = ImageBuffer::new(4, 4);
        let block = vec![[9, 9, 9, 255]; 4];
        image.blit(1, 2, 2, &block);

        assert_eq!(image.get(1, 2), [9, 9, 9, 255]);
        assert_eq!(image.get(2, 3), [9, 9, 9, 255]);
        assert_eq!(image.get(0, 2), [0, 0, 0, 255]);
        assert_eq!(image.get(3, 3), [0, 0, 0, 255]);
        assert_eq!(image.get(1, 1), [0, 0, 0, 255]);
    }
}
