// ============================================================================
// Utility Functions
// ============================================================================

/// Write an opaque pixel in R,G,B,A byte order
#[inline]
fn write_pixel(dest: &mut [u8], r: u8, g: u8, b: u8) {
    dest[0] = r;
    dest[1] = g;
    dest[2] = b;
    dest[3] = 255;
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// Row-major RGBA raster, four bytes per pixel.
///
/// Allocated once at startup and overwritten in place on every
/// regeneration; it is never resized.
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a buffer of the given resolution, cleared to transparent black
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row, as SDL expects for texture uploads
    #[inline]
    pub fn pitch(&self) -> usize {
        self.width as usize * 4
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Byte offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Set a single opaque pixel (bounds checked)
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x, y);
            write_pixel(&mut self.pixels[idx..idx + 4], r, g, b);
        }
    }

    /// Read back a pixel as (r, g, b, a)
    #[cfg(test)]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let idx = self.pixel_index(x, y);
        let p = &self.pixels[idx..idx + 4];
        Some((p[0], p[1], p[2], p[3]))
    }

    /// Raw pixel bytes for presentation
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}
