use super::colorize::colorize;
use super::escape::escape_time;
use super::palette::Palette;
use super::view::ViewState;
use crate::display::PixelBuffer;
use std::time::Instant;
use tracing::debug;

/// Drives the per-pixel pipeline over the whole raster.
///
/// Owns the iteration cap so the escape test and the color mapping can
/// never disagree about it.
pub struct Renderer {
    palette: Palette,
    max_iterations: u32,
}

impl Renderer {
    pub fn new(palette: Palette, max_iterations: u32) -> Self {
        debug_assert!(max_iterations >= 1);
        Self {
            palette,
            max_iterations,
        }
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Overwrite every pixel of `buffer`, row by row
    pub fn render(&self, view: &ViewState, buffer: &mut PixelBuffer) {
        let start = Instant::now();
        let max_iterations = self.max_iterations;

        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let (x0, y0) = view.pixel_to_point(x, y);
                let result = escape_time(x0, y0, max_iterations);
                let color = colorize(result, max_iterations, &self.palette);
                buffer.set_pixel(x, y, color.r, color.g, color.b);
            }
        }

        debug!(
            width = buffer.width(),
            height = buffer.height(),
            max_iterations,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "regenerated image"
        );
    }
}
