//! Pan/zoom state and the pixel -> plane mapping
//!
//! A pixel (x, y) maps to ((x + origin_x + pan_x) / zoom,
//! (y + origin_y + pan_y) / zoom). The origin offsets centre the raster on
//! the plane origin; pan is kept in zoomed pixel units, so every zoom step
//! rescales it along with `zoom`.

/// Current viewport onto the complex plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Pixels per plane unit, always > 0
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    /// -width / 2, fixed for the raster's lifetime
    pub origin_x: f64,
    /// -height / 2, fixed for the raster's lifetime
    pub origin_y: f64,
}

impl ViewState {
    pub fn new(width: u32, height: u32, zoom: f64, pan_x: f64, pan_y: f64) -> Self {
        debug_assert!(zoom > 0.0, "zoom must be positive, got {}", zoom);
        Self {
            zoom,
            pan_x,
            pan_y,
            origin_x: -f64::from(width) / 2.0,
            origin_y: -f64::from(height) / 2.0,
        }
    }

    /// Map a raster pixel to plane coordinates
    #[inline]
    pub fn pixel_to_point(&self, x: u32, y: u32) -> (f64, f64) {
        (
            (f64::from(x) + self.origin_x + self.pan_x) / self.zoom,
            (f64::from(y) + self.origin_y + self.pan_y) / self.zoom,
        )
    }

    /// Re-centre on pixel (x, y), scaling by `factor` in or out.
    ///
    /// With `factor == 1` this is a pure pan. Zoom-out is only the inverse
    /// of zoom-in when it is applied at the point the zoom-in moved to the
    /// centre; other click positions shift the view in screen space.
    ///
    /// Returns false and leaves the view untouched when the new zoom would
    /// underflow or overflow f64, so `zoom` stays positive and finite.
    pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64, zoom_in: bool) -> bool {
        let dx = x + self.origin_x + self.pan_x;
        let dy = y + self.origin_y + self.pan_y;

        let (zoom, pan_x, pan_y) = if zoom_in {
            (self.zoom * factor, factor * dx, factor * dy)
        } else {
            (self.zoom / factor, dx / factor, dy / factor)
        };
        if !zoom.is_normal() || !pan_x.is_finite() || !pan_y.is_finite() {
            return false;
        }

        self.zoom = zoom;
        self.pan_x = pan_x;
        self.pan_y = pan_y;
        true
    }

    /// True once adjacent pixels can no longer be told apart.
    ///
    /// The mapping adds a one-pixel step to `origin + pan`; when that sum is
    /// so large that the step falls below its f64 resolution, neighbouring
    /// pixels collapse onto the same plane point and the image bands. A
    /// zoom so small that the raster edges map to infinity counts too.
    pub fn precision_exhausted(&self) -> bool {
        if !self.zoom.is_normal() {
            return true;
        }
        let magnitude = (self.origin_x + self.pan_x)
            .abs()
            .max((self.origin_y + self.pan_y).abs());
        let reach = (self.origin_x.abs() + self.pan_x.abs())
            .max(self.origin_y.abs() + self.pan_y.abs());
        magnitude * f64::EPSILON >= 0.5 || !(reach / self.zoom).is_finite()
    }
}
