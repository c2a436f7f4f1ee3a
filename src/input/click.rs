//! Turning window clicks into pan/zoom requests

use crate::display::Modifiers;

/// A pan/zoom request at a raster pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Click {
    pub x: f64,
    pub y: f64,
    /// 1 means re-centre without scaling
    pub factor: f64,
    pub zoom_in: bool,
}

impl Click {
    /// Ctrl zooms out instead of in; shift pans without scaling
    pub fn new(x: f64, y: f64, modifiers: Modifiers, zoom_factor: f64) -> Self {
        Self {
            x,
            y,
            factor: if modifiers.shift { 1.0 } else { zoom_factor },
            zoom_in: !modifiers.ctrl,
        }
    }
}

/// Rescale a window position to raster pixels, rounding to nearest.
///
/// `surface` is the displayed size of the window and `raster` the buffer
/// size. A degenerate surface maps everything to the origin.
pub fn to_raster(x: i32, y: i32, surface: (u32, u32), raster: (u32, u32)) -> (f64, f64) {
    if surface.0 == 0 || surface.1 == 0 {
        return (0.0, 0.0);
    }
    let sx = (f64::from(x) / f64::from(surface.0) * f64::from(raster.0)).round();
    let sy = (f64::from(y) / f64::from(surface.1) * f64::from(raster.1)).round();
    (sx, sy)
}
