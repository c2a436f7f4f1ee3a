//! Click-driven pan/zoom over a single, reused pixel buffer

use crate::config::Config;
use crate::display::PixelBuffer;
use crate::fractal::{Palette, Renderer, ViewState};
use crate::input::Click;
use tracing::{info, warn};

pub struct Explorer {
    initial_view: ViewState,
    view: ViewState,
    renderer: Renderer,
    buffer: PixelBuffer,
}

impl Explorer {
    /// Build the palette, allocate the buffer and render the first frame
    pub fn new(config: &Config) -> Self {
        let view = ViewState::new(
            config.width,
            config.height,
            config.zoom,
            config.pan_x,
            config.pan_y,
        );
        let mut explorer = Self {
            initial_view: view,
            view,
            renderer: Renderer::new(Palette::generate(), config.max_iterations),
            buffer: PixelBuffer::with_size(config.width, config.height),
        };
        explorer.regenerate();
        explorer
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn max_iterations(&self) -> u32 {
        self.renderer.max_iterations()
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Apply a pan/zoom request, then redraw synchronously
    pub fn click(&mut self, click: Click) {
        if !self.view.zoom_at(click.x, click.y, click.factor, click.zoom_in) {
            warn!(
                zoom = self.view.zoom,
                factor = click.factor,
                "zoom would leave the f64 range, click ignored"
            );
            return;
        }

        info!(
            x = click.x,
            y = click.y,
            zoom = self.view.zoom,
            pan_x = self.view.pan_x,
            pan_y = self.view.pan_y,
            "{}",
            match (click.zoom_in, click.factor == 1.0) {
                (_, true) => "pan",
                (true, false) => "zoom in",
                (false, false) => "zoom out",
            }
        );

        if self.view.precision_exhausted() {
            warn!(
                zoom = self.view.zoom,
                "f64 precision exhausted, adjacent pixels now share plane points"
            );
        }

        self.regenerate();
    }

    /// Return to the startup view
    pub fn reset(&mut self) {
        self.view = self.initial_view;
        info!(zoom = self.view.zoom, "view reset");
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.renderer.render(&self.view, &mut self.buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Modifiers;

    fn small_config() -> Config {
        Config {
            width: 4,
            height: 4,
            max_iterations: 10,
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            ..Config::default()
        }
    }

    #[test]
    fn test_small_raster_end_to_end() {
        let explorer = Explorer::new(&small_config());
        let bytes = explorer.buffer().as_bytes();
        assert_eq!(bytes.len(), 4 * 4 * 4);
        assert!(bytes.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_centre_click_keeps_point_fixed() {
        let config = Config {
            width: 64,
            height: 36,
            max_iterations: 40,
            zoom: 10.0,
            pan_x: -5.0,
            pan_y: 0.0,
            ..Config::default()
        };
        let mut explorer = Explorer::new(&config);
        let before = explorer.view().pixel_to_point(32, 18);

        explorer.click(Click::new(32.0, 18.0, Modifiers::default(), 2.0));

        assert_eq!(explorer.view().zoom, 20.0);
        let after = explorer.view().pixel_to_point(32, 18);
        assert!((before.0 - after.0).abs() < 1e-12);
        assert!((before.1 - after.1).abs() < 1e-12);
    }

    #[test]
    fn test_centre_pixel_color_survives_centre_zoom() {
        let config = Config {
            width: 64,
            height: 36,
            max_iterations: 40,
            zoom: 10.0,
            pan_x: -5.0,
            pan_y: 0.0,
            ..Config::default()
        };
        let mut explorer = Explorer::new(&config);
        let before = explorer.buffer().get_pixel(32, 18);
        explorer.click(Click::new(32.0, 18.0, Modifiers::default(), 2.0));
        assert_eq!(explorer.buffer().get_pixel(32, 18), before);
    }

    #[test]
    fn test_zoom_in_out_round_trip() {
        let config = Config {
            width: 32,
            height: 32,
            ..small_config()
        };
        let mut explorer = Explorer::new(&config);
        let start = *explorer.view();
        let first = explorer.buffer().as_bytes().to_vec();

        explorer.click(Click::new(16.0, 16.0, Modifiers::default(), 2.0));
        let ctrl = Modifiers {
            ctrl: true,
            shift: false,
        };
        explorer.click(Click::new(16.0, 16.0, ctrl, 2.0));

        assert_eq!(*explorer.view(), start);
        assert_eq!(explorer.buffer().as_bytes(), first.as_slice());
    }

    #[test]
    fn test_shift_click_pans() {
        let config = Config {
            width: 32,
            height: 32,
            ..small_config()
        };
        let mut explorer = Explorer::new(&config);
        let shift = Modifiers {
            ctrl: false,
            shift: true,
        };
        explorer.click(Click::new(20.0, 16.0, shift, 2.0));
        assert_eq!(explorer.view().zoom, 1.0);
        assert_eq!((explorer.view().pan_x, explorer.view().pan_y), (4.0, 0.0));
    }

    #[test]
    fn test_click_past_f64_range_keeps_view() {
        let config = Config {
            zoom: f64::MIN_POSITIVE,
            ..small_config()
        };
        let mut explorer = Explorer::new(&config);
        let start = *explorer.view();
        let ctrl = Modifiers {
            ctrl: true,
            shift: false,
        };
        explorer.click(Click::new(2.0, 2.0, ctrl, 2.0));
        assert_eq!(*explorer.view(), start);
        assert!(explorer.view().zoom > 0.0);
        assert!(explorer.buffer().as_bytes().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_reset_restores_initial_view() {
        let mut explorer = Explorer::new(&small_config());
        let start = *explorer.view();
        let first = explorer.buffer().as_bytes().to_vec();
        explorer.click(Click::new(1.0, 3.0, Modifiers::default(), 2.0));
        explorer.click(Click::new(0.0, 0.0, Modifiers::default(), 2.0));
        explorer.reset();
        assert_eq!(*explorer.view(), start);
        assert_eq!(explorer.buffer().as_bytes(), first.as_slice());
    }
}
