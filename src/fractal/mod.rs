//! Escape-time Mandelbrot rendering
//!
//! Per pixel the pipeline is: [`ViewState::pixel_to_point`] ->
//! `escape_time` -> `colorize` -> pixel buffer. [`Renderer`] drives it over
//! the whole raster.

mod colorize;
mod escape;
mod palette;
mod renderer;
mod view;

pub use palette::Palette;
pub use renderer::Renderer;
pub use view::ViewState;
