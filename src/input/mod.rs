mod click;

pub use click::{to_raster, Click};
