//! Explorer settings
//!
//! Defaults reproduce the classic 1920x1080 view with a 250 iteration cap.
//! Any field may be overridden from a JSON file or the command line.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;
pub const DEFAULT_MAX_ITERATIONS: u32 = 250;
pub const DEFAULT_ZOOM: f64 = 150.0;
pub const DEFAULT_PAN_X: f64 = -100.0;
pub const DEFAULT_PAN_Y: f64 = 0.0;
pub const DEFAULT_ZOOM_FACTOR: f64 = 2.0;

/// File picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "mandelzoom.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    /// Iteration cap shared by the escape test and the color mapping
    pub max_iterations: u32,
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    /// Scale applied per click (shift-click always uses 1)
    pub zoom_factor: f64,
    pub vsync: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom: DEFAULT_ZOOM,
            pan_x: DEFAULT_PAN_X,
            pan_y: DEFAULT_PAN_Y,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            vsync: true,
        }
    }
}

impl Config {
    /// Load settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the renderer cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "zoom must be a positive number, got {}",
                self.zoom
            )));
        }
        if !self.pan_x.is_finite() || !self.pan_y.is_finite() {
            return Err(Error::InvalidConfig("pan must be finite".to_string()));
        }
        if !self.zoom_factor.is_finite() || self.zoom_factor < 1.0 {
            return Err(Error::InvalidConfig(format!(
                "zoom_factor must be >= 1, got {}",
                self.zoom_factor
            )));
        }
        Ok(())
    }
}

/// Command line values layered over the file settings
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Explicit settings file; must load when given
    pub config_path: Option<PathBuf>,
    pub resolution: Option<(u32, u32)>,
    pub max_iterations: Option<u32>,
    pub no_vsync: bool,
}

impl Config {
    /// File settings first, then command line overrides.
    ///
    /// Without an explicit path, `default_path` is read if it exists; a
    /// broken default file is logged and replaced by the defaults.
    pub fn resolve(overrides: &Overrides, default_path: impl AsRef<Path>) -> Result<Self> {
        let mut config = match &overrides.config_path {
            Some(path) => Self::load(path)?,
            None => {
                let path = default_path.as_ref();
                if path.exists() {
                    Self::load(path).unwrap_or_else(|e| {
                        warn!("ignoring {}: {}", path.display(), e);
                        Self::default()
                    })
                } else {
                    Self::default()
                }
            },
        };

        if let Some((width, height)) = overrides.resolution {
            config.width = width;
            config.height = height;
        }
        if let Some(iterations) = overrides.max_iterations {
            config.max_iterations = iterations;
        }
        if overrides.no_vsync {
            config.vsync = false;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Parse a `WxH` string such as `1920x1080`
pub fn parse_resolution(s: &str) -> Result<(u32, u32)> {
    let invalid = || Error::InvalidResolution(s.to_string());
    let (w, h) = s.split_once('x').ok_or_else(invalid)?;
    let width = w.trim().parse::<u32>().map_err(|_| invalid())?;
    let height = h.trim().parse::<u32>().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok((width, height))
}
