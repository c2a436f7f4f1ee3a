//! Error types for setup, configuration and presentation.
//!
//! Rendering itself cannot fail; only the surrounding plumbing returns
//! `Result`.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// SDL2 reports its failures as plain strings
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid resolution '{0}', expected WxH (e.g. 1920x1080)")]
    InvalidResolution(String),
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::Sdl(message)
    }
}
