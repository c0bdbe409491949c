//! Error types for gridmap.
//!
//! The container operations themselves are total and never return these;
//! errors only come from building rectangles and loading configuration.

use gridmap_types::RectError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridMapError {
    #[error("Invalid rectangle: {0}")]
    InvalidRect(#[from] RectError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "toml")]
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedConfigFormat(String),
}

pub type Result<T> = std::result::Result<T, GridMapError>;
