//! Map builder for flexible configuration
//!
//! Configuration can come from a `MapConfig` value, from a JSON or TOML file,
//! or from individual setters. Setters always win over the base config.

use crate::error::{GridMapError, Result};
use crate::map::SpatialMap;
use gridmap_types::{Containment, MapConfig, Scalar};
use std::path::{Path, PathBuf};

/// Builder for [`SpatialMap`].
#[derive(Debug, Default)]
pub struct MapBuilder {
    config: MapConfig,
    config_path: Option<PathBuf>,
    containment: Option<Containment>,
    prune_empty_columns: Option<bool>,
}

impl MapBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base configuration. Ignored when a config file is given.
    pub fn config(mut self, config: MapConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the base configuration from a file when building. The file
    /// replaces any config passed to [`MapBuilder::config`]. The format is
    /// picked from the extension: `.json`, or `.toml` with the `toml` feature.
    pub fn config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn containment(mut self, containment: Containment) -> Self {
        self.containment = Some(containment);
        self
    }

    pub fn prune_empty_columns(mut self, prune: bool) -> Self {
        self.prune_empty_columns = Some(prune);
        self
    }

    /// Build the map, reading the config file first if one was given.
    pub fn build<V, T: Scalar>(self) -> Result<SpatialMap<V, T>> {
        let mut config = match &self.config_path {
            Some(path) => {
                if self.config != MapConfig::default() {
                    log::debug!(
                        "Config file {} replaces the base config passed to the builder",
                        path.display()
                    );
                }
                load_config(path)?
            }
            None => self.config,
        };

        if let Some(containment) = self.containment {
            config.containment = containment;
        }
        if let Some(prune) = self.prune_empty_columns {
            config.prune_empty_columns = prune;
        }

        log::debug!(
            "Building spatial map: containment={:?}, prune_empty_columns={}",
            config.containment,
            config.prune_empty_columns
        );
        Ok(SpatialMap::with_config(config))
    }
}

fn load_config(path: &Path) -> Result<MapConfig> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => {
            let text = std::fs::read_to_string(path)?;
            Ok(MapConfig::from_json(&text)?)
        }
        #[cfg(feature = "toml")]
        Some("toml") => {
            let text = std::fs::read_to_string(path)?;
            Ok(MapConfig::from_toml(&text)?)
        }
        #[cfg(not(feature = "toml"))]
        Some("toml") => Err(GridMapError::UnsupportedConfigFormat(
            "toml (enable the `toml` feature)".to_string(),
        )),
        other => Err(GridMapError::UnsupportedConfigFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}
