use crate::rect::Containment;
use serde::{Deserialize, Serialize};

/// Map configuration.
///
/// Every field has a default, so partial JSON or TOML documents load fine.
///
/// # Example
///
/// ```rust
/// use gridmap_types::{Containment, MapConfig};
///
/// let json = r#"{ "containment": "closed" }"#;
/// let config = MapConfig::from_json(json).unwrap();
/// assert_eq!(config.containment, Containment::Closed);
/// assert!(config.prune_empty_columns);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Edge convention used by rectangle queries
    #[serde(default)]
    pub containment: Containment,

    /// Drop a column from the outer index once its last entry is removed.
    /// Kept columns are harmless placeholders and speed up refilling.
    #[serde(default = "MapConfig::default_prune_empty_columns")]
    pub prune_empty_columns: bool,
}

impl MapConfig {
    const fn default_prune_empty_columns() -> bool {
        true
    }

    pub fn with_containment(mut self, containment: Containment) -> Self {
        self.containment = containment;
        self
    }

    pub fn with_prune_empty_columns(mut self, prune: bool) -> Self {
        self.prune_empty_columns = prune;
        self
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            containment: Containment::default(),
            prune_empty_columns: Self::default_prune_empty_columns(),
        }
    }
}
