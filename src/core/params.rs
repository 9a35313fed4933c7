use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::naming::StationTable;
use crate::error::{Error, Result};
use crate::types::OutputFormat;

/// Preparation parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepareParams {
    /// Serialization of the written document
    pub format: OutputFormat,
    /// Emit `extent.center_dt` (set to the window start)
    pub center_dt: bool,
    /// Ground-station lookup for folder labels
    pub stations: StationTable,
}

impl Default for PrepareParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Yaml,
            center_dt: false,
            stations: StationTable::default(),
        }
    }
}

impl PrepareParams {
    /// Load parameters from a `.json` file, or YAML for any other extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let params = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.stations.is_empty() {
            return Err(Error::Config("station table is empty".to_string()));
        }
        Ok(())
    }
}
