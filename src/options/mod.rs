//! Centralized controller options with TOML preset support.
//!
//! All tweakable settings (scale range, fling damping and decay, gesture
//! thresholds, hot zones) are consolidated here. Options serialize to/from
//! TOML so hosts can ship presets next to their views.

mod fling;
mod gesture;
mod regions;
mod scale;

use std::path::Path;

pub use fling::{DecayMode, FlingOptions};
pub use gesture::GestureOptions;
pub use regions::{HotZone, RegionOptions};
pub use scale::ScaleOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TouchspinError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[fling]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Zoom range and reset point.
    pub scale: ScaleOptions,
    /// Inertial spin parameters.
    pub fling: FlingOptions,
    /// Gesture recognition thresholds.
    pub gesture: GestureOptions,
    /// Screen hot zones.
    #[schemars(skip)]
    pub regions: RegionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, TouchspinError> {
        toml::from_str(content)
            .map_err(|e| TouchspinError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TouchspinError> {
        let content =
            std::fs::read_to_string(path).map_err(TouchspinError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TouchspinError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TouchspinError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TouchspinError::Io)?;
        }
        std::fs::write(path, content).map_err(TouchspinError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
