use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scale", inline)]
#[serde(default)]
/// Zoom range and reset point of the controlled object.
pub struct ScaleOptions {
    /// Scale restored by a double tap.
    #[schemars(title = "Standard Scale", range(min = -50.0, max = 50.0), extend("step" = 0.5))]
    pub standard: f32,
    /// Lowest reachable scale.
    #[schemars(title = "Minimum Scale", range(min = -50.0, max = 50.0), extend("step" = 0.5))]
    pub min: f32,
    /// Highest reachable scale.
    #[schemars(title = "Maximum Scale", range(min = -50.0, max = 50.0), extend("step" = 0.5))]
    pub max: f32,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            standard: -5.0,
            min: -10.0,
            max: -3.0,
        }
    }
}
