use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How inertial spin slows down between frame reads.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DecayMode {
    /// Multiply speed by the damping once per orientation read. Spin-down
    /// rate follows the render frame rate.
    #[default]
    PerFrame,
    /// Scale the damping by elapsed time, measured in reference frames.
    WallClock,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Fling", inline)]
#[serde(default)]
/// Inertial spin parameters.
pub struct FlingOptions {
    /// Fraction of spin speed kept per frame (0 stops at once, 1 spins
    /// forever).
    #[schemars(title = "Damping", range(min = 0.0, max = 1.0), extend("step" = 0.005))]
    pub damping: f64,
    /// Decay clock.
    #[schemars(title = "Decay Mode")]
    pub decay: DecayMode,
    /// Frame rate the damping is calibrated against in wall-clock mode.
    #[schemars(title = "Reference FPS", range(min = 1.0, max = 240.0), extend("step" = 1.0))]
    pub reference_fps: f32,
}

impl Default for FlingOptions {
    fn default() -> Self {
        Self {
            damping: 1.0,
            decay: DecayMode::PerFrame,
            reference_fps: 60.0,
        }
    }
}
