use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gestures", inline)]
#[serde(default)]
/// Timing and distance thresholds for gesture recognition.
///
/// Distances are in screen pixels, velocities in px/s.
pub struct GestureOptions {
    /// Hold time before a press becomes a long press.
    #[schemars(title = "Long Press (ms)", range(min = 100, max = 2000))]
    pub long_press_timeout_ms: u64,
    /// Longest gap between a tap's up and the next down for a double tap.
    #[schemars(title = "Double Tap Window (ms)", range(min = 100, max = 1000))]
    pub double_tap_timeout_ms: u64,
    /// Shortest such gap; anything quicker is treated as a bounce.
    #[schemars(skip)]
    pub double_tap_min_time_ms: u64,
    /// Movement allowed before a press stops counting as a tap.
    #[schemars(title = "Touch Slop", range(min = 1.0, max = 64.0), extend("step" = 1.0))]
    pub touch_slop: f32,
    /// Maximum distance between the two downs of a double tap.
    #[schemars(skip)]
    pub double_tap_slop: f32,
    /// Release speed needed for a fling.
    #[schemars(title = "Min Fling Velocity", range(min = 0.0, max = 2000.0), extend("step" = 10.0))]
    pub min_fling_velocity: f32,
    /// Per-axis cap on reported fling speed.
    #[schemars(skip)]
    pub max_fling_velocity: f32,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            long_press_timeout_ms: 500,
            double_tap_timeout_ms: 300,
            double_tap_min_time_ms: 40,
            touch_slop: 8.0,
            double_tap_slop: 100.0,
            min_fling_velocity: 50.0,
            max_fling_velocity: 8000.0,
        }
    }
}
