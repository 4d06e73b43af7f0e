use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::controller::TouchRegion;

/// A rectangular hot zone mapped to a discrete action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct HotZone {
    /// Action applied when a touch lands inside.
    pub region: TouchRegion,
    /// `[x, y, width, height]` in screen pixels.
    pub rect: [f32; 4],
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Regions", inline)]
#[serde(default)]
/// Screen hot zones. Empty means every touch starts a drag.
pub struct RegionOptions {
    /// Zones checked in order; the first containing the touch wins.
    pub zones: Vec<HotZone>,
}
