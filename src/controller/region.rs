use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::{HotZone, RegionOptions};

/// Screen hot zone that turns a touch-down into a discrete step instead of
/// a drag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TouchRegion {
    /// Scale up by one zone step.
    ZoomIn,
    /// Scale down by one zone step.
    ZoomOut,
    /// Raise fling damping (longer spin).
    SpinIn,
    /// Lower fling damping (shorter spin).
    SpinOut,
}

/// Strategy mapping a touch-down position to a hot zone.
///
/// Any `Send` closure `Fn(Vec2) -> Option<TouchRegion>` works as a region
/// map. Maps must be `Send` so the controller can move to a render thread.
pub trait RegionMap: Send {
    /// Hot zone containing `point`, or `None` for "elsewhere".
    fn classify(&self, point: Vec2) -> Option<TouchRegion>;
}

impl<F> RegionMap for F
where
    F: Fn(Vec2) -> Option<TouchRegion> + Send,
{
    fn classify(&self, point: Vec2) -> Option<TouchRegion> {
        self(point)
    }
}

/// Region map with no active zones; every touch starts a drag.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRegions;

impl RegionMap for NoRegions {
    fn classify(&self, _point: Vec2) -> Option<TouchRegion> {
        None
    }
}

/// Rectangular zones checked in order; first hit wins.
#[derive(Debug, Clone, Default)]
pub struct HotZones {
    zones: Vec<HotZone>,
}

impl HotZones {
    /// Zones from configuration.
    #[must_use]
    pub fn new(zones: Vec<HotZone>) -> Self {
        Self { zones }
    }

    /// Whether no zone is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl From<&RegionOptions> for HotZones {
    fn from(opts: &RegionOptions) -> Self {
        Self::new(opts.zones.clone())
    }
}

impl RegionMap for HotZones {
    fn classify(&self, point: Vec2) -> Option<TouchRegion> {
        self.zones
            .iter()
            .find(|zone| {
                let [x, y, w, h] = zone.rect;
                point.x >= x && point.x < x + w && point.y >= y && point.y < y + h
            })
            .map(|zone| zone.region)
    }
}
