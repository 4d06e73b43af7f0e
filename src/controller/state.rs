use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::TouchspinError;
use crate::math::Vector3;
use crate::options::ScaleOptions;

/// Divides fling velocity (px/s) into spin speed (radians per frame).
pub const FLING_REDUCTION: f64 = 3000.0;
/// Divides drag length (px) into rotation angle (radians).
pub const DRAG_SLOWING: f32 = 90.0;
/// Finger spacing a pinch must exceed to count.
pub const PINCH_THRESHOLD: f32 = 20.0;
/// Movement a long-press zoom step must exceed.
pub const LONG_ZOOM_THRESHOLD: f32 = 3.0;
/// Scale change per hot-zone tap.
pub const ZONE_ZOOM_STEP: f32 = 0.5;
/// Scale change per long-press zoom step.
pub const LONG_ZOOM_STEP: f32 = 0.1;
/// Damping change per spin hot-zone tap below [`DAMPING_COARSE_FROM`].
pub const DAMPING_STEP_FINE: f64 = 0.015;
/// Damping change per spin hot-zone tap from [`DAMPING_COARSE_FROM`] up.
pub const DAMPING_STEP_COARSE: f64 = 0.02;
/// Damping at which spin hot zones switch to the coarse step.
pub const DAMPING_COARSE_FROM: f64 = 0.9;

/// Exclusive interaction state of the controller.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TouchMode {
    /// No interaction in progress.
    #[default]
    None,
    /// One finger rotating the object.
    Drag,
    /// Two fingers pinching.
    Zoom,
    /// Long press held, vertical motion zooms.
    ZoomLong,
}

/// Validated zoom range and reset point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    standard: f32,
    min: f32,
    max: f32,
}

impl ScaleBounds {
    /// Bounds with `min <= standard <= max`, all finite.
    pub fn new(standard: f32, min: f32, max: f32) -> Result<Self, TouchspinError> {
        let finite = standard.is_finite() && min.is_finite() && max.is_finite();
        if !finite || min > standard || standard > max {
            return Err(TouchspinError::InvalidScaleBounds { standard, min, max });
        }
        Ok(Self { standard, min, max })
    }

    /// Reset target.
    #[must_use]
    pub fn standard(&self) -> f32 {
        self.standard
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Clamp `scale` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, scale: f32) -> f32 {
        scale.clamp(self.min, self.max)
    }
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            standard: -5.0,
            min: -10.0,
            max: -3.0,
        }
    }
}

impl TryFrom<&ScaleOptions> for ScaleBounds {
    type Error = TouchspinError;

    fn try_from(opts: &ScaleOptions) -> Result<Self, Self::Error> {
        Self::new(opts.standard, opts.min, opts.max)
    }
}

/// Start and live end of a one-finger drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragAnchor {
    /// Where the drag began.
    pub start: Vec2,
    /// Latest pointer position.
    pub end: Vec2,
}

impl DragAnchor {
    /// Start a drag at `point` (start and end coincide).
    pub fn begin(&mut self, point: Vec2) {
        self.start = point;
        self.end = point;
    }

    /// Live delta `end - start`.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.end - self.start
    }

    /// Back to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Inertial spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingState {
    /// Unit spin axis (zero when no fling was ever started).
    pub axis: Vector3,
    /// Spin angle per frame in radians; zero means not spinning.
    pub speed: f64,
    damping: f64,
}

impl FlingState {
    /// Idle spin with the given damping (clamped to `[0, 1]`).
    #[must_use]
    pub fn new(damping: f64) -> Self {
        let mut state = Self {
            axis: Vector3::ZERO,
            speed: 0.0,
            damping: 1.0,
        };
        state.set_damping(damping);
        state
    }

    /// Begin spinning from a release velocity in px/s.
    ///
    /// The axis is perpendicular to the swipe, `(-vy, -vx)`, and the speed
    /// is the velocity magnitude over [`FLING_REDUCTION`].
    pub fn start(&mut self, velocity: Vec2) {
        let axis = Vector3::spin_axis(velocity);
        self.speed = f64::from(axis.magnitude()) / FLING_REDUCTION;
        self.axis = axis.normalised();
    }

    /// Stop spinning.
    pub fn stop(&mut self) {
        self.speed = 0.0;
    }

    /// Fraction of speed kept per frame.
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Set damping, clamped to `[0, 1]`. NaN is ignored.
    pub fn set_damping(&mut self, damping: f64) {
        if damping.is_nan() {
            log::warn!("ignoring NaN fling damping");
            return;
        }
        self.damping = damping.clamp(0.0, 1.0);
    }

    /// Whether the object is still spinning.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.speed > 0.0
    }
}

impl Default for FlingState {
    fn default() -> Self {
        Self::new(1.0)
    }
}
