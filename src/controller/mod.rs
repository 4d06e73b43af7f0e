//! Touch-driven orientation control.
//!
//! Turns a touch stream into a unit-quaternion rotation and a bounded scale:
//! drag to rotate, pinch or long-press to zoom, double tap to reset, fling to
//! spin with damping.

/// Long-press zoom hint requests.
pub mod hint;
/// The touch state machine and per-frame orientation read.
pub mod orientation;
/// Hot-zone classification of touch-down positions.
pub mod region;
/// Interaction mode, drag, fling and scale-bound state.
pub mod state;

pub use hint::ZoomHint;
pub use orientation::{drag_rotation, Orientation, OrientationController};
pub use region::{HotZones, NoRegions, RegionMap, TouchRegion};
pub use state::{DragAnchor, FlingState, ScaleBounds, TouchMode};
