//! Input handling: touch event types, velocity estimation, and the gesture
//! classifier that turns raw pointer streams into discrete gestures.

/// Platform-agnostic touch events.
pub mod event;
/// Fling / double-tap / long-press recognition.
pub mod gesture;
/// Release-velocity estimation.
pub mod velocity;

pub use event::{TouchAction, TouchEvent};
pub use gesture::{Gesture, GestureClassifier};
pub use velocity::VelocityTracker;
