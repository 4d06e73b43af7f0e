use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Platform-agnostic touch events.
///
/// Hosts translate their native pointer events into [`TouchEvent`] values
/// and feed them, in device order, to
/// [`OrientationController::on_touch`](crate::controller::OrientationController::on_touch).
///
/// # Example
///
/// ```
/// use touchspin::input::{TouchAction, TouchEvent};
///
/// let down = TouchEvent::down(120.0, 300.0, 0);
/// assert_eq!(down.action, TouchAction::Down);
/// let pinch = TouchEvent::pointer_down((100.0, 100.0), (180.0, 160.0), 40);
/// assert_eq!(pinch.spacing(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    /// What happened.
    pub action: TouchAction,
    /// Position of the first pointer, in screen pixels.
    pub primary: Vec2,
    /// Position of the second pointer, if one is down.
    #[serde(default)]
    pub secondary: Option<Vec2>,
    /// Event time in milliseconds on a monotonic host clock.
    pub time_ms: u64,
}

/// Pointer lifecycle stage of a [`TouchEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchAction {
    /// First finger touches the screen.
    Down,
    /// An additional finger touches while others are down.
    PointerDown,
    /// Any pointer moved.
    Move,
    /// Last finger leaves the screen.
    Up,
    /// A finger lifts while at least one other stays down.
    PointerUp,
    /// The host aborted the gesture.
    Cancel,
    /// Pointer left the view bounds.
    Outside,
}

impl TouchEvent {
    /// Single-pointer event.
    #[must_use]
    pub fn new(action: TouchAction, x: f32, y: f32, time_ms: u64) -> Self {
        Self {
            action,
            primary: Vec2::new(x, y),
            secondary: None,
            time_ms,
        }
    }

    /// First finger down.
    #[must_use]
    pub fn down(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(TouchAction::Down, x, y, time_ms)
    }

    /// Single-pointer move.
    #[must_use]
    pub fn moved(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(TouchAction::Move, x, y, time_ms)
    }

    /// Last finger up.
    #[must_use]
    pub fn up(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(TouchAction::Up, x, y, time_ms)
    }

    /// Two-pointer event.
    #[must_use]
    pub fn two_pointer(
        action: TouchAction,
        primary: (f32, f32),
        secondary: (f32, f32),
        time_ms: u64,
    ) -> Self {
        Self {
            action,
            primary: Vec2::from(primary),
            secondary: Some(Vec2::from(secondary)),
            time_ms,
        }
    }

    /// Second finger down.
    #[must_use]
    pub fn pointer_down(
        primary: (f32, f32),
        secondary: (f32, f32),
        time_ms: u64,
    ) -> Self {
        Self::two_pointer(TouchAction::PointerDown, primary, secondary, time_ms)
    }

    /// Two-pointer move.
    #[must_use]
    pub fn pinch_move(
        primary: (f32, f32),
        secondary: (f32, f32),
        time_ms: u64,
    ) -> Self {
        Self::two_pointer(TouchAction::Move, primary, secondary, time_ms)
    }

    /// One of two fingers lifts.
    #[must_use]
    pub fn pointer_up(
        primary: (f32, f32),
        secondary: (f32, f32),
        time_ms: u64,
    ) -> Self {
        Self::two_pointer(TouchAction::PointerUp, primary, secondary, time_ms)
    }

    /// Distance between the first two pointers (zero with a single pointer).
    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.secondary
            .map_or(0.0, |second| self.primary.distance(second))
    }
}
