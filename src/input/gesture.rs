//! Recognizes high-level gestures from the raw touch stream.
//!
//! The classifier sees every [`TouchEvent`] before the orientation state
//! machine does and reports discrete [`Gesture`]s: fling, double tap,
//! confirmed single tap, and long press. It never touches orientation state
//! itself; the controller decides what each gesture means.
//!
//! There are no timers. Long-press and single-tap timeouts are evaluated
//! against event timestamps whenever an event arrives or the host calls
//! [`GestureClassifier::poll`].

use glam::Vec2;

use super::event::{TouchAction, TouchEvent};
use super::velocity::VelocityTracker;
use crate::options::GestureOptions;

/// A recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Pointer released while moving fast enough.
    Fling {
        /// Release velocity in px/s.
        velocity: Vec2,
    },
    /// Second tap landed close to the first, soon enough.
    DoubleTap {
        /// Position of the first tap's down.
        position: Vec2,
    },
    /// A tap that is definitely not the first half of a double tap.
    SingleTapConfirmed {
        /// Position of the tap's down.
        position: Vec2,
    },
    /// Pointer held in place past the long-press timeout.
    LongPress {
        /// Position of the press.
        position: Vec2,
    },
}

#[derive(Debug, Clone, Copy)]
struct Press {
    position: Vec2,
    time_ms: u64,
}

/// Tap/long-press/fling recognizer.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    options: GestureOptions,
    velocity: VelocityTracker,
    /// Current (or most recent) primary down.
    current_down: Option<Press>,
    /// Down of the previous tap, for double-tap matching.
    previous_down: Option<Press>,
    /// Up that ended the previous tap.
    previous_up: Option<Press>,
    /// Deadline of a pending single-tap confirmation.
    tap_deadline: Option<u64>,
    /// Deadline of a pending long press.
    long_press_deadline: Option<u64>,
    still_down: bool,
    in_tap_region: bool,
    in_double_tap_region: bool,
    in_long_press: bool,
    double_tapping: bool,
    defer_confirm_single_tap: bool,
}

impl GestureClassifier {
    /// Classifier with the given thresholds.
    #[must_use]
    pub fn new(options: GestureOptions) -> Self {
        Self {
            options,
            velocity: VelocityTracker::new(),
            current_down: None,
            previous_down: None,
            previous_up: None,
            tap_deadline: None,
            long_press_deadline: None,
            still_down: false,
            in_tap_region: false,
            in_double_tap_region: false,
            in_long_press: false,
            double_tapping: false,
            defer_confirm_single_tap: false,
        }
    }

    /// Thresholds in use.
    #[must_use]
    pub fn options(&self) -> &GestureOptions {
        &self.options
    }

    /// Whether a long press is in progress.
    #[must_use]
    pub fn in_long_press(&self) -> bool {
        self.in_long_press
    }

    /// Fire any long-press or single-tap timeouts due at `time_ms`.
    pub fn poll(&mut self, time_ms: u64) -> Vec<Gesture> {
        let mut out = Vec::new();
        self.fire_due(time_ms, &mut out);
        out
    }

    /// Feed one touch event, returning the gestures it completes.
    pub fn on_touch_event(&mut self, event: &TouchEvent) -> Vec<Gesture> {
        let mut out = Vec::new();
        self.fire_due(event.time_ms, &mut out);

        match event.action {
            TouchAction::Down => self.handle_down(event, &mut out),
            TouchAction::PointerDown => self.cancel_taps(),
            TouchAction::Move => self.handle_move(event),
            TouchAction::Up => self.handle_up(event, &mut out),
            TouchAction::PointerUp => self.velocity.clear(),
            TouchAction::Cancel => self.cancel(),
            TouchAction::Outside => {}
        }
        out
    }

    fn fire_due(&mut self, time_ms: u64, out: &mut Vec<Gesture>) {
        if let Some(deadline) = self.long_press_deadline {
            if time_ms >= deadline && self.still_down {
                self.long_press_deadline = None;
                self.dispatch_long_press(out);
            }
        }
        if let Some(deadline) = self.tap_deadline {
            if time_ms >= deadline {
                self.tap_deadline = None;
                if self.still_down {
                    self.defer_confirm_single_tap = true;
                } else if let Some(down) = self.current_down {
                    out.push(Gesture::SingleTapConfirmed {
                        position: down.position,
                    });
                }
            }
        }
    }

    fn dispatch_long_press(&mut self, out: &mut Vec<Gesture>) {
        let Some(down) = self.current_down else {
            return;
        };
        self.tap_deadline = None;
        self.defer_confirm_single_tap = false;
        self.in_long_press = true;
        log::debug!("long press at ({}, {})", down.position.x, down.position.y);
        out.push(Gesture::LongPress {
            position: down.position,
        });
    }

    fn handle_down(&mut self, event: &TouchEvent, out: &mut Vec<Gesture>) {
        let down = Press {
            position: event.primary,
            time_ms: event.time_ms,
        };

        let had_tap_pending = self.tap_deadline.take().is_some();
        if had_tap_pending && self.is_considered_double_tap(down) {
            self.double_tapping = true;
            if let Some(first) = self.previous_down {
                out.push(Gesture::DoubleTap {
                    position: first.position,
                });
            }
        } else {
            self.tap_deadline =
                Some(event.time_ms.saturating_add(self.options.double_tap_timeout_ms));
        }

        self.velocity.clear();
        self.velocity.add(event.time_ms, event.primary);
        self.current_down = Some(down);
        self.still_down = true;
        self.in_tap_region = true;
        self.in_double_tap_region = true;
        self.in_long_press = false;
        self.defer_confirm_single_tap = false;
        self.long_press_deadline =
            Some(event.time_ms.saturating_add(self.options.long_press_timeout_ms));
    }

    fn handle_move(&mut self, event: &TouchEvent) {
        self.velocity.add(event.time_ms, event.primary);
        if self.in_long_press || !self.still_down {
            return;
        }
        let Some(down) = self.current_down else {
            return;
        };
        let distance = down.position.distance(event.primary);
        if self.in_tap_region && distance > self.options.touch_slop {
            self.in_tap_region = false;
            self.tap_deadline = None;
            self.long_press_deadline = None;
        }
        if distance > self.options.double_tap_slop {
            self.in_double_tap_region = false;
        }
    }

    fn handle_up(&mut self, event: &TouchEvent, out: &mut Vec<Gesture>) {
        self.still_down = false;
        self.velocity.add(event.time_ms, event.primary);

        let mut ended_as_tap = false;
        if self.double_tapping {
            // Second half of a double tap; nothing further to report.
        } else if self.in_long_press {
            self.tap_deadline = None;
            self.in_long_press = false;
        } else if self.in_tap_region {
            ended_as_tap = true;
            if self.defer_confirm_single_tap {
                if let Some(down) = self.current_down {
                    out.push(Gesture::SingleTapConfirmed {
                        position: down.position,
                    });
                }
            }
        } else {
            let velocity =
                self.velocity.velocity(self.options.max_fling_velocity);
            let min = self.options.min_fling_velocity;
            if velocity.x.abs() > min || velocity.y.abs() > min {
                log::debug!("fling velocity ({}, {})", velocity.x, velocity.y);
                out.push(Gesture::Fling { velocity });
            }
        }

        if ended_as_tap {
            self.previous_down = self.current_down;
            self.previous_up = Some(Press {
                position: event.primary,
                time_ms: event.time_ms,
            });
        } else {
            self.previous_down = None;
            self.previous_up = None;
        }
        self.double_tapping = false;
        self.defer_confirm_single_tap = false;
        self.long_press_deadline = None;
    }

    fn is_considered_double_tap(&self, second_down: Press) -> bool {
        let (Some(first_down), Some(first_up)) =
            (self.previous_down, self.previous_up)
        else {
            return false;
        };
        if !self.in_double_tap_region {
            return false;
        }
        let gap = second_down.time_ms.saturating_sub(first_up.time_ms);
        if gap > self.options.double_tap_timeout_ms
            || gap < self.options.double_tap_min_time_ms
        {
            return false;
        }
        first_down.position.distance(second_down.position)
            <= self.options.double_tap_slop
    }

    /// A second pointer makes the current touch a multi-touch gesture.
    fn cancel_taps(&mut self) {
        self.long_press_deadline = None;
        self.tap_deadline = None;
        self.double_tapping = false;
        self.in_tap_region = false;
        self.in_double_tap_region = false;
        self.defer_confirm_single_tap = false;
        self.in_long_press = false;
    }

    fn cancel(&mut self) {
        self.cancel_taps();
        self.velocity.clear();
        self.still_down = false;
        self.previous_down = None;
        self.previous_up = None;
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(GestureOptions::default())
    }
}
