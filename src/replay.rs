//! Touch-trace replay.
//!
//! Feeds a recorded sequence of touch events and frame ticks to an
//! [`OrientationController`], sampling the orientation at every frame. Used
//! by the `touchspin` binary and handy for reproducing gesture bugs from
//! device logs.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::controller::{OrientationController, TouchMode};
use crate::error::TouchspinError;
use crate::input::TouchEvent;

/// One step of a trace.
///
/// ```json
/// { "kind": "touch", "action": "down", "primary": [10, 20], "time_ms": 0 }
/// { "kind": "frame", "time_ms": 16 }
/// { "kind": "poll", "time_ms": 600 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceStep {
    /// Deliver a touch event.
    Touch(TouchEvent),
    /// Read the orientation for one rendered frame.
    Frame {
        /// Frame time relative to the start of replay. Without it the
        /// current wall-clock time is used.
        #[serde(default)]
        time_ms: Option<u64>,
    },
    /// Let gesture timeouts fire.
    Poll {
        /// Host clock time, same base as touch events.
        time_ms: u64,
    },
}

/// A recorded touch session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trace {
    /// Steps in delivery order.
    pub steps: Vec<TraceStep>,
}

impl Trace {
    /// Parse a JSON trace.
    pub fn from_json(content: &str) -> Result<Self, TouchspinError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a JSON trace from disk.
    pub fn load(path: &Path) -> Result<Self, TouchspinError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// Orientation observed at one frame step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSample {
    /// Zero-based frame index.
    pub frame: usize,
    /// Rotation as `[x, y, z, w]`.
    pub rotation: [f32; 4],
    /// Object scale.
    pub scale: f32,
    /// Spin speed after this frame's decay.
    pub fling_speed: f64,
    /// Interaction mode at this frame.
    pub mode: TouchMode,
}

/// Steps a controller through a trace.
pub struct TracePlayer {
    controller: OrientationController,
    start: Instant,
    frame: usize,
}

impl TracePlayer {
    /// Player driving `controller`, with frame times relative to now.
    #[must_use]
    pub fn new(controller: OrientationController) -> Self {
        Self {
            controller,
            start: Instant::now(),
            frame: 0,
        }
    }

    /// The controller being driven.
    #[must_use]
    pub fn controller(&self) -> &OrientationController {
        &self.controller
    }

    /// Apply one step; frame steps produce a sample.
    pub fn step(&mut self, step: &TraceStep) -> Option<FrameSample> {
        match step {
            TraceStep::Touch(event) => {
                if !self.controller.on_touch(event) {
                    log::debug!("unhandled {:?} at {} ms", event.action, event.time_ms);
                }
                None
            }
            TraceStep::Poll { time_ms } => {
                let _ = self.controller.poll(*time_ms);
                None
            }
            TraceStep::Frame { time_ms } => {
                let now = time_ms
                    .and_then(|ms| self.start.checked_add(Duration::from_millis(ms)))
                    .unwrap_or_else(Instant::now);
                let orientation = self.controller.current_orientation_at(now);
                let sample = FrameSample {
                    frame: self.frame,
                    rotation: orientation.rotation.to_array(),
                    scale: orientation.scale,
                    fling_speed: self.controller.fling_speed(),
                    mode: self.controller.mode(),
                };
                self.frame += 1;
                Some(sample)
            }
        }
    }

    /// Apply every step, collecting frame samples.
    pub fn run(&mut self, trace: &Trace) -> Vec<FrameSample> {
        let samples: Vec<FrameSample> =
            trace.steps.iter().filter_map(|step| self.step(step)).collect();
        log::info!(
            "replayed {} steps, {} frames",
            trace.steps.len(),
            samples.len()
        );
        samples
    }

    /// Give the controller back.
    #[must_use]
    pub fn into_controller(self) -> OrientationController {
        self.controller
    }
}

/// Replay `trace` on `controller`, returning one sample per frame step.
pub fn replay(
    controller: OrientationController,
    trace: &Trace,
) -> Vec<FrameSample> {
    TracePlayer::new(controller).run(trace)
}
