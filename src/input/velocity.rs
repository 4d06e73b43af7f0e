use std::collections::VecDeque;

use glam::Vec2;

/// Only samples this recent (relative to the newest) contribute.
const HORIZON_MS: u64 = 100;

/// A gap this long before the newest sample means the pointer had stopped.
const ASSUME_STOPPED_MS: u64 = 40;

/// Maximum samples to keep for velocity estimation.
const HISTORY_SIZE: usize = 20;

#[derive(Debug, Clone, Copy)]
struct Sample {
    time_ms: u64,
    position: Vec2,
}

/// Estimates pointer velocity (px/s) from recent position samples.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: VecDeque<Sample>,
}

impl VelocityTracker {
    /// Empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Record a pointer position.
    pub fn add(&mut self, time_ms: u64, position: Vec2) {
        if let Some(last) = self.samples.back() {
            if time_ms < last.time_ms {
                // Out-of-order timestamp: the history is meaningless now.
                self.samples.clear();
            }
        }
        if self.samples.len() == HISTORY_SIZE {
            let _ = self.samples.pop_front();
        }
        self.samples.push_back(Sample { time_ms, position });
    }

    /// Current velocity in px/s, each component clamped to
    /// `±max_velocity`.
    ///
    /// Zero when fewer than two samples fall inside the horizon or the
    /// pointer paused before the newest sample.
    #[must_use]
    pub fn velocity(&self, max_velocity: f32) -> Vec2 {
        let Some(newest) = self.samples.back() else {
            return Vec2::ZERO;
        };
        let Some(previous) = self.samples.iter().rev().nth(1) else {
            return Vec2::ZERO;
        };
        if newest.time_ms.saturating_sub(previous.time_ms) > ASSUME_STOPPED_MS {
            return Vec2::ZERO;
        }

        let Some(oldest) = self
            .samples
            .iter()
            .rev()
            .take_while(|s| newest.time_ms.saturating_sub(s.time_ms) <= HORIZON_MS)
            .last()
        else {
            return Vec2::ZERO;
        };
        let dt_ms = newest.time_ms - oldest.time_ms;
        if dt_ms == 0 {
            return Vec2::ZERO;
        }

        let v = (newest.position - oldest.position) * (1000.0 / dt_ms as f32);
        v.clamp(Vec2::splat(-max_velocity), Vec2::splat(max_velocity))
    }
}
