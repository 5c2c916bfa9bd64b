//! Count-up animation for headline stats.

use std::time::Duration;

/// A value counting from zero to `target` in `frames` equal steps over `duration`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    frames: u32,
    duration: Duration,
}

impl CountUp {
    pub fn new(target: u64, frames: u32, duration: Duration) -> Self {
        Self {
            target,
            frames: frames.max(1),
            duration,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Delay between two frames.
    pub fn frame_interval(&self) -> Duration {
        self.duration / self.frames
    }

    /// Displayed value after `frame` steps, rounded down and capped at the target.
    pub fn value_at(&self, frame: u32) -> u64 {
        if frame >= self.frames {
            return self.target;
        }
        let scaled = u128::from(self.target) * u128::from(frame) / u128::from(self.frames);
        scaled as u64
    }

    pub fn is_done(&self, frame: u32) -> bool {
        frame >= self.frames
    }

    /// Values shown on frames `1..=frames`.
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        (1..=self.frames).map(move |frame| self.value_at(frame))
    }
}
