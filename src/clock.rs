//! Fixed-rate frame pacing
//!
//! Hosts that receive variable wall-clock deltas feed them here and run the
//! returned number of frames. The simulation itself never sees seconds.

use crate::consts::MAX_FRAMES_PER_UPDATE;

/// Longest wall-clock delta accepted per update (seconds)
const MAX_DELTA: f32 = 0.1;

/// Accumulates elapsed time into whole frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_dt: f32,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame_dt: 1.0 / frame_rate.max(1) as f32,
            accumulator: 0.0,
        }
    }

    pub fn frame_dt(&self) -> f32 {
        self.frame_dt
    }

    /// Add elapsed seconds and return how many frames to run now
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_DELTA);

        let mut frames = 0;
        while self.accumulator >= self.frame_dt && frames < MAX_FRAMES_PER_UPDATE {
            self.accumulator -= self.frame_dt;
            frames += 1;
        }
        if frames == MAX_FRAMES_PER_UPDATE && self.accumulator >= self.frame_dt {
            log::warn!(
                "frame clock behind by {:.3}s, dropping backlog",
                self.accumulator
            );
            self.accumulator = 0.0;
        }
        frames
    }

    /// Fraction of a frame left in the accumulator, for interpolated drawing
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.frame_dt
    }
}
