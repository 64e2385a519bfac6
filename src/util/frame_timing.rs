//! Frame pacing statistics for the viewer.

use web_time::{Duration, Instant};

/// Presented-frame counter with an exponentially smoothed frame rate,
/// logged by the viewer at each transition boundary.
pub struct FrameTiming {
    last_frame: Instant,
    smoothed_fps: f32,
    /// Weight of the newest sample, in `0.0..=1.0`.
    smoothing: f32,
    frames: u64,
}

impl FrameTiming {
    /// Timer starting now, assuming 60 fps until frames arrive.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Mark a frame as presented.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frames += 1;
        self.record(elapsed);
    }

    fn record(&mut self, elapsed: Duration) {
        let secs = elapsed.as_secs_f32();
        if secs <= 0.0 {
            return;
        }
        let sample = secs.recip();
        self.smoothed_fps += (sample - self.smoothed_fps) * self.smoothing;
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Number of frames recorded.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}
