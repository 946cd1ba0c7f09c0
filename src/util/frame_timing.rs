//! Frame pacing and FPS measurement.

use web_time::{Duration, Instant};

/// Frame timing with smoothed FPS calculation and an optional frame cap.
pub struct FrameTiming {
    /// Minimum frame duration derived from the target FPS (`None` =
    /// uncapped).
    min_frame_duration: Option<Duration>,
    /// Timestamp of the previous rendered frame.
    last_frame: Instant,
    /// Exponential-moving-average FPS.
    smoothed_fps: f32,
    /// EMA blend factor (fraction of the new sample per frame).
    smoothing: f32,
}

impl FrameTiming {
    /// Create a frame timer capped at `target_fps` (0 = uncapped).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = (target_fps > 0)
            .then(|| Duration::from_secs_f64(1.0 / f64::from(target_fps)));

        Self {
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to render again.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.min_frame_duration
            .is_none_or(|min| self.last_frame.elapsed() >= min)
    }

    /// Record the end of a rendered frame and fold it into the FPS average.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Smoothed frames-per-second estimate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncapped_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
    }

    #[test]
    fn capped_blocks_immediately_after_frame() {
        let mut timing = FrameTiming::new(1);
        timing.end_frame();
        // 1 FPS cap: the next frame cannot be due within the same millisecond
        assert!(!timing.should_render());
    }
}
