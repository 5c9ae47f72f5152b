/// Elapsed time assumed for a frame with no predecessor (one 60 Hz frame).
pub const DEFAULT_FRAME_DT: f32 = 0.016;

/// Converts host frame timestamps into elapsed seconds between frames.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Timestamp of the previous frame, in milliseconds.
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Record a frame at `now_ms` and return seconds since the previous one.
    /// The first frame after construction or [`reset`](Self::reset) gets [`DEFAULT_FRAME_DT`].
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => DEFAULT_FRAME_DT,
        };
        self.last_ms = Some(now_ms);
        dt
    }

    /// Forget the previous timestamp.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_uses_default() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(12_345.0), DEFAULT_FRAME_DT);
        let dt = clock.delta(12_355.0);
        assert!((dt - 0.01).abs() < 1e-6, "dt was {}", dt);
    }

    #[test]
    fn later_frames_measure_wall_clock() {
        let mut clock = FrameClock::new();
        clock.delta(1000.0);
        let dt = clock.delta(1033.0);
        assert!((dt - 0.033).abs() < 1e-6, "dt was {}", dt);
        let dt = clock.delta(1050.0);
        assert!((dt - 0.017).abs() < 1e-6, "dt was {}", dt);
    }

    #[test]
    fn reset_forgets_previous_frame() {
        let mut clock = FrameClock::new();
        clock.delta(1000.0);
        clock.reset();
        assert_eq!(clock.delta(5000.0), DEFAULT_FRAME_DT);
    }
}
