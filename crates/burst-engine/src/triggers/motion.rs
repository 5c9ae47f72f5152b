//! Pointer-dwell and device-shake detectors.

use glam::Vec2;

/// Counts pointer samples that land in a corner of the viewport.
#[derive(Debug, Clone)]
pub struct EdgeDwell {
    margin: f32,
    threshold: u32,
    count: u32,
}

impl EdgeDwell {
    pub fn new(margin: f32, threshold: u32) -> Self {
        Self { margin, threshold, count: 0 }
    }

    /// Corner = near a vertical edge AND near a horizontal edge.
    pub fn is_near_corner(&self, point: Vec2, viewport: Vec2) -> bool {
        let near_x = point.x < self.margin || point.x > viewport.x - self.margin;
        let near_y = point.y < self.margin || point.y > viewport.y - self.margin;
        near_x && near_y
    }

    /// Feed a pointer sample. Returns true (and resets) once the count
    /// exceeds the threshold.
    pub fn sample(&mut self, point: Vec2, viewport: Vec2) -> bool {
        if !self.is_near_corner(point, viewport) {
            return false;
        }
        self.count += 1;
        if self.count > self.threshold {
            self.count = 0;
            return true;
        }
        false
    }

}

/// Detects a shake from accelerometer samples (acceleration including gravity).
#[derive(Debug, Clone)]
pub struct ShakeSampler {
    threshold: f32,
    interval_ms: f64,
    last_sample_ms: f64,
    last: [f32; 3],
}

impl ShakeSampler {
    /// `started_ms` is when listening began; the first sample must come
    /// more than `interval_ms` after it.
    pub fn new(threshold: f32, interval_ms: f64, started_ms: f64) -> Self {
        Self {
            threshold,
            interval_ms,
            last_sample_ms: started_ms,
            last: [0.0; 3],
        }
    }

    /// Feed a motion event. Samples closer than the interval are dropped.
    /// Returns true when the normalized change exceeds the threshold.
    pub fn sample(&mut self, accel: [f32; 3], now_ms: f64) -> bool {
        let elapsed = now_ms - self.last_sample_ms;
        if elapsed <= self.interval_ms {
            return false;
        }
        self.last_sample_ms = now_ms;

        let sum: f32 = accel.iter().sum();
        let last_sum: f32 = self.last.iter().sum();
        let magnitude = ((sum - last_sum).abs() as f64 / elapsed * 10_000.0) as f32;
        self.last = accel;
        magnitude > self.threshold
    }
}
