//! Randomness sources for particle spawning and wander re-rolls.
//!
//! Everything random in the simulation goes through [`RandomSource`], so
//! tests can swap the seeded [`Rng`] for a scripted [`SequenceSource`].

use std::f32::consts::TAU;

/// A source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform sample in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Uniform sample in `[lo, hi)`.
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }

    /// Uniform angle in `[0, 2π)`.
    fn angle(&mut self) -> f32 {
        self.next_f32() * TAU
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        ((self.next_f32() * len as f32) as usize).min(len.saturating_sub(1))
    }
}

/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic, fast, no-std compatible.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for Rng {
    fn next_f32(&mut self) -> f32 {
        // Top 24 bits fit the f32 mantissa exactly, so the result never rounds up to 1.0.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

/// Replays a fixed list of samples, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    /// Values are clamped into `[0, 1)`. An empty list behaves like `[0.0]`.
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let mut values: Vec<f32> = values.into();
        if values.is_empty() {
            values.push(0.0);
        }
        for v in &mut values {
            *v = v.clamp(0.0, 1.0 - f32::EPSILON);
        }
        Self { values, cursor: 0 }
    }

    /// Number of samples handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_f32(&mut self) -> f32 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
