//! The particle stage: a fixed set of particles inside a resizable surface.

use glam::Vec2;

use super::disc_color::DiscColor;
use super::particle::{Particle, Surroundings};
use super::rng::{RandomSource, Rng};
use crate::api::config::ParticleTuning;

/// All particles of one celebration plus the bounds they live in.
///
/// The particle count never changes after construction. Bounds and the
/// steering point are pushed in by the host and read on the next `advance`.
pub struct Stage<R: RandomSource = Rng> {
    particles: Vec<Particle>,
    size: Vec2,
    steering: Option<Vec2>,
    tuning: ParticleTuning,
    rng: R,
}

impl<R: RandomSource> Stage<R> {
    /// Spawn `count` particles at the center of a `size` surface, each with
    /// a color drawn uniformly from `palette`.
    pub fn spawn(
        size: Vec2,
        count: usize,
        palette: &[DiscColor],
        tuning: ParticleTuning,
        mut rng: R,
    ) -> Self {
        let center = size / 2.0;
        let particles = (0..count)
            .map(|_| {
                let color = if palette.is_empty() {
                    DiscColor::default()
                } else {
                    DiscColor::pick(palette, &mut rng)
                };
                Particle::spawn(center, color, &tuning, &mut rng)
            })
            .collect();
        log::debug!("stage: spawned {} particles at ({}, {})", count, center.x, center.y);
        Self::from_particles(size, particles, tuning, rng)
    }

    /// Build a stage around pre-made particles.
    pub fn from_particles(
        size: Vec2,
        particles: Vec<Particle>,
        tuning: ParticleTuning,
        rng: R,
    ) -> Self {
        Self {
            particles,
            size,
            steering: None,
            tuning,
            rng,
        }
    }

    /// Step every particle by `dt` seconds, in stored order.
    pub fn advance(&mut self, dt: f32) {
        let env = Surroundings {
            bounds: self.size,
            steering: self.steering,
        };
        for particle in &mut self.particles {
            particle.update(dt, &self.tuning, &env, &mut self.rng);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Current surface size (width, height).
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Update the surface bounds. Takes effect on the next `advance`.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    /// Latest pointer position. Only the most recent value is kept.
    pub fn set_steering_point(&mut self, x: f32, y: f32) {
        self.steering = Some(Vec2::new(x, y));
    }

    pub fn steering_point(&self) -> Option<Vec2> {
        self.steering
    }

    pub fn tuning(&self) -> &ParticleTuning {
        &self.tuning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::effects::particle::Phase;
    use crate::systems::effects::rng::SequenceSource;

    fn palette() -> Vec<DiscColor> {
        vec![DiscColor::new(1.0, 0.0, 0.0), DiscColor::new(0.0, 0.0, 1.0)]
    }

    fn spawn(width: f32, height: f32, count: usize, seed: u64) -> Stage {
        let size = Vec2::new(width, height);
        Stage::spawn(size, count, &palette(), ParticleTuning::default(), Rng::new(seed))
    }

    #[test]
    fn spawn_places_all_particles_at_center() {
        let stage = spawn(800.0, 600.0, 90, 42);
        assert_eq!(stage.len(), 90);
        for p in stage.particles() {
            assert_eq!(p.position(), Vec2::new(400.0, 300.0));
            assert_eq!(p.time_alive(), 0.0);
            let r = p.radius();
            assert!(p.position().x >= r && p.position().x <= 800.0 - r);
            assert!(p.position().y >= r && p.position().y <= 600.0 - r);
            assert!(palette().contains(&p.color()));
        }
    }

    #[test]
    fn spawn_with_empty_palette_uses_default_color() {
        let size = Vec2::new(100.0, 100.0);
        let stage = Stage::spawn(size, 3, &[], ParticleTuning::default(), Rng::new(1));
        assert!(stage.particles().iter().all(|p| p.color() == DiscColor::default()));
    }

    #[test]
    fn advance_keeps_count_and_ages_everyone() {
        let mut stage = spawn(800.0, 600.0, 12, 7);
        for _ in 0..10 {
            stage.advance(0.016);
        }
        assert_eq!(stage.len(), 12);
        for p in stage.particles() {
            assert!((p.time_alive() - 0.16).abs() < 1e-5);
        }
    }

    #[test]
    fn single_particle_scenario_flips_phase_at_three_seconds() {
        let tuning = ParticleTuning::default();
        let mut seq = SequenceSource::new(vec![0.0]);
        let origin = Vec2::new(100.0, 100.0);
        let particle = Particle::spawn(origin, DiscColor::default(), &tuning, &mut seq)
            .with_explosion_velocity(Vec2::new(10.0, 0.0));
        let size = Vec2::new(200.0, 200.0);
        let mut stage = Stage::from_particles(size, vec![particle], tuning, Rng::new(9));

        stage.advance(1.0);
        stage.advance(1.0);
        assert_eq!(stage.particles()[0].phase(stage.tuning()), Phase::Explosion);
        stage.advance(1.0);
        let p = &stage.particles()[0];
        assert_eq!(p.time_alive(), 3.0);
        assert_eq!(p.phase(stage.tuning()), Phase::Wandering);
    }

    #[test]
    fn resize_clamps_on_next_advance() {
        let mut stage = spawn(1000.0, 1000.0, 20, 3);
        for _ in 0..30 {
            stage.advance(0.016);
        }
        stage.resize(120.0, 80.0);
        stage.advance(0.016);
        for p in stage.particles() {
            let r = p.radius();
            assert!(p.position().x >= r && p.position().x <= 120.0 - r, "x = {}", p.position().x);
            assert!(p.position().y >= r && p.position().y <= 80.0 - r, "y = {}", p.position().y);
        }
        assert_eq!(stage.size(), Vec2::new(120.0, 80.0));
    }

    #[test]
    fn steering_point_is_last_write_wins() {
        let mut stage = spawn(100.0, 100.0, 1, 3);
        assert_eq!(stage.steering_point(), None);
        stage.set_steering_point(1.0, 2.0);
        stage.set_steering_point(3.0, 4.0);
        stage.set_steering_point(5.0, 6.0);
        assert_eq!(stage.steering_point(), Some(Vec2::new(5.0, 6.0)));
    }

    #[test]
    fn wandering_without_steering_point_is_stable() {
        let mut stage = spawn(400.0, 400.0, 30, 77);
        for _ in 0..600 {
            stage.advance(0.016);
        }
        for p in stage.particles() {
            assert!(p.position().x.is_finite() && p.position().y.is_finite());
            assert!(p.velocity().length() <= 1.0);
        }
    }
}
