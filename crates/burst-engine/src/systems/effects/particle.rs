//! A single celebration particle: explosion burst, then wandering.

use glam::Vec2;

use super::disc_color::DiscColor;
use super::rng::RandomSource;
use crate::api::config::ParticleTuning;
use crate::core::time::DEFAULT_FRAME_DT;

/// Which motion rule a particle followed in a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Decaying radial burst away from the spawn point.
    Explosion,
    /// Slow random heading plus repulsion from the steering point.
    Wandering,
}

/// What a particle can see of the world during one step.
#[derive(Debug, Clone, Copy)]
pub struct Surroundings {
    /// Surface width and height.
    pub bounds: Vec2,
    /// Latest pointer/touch position, if any was ever reported.
    pub steering: Option<Vec2>,
}

/// One simulated disc.
///
/// `radius` and `opacity` are fixed at spawn. Position is kept inside
/// `[radius, bounds - radius]` on both axes after every update.
#[derive(Debug, Clone)]
pub struct Particle {
    position: Vec2,
    start: Vec2,
    explosion_velocity: Vec2,
    velocity: Vec2,
    radius: f32,
    color: DiscColor,
    opacity: f32,
    rotation: f32,
    rotation_speed: f32,
    wander_angle: f32,
    wander_speed: f32,
    wander_timer: f32,
    time_alive: f32,
}

impl Particle {
    /// Spawn a particle at `origin` with randomized burst, look and wander state.
    pub fn spawn<R: RandomSource + ?Sized>(
        origin: Vec2,
        color: DiscColor,
        tuning: &ParticleTuning,
        rng: &mut R,
    ) -> Self {
        let angle = rng.angle();
        let speed = rng.range(tuning.explosion_speed[0], tuning.explosion_speed[1]);
        let radius = rng.range(tuning.radius[0], tuning.radius[1]);
        let opacity = rng.range(tuning.opacity[0], tuning.opacity[1]);
        let rotation_speed = (rng.next_f32() - 0.5) * tuning.rotation_spread;
        let wander_angle = rng.angle();
        let wander_speed = rng.range(tuning.wander_speed[0], tuning.wander_speed[1]);
        let wander_timer = rng.range(tuning.wander_interval[0], tuning.wander_interval[1]);

        Self {
            position: origin,
            start: origin,
            explosion_velocity: Vec2::from_angle(angle) * speed,
            velocity: Vec2::ZERO,
            radius,
            color,
            opacity,
            rotation: 0.0,
            rotation_speed,
            wander_angle,
            wander_speed,
            wander_timer,
            time_alive: 0.0,
        }
    }

    /// Override the initial burst velocity.
    pub fn with_explosion_velocity(mut self, velocity: Vec2) -> Self {
        self.explosion_velocity = velocity;
        self
    }

    /// Override the wander heading, speed and countdown.
    pub fn with_wander(mut self, angle: f32, speed: f32, timer: f32) -> Self {
        self.wander_angle = angle;
        self.wander_speed = speed;
        self.wander_timer = timer;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn explosion_velocity(&self) -> Vec2 {
        self.explosion_velocity
    }

    /// Velocity used during the wandering phase (zero until the first wandering step).
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> DiscColor {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn wander_angle(&self) -> f32 {
        self.wander_angle
    }

    pub fn wander_timer(&self) -> f32 {
        self.wander_timer
    }

    pub fn time_alive(&self) -> f32 {
        self.time_alive
    }

    /// Phase the particle is in given its current age.
    pub fn phase(&self, tuning: &ParticleTuning) -> Phase {
        if self.time_alive < tuning.explosion_duration {
            Phase::Explosion
        } else {
            Phase::Wandering
        }
    }

    /// Advance one step by `dt` seconds. Returns the phase used for this step.
    ///
    /// Age is incremented before the phase is chosen, so the step that
    /// brings `time_alive` up to the explosion duration already wanders.
    /// Damping is applied per call, not per second.
    pub fn update<R: RandomSource + ?Sized>(
        &mut self,
        dt: f32,
        tuning: &ParticleTuning,
        env: &Surroundings,
        rng: &mut R,
    ) -> Phase {
        self.rotation += self.rotation_speed;
        self.time_alive += dt;

        let phase = self.phase(tuning);
        match phase {
            Phase::Explosion => {
                self.explosion_velocity *= tuning.explosion_damping;
                self.position += self.explosion_velocity;
            }
            Phase::Wandering => {
                self.wander_timer -= dt;
                if self.wander_timer <= 0.0 {
                    self.wander_angle = rng.angle();
                    let [lo, hi] = tuning.wander_interval;
                    self.wander_timer = rng.range(lo, hi);
                }
                let wander = Vec2::from_angle(self.wander_angle) * self.wander_speed;
                let flee = flee_velocity(
                    self.position,
                    env.steering,
                    tuning.flee_radius,
                    tuning.flee_speed,
                );
                self.velocity = (wander + flee) * tuning.wander_damping;
                self.position += self.velocity;
            }
        }

        let velocity = match phase {
            Phase::Explosion => &mut self.explosion_velocity,
            Phase::Wandering => &mut self.velocity,
        };
        let low = Vec2::splat(self.radius);
        let high = env.bounds - low;
        bounce_axis(&mut self.position.x, &mut velocity.x, low.x, high.x, tuning.bounce);
        bounce_axis(&mut self.position.y, &mut velocity.y, low.y, high.y, tuning.bounce);

        phase
    }

    /// Advance one step assuming a 60 Hz frame.
    pub fn update_default<R: RandomSource + ?Sized>(
        &mut self,
        tuning: &ParticleTuning,
        env: &Surroundings,
        rng: &mut R,
    ) -> Phase {
        self.update(DEFAULT_FRAME_DT, tuning, env, rng)
    }
}

/// Repulsion away from `steering`, strongest at distance zero and fading out at `radius`.
///
/// Zero when there is no steering point, when it is at least `radius` away,
/// or when it sits exactly on `position` (no defined direction).
pub fn flee_velocity(position: Vec2, steering: Option<Vec2>, radius: f32, speed: f32) -> Vec2 {
    let Some(point) = steering else {
        return Vec2::ZERO;
    };
    let away = position - point;
    let distance = away.length();
    if distance > 0.0 && distance < radius {
        let force = (radius - distance) / radius;
        away / distance * force * speed
    } else {
        Vec2::ZERO
    }
}

/// Clamp one axis into `[low, high]`, reflecting the velocity inward with `keep` of its speed.
fn bounce_axis(position: &mut f32, velocity: &mut f32, low: f32, high: f32, keep: f32) {
    if *position < low {
        *position = low;
        *velocity = velocity.abs() * keep;
    }
    if *position > high {
        *position = high;
        *velocity = -velocity.abs() * keep;
    }
}
