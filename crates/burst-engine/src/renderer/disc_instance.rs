use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::traits::Renderer;
use crate::systems::effects::Particle;

/// Per-disc render data read by the host's 2D canvas drawer.
/// 8 floats = 32 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DiscInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Rotation in radians (a plain disc ignores it; kept for sprite-backed hosts).
    pub rotation: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Global alpha for the fill.
    pub opacity: f32,
}

impl DiscInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

impl From<&Particle> for DiscInstance {
    fn from(p: &Particle) -> Self {
        let pos = p.position();
        let color = p.color();
        Self {
            x: pos.x,
            y: pos.y,
            radius: p.radius(),
            rotation: p.rotation(),
            r: color.r,
            g: color.g,
            b: color.b,
            opacity: p.opacity(),
        }
    }
}

/// Headless frame of discs, exposed to the host through a raw pointer.
pub struct DiscBuffer {
    instances: Vec<DiscInstance>,
    surface: Vec2,
}

impl DiscBuffer {
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
            surface: Vec2::ZERO,
        }
    }

    pub fn instances(&self) -> &[DiscInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Surface size given to the last `clear`.
    pub fn surface(&self) -> Vec2 {
        self.surface
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// The frame as a flat float slice (`FLOATS` per disc).
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for DiscBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for DiscBuffer {
    fn clear(&mut self, surface: Vec2) {
        self.instances.clear();
        self.surface = surface;
    }

    fn draw_disc(&mut self, disc: &DiscInstance) {
        self.instances.push(*disc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::ParticleTuning;
    use crate::systems::effects::{DiscColor, SequenceSource};

    #[test]
    fn disc_instance_is_32_bytes() {
        assert_eq!(std::mem::size_of::<DiscInstance>(), 32);
        assert_eq!(DiscInstance::STRIDE_BYTES, 32);
    }

    #[test]
    fn from_particle_copies_draw_state() {
        let mut seq = SequenceSource::new(vec![0.5]);
        let color = DiscColor::new(0.25, 0.5, 0.75);
        let p = Particle::spawn(Vec2::new(40.0, 60.0), color, &ParticleTuning::default(), &mut seq);
        let disc = DiscInstance::from(&p);
        assert_eq!(disc.x, 40.0);
        assert_eq!(disc.y, 60.0);
        assert_eq!(disc.radius, p.radius());
        assert_eq!(disc.opacity, p.opacity());
        assert_eq!((disc.r, disc.g, disc.b), (0.25, 0.5, 0.75));
    }

    #[test]
    fn clear_then_draw() {
        let mut buf = DiscBuffer::new();
        buf.draw_disc(&DiscInstance::default());
        buf.clear(Vec2::new(640.0, 480.0));
        assert_eq!(buf.instance_count(), 0);
        buf.draw_disc(&DiscInstance { x: 1.0, radius: 5.0, ..Default::default() });
        buf.draw_disc(&DiscInstance::default());
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.surface(), Vec2::new(640.0, 480.0));
        let floats = buf.as_floats();
        assert_eq!(floats.len(), 16);
        assert_eq!(floats[0], 1.0);
        assert_eq!(floats[2], 5.0);
    }
}
