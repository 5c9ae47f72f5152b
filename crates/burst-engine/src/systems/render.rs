use crate::renderer::{DiscInstance, Renderer};
use crate::systems::effects::{RandomSource, Stage};

/// Draw one frame: clear the whole surface, then one disc per particle in stage order.
pub fn draw_stage<R: RandomSource, D: Renderer + ?Sized>(stage: &Stage<R>, renderer: &mut D) {
    renderer.clear(stage.size());
    for particle in stage.particles() {
        renderer.draw_disc(&DiscInstance::from(particle));
    }
}
