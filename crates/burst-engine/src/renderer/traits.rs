//! Drawing contract between the particle core and a host surface.
//!
//! The core never touches a canvas. Each frame it clears the renderer and
//! hands it one [`DiscInstance`] per particle, in stage order. The default
//! implementation is the headless [`DiscBuffer`](super::DiscBuffer) whose
//! floats are read by the page's Canvas2D code.

use glam::Vec2;

use super::disc_instance::DiscInstance;

/// A surface that can draw filled, alpha-blended discs.
///
/// # Example Implementation
///
/// ```ignore
/// struct Canvas2d {
///     ctx: web_sys::CanvasRenderingContext2d,
/// }
///
/// impl Renderer for Canvas2d {
///     fn clear(&mut self, surface: Vec2) {
///         self.ctx.clear_rect(0.0, 0.0, surface.x as f64, surface.y as f64);
///     }
///
///     fn draw_disc(&mut self, disc: &DiscInstance) {
///         // save, set global alpha, arc, fill, restore...
///     }
/// }
/// ```
pub trait Renderer {
    /// Wipe the whole surface. Called once per frame before any disc.
    fn clear(&mut self, surface: Vec2);

    /// Draw one disc at its center with its own opacity.
    fn draw_disc(&mut self, disc: &DiscInstance);
}
