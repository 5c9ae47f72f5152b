//! Per-frame driver for the particle stage.
//!
//! The host owns the actual frame scheduler (e.g. `requestAnimationFrame`).
//! The loop asks for the next frame through a [`TickSource`] and the host
//! calls [`RenderLoop::on_frame`] when it fires.

use super::time::FrameClock;
use crate::renderer::Renderer;
use crate::systems::effects::{RandomSource, Stage};
use crate::systems::render::draw_stage;

/// Something that can schedule one future frame callback.
pub trait TickSource {
    /// Ask for `on_frame` to be called once more. Repeated requests before
    /// the frame fires coalesce into one.
    fn request_frame(&mut self);
}

/// Running state of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

/// Idle/Running state machine that advances a stage once per frame.
#[derive(Debug)]
pub struct RenderLoop {
    state: LoopState,
    clock: FrameClock,
    frames: u64,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
            clock: FrameClock::new(),
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames processed since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Idle → Running and request the first frame. Returns false if already running.
    pub fn start<T: TickSource + ?Sized>(&mut self, ticks: &mut T) -> bool {
        if self.state == LoopState::Running {
            return false;
        }
        self.state = LoopState::Running;
        self.clock.reset();
        ticks.request_frame();
        log::debug!("render loop: started");
        true
    }

    /// Running → Idle. The next scheduled frame does nothing and the loop ends.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            log::debug!("render loop: stopped after {} frames", self.frames);
        }
        self.state = LoopState::Idle;
    }

    /// Scheduled frame callback. When running: measure elapsed time, advance
    /// the stage, draw it and request the next frame. Returns the elapsed
    /// seconds used, or `None` when idle.
    pub fn on_frame<R, D, T>(
        &mut self,
        now_ms: f64,
        stage: &mut Stage<R>,
        renderer: &mut D,
        ticks: &mut T,
    ) -> Option<f32>
    where
        R: RandomSource,
        D: Renderer + ?Sized,
        T: TickSource + ?Sized,
    {
        if self.state == LoopState::Idle {
            return None;
        }
        let dt = self.clock.delta(now_ms);
        stage.advance(dt);
        draw_stage(stage, renderer);
        self.frames += 1;
        ticks.request_frame();
        Some(dt)
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::config::ParticleTuning;
    use crate::core::time::DEFAULT_FRAME_DT;
    use crate::renderer::traits::tests::RecordingRenderer;
    use crate::systems::effects::{DiscColor, Rng};
    use glam::Vec2;

    /// Tick source that only counts pending requests.
    #[derive(Debug, Default)]
    pub(crate) struct FakeTicks {
        pub requested: u32,
    }

    impl FakeTicks {
        /// Consume a pending request, like a host firing the callback.
        pub fn fire(&mut self) -> bool {
            if self.requested > 0 {
                self.requested = 0;
                true
            } else {
                false
            }
        }
    }

    impl TickSource for FakeTicks {
        fn request_frame(&mut self) {
            self.requested += 1;
        }
    }

    fn stage() -> Stage {
        let size = Vec2::new(800.0, 600.0);
        Stage::spawn(size, 3, &[DiscColor::default()], ParticleTuning::default(), Rng::new(1))
    }

    #[test]
    fn starts_idle_and_ignores_frames() {
        let mut lp = RenderLoop::new();
        let mut st = stage();
        let mut r = RecordingRenderer::default();
        let mut ticks = FakeTicks::default();
        assert_eq!(lp.state(), LoopState::Idle);
        assert_eq!(lp.on_frame(100.0, &mut st, &mut r, &mut ticks), None);
        assert!(r.clears.is_empty());
        assert_eq!(ticks.requested, 0);
        assert_eq!(st.particles()[0].time_alive(), 0.0);
    }

    #[test]
    fn first_frame_uses_default_then_measures() {
        let mut lp = RenderLoop::new();
        let mut st = stage();
        let mut r = RecordingRenderer::default();
        let mut ticks = FakeTicks::default();

        assert!(lp.start(&mut ticks));
        assert!(ticks.fire());
        assert_eq!(lp.on_frame(5000.0, &mut st, &mut r, &mut ticks), Some(DEFAULT_FRAME_DT));
        assert!(ticks.fire());
        let dt = lp.on_frame(5050.0, &mut st, &mut r, &mut ticks).unwrap();
        assert!((dt - 0.05).abs() < 1e-6);
        assert_eq!(lp.frames(), 2);
        assert_eq!(r.clears.len(), 2);
        assert_eq!(r.last_frame, 3);
        let age = st.particles()[0].time_alive();
        assert!((age - (DEFAULT_FRAME_DT + 0.05)).abs() < 1e-6);
    }

    #[test]
    fn stop_ends_the_loop_without_rescheduling() {
        let mut lp = RenderLoop::new();
        let mut st = stage();
        let mut r = RecordingRenderer::default();
        let mut ticks = FakeTicks::default();

        lp.start(&mut ticks);
        ticks.fire();
        lp.on_frame(0.0, &mut st, &mut r, &mut ticks);
        lp.stop();
        // The frame already requested still fires, but does nothing.
        assert!(ticks.fire());
        assert_eq!(lp.on_frame(16.0, &mut st, &mut r, &mut ticks), None);
        assert!(!ticks.fire());
        assert_eq!(lp.state(), LoopState::Idle);
        assert_eq!(lp.frames(), 1);
    }

    #[test]
    fn start_while_running_is_rejected() {
        let mut lp = RenderLoop::new();
        let mut ticks = FakeTicks::default();
        assert!(lp.start(&mut ticks));
        assert!(!lp.start(&mut ticks));
        assert_eq!(ticks.requested, 1);
    }

    #[test]
    fn restart_after_stop_forgets_old_timestamp() {
        let mut lp = RenderLoop::new();
        let mut st = stage();
        let mut r = RecordingRenderer::default();
        let mut ticks = FakeTicks::default();
        lp.start(&mut ticks);
        lp.on_frame(1000.0, &mut st, &mut r, &mut ticks);
        lp.stop();
        lp.start(&mut ticks);
        assert_eq!(lp.on_frame(90_000.0, &mut st, &mut r, &mut ticks), Some(DEFAULT_FRAME_DT));
    }
}
