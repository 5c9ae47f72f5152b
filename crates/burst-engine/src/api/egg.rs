//! The page session: triggers in, UI cues and disc frames out.

use glam::Vec2;

use crate::api::config::{ConfigError, EggConfig};
use crate::api::types::{ActivationSource, UiCue};
use crate::contact::{CopyPath, Toast};
use crate::core::frame_loop::{LoopState, RenderLoop, TickSource};
use crate::core::session::Session;
use crate::core::timeline::Timeline;
use crate::input::event::InputEvent;
use crate::renderer::DiscBuffer;
use crate::systems::effects::{DiscColor, Rng, Stage};
use crate::triggers::{Detection, TriggerDetector};

/// Seed used when the config does not provide one.
pub const DEFAULT_SEED: u64 = 42;

/// Work deferred to a later host time.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Scheduled {
    Cue(UiCue),
    SpawnStage,
    /// Hide the toast unless it was re-shown in the meantime.
    ToastCheck,
}

/// One page session: trigger detection, activation choreography, the
/// particle stage and its frame loop, and the contact action.
///
/// The host forwards DOM events through [`handle_input`](Self::handle_input),
/// calls [`frame`](Self::frame) whenever the tick source fires, and applies
/// the [`UiCue`]s it drains after each call.
pub struct EasterEgg<T: TickSource> {
    config: EggConfig,
    palette: Vec<DiscColor>,
    session: Session,
    detector: TriggerDetector,
    timeline: Timeline<Scheduled>,
    stage: Option<Stage>,
    frame_loop: RenderLoop,
    discs: DiscBuffer,
    cues: Vec<UiCue>,
    toast: Toast,
    ticks: T,
}

impl<T: TickSource> EasterEgg<T> {
    /// Start a session at host time `now_ms` on a `viewport`-sized page.
    pub fn new(
        config: EggConfig,
        viewport: Vec2,
        now_ms: f64,
        ticks: T,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let palette = config.palette_colors()?;
        let detector = TriggerDetector::new(&config, now_ms);
        let toast = Toast::new(config.timings.toast_ms);
        let discs = DiscBuffer::with_capacity(config.particle_count);

        let mut egg = Self {
            palette,
            session: Session::new(viewport.x, viewport.y),
            detector,
            timeline: Timeline::new(),
            stage: None,
            frame_loop: RenderLoop::new(),
            discs,
            cues: Vec::new(),
            toast,
            ticks,
            config,
        };
        let reveal = now_ms + egg.config.timings.hint_reveal_ms;
        egg.schedule(reveal, Scheduled::Cue(UiCue::HintShown));
        Ok(egg)
    }

    /// Feed one input event. Returns true when the host should suppress
    /// the event's default action (the native context menu).
    pub fn handle_input(&mut self, event: &InputEvent, now_ms: f64) -> bool {
        if let Some((x, y)) = event.position() {
            self.set_steering_point(x, y);
        }
        match event {
            InputEvent::PointerMove { x, y } => {
                if !self.session.is_activated() {
                    let viewport = self.session.viewport();
                    let detection = self.detector.pointer_move(Vec2::new(*x, *y), viewport);
                    self.apply(detection, now_ms);
                }
                false
            }
            InputEvent::TouchMove { .. } => false,
            InputEvent::Click => {
                if self.session.is_activated() {
                    return false;
                }
                self.cues.push(UiCue::DotPulseOn);
                let off = now_ms + self.config.timings.click_pulse_ms;
                self.schedule(off, Scheduled::Cue(UiCue::DotPulseOff));
                let detection = self.detector.click();
                self.apply(detection, now_ms);
                false
            }
            InputEvent::KeyDown { code, key } => {
                if !self.session.is_activated() {
                    let detection = self.detector.key_down(code, key);
                    self.apply(detection, now_ms);
                }
                false
            }
            InputEvent::ContextMenu => {
                if self.session.is_activated() {
                    return false;
                }
                let detection = self.detector.context_menu();
                self.apply(detection, now_ms);
                true
            }
            InputEvent::DeviceMotion { x, y, z } => {
                if !self.session.is_activated() {
                    let detection = self.detector.device_motion([*x, *y, *z], now_ms);
                    self.apply(detection, now_ms);
                }
                false
            }
            InputEvent::Resize { width, height } => {
                self.resize(*width, *height);
                false
            }
        }
    }

    fn apply(&mut self, detection: Detection, now_ms: f64) {
        if detection.hint_advanced {
            let index = self.detector.hints().index() as u32;
            self.cues.push(UiCue::HintChanged { index });
        }
        if let Some(source) = detection.activation {
            self.activate(source, now_ms);
        }
    }

    /// Unlock the celebration. Only the first call has any effect.
    pub fn activate(&mut self, source: ActivationSource, now_ms: f64) -> bool {
        if !self.session.activate(source) {
            return false;
        }
        log::info!("easter egg triggered by: {}", source);

        self.cues.extend([
            UiCue::Activated { source },
            UiCue::DotHidden,
            UiCue::HintHidden,
            UiCue::GlitchOn,
        ]);
        let t = self.config.timings.clone();
        self.schedule(now_ms + t.glitch_ms, Scheduled::Cue(UiCue::GlitchOff));
        self.schedule(now_ms + t.achievement_delay_ms, Scheduled::Cue(UiCue::AchievementShown));
        self.schedule(now_ms + t.achievement_delay_ms, Scheduled::SpawnStage);
        self.schedule(now_ms + t.email_reveal_ms, Scheduled::Cue(UiCue::AchievementHidden));
        self.schedule(now_ms + t.email_reveal_ms, Scheduled::Cue(UiCue::EmailRevealed));
        true
    }

    /// Frame callback: fire due timers, then advance and draw the stage if the loop runs.
    pub fn frame(&mut self, now_ms: f64) {
        for item in self.timeline.poll(now_ms) {
            match item {
                Scheduled::Cue(cue) => self.cues.push(cue),
                Scheduled::SpawnStage => self.spawn_stage(),
                Scheduled::ToastCheck => {
                    if !self.toast.is_visible(now_ms) {
                        self.cues.push(UiCue::ToastHidden);
                    }
                }
            }
        }
        if !self.timeline.is_empty() {
            self.ticks.request_frame();
        }
        if let Some(stage) = self.stage.as_mut() {
            self.frame_loop.on_frame(now_ms, stage, &mut self.discs, &mut self.ticks);
        }
    }

    fn spawn_stage(&mut self) {
        if self.stage.is_some() {
            return;
        }
        let mut stage = Stage::spawn(
            self.session.viewport(),
            self.config.particle_count,
            &self.palette,
            self.config.particles.clone(),
            Rng::new(self.config.seed.unwrap_or(DEFAULT_SEED)),
        );
        if let Some(point) = self.session.steering_point() {
            stage.set_steering_point(point.x, point.y);
        }
        self.cues.push(UiCue::StageSpawned { particles: stage.len() as u32 });
        self.stage = Some(stage);
        self.frame_loop.start(&mut self.ticks);
    }

    /// Stop animating. The particles freeze where they are.
    pub fn stop_animation(&mut self) {
        self.frame_loop.stop();
    }

    /// Latest pointer/touch position, shared with the stage.
    pub fn set_steering_point(&mut self, x: f32, y: f32) {
        self.session.set_steering_point(x, y);
        if let Some(stage) = self.stage.as_mut() {
            stage.set_steering_point(x, y);
        }
    }

    /// New viewport size. The stage sees it on its next advance.
    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("resize: {}x{}", width, height);
        self.session.resize(width, height);
        if let Some(stage) = self.stage.as_mut() {
            stage.resize(width, height);
        }
    }

    /// Confirm a finished copy of the contact string: show the toast and,
    /// when the primary clipboard took it, highlight the email.
    pub fn contact_copied(&mut self, path: CopyPath, now_ms: f64) {
        let until = self.toast.show(&self.config.toast_message, now_ms);
        self.cues.push(UiCue::ToastShown);
        self.schedule(until, Scheduled::ToastCheck);
        if path == CopyPath::Primary {
            self.cues.push(UiCue::EmailHighlightOn);
            let off = now_ms + self.config.timings.highlight_ms;
            self.schedule(off, Scheduled::Cue(UiCue::EmailHighlightOff));
        }
    }

    fn schedule(&mut self, due_ms: f64, item: Scheduled) {
        self.timeline.schedule(due_ms, item);
        self.ticks.request_frame();
    }

    /// Take the cues produced since the last drain, oldest first.
    pub fn drain_cues(&mut self) -> Vec<UiCue> {
        std::mem::take(&mut self.cues)
    }

    pub fn config(&self) -> &EggConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_activated(&self) -> bool {
        self.session.is_activated()
    }

    pub fn stage(&self) -> Option<&Stage> {
        self.stage.as_ref()
    }

    pub fn loop_state(&self) -> LoopState {
        self.frame_loop.state()
    }

    /// The most recently drawn frame.
    pub fn discs(&self) -> &DiscBuffer {
        &self.discs
    }

    pub fn hint_text(&self) -> &str {
        self.detector.hints().current()
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn ticks(&self) -> &T {
        &self.ticks
    }

    pub fn ticks_mut(&mut self) -> &mut T {
        &mut self.ticks
    }
}
