use burst_engine::{
    ActivationSource, ClipboardError, ConfigError, CopyPath, CueEvent, DiscInstance, EasterEgg,
    EggConfig, InputEvent, TickSource,
};
use burst_engine::glam::Vec2;

/// Frame requests recorded for the page, which owns `requestAnimationFrame`.
#[derive(Debug, Default)]
pub struct HostTicks {
    requested: bool,
}

impl HostTicks {
    /// Consume the pending request, if any.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.requested)
    }
}

impl TickSource for HostTicks {
    fn request_frame(&mut self) {
        self.requested = true;
    }
}

/// Wires an [`EasterEgg`] to flat buffers the page can read.
///
/// `lib.rs` keeps one runner in a `thread_local!` and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct EggRunner {
    egg: EasterEgg<HostTicks>,
    /// Cues accumulated since the page last cleared them.
    cue_buffer: Vec<CueEvent>,
}

impl EggRunner {
    pub fn new(
        config: EggConfig,
        width: f32,
        height: f32,
        now_ms: f64,
    ) -> Result<Self, ConfigError> {
        let egg = EasterEgg::new(config, Vec2::new(width, height), now_ms, HostTicks::default())?;
        Ok(Self {
            egg,
            cue_buffer: Vec::with_capacity(32),
        })
    }

    /// Forward an input event. Returns true when the page should call `preventDefault`.
    pub fn push_input(&mut self, event: InputEvent, now_ms: f64) -> bool {
        let suppress = self.egg.handle_input(&event, now_ms);
        self.flush_cues();
        suppress
    }

    /// Run one animation frame. Returns whether another frame is wanted.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        // The request being serviced right now is spent.
        self.egg.ticks_mut().take();
        self.egg.frame(now_ms);
        self.flush_cues();
        self.egg.ticks_mut().take()
    }

    /// Consume a frame request raised outside `frame` (input, timers).
    pub fn take_frame_request(&mut self) -> bool {
        self.egg.ticks_mut().take()
    }

    /// Activate by tag. Unknown tags are logged and ignored.
    pub fn activate(&mut self, tag: &str, now_ms: f64) -> bool {
        let Some(source) = ActivationSource::from_tag(tag) else {
            log::warn!("unknown activation source {:?}", tag);
            return false;
        };
        let activated = self.egg.activate(source, now_ms);
        self.flush_cues();
        activated
    }

    /// Apply the settled outcome of a contact copy. A success shows the
    /// toast (and the highlight on the primary path); a failure is only logged.
    pub fn finish_copy(&mut self, outcome: Result<CopyPath, ClipboardError>, now_ms: f64) -> bool {
        match outcome {
            Ok(path) => {
                self.egg.contact_copied(path, now_ms);
                self.flush_cues();
                true
            }
            Err(err) => {
                log::error!("burst-web: copy failed: {}", err);
                false
            }
        }
    }

    pub fn stop(&mut self) {
        self.egg.stop_animation();
    }

    fn flush_cues(&mut self) {
        self.cue_buffer
            .extend(self.egg.drain_cues().into_iter().map(CueEvent::from));
    }

    pub fn clear_cues(&mut self) {
        self.cue_buffer.clear();
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn discs_ptr(&self) -> *const f32 {
        self.egg.discs().instances_ptr()
    }

    pub fn disc_count(&self) -> u32 {
        self.egg.discs().instance_count() as u32
    }

    pub fn disc_floats(&self) -> u32 {
        DiscInstance::FLOATS as u32
    }

    pub fn cues_ptr(&self) -> *const f32 {
        self.cue_buffer.as_ptr() as *const f32
    }

    pub fn cue_count(&self) -> u32 {
        self.cue_buffer.len() as u32
    }

    pub fn cues(&self) -> &[CueEvent] {
        &self.cue_buffer
    }

    // ---- Page state ----

    pub fn hint_text(&self) -> String {
        self.egg.hint_text().to_string()
    }

    pub fn toast_text(&self) -> String {
        self.egg.toast().message().to_string()
    }

    pub fn toast_visible(&self, now_ms: f64) -> bool {
        self.egg.toast().is_visible(now_ms)
    }

    pub fn contact(&self) -> String {
        self.egg.config().contact.clone()
    }

    pub fn is_activated(&self) -> bool {
        self.egg.is_activated()
    }

    /// Surface size the last frame was drawn for.
    pub fn surface_width(&self) -> f32 {
        self.egg.discs().surface().x
    }

    pub fn surface_height(&self) -> f32 {
        self.egg.discs().surface().y
    }
}
