pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod triggers;
pub mod contact;

pub use glam;

// Re-export key types at crate root for convenience
pub use api::config::{EggConfig, ParticleTuning, TriggerConfig, Timings, ConfigError};
pub use api::egg::{EasterEgg, DEFAULT_SEED};
pub use api::types::{ActivationSource, UiCue, CueEvent};
pub use crate::core::frame_loop::{RenderLoop, LoopState, TickSource};
pub use crate::core::session::Session;
pub use crate::core::time::{FrameClock, DEFAULT_FRAME_DT};
pub use crate::core::timeline::Timeline;
pub use input::event::InputEvent;
pub use renderer::{Renderer, DiscInstance, DiscBuffer};
pub use systems::effects::{
    Particle, Phase, Surroundings, Stage, DiscColor,
    RandomSource, Rng, SequenceSource, DEFAULT_PALETTE,
};
pub use systems::render::draw_stage;
pub use triggers::{TriggerDetector, Detection, HintState};
pub use contact::{Clipboard, ClipboardError, CopyPath, Toast, copy_with_fallback};
