use std::fmt;

use bytemuck::{Pod, Zeroable};

/// Which hidden trigger unlocked the celebration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ActivationSource {
    Click = 0,
    Konami,
    Typing,
    Shake,
}

impl ActivationSource {
    pub const ALL: [ActivationSource; 4] = [Self::Click, Self::Konami, Self::Typing, Self::Shake];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Konami => "konami",
            Self::Typing => "typing",
            Self::Shake => "shake",
        }
    }

    /// Look up a source by its tag (`"click"`, `"konami"`, ...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == tag)
    }
}

impl fmt::Display for ActivationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A UI change the host page should apply (class toggles, banners, toasts).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiCue {
    /// The initial hint fades in.
    HintShown,
    /// The hint text changed; read the new text from the app.
    HintChanged { index: u32 },
    DotPulseOn,
    DotPulseOff,
    DotHidden,
    HintHidden,
    GlitchOn,
    GlitchOff,
    AchievementShown,
    AchievementHidden,
    EmailRevealed,
    EmailHighlightOn,
    EmailHighlightOff,
    ToastShown,
    ToastHidden,
    Activated { source: ActivationSource },
    StageSpawned { particles: u32 },
}

impl UiCue {
    /// Wire identifier written into [`CueEvent::kind`].
    pub fn kind(&self) -> u32 {
        match self {
            Self::HintShown => 1,
            Self::HintChanged { .. } => 2,
            Self::DotPulseOn => 3,
            Self::DotPulseOff => 4,
            Self::DotHidden => 5,
            Self::HintHidden => 6,
            Self::GlitchOn => 7,
            Self::GlitchOff => 8,
            Self::AchievementShown => 9,
            Self::AchievementHidden => 10,
            Self::EmailRevealed => 11,
            Self::EmailHighlightOn => 12,
            Self::EmailHighlightOff => 13,
            Self::ToastShown => 14,
            Self::ToastHidden => 15,
            Self::Activated { .. } => 16,
            Self::StageSpawned { .. } => 17,
        }
    }
}

/// A cue as read by the host through a raw pointer.
/// Generic container: `kind` identifies the cue, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CueEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl CueEvent {
    pub const FLOATS: usize = 4;
}

impl From<UiCue> for CueEvent {
    fn from(cue: UiCue) -> Self {
        let a = match cue {
            UiCue::HintChanged { index } => index as f32,
            UiCue::Activated { source } => source as u8 as f32,
            UiCue::StageSpawned { particles } => particles as f32,
            _ => 0.0,
        };
        Self {
            kind: cue.kind() as f32,
            a,
            b: 0.0,
            c: 0.0,
        }
    }
}
