use glam::Vec2;

use super::hints::HintState;
use super::motion::{EdgeDwell, ShakeSampler};
use super::sequence::{KeyWindow, TypedBuffer};
use crate::api::config::EggConfig;
use crate::api::types::ActivationSource;

/// Outcome of feeding one input event to the detector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Detection {
    /// Set when this event completed a trigger.
    pub activation: Option<ActivationSource>,
    /// The hint moved forward (or was re-shown at the last message).
    pub hint_advanced: bool,
}

impl Detection {
    fn activate(source: ActivationSource) -> Self {
        Self { activation: Some(source), hint_advanced: false }
    }

    fn hint() -> Self {
        Self { activation: None, hint_advanced: true }
    }
}

/// Watches raw input for the hidden triggers.
///
/// The detector only reports; gating on the activation flag is the
/// caller's job, so events after activation should not be fed in.
#[derive(Debug, Clone)]
pub struct TriggerDetector {
    click_threshold: u32,
    hint_after_clicks: u32,
    clicks: u32,
    keys: KeyWindow,
    typed: TypedBuffer,
    words: Vec<String>,
    edge: EdgeDwell,
    shake: ShakeSampler,
    hints: HintState,
}

impl TriggerDetector {
    pub fn new(config: &EggConfig, started_ms: f64) -> Self {
        let t = &config.triggers;
        Self {
            click_threshold: t.click_threshold,
            hint_after_clicks: t.hint_after_clicks,
            clicks: 0,
            keys: KeyWindow::new(t.konami_code.clone()),
            typed: TypedBuffer::new(t.typed_buffer_len),
            words: t.trigger_words.iter().map(|w| w.to_lowercase()).collect(),
            edge: EdgeDwell::new(t.edge_margin, t.edge_dwell_threshold),
            shake: ShakeSampler::new(t.shake_threshold, t.shake_interval_ms, started_ms),
            hints: HintState::new(config.hints.clone()),
        }
    }

    /// A click on the dot.
    pub fn click(&mut self) -> Detection {
        self.clicks += 1;
        let mut detection = Detection::default();
        if self.clicks >= self.hint_after_clicks {
            self.hints.advance();
            detection.hint_advanced = true;
        }
        if self.clicks >= self.click_threshold {
            detection.activation = Some(ActivationSource::Click);
        }
        detection
    }

    /// A key press: `code` is the physical key (`KeyboardEvent.code`),
    /// `key` the produced value (`KeyboardEvent.key`).
    pub fn key_down(&mut self, code: &str, key: &str) -> Detection {
        if self.keys.push(code) {
            return Detection::activate(ActivationSource::Konami);
        }
        if self.typed.push_key(key) && self.typed.find_any(&self.words).is_some() {
            return Detection::activate(ActivationSource::Typing);
        }
        Detection::default()
    }

    /// A pointer sample (mouse only; touches don't count toward dwelling).
    pub fn pointer_move(&mut self, point: Vec2, viewport: Vec2) -> Detection {
        if self.edge.sample(point, viewport) {
            self.hints.advance();
            return Detection::hint();
        }
        Detection::default()
    }

    /// A right-click. Always nudges the hint.
    pub fn context_menu(&mut self) -> Detection {
        self.hints.advance();
        Detection::hint()
    }

    /// An accelerometer reading at host time `now_ms`.
    pub fn device_motion(&mut self, accel: [f32; 3], now_ms: f64) -> Detection {
        if self.shake.sample(accel, now_ms) {
            return Detection::activate(ActivationSource::Shake);
        }
        Detection::default()
    }

    pub fn hints(&self) -> &HintState {
        &self.hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> TriggerDetector {
        TriggerDetector::new(&EggConfig::default(), 0.0)
    }

    #[test]
    fn seventh_click_activates() {
        let mut d = detector();
        for i in 1..7 {
            let det = d.click();
            assert_eq!(det.activation, None, "click {} should not activate", i);
            assert_eq!(det.hint_advanced, i >= 3);
        }
        assert_eq!(d.click().activation, Some(ActivationSource::Click));
        assert_eq!(d.hints().index(), 4);
    }

    #[test]
    fn konami_code_activates() {
        let mut d = detector();
        let seq = [
            ("ArrowUp", "ArrowUp"), ("ArrowUp", "ArrowUp"),
            ("ArrowDown", "ArrowDown"), ("ArrowDown", "ArrowDown"),
            ("ArrowLeft", "ArrowLeft"), ("ArrowRight", "ArrowRight"),
            ("ArrowLeft", "ArrowLeft"), ("ArrowRight", "ArrowRight"),
            ("KeyB", "b"),
        ];
        for (code, key) in seq {
            assert_eq!(d.key_down(code, key).activation, None);
        }
        assert_eq!(d.key_down("KeyA", "a").activation, Some(ActivationSource::Konami));
    }

    #[test]
    fn typing_a_trigger_word_activates() {
        let mut d = detector();
        let word = "Contact";
        let mut last = Detection::default();
        for c in word.chars() {
            let key = c.to_string();
            last = d.key_down(&format!("Key{}", c.to_ascii_uppercase()), &key);
        }
        assert_eq!(last.activation, Some(ActivationSource::Typing));
    }

    #[test]
    fn unrelated_typing_does_nothing() {
        let mut d = detector();
        for c in "rustacean".chars() {
            assert_eq!(d.key_down("KeyX", &c.to_string()).activation, None);
        }
    }

    #[test]
    fn corner_dwell_advances_hint() {
        let mut d = detector();
        let view = Vec2::new(800.0, 600.0);
        let mut advanced = 0;
        for _ in 0..101 {
            if d.pointer_move(Vec2::new(3.0, 597.0), view).hint_advanced {
                advanced += 1;
            }
        }
        assert_eq!(advanced, 1);
        assert_eq!(d.hints().index(), 1);
    }

    #[test]
    fn context_menu_nudges_hint() {
        let mut d = detector();
        assert!(d.context_menu().hint_advanced);
        assert_eq!(d.hints().current(), "try clicking me");
    }

    #[test]
    fn shake_activates() {
        let mut d = detector();
        assert_eq!(d.device_motion([0.0, 9.8, 0.0], 200.0).activation, None);
        let shaken = d.device_motion([40.0, 9.8, 30.0], 350.0);
        assert_eq!(shaken.activation, Some(ActivationSource::Shake));
    }
}
