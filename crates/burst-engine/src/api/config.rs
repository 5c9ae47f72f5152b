//! Session configuration, loaded from JSON with per-field defaults.

use serde::{Deserialize, Serialize};

use crate::systems::effects::{DiscColor, DEFAULT_PALETTE};

/// Errors produced while loading or validating an [`EggConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("particle count must be positive")]
    NoParticles,
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("invalid palette color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
    #[error("{name} range is invalid: [{lo}, {hi})")]
    InvalidRange { name: &'static str, lo: f32, hi: f32 },
    #[error("key sequence must not be empty")]
    EmptyKeySequence,
    #[error("typed buffer length must be positive")]
    EmptyTypedBuffer,
    #[error("at least one hint message is required")]
    NoHints,
}

/// Top-level configuration for one page session.
/// Loaded from JSON at init; every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EggConfig {
    /// The string copied to the clipboard by the contact action.
    pub contact: String,
    /// Message shown in the toast after a successful copy.
    pub toast_message: String,
    /// Number of particles spawned on activation (default: 90).
    pub particle_count: usize,
    /// `#RRGGBB` palette; each particle picks one entry uniformly.
    pub palette: Vec<String>,
    /// Hint messages, revealed progressively.
    pub hints: Vec<String>,
    /// RNG seed. `None` lets the host pick one (e.g. from the clock).
    pub seed: Option<u64>,
    pub particles: ParticleTuning,
    pub triggers: TriggerConfig,
    pub timings: Timings,
}

impl Default for EggConfig {
    fn default() -> Self {
        Self {
            contact: "info@tsitsipas.xyz".to_string(),
            toast_message: "Copied! Now you have no excuse 😉".to_string(),
            particle_count: 90,
            palette: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
            hints: vec![
                "something's hidden...".to_string(),
                "try clicking me".to_string(),
                "or maybe typing?".to_string(),
                "getting warmer...".to_string(),
                "almost there!".to_string(),
            ],
            seed: None,
            particles: ParticleTuning::default(),
            triggers: TriggerConfig::default(),
            timings: Timings::default(),
        }
    }
}

impl EggConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        self.palette_colors()?;
        if self.hints.is_empty() {
            return Err(ConfigError::NoHints);
        }
        if self.triggers.konami_code.is_empty() {
            return Err(ConfigError::EmptyKeySequence);
        }
        if self.triggers.typed_buffer_len == 0 {
            return Err(ConfigError::EmptyTypedBuffer);
        }
        self.particles.validate()
    }

    /// Parse the palette into colors.
    pub fn palette_colors(&self) -> Result<Vec<DiscColor>, ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        self.palette
            .iter()
            .map(|hex| {
                DiscColor::from_hex(hex).ok_or_else(|| ConfigError::InvalidColor(hex.clone()))
            })
            .collect()
    }
}

/// Per-particle motion constants.
///
/// The two damping factors are applied once per `update` call, not per
/// second, so motion speed depends on the host frame rate (~60 Hz assumed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleTuning {
    /// Seconds of explosion phase before wandering starts (default: 3.0).
    pub explosion_duration: f32,
    /// Initial radial speed range, in surface units per step.
    pub explosion_speed: [f32; 2],
    pub radius: [f32; 2],
    pub opacity: [f32; 2],
    /// Rotation speed is drawn from `[-spread/2, spread/2)`.
    pub rotation_spread: f32,
    pub wander_speed: [f32; 2],
    /// Seconds between wander heading re-rolls.
    pub wander_interval: [f32; 2],
    pub explosion_damping: f32,
    pub wander_damping: f32,
    /// Distance under which the steering point repels a particle.
    pub flee_radius: f32,
    pub flee_speed: f32,
    /// Speed kept after hitting a wall.
    pub bounce: f32,
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self {
            explosion_duration: 3.0,
            explosion_speed: [8.0, 15.0],
            radius: [5.0, 9.0],
            opacity: [0.6, 0.9],
            rotation_spread: 0.15,
            wander_speed: [0.4, 1.0],
            wander_interval: [3.0, 5.0],
            explosion_damping: 0.97,
            wander_damping: 0.98,
            flee_radius: 150.0,
            flee_speed: 2.5,
            bounce: 0.6,
        }
    }
}

impl ParticleTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("explosion_speed", self.explosion_speed),
            ("radius", self.radius),
            ("opacity", self.opacity),
            ("wander_speed", self.wander_speed),
            ("wander_interval", self.wander_interval),
        ];
        for (name, [lo, hi]) in ranges {
            if !(lo >= 0.0 && lo <= hi) {
                return Err(ConfigError::InvalidRange { name, lo, hi });
            }
        }
        // A zero interval would re-roll the heading forever in one step.
        if self.wander_interval[0] <= 0.0 {
            let [lo, hi] = self.wander_interval;
            return Err(ConfigError::InvalidRange { name: "wander_interval", lo, hi });
        }
        if self.opacity[1] > 1.0 {
            let [lo, hi] = self.opacity;
            return Err(ConfigError::InvalidRange { name: "opacity", lo, hi });
        }
        Ok(())
    }
}

/// Thresholds for the hidden activation triggers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// Clicks on the dot needed to activate (default: 7).
    pub click_threshold: u32,
    /// From this click on, every click advances the hint (default: 3).
    pub hint_after_clicks: u32,
    /// `KeyboardEvent.code` values that activate when typed in order.
    pub konami_code: Vec<String>,
    /// Words that activate when they appear in the typed buffer.
    pub trigger_words: Vec<String>,
    /// Number of most recent typed characters kept (default: 10).
    pub typed_buffer_len: usize,
    /// Normalized acceleration delta that counts as a shake (default: 3000).
    pub shake_threshold: f32,
    /// Minimum milliseconds between motion samples (default: 100).
    pub shake_interval_ms: f64,
    /// Corner region size in pixels (default: 50).
    pub edge_margin: f32,
    /// Corner samples needed before the hint advances (default: 100).
    pub edge_dwell_threshold: u32,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            click_threshold: 7,
            hint_after_clicks: 3,
            konami_code: [
                "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown",
                "ArrowLeft", "ArrowRight", "ArrowLeft", "ArrowRight",
                "KeyB", "KeyA",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            trigger_words: vec!["email".to_string(), "contact".to_string(), "hello".to_string()],
            typed_buffer_len: 10,
            shake_threshold: 3000.0,
            shake_interval_ms: 100.0,
            edge_margin: 50.0,
            edge_dwell_threshold: 100,
        }
    }
}

/// UI choreography delays, in host milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Delay before the first hint appears.
    pub hint_reveal_ms: f64,
    pub click_pulse_ms: f64,
    /// How long the glitch effect lasts after activation.
    pub glitch_ms: f64,
    /// Delay between activation and the achievement banner + explosion.
    pub achievement_delay_ms: f64,
    /// Delay between activation and the email reveal.
    pub email_reveal_ms: f64,
    pub toast_ms: f64,
    /// How long the email stays highlighted after a copy.
    pub highlight_ms: f64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            hint_reveal_ms: 2000.0,
            click_pulse_ms: 300.0,
            glitch_ms: 500.0,
            achievement_delay_ms: 500.0,
            email_reveal_ms: 2500.0,
            toast_ms: 3000.0,
            highlight_ms: 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EggConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.particle_count, 90);
        assert_eq!(config.palette_colors().unwrap().len(), 7);
        assert_eq!(config.triggers.konami_code.len(), 10);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{
            "contact": "me@example.com",
            "particles": { "flee_radius": 200.0 },
            "triggers": { "click_threshold": 3 }
        }"#;
        let config = EggConfig::from_json(json).unwrap();
        assert_eq!(config.contact, "me@example.com");
        assert_eq!(config.particles.flee_radius, 200.0);
        assert_eq!(config.particles.explosion_damping, 0.97);
        assert_eq!(config.triggers.click_threshold, 3);
        assert_eq!(config.triggers.typed_buffer_len, 10);
        assert_eq!(config.timings.toast_ms, 3000.0);
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = EggConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn bad_palette_rejected() {
        let err = EggConfig::from_json(r##"{ "palette": ["#123456", "blue"] }"##).unwrap_err();
        match err {
            ConfigError::InvalidColor(c) => assert_eq!(c, "blue"),
            other => panic!("unexpected error: {}", other),
        }
        let err = EggConfig::from_json(r##"{ "palette": ["#+1+2+3"] }"##).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor(c) if c == "#+1+2+3"));
        let err = EggConfig::from_json(r#"{ "palette": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPalette));
    }

    #[test]
    fn zero_particles_rejected() {
        let err = EggConfig::from_json(r#"{ "particle_count": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoParticles));
    }

    #[test]
    fn inverted_range_rejected() {
        let err = EggConfig::from_json(r#"{ "particles": { "radius": [9.0, 5.0] } }"#).unwrap_err();
        match err {
            ConfigError::InvalidRange { name, .. } => assert_eq!(name, "radius"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn zero_wander_interval_rejected() {
        let json = r#"{ "particles": { "wander_interval": [0.0, 1.0] } }"#;
        assert!(EggConfig::from_json(json).is_err());
    }
}
