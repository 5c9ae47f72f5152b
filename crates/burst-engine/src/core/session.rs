//! Page-wide session state.

use glam::Vec2;

use crate::api::types::ActivationSource;

/// Page-wide mutable state shared by the input handlers and the stage.
///
/// Holds the one-shot activation flag, the latest pointer position and the
/// viewport size. All mutation goes through the methods below.
#[derive(Debug, Clone)]
pub struct Session {
    activation: Option<ActivationSource>,
    steering: Option<Vec2>,
    viewport: Vec2,
}

impl Session {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            activation: None,
            steering: None,
            viewport: Vec2::new(width, height),
        }
    }

    /// Record the activation. Only the first call wins; later calls return false.
    pub fn activate(&mut self, source: ActivationSource) -> bool {
        if self.activation.is_some() {
            return false;
        }
        self.activation = Some(source);
        true
    }

    pub fn is_activated(&self) -> bool {
        self.activation.is_some()
    }

    /// Which trigger won, if any.
    pub fn activation_source(&self) -> Option<ActivationSource> {
        self.activation
    }

    pub fn set_steering_point(&mut self, x: f32, y: f32) {
        self.steering = Some(Vec2::new(x, y));
    }

    /// `None` until the pointer or a touch has moved at least once.
    pub fn steering_point(&self) -> Option<Vec2> {
        self.steering
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }
}
