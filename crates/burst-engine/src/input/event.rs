/// Input event types the page forwards into the app.
/// Coordinates are viewport pixels; key fields carry the DOM strings.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A click on the central dot.
    Click,
    /// A key was pressed. `code` is `KeyboardEvent.code`, `key` is `KeyboardEvent.key`.
    KeyDown { code: String, key: String },
    /// The mouse cursor moved.
    PointerMove { x: f32, y: f32 },
    /// The first touch point moved.
    TouchMove { x: f32, y: f32 },
    /// A right-click / context-menu request.
    ContextMenu,
    /// An accelerometer reading (acceleration including gravity).
    DeviceMotion { x: f32, y: f32, z: f32 },
    /// The viewport changed size.
    Resize { width: f32, height: f32 },
}

impl InputEvent {
    /// Build a key event from the two DOM strings.
    pub fn key(code: &str, key: &str) -> Self {
        Self::KeyDown {
            code: code.to_string(),
            key: key.to_string(),
        }
    }

    /// Pointer or touch position carried by this event, if any.
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            Self::PointerMove { x, y } | Self::TouchMove { x, y } => Some((x, y)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_helper_copies_strings() {
        let ev = InputEvent::key("KeyA", "a");
        assert_eq!(ev, InputEvent::KeyDown { code: "KeyA".into(), key: "a".into() });
    }

    #[test]
    fn position_only_for_pointer_like_events() {
        assert_eq!(InputEvent::TouchMove { x: 1.0, y: 2.0 }.position(), Some((1.0, 2.0)));
        assert_eq!(InputEvent::PointerMove { x: 3.0, y: 4.0 }.position(), Some((3.0, 4.0)));
        assert_eq!(InputEvent::Click.position(), None);
    }
}
