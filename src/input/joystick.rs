use glam::Vec2;

use crate::input::intent::{DirectionIntent, InputSource};

/// On-screen joystick input source.
///
/// Consumes the widget's push events: `handle_move` with the stick vector
/// (x = turn, y = forward/back, both in `[-1, 1]`) while the stick is held,
/// and `handle_end` when it is released.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoystickSource {
    intent: DirectionIntent,
}

impl JoystickSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a stick-move event.
    ///
    /// Each axis is split by sign into the two opposing intents: positive y
    /// drives forward, negative y backward; positive x drives right, negative
    /// x left. Magnitudes pass through unchanged apart from clamping to
    /// `[0, 1]`; there is no deadzone or smoothing.
    pub fn handle_move(&mut self, vector: Vec2) {
        self.intent = DirectionIntent {
            forward: vector.y.max(0.0),
            backward: (-vector.y).max(0.0),
            left: (-vector.x).max(0.0),
            right: vector.x.max(0.0),
        }
        .clamped();
    }

    /// Feeds a stick-release event. All four intents drop to zero immediately.
    pub fn handle_end(&mut self) {
        self.intent = DirectionIntent::ZERO;
    }
}

impl InputSource for JoystickSource {
    fn intent(&self) -> DirectionIntent {
        self.intent
    }
}
