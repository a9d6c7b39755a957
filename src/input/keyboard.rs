use std::collections::HashSet;

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::input::intent::{DirectionIntent, InputSource};

/// Physical keys bound to each logical direction.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub forward: Vec<KeyCode>,
    pub backward: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
}

impl Default for KeyBindings {
    /// WASD plus the arrow keys.
    fn default() -> Self {
        Self {
            forward: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            backward: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
        }
    }
}

/// Keyboard-driven input source.
///
/// Tracks the set of currently held keys; each direction reads 1.0 while any
/// of its bound keys is held and 0.0 otherwise (binary, not analog).
#[derive(Debug, Clone, Default)]
pub struct KeyboardSource {
    bindings: KeyBindings,
    pressed: HashSet<KeyCode>,
}

impl KeyboardSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pressed: HashSet::new(),
        }
    }

    /// Feeds a key event from the window event loop.
    pub fn handle_key_event(&mut self, state: ElementState, key: KeyCode) {
        match state {
            ElementState::Pressed => {
                self.pressed.insert(key);
            }
            ElementState::Released => {
                self.pressed.remove(&key);
            }
        }
    }

    /// Drops all held keys (e.g. on window focus loss).
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    #[must_use]
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.pressed.contains(k))
    }
}

impl InputSource for KeyboardSource {
    fn intent(&self) -> DirectionIntent {
        let held = |keys: &[KeyCode]| if self.any_held(keys) { 1.0 } else { 0.0 };
        DirectionIntent {
            forward: held(&self.bindings.forward),
            backward: held(&self.bindings.backward),
            left: held(&self.bindings.left),
            right: held(&self.bindings.right),
        }
    }
}
