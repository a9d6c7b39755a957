use glam::Vec3;

/// Normalized directional input strength for one frame.
///
/// Each component is the strength of one logical direction in `[0, 1]`.
/// Keyboard input produces binary components; a joystick produces analog
/// magnitudes. Intents are derived fresh every frame and carry no identity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DirectionIntent {
    pub forward: f32,
    pub backward: f32,
    pub left: f32,
    pub right: f32,
}

impl DirectionIntent {
    /// No directional input.
    pub const ZERO: Self = Self {
        forward: 0.0,
        backward: 0.0,
        left: 0.0,
        right: 0.0,
    };

    #[must_use]
    pub fn new(forward: f32, backward: f32, left: f32, right: f32) -> Self {
        Self {
            forward,
            backward,
            left,
            right,
        }
    }

    /// Whether any direction is active this frame.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.forward > 0.0 || self.backward > 0.0 || self.left > 0.0 || self.right > 0.0
    }

    /// Clamps all components into `[0, 1]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            forward: self.forward.clamp(0.0, 1.0),
            backward: self.backward.clamp(0.0, 1.0),
            left: self.left.clamp(0.0, 1.0),
            right: self.right.clamp(0.0, 1.0),
        }
    }

    /// Sums the per-direction contributions into a camera-local vector.
    ///
    /// Forward contributes `(0, 0, -forward)`, backward `(0, 0, +backward)`,
    /// left `(-left, 0, 0)` and right `(+right, 0, 0)`. Opposite directions
    /// cancel component-wise; the result is not normalized.
    #[must_use]
    pub fn local_direction(&self) -> Vec3 {
        Vec3::new(self.right - self.left, 0.0, self.backward - self.forward)
    }
}

/// A per-frame producer of [`DirectionIntent`].
///
/// Keyboard and joystick front-ends both implement this, so the controller
/// never cares which modality is driving the character.
pub trait InputSource {
    /// The intent for the current frame.
    fn intent(&self) -> DirectionIntent;
}
