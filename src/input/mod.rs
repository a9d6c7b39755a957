//! Input normalization
//!
//! Converts raw input into per-frame [`DirectionIntent`] values:
//! - [`KeyboardSource`]: set of held keys, binary intents
//! - [`JoystickSource`]: 2D stick vector, analog intents
//!
//! Both write through the same [`InputSource`] trait so the motion controller
//! is agnostic of the modality.

pub mod intent;
pub mod joystick;
pub mod keyboard;

pub use intent::{DirectionIntent, InputSource};
pub use joystick::JoystickSource;
pub use keyboard::{KeyBindings, KeyboardSource};
