//! Character motion control
//!
//! [`CharacterControls`] is the per-frame state machine driving a character:
//! direction intents in, world-space movement, orientation, animation
//! crossfades and camera follow out.

pub mod controller;

pub use controller::{CharacterControls, ControllerConfig};
