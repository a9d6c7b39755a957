#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Frame-driven 3D character locomotion.
//!
//! The crate covers the movement/animation core of a character demo and
//! nothing around it: per frame, a [`DirectionIntent`] (from keyboard or
//! joystick) is turned into a camera-relative world displacement, the
//! character is steered toward its travel direction, the idle/locomotion
//! clips are crossfaded, the animation mixer advances and the follow camera
//! is re-targeted. Rendering, asset decoding and windowing stay with the host.

pub mod animation;
pub mod character;
pub mod errors;
pub mod input;
pub mod scene;
pub mod utils;

pub use animation::{AnimationAction, AnimationClip, AnimationMixer, LoopMode};
pub use character::{CharacterControls, ControllerConfig};
pub use errors::{Result, StrollError};
pub use input::{DirectionIntent, InputSource, JoystickSource, KeyBindings, KeyboardSource};
pub use scene::Transform;
pub use utils::{OrbitControls, Timer};
