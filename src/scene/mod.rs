//! Scene-facing components
//!
//! - [`Transform`]: the character's TRS state with matrix caching; this is the
//!   movable-actor surface the rendering engine reads for drawing.

pub mod transform;

pub use transform::Transform;
