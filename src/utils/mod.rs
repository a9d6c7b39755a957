//! Utility Module
//!
//! - [`OrbitControls`]: follow-camera rig with user orbit/zoom
//! - [`time`]: frame timing utilities

pub mod orbit_control;
pub mod time;

pub use orbit_control::OrbitControls;
pub use time::Timer;
