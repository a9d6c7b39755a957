use std::sync::Arc;

/// A named unit of motion data.
///
/// The clip's keyframe tracks live in the rendering engine; the locomotion
/// core only needs the name, the duration and the per-clip playback-rate
/// override (e.g. a locomotion clip authored at half speed plays at 2x).
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    pub time_scale: f32,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration,
            time_scale: 1.0,
        }
    }

    /// Sets the per-clip playback-rate override.
    #[must_use]
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
