use std::collections::HashMap;
use std::sync::Arc;

use crate::animation::action::AnimationAction;
use crate::animation::clip::AnimationClip;

/// Owns one [`AnimationAction`] per clip, keyed by clip name.
///
/// Built once from the character's clips after loading and read-only as a
/// registry thereafter; `update` must be called every frame so looping clips
/// keep advancing even while the character idles.
#[derive(Debug, Default)]
pub struct AnimationMixer {
    actions: HashMap<String, AnimationAction>,
}

impl AnimationMixer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Builds the registry from a set of loaded clips.
    #[must_use]
    pub fn from_clips(clips: impl IntoIterator<Item = AnimationClip>) -> Self {
        let mut mixer = Self::new();
        for clip in clips {
            mixer.register(clip.into_shared());
        }
        mixer
    }

    /// Registers a clip, creating its (initially stopped) action.
    pub fn register(&mut self, clip: Arc<AnimationClip>) {
        let name = clip.name.clone();
        self.actions.insert(name, AnimationAction::new(clip));
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    #[must_use]
    pub fn action(&self, name: &str) -> Option<&AnimationAction> {
        self.actions.get(name)
    }

    pub fn action_mut(&mut self, name: &str) -> Option<&mut AnimationAction> {
        self.actions.get_mut(name)
    }

    /// Crossfades from one action to another: the outgoing action fades out
    /// while the incoming one resets, fades in and plays. Never a hard cut.
    ///
    /// Unknown names indicate a registry/controller skew; the controller
    /// validates its clip names at construction, so this only logs and leaves
    /// the blend untouched.
    pub fn crossfade(&mut self, from: &str, to: &str, duration: f32) {
        if !self.actions.contains_key(from) || !self.actions.contains_key(to) {
            log::error!("crossfade with unregistered action: {from} -> {to}");
            return;
        }
        if let Some(current) = self.actions.get_mut(from) {
            current.fade_out(duration);
        }
        if let Some(next) = self.actions.get_mut(to) {
            next.reset();
            next.fade_in(duration);
            next.play();
        }
    }

    /// Advances every action by `dt`. Called once per frame, in every frame
    /// the character exists, regardless of movement state.
    pub fn update(&mut self, dt: f32) {
        for action in self.actions.values_mut() {
            action.update(dt);
        }
    }
}
