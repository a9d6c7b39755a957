use std::sync::Arc;

use crate::animation::clip::AnimationClip;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopMode {
    Once,
    Loop,
}

/// An in-flight weight fade.
#[derive(Debug, Clone, Copy)]
struct Fade {
    start_weight: f32,
    target_weight: f32,
    duration: f32,
    elapsed: f32,
}

/// A stateful playback handle bound to one clip.
///
/// Supports the three.js-style blend surface: `play`, `stop`, `reset`,
/// `fade_in`, `fade_out`, a blend weight and a playback-rate multiplier.
/// Crossfades between actions are built from a `fade_out` on the outgoing
/// action and `reset` + `fade_in` + `play` on the incoming one.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub time_scale: f32,
    pub weight: f32,
    pub loop_mode: LoopMode,
    pub paused: bool,
    pub enabled: bool,

    fade: Option<Fade>,
}

impl AnimationAction {
    /// Creates a stopped action for `clip`, inheriting the clip's
    /// playback-rate override.
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        let time_scale = clip.time_scale;
        Self {
            clip,
            time: 0.0,
            time_scale,
            weight: 1.0,
            loop_mode: LoopMode::Loop,
            paused: false,
            enabled: false,
            fade: None,
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    /// Whether the action currently contributes to the blend.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.enabled && !self.paused
    }

    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Starts (or resumes) playback at the current time and weight.
    pub fn play(&mut self) {
        self.enabled = true;
        self.paused = false;
    }

    /// Halts playback and removes the action from the blend.
    pub fn stop(&mut self) {
        self.enabled = false;
        self.fade = None;
    }

    /// Rewinds to the clip start and re-arms playback.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.paused = false;
        self.enabled = true;
    }

    /// Schedules a fade from zero up to full weight over `duration` seconds.
    pub fn fade_in(&mut self, duration: f32) {
        self.weight = 0.0;
        self.enabled = true;
        self.schedule_fade(0.0, 1.0, duration);
    }

    /// Schedules a fade from the current weight down to zero over `duration`
    /// seconds. The action disables itself once the fade completes.
    pub fn fade_out(&mut self, duration: f32) {
        self.schedule_fade(self.weight, 0.0, duration);
    }

    fn schedule_fade(&mut self, start: f32, target: f32, duration: f32) {
        if duration <= 0.0 {
            self.weight = target;
            self.fade = None;
            if target <= 0.0 {
                self.enabled = false;
            }
            return;
        }
        self.fade = Some(Fade {
            start_weight: start,
            target_weight: target,
            duration,
            elapsed: 0.0,
        });
    }

    /// Core logic: advance the fade and the clip time.
    pub fn update(&mut self, dt: f32) {
        if let Some(mut fade) = self.fade.take() {
            fade.elapsed += dt;
            let t = (fade.elapsed / fade.duration).min(1.0);
            self.weight = fade.start_weight + (fade.target_weight - fade.start_weight) * t;
            if t < 1.0 {
                self.fade = Some(fade);
            } else if fade.target_weight <= 0.0 {
                self.enabled = false;
            }
        }

        if self.paused || !self.enabled {
            return;
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            return;
        }

        self.time += dt * self.time_scale;

        match self.loop_mode {
            LoopMode::Once => {
                // Play once, stop at end or start
                if self.time >= duration {
                    self.time = duration;
                    self.paused = true; // Auto-pause
                } else if self.time < 0.0 {
                    self.time = 0.0;
                    self.paused = true;
                }
            }
            LoopMode::Loop => {
                // Standard loop: modulo
                if self.time >= duration {
                    self.time %= duration;
                } else if self.time < 0.0 {
                    // Handle reverse playback loop
                    self.time = duration + (self.time % duration);
                }
            }
        }
    }
}
