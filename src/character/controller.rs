use glam::{Quat, Vec3};

use crate::animation::AnimationMixer;
use crate::errors::{Result, StrollError};
use crate::input::DirectionIntent;
use crate::scene::Transform;
use crate::utils::OrbitControls;

/// Tuning and clip wiring for [`CharacterControls`].
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Clip looped while no direction is active.
    pub idle_clip: String,
    /// Clip looped while moving.
    pub locomotion_clip: String,
    /// Optional variant selected while the run toggle is on. With `None` the
    /// toggle has no observable effect on clip choice.
    pub run_clip: Option<String>,

    /// Movement speed in world units per second.
    pub speed: f32,
    /// Maximum turn rate in radians per second.
    pub rotate_speed: f32,
    /// Crossfade duration in seconds for clip transitions.
    pub fade_duration: f32,
}

impl ControllerConfig {
    /// Defaults: 6 units/s and up to 60 rad/s of turn (0.1 units and 1 radian
    /// per frame at 60 fps), 0.2 s crossfades.
    #[must_use]
    pub fn new(idle_clip: impl Into<String>, locomotion_clip: impl Into<String>) -> Self {
        Self {
            idle_clip: idle_clip.into(),
            locomotion_clip: locomotion_clip.into(),
            run_clip: None,
            speed: 6.0,
            rotate_speed: 60.0,
            fade_duration: 0.2,
        }
    }

    #[must_use]
    pub fn with_run_clip(mut self, run_clip: impl Into<String>) -> Self {
        self.run_clip = Some(run_clip.into());
        self
    }

    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn with_rotate_speed(mut self, rotate_speed: f32) -> Self {
        self.rotate_speed = rotate_speed;
        self
    }

    #[must_use]
    pub fn with_fade_duration(mut self, fade_duration: f32) -> Self {
        self.fade_duration = fade_duration;
        self
    }
}

/// Per-character motion and animation state machine.
///
/// Evaluated once per rendered frame: converts the frame's
/// [`DirectionIntent`] into a camera-relative world displacement, turns the
/// character toward its travel direction, crossfades between the idle and
/// locomotion clips, advances the mixer and re-targets the follow camera.
///
/// Two logical states, idle (no intent) and moving (any intent), plus an
/// independent run toggle that selects a clip variant when one is configured.
pub struct CharacterControls {
    config: ControllerConfig,
    current_action: String,
    run_toggle: bool,
}

impl CharacterControls {
    /// Validates the configured clip names against the registry, then starts
    /// the character on the idle clip.
    ///
    /// A missing clip name means the loaded assets and the controller wiring
    /// are out of sync; that is a startup error, never a per-frame one.
    pub fn new(config: ControllerConfig, mixer: &mut AnimationMixer) -> Result<Self> {
        if config.speed <= 0.0 {
            return Err(StrollError::InvalidConfig(format!(
                "speed must be positive, got {}",
                config.speed
            )));
        }
        if config.fade_duration <= 0.0 {
            return Err(StrollError::InvalidConfig(format!(
                "fade_duration must be positive, got {}",
                config.fade_duration
            )));
        }

        let mut required = vec![config.idle_clip.as_str(), config.locomotion_clip.as_str()];
        if let Some(run) = &config.run_clip {
            required.push(run.as_str());
        }
        for name in required {
            if !mixer.contains(name) {
                return Err(StrollError::MissingAnimation(name.to_string()));
            }
        }

        let current_action = config.idle_clip.clone();
        if let Some(idle) = mixer.action_mut(&current_action) {
            idle.reset();
            idle.play();
        }

        Ok(Self {
            config,
            current_action,
            run_toggle: false,
        })
    }

    /// Flips the walk/run variant selection.
    pub fn switch_run_toggle(&mut self) {
        self.run_toggle = !self.run_toggle;
    }

    #[must_use]
    pub fn run_toggle(&self) -> bool {
        self.run_toggle
    }

    /// Name of the clip currently playing as the character's action.
    #[must_use]
    pub fn current_action(&self) -> &str {
        &self.current_action
    }

    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Per-frame update.
    ///
    /// Order matters: move, then orient, then pick the clip, then advance the
    /// mixer, then refresh the actor's world matrix, and finally re-target the
    /// camera so its offset to the character survives the move.
    pub fn update(
        &mut self,
        dt: f32,
        intent: DirectionIntent,
        actor: &mut Transform,
        mixer: &mut AnimationMixer,
        camera: &mut OrbitControls,
    ) {
        let intent = intent.clamped();
        let angle = camera.azimuthal_angle();

        let local = intent.local_direction();
        if local != Vec3::ZERO {
            // Camera-local to world space: rotate around the world up-axis by
            // the camera's azimuth.
            let world = Quat::from_axis_angle(Vec3::Y, angle) * local;
            actor.position += world * self.config.speed * dt;
        }

        if intent.is_active() {
            let target_angle = angle
                + (intent.right - intent.left).atan2(intent.backward - intent.forward);
            let target = Quat::from_axis_angle(Vec3::Y, target_angle);
            actor.rotate_towards(target, self.config.rotate_speed * dt);
        }

        let desired: &str = if intent.is_active() {
            match (&self.config.run_clip, self.run_toggle) {
                (Some(run), true) => run.as_str(),
                _ => self.config.locomotion_clip.as_str(),
            }
        } else {
            self.config.idle_clip.as_str()
        };
        if desired != self.current_action {
            mixer.crossfade(&self.current_action, desired, self.config.fade_duration);
            self.current_action = desired.to_string();
        }

        mixer.update(dt);
        actor.update_matrix_world();
        camera.follow(actor.position);
    }
}
