//! Character Motion Controller Tests
//!
//! Tests for:
//! - Idle vs moving clip selection and single-shot crossfades
//! - Camera-relative displacement (identity and rotated camera)
//! - dt-scaled movement and turn clamping
//! - Follow-camera offset invariant (idle and moving)
//! - Run-toggle clip variant seam
//! - Construction-time registry validation

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Quat, Vec3};

use stroll::animation::{AnimationClip, AnimationMixer};
use stroll::character::{CharacterControls, ControllerConfig};
use stroll::errors::StrollError;
use stroll::input::DirectionIntent;
use stroll::scene::Transform;
use stroll::utils::OrbitControls;

const EPSILON: f32 = 1e-5;
const DT: f32 = 0.016;

const IDLE: &str = "pose_chapeau";
const WALK: &str = "course_chapeau";

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
}

fn demo_mixer() -> AnimationMixer {
    AnimationMixer::from_clips([
        AnimationClip::new(IDLE, 2.3),
        AnimationClip::new(WALK, 0.7).with_time_scale(2.0),
    ])
}

/// Camera on the +Z axis looking at the origin: azimuthal angle 0.
fn demo_rig() -> OrbitControls {
    OrbitControls::from_position(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0))
}

fn demo_controller(mixer: &mut AnimationMixer) -> CharacterControls {
    CharacterControls::new(ControllerConfig::new(IDLE, WALK), mixer).unwrap()
}

fn forward() -> DirectionIntent {
    DirectionIntent::new(1.0, 0.0, 0.0, 0.0)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn construction_starts_idle_clip() {
    let mut mixer = demo_mixer();
    let controller = demo_controller(&mut mixer);

    assert_eq!(controller.current_action(), IDLE);
    assert!(mixer.action(IDLE).unwrap().is_running());
    assert!(!mixer.action(WALK).unwrap().is_running());
}

#[test]
fn construction_rejects_unregistered_clip() {
    let mut mixer = AnimationMixer::from_clips([AnimationClip::new(IDLE, 2.3)]);
    let result = CharacterControls::new(ControllerConfig::new(IDLE, WALK), &mut mixer);
    match result {
        Err(StrollError::MissingAnimation(name)) => assert_eq!(name, WALK),
        Err(other) => panic!("expected MissingAnimation, got {other:?}"),
        Ok(_) => panic!("expected MissingAnimation, got Ok"),
    }
}

#[test]
fn construction_rejects_bad_config_values() {
    let mut mixer = demo_mixer();
    let config = ControllerConfig::new(IDLE, WALK).with_speed(0.0);
    assert!(matches!(
        CharacterControls::new(config, &mut mixer),
        Err(StrollError::InvalidConfig(_))
    ));
}

// ============================================================================
// Idle state
// ============================================================================

#[test]
fn idle_frame_moves_nothing_and_keeps_idle_clip() {
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    controller.update(DT, DirectionIntent::ZERO, &mut actor, &mut mixer, &mut rig);

    assert_eq!(actor.position, Vec3::ZERO);
    assert_eq!(actor.rotation, Quat::IDENTITY);
    assert_eq!(controller.current_action(), IDLE);
    assert!(!mixer.action(IDLE).unwrap().is_fading(), "no spurious fade while idle");
}

#[test]
fn idle_animation_keeps_advancing() {
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    controller.update(DT, DirectionIntent::ZERO, &mut actor, &mut mixer, &mut rig);
    controller.update(DT, DirectionIntent::ZERO, &mut actor, &mut mixer, &mut rig);

    // The mixer runs every frame regardless of movement state
    assert!(approx(mixer.action(IDLE).unwrap().time, 2.0 * DT));
}

// ============================================================================
// Movement
// ============================================================================

#[test]
fn forward_moves_along_negative_z_at_camera_angle_zero() {
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    controller.update(DT, forward(), &mut actor, &mut mixer, &mut rig);

    // speed (6.0) * dt, straight down -Z since the camera azimuth is 0
    let expected = Vec3::new(0.0, 0.0, -6.0 * DT);
    assert!(
        vec3_approx(actor.position, expected),
        "expected {expected}, got {}",
        actor.position
    );
}

#[test]
fn displacement_scales_with_dt() {
    // Frame-rate independence: displacement scales with elapsed time, never a
    // fixed per-frame step.
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    controller.update(2.0 * DT, forward(), &mut actor, &mut mixer, &mut rig);
    assert!(vec3_approx(actor.position, Vec3::new(0.0, 0.0, -12.0 * DT)));
}

#[test]
fn movement_is_camera_relative() {
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();
    rig.orbit(FRAC_PI_2, 0.0);

    controller.update(DT, forward(), &mut actor, &mut mixer, &mut rig);

    // "Forward" now points down -X, the direction away from the camera
    let expected = Vec3::new(-6.0 * DT, 0.0, 0.0);
    assert!(
        vec3_approx(actor.position, expected),
        "expected {expected}, got {}",
        actor.position
    );
}

#[test]
fn opposite_intents_cancel_displacement() {
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    let intent = DirectionIntent::new(1.0, 1.0, 0.0, 0.0);
    controller.update(DT, intent, &mut actor, &mut mixer, &mut rig);

    assert_eq!(actor.position, Vec3::ZERO);
    // The intent still counts as active, so the locomotion clip plays
    assert_eq!(controller.current_action(), WALK);
}

#[test]
fn analog_intent_scales_displacement() {
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    let intent = DirectionIntent::new(0.5, 0.0, 0.0, 0.0);
    controller.update(DT, intent, &mut actor, &mut mixer, &mut rig);
    assert!(vec3_approx(actor.position, Vec3::new(0.0, 0.0, -3.0 * DT)));
}

// ============================================================================
// Orientation
// ============================================================================

#[test]
fn turn_rate_is_clamped_per_frame() {
    let mut mixer = demo_mixer();
    let config = ControllerConfig::new(IDLE, WALK).with_rotate_speed(1.0);
    let mut controller = CharacterControls::new(config, &mut mixer).unwrap();
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    controller.update(DT, forward(), &mut actor, &mut mixer, &mut rig);

    // Full turn would be PI; one frame covers at most rotate_speed * dt
    let turned = Quat::IDENTITY.angle_between(actor.rotation);
    assert!(
        (turned - DT).abs() < 1e-4,
        "expected a {DT} rad step, got {turned}"
    );
}

#[test]
fn orientation_converges_to_travel_direction() {
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    for _ in 0..10 {
        controller.update(DT, forward(), &mut actor, &mut mixer, &mut rig);
    }

    // Facing the -Z travel direction: a half-turn around the up-axis
    let target = Quat::from_axis_angle(Vec3::Y, PI);
    assert!(
        actor.rotation.angle_between(target) < 1e-3,
        "orientation did not converge"
    );
}

#[test]
fn ten_forward_frames_displace_monotonically() {
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    let mut last_z = actor.position.z;
    for frame in 0..10 {
        controller.update(DT, forward(), &mut actor, &mut mixer, &mut rig);
        assert!(
            actor.position.z < last_z,
            "frame {frame}: z did not decrease ({} >= {last_z})",
            actor.position.z
        );
        last_z = actor.position.z;
        assert_eq!(controller.current_action(), WALK);
    }
}

// ============================================================================
// Clip selection & crossfades
// ============================================================================

#[test]
fn moving_selects_locomotion_clip_with_single_crossfade() {
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    controller.update(DT, forward(), &mut actor, &mut mixer, &mut rig);
    assert_eq!(controller.current_action(), WALK);

    let walk_weight_1 = mixer.action(WALK).unwrap().weight;
    assert!(walk_weight_1 > 0.0 && walk_weight_1 < 1.0, "fade-in under way");
    assert!(mixer.action(IDLE).unwrap().is_fading(), "fade-out under way");

    // Second frame with the same intent: the fade continues, it is not
    // re-triggered from zero.
    controller.update(DT, forward(), &mut actor, &mut mixer, &mut rig);
    let walk_weight_2 = mixer.action(WALK).unwrap().weight;
    assert!(
        walk_weight_2 > walk_weight_1,
        "expected fade to continue: {walk_weight_2} <= {walk_weight_1}"
    );
    assert!(approx(walk_weight_2, 2.0 * DT / 0.2));
}

#[test]
fn stopping_crossfades_back_to_idle() {
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    // Walk long enough for the first crossfade to finish
    for _ in 0..20 {
        controller.update(DT, forward(), &mut actor, &mut mixer, &mut rig);
    }
    assert!(approx(mixer.action(WALK).unwrap().weight, 1.0));
    assert!(!mixer.action(IDLE).unwrap().is_running());

    controller.update(DT, DirectionIntent::ZERO, &mut actor, &mut mixer, &mut rig);
    assert_eq!(controller.current_action(), IDLE);
    assert!(mixer.action(IDLE).unwrap().is_running());
    assert!(mixer.action(WALK).unwrap().is_fading());
}

#[test]
fn locomotion_clip_plays_at_doubled_rate() {
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    controller.update(DT, forward(), &mut actor, &mut mixer, &mut rig);
    // The walk clip carries a 2x time-scale override from load time
    assert!(approx(mixer.action(WALK).unwrap().time, 2.0 * DT));
}

// ============================================================================
// Run toggle
// ============================================================================

#[test]
fn run_toggle_selects_variant_clip() {
    let mut mixer = AnimationMixer::from_clips([
        AnimationClip::new(IDLE, 2.3),
        AnimationClip::new(WALK, 0.7),
        AnimationClip::new("sprint", 0.5),
    ]);
    let config = ControllerConfig::new(IDLE, WALK).with_run_clip("sprint");
    let mut controller = CharacterControls::new(config, &mut mixer).unwrap();
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    controller.update(DT, forward(), &mut actor, &mut mixer, &mut rig);
    assert_eq!(controller.current_action(), WALK);

    controller.switch_run_toggle();
    assert!(controller.run_toggle());
    controller.update(DT, forward(), &mut actor, &mut mixer, &mut rig);
    assert_eq!(controller.current_action(), "sprint");

    // Toggling while idle does not disturb the idle clip
    controller.update(DT, DirectionIntent::ZERO, &mut actor, &mut mixer, &mut rig);
    controller.switch_run_toggle();
    controller.update(DT, DirectionIntent::ZERO, &mut actor, &mut mixer, &mut rig);
    assert_eq!(controller.current_action(), IDLE);
}

#[test]
fn run_toggle_without_variant_changes_nothing() {
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    controller.switch_run_toggle();
    controller.update(DT, forward(), &mut actor, &mut mixer, &mut rig);
    assert_eq!(controller.current_action(), WALK);
}

// ============================================================================
// Camera follow
// ============================================================================

#[test]
fn camera_offset_is_preserved_while_idle() {
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    let offset_before = rig.offset();
    controller.update(DT, DirectionIntent::ZERO, &mut actor, &mut mixer, &mut rig);

    assert_eq!(rig.offset(), offset_before, "offset must match exactly");
    assert_eq!(rig.center, actor.position);
}

#[test]
fn camera_offset_is_preserved_while_moving() {
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    let offset_before = rig.offset();
    for _ in 0..10 {
        controller.update(DT, forward(), &mut actor, &mut mixer, &mut rig);
        assert_eq!(rig.offset(), offset_before, "offset must match exactly");
        assert_eq!(rig.center, actor.position, "camera target tracks the character");
    }
    assert_eq!(rig.position(), actor.position + offset_before);
}

#[test]
fn user_orbit_between_frames_is_kept() {
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    controller.update(DT, forward(), &mut actor, &mut mixer, &mut rig);
    rig.orbit(0.3, -0.1);
    rig.zoom(0.8);
    let offset_after_user = rig.offset();

    controller.update(DT, forward(), &mut actor, &mut mixer, &mut rig);
    assert_eq!(rig.offset(), offset_after_user, "follow keeps the user's orbit");
}

// ============================================================================
// World matrix refresh
// ============================================================================

#[test]
fn update_refreshes_world_matrix() {
    let mut mixer = demo_mixer();
    let mut controller = demo_controller(&mut mixer);
    let mut actor = Transform::new();
    let mut rig = demo_rig();

    controller.update(DT, forward(), &mut actor, &mut mixer, &mut rig);

    let translation = actor.world_matrix().translation;
    assert!(vec3_approx(Vec3::from(translation), actor.position));
}
