//! Headless walk-through of the locomotion core.
//!
//! Drives the controller with scripted key presses over a fixed 60 Hz frame
//! loop and logs the character's trajectory and clip transitions. The
//! rendering engine, window and real asset loading are out of scope; the clip
//! "load" below stands in for the host's async asset stage and shows the
//! activation gate: on failure the frame loop would keep rendering, but the
//! controller is never constructed.

use glam::Vec3;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use stroll::animation::{AnimationClip, AnimationMixer};
use stroll::character::{CharacterControls, ControllerConfig};
use stroll::input::{InputSource, KeyboardSource};
use stroll::scene::Transform;
use stroll::utils::{OrbitControls, Timer};

const DT: f32 = 1.0 / 60.0;

/// Stand-in for the host's asset stage: the character's clips as the demo
/// model ships them, including the 2x rate override on the locomotion clip.
fn load_character_clips() -> stroll::Result<Vec<AnimationClip>> {
    Ok(vec![
        AnimationClip::new("pose_chapeau", 2.3),
        AnimationClip::new("course_chapeau", 0.7).with_time_scale(2.0),
    ])
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let clips = match load_character_clips() {
        Ok(clips) => clips,
        Err(err) => {
            // Terminal: the scene would keep rendering without a character.
            log::error!("character assets failed to load: {err}");
            return Ok(());
        }
    };
    let mut mixer = AnimationMixer::from_clips(clips);

    let mut actor = Transform::new();
    let mut camera = OrbitControls::from_position(Vec3::ZERO, Vec3::new(10.0, 5.0, 10.0))
        .with_distance_limits(5.0, 15.0);

    let config = ControllerConfig::new("pose_chapeau", "course_chapeau");
    let mut controller = CharacterControls::new(config, &mut mixer)?;
    let mut keyboard = KeyboardSource::new();
    let mut timer = Timer::new();

    // Scripted session: idle, walk forward, veer right, release, idle out.
    let script: &[(u32, ElementState, KeyCode)] = &[
        (30, ElementState::Pressed, KeyCode::KeyW),
        (150, ElementState::Pressed, KeyCode::KeyD),
        (240, ElementState::Released, KeyCode::KeyW),
        (240, ElementState::Released, KeyCode::KeyD),
    ];

    for frame in 0..300u32 {
        // A windowed host would use timer.dt_seconds(); the headless script
        // steps a fixed 60 Hz instead so the trajectory is reproducible.
        timer.tick();
        for (at, state, key) in script {
            if *at == frame {
                keyboard.handle_key_event(*state, *key);
            }
        }

        let before = controller.current_action().to_string();
        controller.update(DT, keyboard.intent(), &mut actor, &mut mixer, &mut camera);

        if controller.current_action() != before {
            log::info!(
                "frame {frame}: clip {before} -> {}",
                controller.current_action()
            );
        }
        if frame % 60 == 0 {
            log::info!(
                "frame {frame}: position {}, camera {}",
                actor.position,
                camera.position()
            );
        }
    }

    log::info!(
        "final position: {} ({} frames in {:.1} ms)",
        actor.position,
        timer.frame_count,
        timer.elapsed.as_secs_f64() * 1e3
    );
    Ok(())
}
