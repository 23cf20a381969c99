//! First-person camera with mouse look, WASD walking and a hand anchor.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions};
use bevy_grab_place::{GrabSystems, GrabViewpoint, HandAnchor};

/// Eye height above the floor
const EYE_HEIGHT: f32 = 1.6;
/// Walking speed in units per second
const WALK_SPEED: f32 = 3.0;
/// Radians per pixel of mouse motion
const LOOK_SENSITIVITY: f32 = 0.002;
/// Hand position relative to the eye
const HAND_OFFSET: Vec3 = Vec3::new(0.35, -0.3, -0.6);

/// Mouse look state
#[derive(Component, Default)]
pub struct FpsLook {
    pub yaw: f32,
    pub pitch: f32,
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // The click that locks the cursor must not also grab: presses are
        // ignored while unlocked and the lock is applied after them
        app.add_systems(Startup, spawn_player)
            .configure_sets(Update, GrabSystems::Press.run_if(cursor_locked))
            .add_systems(
                Update,
                (
                    (mouse_look, walk).chain().before(GrabSystems::Aim),
                    toggle_cursor.after(GrabSystems::Sync),
                ),
            );
    }
}

fn spawn_player(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Player Camera"),
            Camera3d::default(),
            GrabViewpoint,
            FpsLook::default(),
            Transform::from_xyz(0.0, EYE_HEIGHT, 4.0),
            Visibility::default(),
        ))
        .with_children(|camera| {
            camera.spawn((
                Name::new("Hand"),
                HandAnchor,
                Transform::from_translation(HAND_OFFSET),
                Visibility::default(),
            ));
        });
}

fn cursor_locked(cursor_options: Query<&CursorOptions>) -> bool {
    cursor_options
        .iter()
        .any(|opts| opts.grab_mode == CursorGrabMode::Locked)
}

/// Lock the cursor on click, release it on Escape.
fn toggle_cursor(
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut cursor_options: Query<&mut CursorOptions>,
) {
    for mut opts in cursor_options.iter_mut() {
        if keyboard.just_pressed(KeyCode::Escape) {
            opts.grab_mode = CursorGrabMode::None;
            opts.visible = true;
        } else if mouse_button.just_pressed(MouseButton::Left) {
            opts.grab_mode = CursorGrabMode::Locked;
            opts.visible = false;
        }
    }
}

fn mouse_look(
    mouse_motion: Res<AccumulatedMouseMotion>,
    cursor_options: Query<&CursorOptions>,
    mut query: Query<(&mut FpsLook, &mut Transform)>,
) {
    if !cursor_locked(cursor_options) {
        return;
    }

    let delta = mouse_motion.delta;
    if delta == Vec2::ZERO {
        return;
    }

    for (mut look, mut transform) in &mut query {
        look.yaw -= delta.x * LOOK_SENSITIVITY;
        look.pitch = (look.pitch - delta.y * LOOK_SENSITIVITY)
            .clamp(-std::f32::consts::FRAC_PI_2 + 0.1, std::f32::consts::FRAC_PI_2 - 0.1);

        transform.rotation = Quat::from_euler(EulerRot::YXZ, look.yaw, look.pitch, 0.0);
    }
}

/// Walk on the XZ plane relative to the look direction
fn walk(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut query: Query<(&FpsLook, &mut Transform)>,
) {
    let mut input = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        input.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        input.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        input.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        input.x -= 1.0;
    }
    if input == Vec2::ZERO {
        return;
    }

    for (look, mut transform) in &mut query {
        let yaw = Quat::from_rotation_y(look.yaw);
        let forward = yaw * Vec3::NEG_Z;
        let right = yaw * Vec3::X;
        let step = (forward * input.y + right * input.x).normalize() * WALK_SPEED * time.delta_secs();
        transform.translation += step;
        transform.translation.y = EYE_HEIGHT;
    }
}
