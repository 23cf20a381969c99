//! Grab & Place Demo: a small first-person room with props to move around
//!
//! 1. Look around with the mouse, walk with WASD
//! 2. Left click a prop to pick it up
//! 3. Aim at the floor or the table: a preview shows where it will land
//! 4. E / Q rotate the preview, left click places it
//! 5. The slanted shelf is not a legal surface: nothing happens there

mod hud;
mod player;
mod scene;

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy_grab_place::GrabPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Grab & Place Demo".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins(GrabPlugin::default())
        // Demo systems
        .add_plugins(scene::DemoScenePlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(hud::HudPlugin)
        .run();
}
