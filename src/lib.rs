//! # Bevy Grab & Place
//!
//! First-person pick-up / put-down controller for Bevy games using Avian3D
//! ray casts.
//!
//! ## Quick Start
//!
//! ```no_run
//! use avian3d::prelude::*;
//! use bevy::prelude::*;
//! use bevy_grab_place::GrabPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(PhysicsPlugins::default())
//!         .add_plugins(GrabPlugin::default())
//!         .run();
//! }
//! ```
//!
//! ## Scene Setup
//!
//! - Tag the camera with [`GrabViewpoint`] and give it a child tagged [`HandAnchor`].
//! - Put colliders of pickable parts on [`GrabLayer::Item`] and colliders of
//!   placement surfaces on [`GrabLayer::Surface`].
//! - Parent scene content under a [`GrabBoundary`] so clicking any part of a
//!   composite object picks up the whole object, not the whole scene.
//!
//! ```ignore
//! commands.spawn((
//!     Name::new("Mug"),
//!     Transform::from_xyz(0.0, 1.0, -2.0),
//!     Collider::cylinder(0.1, 0.2),
//!     GrabLayer::item(),
//!     ChildOf(props),
//! ));
//! ```
//!
//! ## Controls
//!
//! - **Left click** on an item: pick it up
//! - Aim at a flat, up-facing surface while holding: a preview appears
//! - **E / Q**: rotate the preview
//! - **Left click** with a visible preview: drop

pub mod constants;
pub mod grab;
pub mod settings;

// Re-export the main plugin and configuration
pub use grab::{GrabInteractionPlugin, GrabPlugin, GrabPluginConfig, GrabSystems};

// Re-export scene markers
pub use grab::{GrabBoundary, GrabLayer, GrabViewpoint, HandAnchor, PlacementPreview};

// Re-export state and messages
pub use grab::{
    AimHit, AimHits, HeldItem, InteractionPhase, InteractionState, ItemDropped, ItemPickedUp,
    PreviewPlacement, normal_is_up, resolve_logical_unit,
};

pub use settings::{DropCommit, GrabBindings, GrabSettings, SettingsError};
