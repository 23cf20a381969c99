mod aim;
mod components;
mod hierarchy;
mod hover;
mod interact;
mod preview;
mod rotate;
mod state;


pub use aim::*;
pub use components::*;
pub use hierarchy::resolve_logical_unit;
pub use state::*;

use bevy::prelude::*;

use crate::settings::{GrabBindings, GrabSettings};

/// Per-frame ordering of the grab controller.
///
/// Chained in `Update`: a press always sees this frame's hover, and rotation
/// always applies after the press.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrabSystems {
    /// Cast the view ray against both target classes
    Aim,
    /// Resolve hover targets, drop legality and the preview
    Hover,
    /// Pick up or drop on the grab button
    Press,
    /// Continuous preview rotation
    Rotate,
    /// Write preview state to the preview entity
    Sync,
}

/// Configuration for [`GrabPlugin`]
#[derive(Clone, Debug)]
pub struct GrabPluginConfig {
    /// Settings to use instead of the persisted ones
    pub settings: Option<GrabSettings>,
    /// Read settings from the user's config dir when `settings` is `None`
    pub load_settings: bool,
    /// Cast aim rays with avian3d. Disable to feed [`AimHits`] yourself.
    pub cast_rays: bool,
}

impl Default for GrabPluginConfig {
    fn default() -> Self {
        Self {
            settings: None,
            load_settings: true,
            cast_rays: true,
        }
    }
}

/// Pick-up / put-down controller.
///
/// Expects avian3d's `PhysicsPlugins` to be added by the app, a single
/// [`GrabViewpoint`] and a single [`HandAnchor`] in the scene.
#[derive(Default)]
pub struct GrabPlugin {
    pub config: GrabPluginConfig,
}

impl GrabPlugin {
    pub fn new(config: GrabPluginConfig) -> Self {
        Self { config }
    }
}

impl Plugin for GrabPlugin {
    fn build(&self, app: &mut App) {
        let settings = match &self.config.settings {
            Some(settings) => settings.clone(),
            None if self.config.load_settings => GrabSettings::load(),
            None => GrabSettings::default(),
        };

        app.insert_resource(settings)
            .add_plugins(GrabInteractionPlugin);

        if self.config.cast_rays {
            app.add_systems(Update, aim::cast_aim_rays.in_set(GrabSystems::Aim));
        }
    }
}

/// The interaction state machine without ray casting.
///
/// Consumes [`AimHits`] and needs no physics, which makes it usable headless.
pub struct GrabInteractionPlugin;

impl Plugin for GrabInteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GrabSettings>()
            .init_resource::<GrabBindings>()
            .init_resource::<AimHits>()
            .init_resource::<InteractionState>()
            .add_message::<ItemPickedUp>()
            .add_message::<ItemDropped>()
            .configure_sets(
                Update,
                (
                    GrabSystems::Aim,
                    GrabSystems::Hover,
                    GrabSystems::Press,
                    GrabSystems::Rotate,
                    GrabSystems::Sync,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    (hover::release_missing_item, hover::refresh_hover)
                        .chain()
                        .in_set(GrabSystems::Hover),
                    interact::handle_grab_press.in_set(GrabSystems::Press),
                    rotate::rotate_preview.in_set(GrabSystems::Rotate),
                    preview::sync_preview.in_set(GrabSystems::Sync),
                ),
            );
    }
}
