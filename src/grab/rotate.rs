use bevy::prelude::*;

use super::state::InteractionState;
use crate::settings::{GrabBindings, GrabSettings};

/// Turn the visible preview about its local up axis while the rotate keys are held.
///
/// Both keys held apply both deltas, which cancel out.
pub(crate) fn rotate_preview(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<GrabBindings>,
    settings: Res<GrabSettings>,
    time: Res<Time>,
    mut state: ResMut<InteractionState>,
) {
    let Some(preview) = state.preview.as_mut().filter(|preview| preview.visible) else {
        return;
    };

    let step = settings.rotation_speed.to_radians() * time.delta_secs();
    let mut angle = 0.0;
    if keyboard.pressed(bindings.rotate_positive) {
        angle += step;
    }
    if keyboard.pressed(bindings.rotate_negative) {
        angle -= step;
    }

    if angle != 0.0 {
        preview.orientation = (preview.orientation * Quat::from_rotation_y(angle)).normalize();
    }
}
