use bevy::prelude::*;

use super::components::{HandAnchor, PlacementPreview};
use super::preview::{DeferredCollider, attach_deferred_colliders};
use super::state::{HeldItem, InteractionState, ItemDropped, ItemPickedUp};
use crate::constants::PLACED_NAME;
use crate::settings::{DropCommit, GrabBindings, GrabSettings};

/// Pick up the hovered item, or commit a legal drop, on a grab press.
///
/// A press never does both: picking up consumes it.
pub(crate) fn handle_grab_press(
    mouse_button: Res<ButtonInput<MouseButton>>,
    bindings: Res<GrabBindings>,
    settings: Res<GrabSettings>,
    mut state: ResMut<InteractionState>,
    anchor_query: Query<Entity, With<HandAnchor>>,
    mut transforms: Query<&mut Transform>,
    deferred: Query<&DeferredCollider>,
    children: Query<&Children>,
    mut commands: Commands,
    mut picked_events: MessageWriter<ItemPickedUp>,
    mut dropped_events: MessageWriter<ItemDropped>,
) {
    if !mouse_button.just_pressed(bindings.grab) {
        return;
    }

    if state.held.is_none() {
        if let Some(item) = state.hovered_item {
            pick_up(
                item,
                &settings,
                &mut state,
                &anchor_query,
                &mut transforms,
                &mut commands,
                &mut picked_events,
            );
        }
        return;
    }

    if state.drop_legal {
        drop_held(
            &settings,
            &mut state,
            &mut transforms,
            &deferred,
            &children,
            &mut commands,
            &mut dropped_events,
        );
    }
}

fn pick_up(
    item: Entity,
    settings: &GrabSettings,
    state: &mut InteractionState,
    anchor_query: &Query<Entity, With<HandAnchor>>,
    transforms: &mut Query<&mut Transform>,
    commands: &mut Commands,
    picked_events: &mut MessageWriter<ItemPickedUp>,
) {
    let Ok(anchor) = anchor_query.single() else {
        warn!("Cannot pick up {:?}: expected exactly one HandAnchor", item);
        return;
    };

    let Ok(mut transform) = transforms.get_mut(item) else {
        return;
    };

    let original_orientation = transform.rotation;
    transform.rotation = settings.presentation_rotation();
    transform.translation = Vec3::ZERO;
    commands.entity(item).insert(ChildOf(anchor));

    state.held = Some(HeldItem {
        entity: item,
        original_orientation,
    });
    state.hovered_item = None;

    info!("Picked up {:?}", item);
    picked_events.write(ItemPickedUp { item });
}

fn drop_held(
    settings: &GrabSettings,
    state: &mut InteractionState,
    transforms: &mut Query<&mut Transform>,
    deferred: &Query<&DeferredCollider>,
    children: &Query<&Children>,
    commands: &mut Commands,
    dropped_events: &mut MessageWriter<ItemDropped>,
) {
    let Some(held) = state.held else {
        return;
    };
    let Some(preview) = state.preview else {
        return;
    };

    state.held = None;
    state.preview = None;

    let placed = match settings.drop_commit {
        DropCommit::Consume => {
            commands.entity(held.entity).despawn();
            commands
                .entity(preview.entity)
                .remove::<PlacementPreview>()
                .insert((
                    Name::new(PLACED_NAME),
                    Transform::from_translation(preview.position)
                        .with_rotation(preview.orientation),
                    Visibility::Inherited,
                ));
            attach_deferred_colliders(commands, preview.entity, deferred, children);
            preview.entity
        }
        DropCommit::Place => {
            if let Ok(mut transform) = transforms.get_mut(held.entity) {
                *transform = Transform::from_translation(preview.position)
                    .with_rotation(preview.orientation);
            }
            commands.entity(held.entity).remove::<ChildOf>();
            commands.entity(preview.entity).despawn();
            held.entity
        }
    };

    info!(
        "Dropped {:?} at {:?} ({:?})",
        held.entity, preview.position, settings.drop_commit
    );
    dropped_events.write(ItemDropped {
        item: held.entity,
        placed,
        position: preview.position,
        orientation: preview.orientation,
    });
}
