use bevy::prelude::*;

use super::aim::AimHits;
use super::hierarchy::{BoundaryQuery, resolve_with_queries};
use super::preview::{CloneSourceQuery, hide_preview, show_preview_at};
use super::state::{InteractionState, normal_is_up};

/// Rebuild hover state and drop legality from this frame's aim hits.
///
/// Nothing carries over from the previous frame except the held item and the
/// preview itself.
pub(crate) fn refresh_hover(
    hits: Res<AimHits>,
    mut state: ResMut<InteractionState>,
    parents: Query<&ChildOf>,
    boundaries: BoundaryQuery,
    sources: CloneSourceQuery,
    children: Query<&Children>,
    mut commands: Commands,
) {
    state.hovered_item = None;
    state.hovered_surface = None;
    state.drop_legal = false;

    if let Some(hit) = hits.surface {
        state.hovered_surface = Some(resolve_with_queries(hit.entity, &parents, &boundaries));

        if normal_is_up(hit.normal) {
            state.drop_legal = true;
            show_preview_at(&mut state, hit.point, &mut commands, &sources, &children);
        }
    }

    if !state.drop_legal {
        hide_preview(&mut state);
    }

    // The held item stays on the item layer and can block the item ray
    if let Some(hit) = hits.item {
        let unit = resolve_with_queries(hit.entity, &parents, &boundaries);
        if state.held_entity() != Some(unit) {
            state.hovered_item = Some(unit);
        }
    }
}

/// Forget a held item that was despawned by someone else
pub(crate) fn release_missing_item(
    mut state: ResMut<InteractionState>,
    transforms: Query<(), With<Transform>>,
    mut commands: Commands,
) {
    let Some(held) = state.held else {
        return;
    };

    if transforms.contains(held.entity) {
        return;
    }

    warn!("Held item {:?} no longer exists, releasing it", held.entity);
    state.held = None;
    if let Some(preview) = state.preview.take() {
        commands.entity(preview.entity).despawn();
    }
}
