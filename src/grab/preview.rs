//! Placement preview synthesis.
//!
//! The preview is a copy of the held item's whole subtree. Meshes and
//! materials are copied right away; colliders are recorded and only attached
//! when the drop is committed, so the preview never shows up in the aim ray
//! casts while it follows the player's aim.

use avian3d::prelude::*;
use bevy::prelude::*;

use super::components::PlacementPreview;
use super::state::{HeldItem, InteractionState, PreviewPlacement};
use crate::constants::PREVIEW_NAME;

/// Components copied from the held item's subtree onto the preview
pub(crate) type CloneSourceQuery<'w, 's> = Query<
    'w,
    's,
    (
        Option<&'static Mesh3d>,
        Option<&'static MeshMaterial3d<StandardMaterial>>,
        Option<&'static Collider>,
        Option<&'static CollisionLayers>,
        &'static Transform,
    ),
>;

/// Collider of a source part, held back until the preview is committed
#[derive(Component, Clone)]
pub(crate) struct DeferredCollider {
    collider: Collider,
    layers: Option<CollisionLayers>,
}

/// Show the preview at `point`, creating it from the held item if needed.
///
/// Orientation is only seeded on creation; an existing preview keeps the
/// orientation it has accumulated.
pub(crate) fn show_preview_at(
    state: &mut InteractionState,
    point: Vec3,
    commands: &mut Commands,
    sources: &CloneSourceQuery,
    children: &Query<&Children>,
) {
    let Some(held) = state.held else {
        return;
    };

    match state.preview.as_mut() {
        Some(preview) => {
            preview.position = point;
            preview.visible = true;
        }
        None => {
            let preview = spawn_preview(commands, &held, point, sources, children);
            debug!("Created placement preview {:?} for {:?}", preview.entity, held.entity);
            state.preview = Some(preview);
        }
    }
}

/// Hide the preview without destroying it
pub(crate) fn hide_preview(state: &mut InteractionState) {
    if let Some(preview) = state.preview.as_mut() {
        preview.visible = false;
    }
}

fn spawn_preview(
    commands: &mut Commands,
    held: &HeldItem,
    point: Vec3,
    sources: &CloneSourceQuery,
    children: &Query<&Children>,
) -> PreviewPlacement {
    let transform = Transform::from_translation(point).with_rotation(held.original_orientation);

    let root = commands
        .spawn((
            PlacementPreview,
            Name::new(PREVIEW_NAME),
            transform,
            Visibility::Inherited,
        ))
        .id();

    if let Ok((mesh, material, collider, layers, _)) = sources.get(held.entity) {
        insert_copied(commands, root, mesh, material, collider, layers);
    }
    clone_children(commands, held.entity, root, sources, children);

    PreviewPlacement {
        entity: root,
        source_item: held.entity,
        position: point,
        orientation: held.original_orientation,
        visible: true,
    }
}

fn clone_children(
    commands: &mut Commands,
    source: Entity,
    target: Entity,
    sources: &CloneSourceQuery,
    children: &Query<&Children>,
) {
    let Ok(source_children) = children.get(source) else {
        return;
    };

    for child in source_children.iter() {
        let Ok((mesh, material, collider, layers, transform)) = sources.get(child) else {
            continue;
        };

        let copy = commands
            .spawn((*transform, Visibility::Inherited, ChildOf(target)))
            .id();
        insert_copied(commands, copy, mesh, material, collider, layers);
        clone_children(commands, child, copy, sources, children);
    }
}

fn insert_copied(
    commands: &mut Commands,
    entity: Entity,
    mesh: Option<&Mesh3d>,
    material: Option<&MeshMaterial3d<StandardMaterial>>,
    collider: Option<&Collider>,
    layers: Option<&CollisionLayers>,
) {
    let mut entity_commands = commands.entity(entity);
    if let Some(mesh) = mesh {
        entity_commands.insert(mesh.clone());
    }
    if let Some(material) = material {
        entity_commands.insert(material.clone());
    }
    if let Some(collider) = collider {
        entity_commands.insert(DeferredCollider {
            collider: collider.clone(),
            layers: layers.copied(),
        });
    }
}

/// Attach the recorded colliders to a committed preview and its descendants
pub(crate) fn attach_deferred_colliders(
    commands: &mut Commands,
    root: Entity,
    deferred: &Query<&DeferredCollider>,
    children: &Query<&Children>,
) {
    for entity in std::iter::once(root).chain(children.iter_descendants(root)) {
        let Ok(deferred) = deferred.get(entity) else {
            continue;
        };

        let mut entity_commands = commands.entity(entity);
        entity_commands
            .remove::<DeferredCollider>()
            .insert(deferred.collider.clone());
        if let Some(layers) = deferred.layers {
            entity_commands.insert(layers);
        }
    }
}

/// Write the preview state onto the preview entity
pub(crate) fn sync_preview(
    state: Res<InteractionState>,
    mut preview_query: Query<(&mut Transform, &mut Visibility), With<PlacementPreview>>,
) {
    let Some(preview) = state.preview else {
        return;
    };

    let Ok((mut transform, mut visibility)) = preview_query.get_mut(preview.entity) else {
        return;
    };

    transform.translation = preview.position;
    transform.rotation = preview.orientation;
    transform.scale = Vec3::ONE;

    *visibility = if preview.visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
}
