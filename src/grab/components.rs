use avian3d::prelude::*;
use bevy::prelude::*;

/// Collision layers queried by the aim rays.
///
/// Put the colliders of pickable parts on [`GrabLayer::Item`] and the
/// colliders of placement surfaces on [`GrabLayer::Surface`].
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GrabLayer {
    #[default]
    Default,
    Item,
    Surface,
}

impl GrabLayer {
    /// Collision layers for a pickable part, colliding with everything
    pub fn item() -> CollisionLayers {
        CollisionLayers::new(GrabLayer::Item, LayerMask::ALL)
    }

    /// Collision layers for a placement surface, colliding with everything
    pub fn surface() -> CollisionLayers {
        CollisionLayers::new(GrabLayer::Surface, LayerMask::ALL)
    }
}

/// Marker for the entity whose view ray is used for aiming (usually the camera)
#[derive(Component, Default)]
pub struct GrabViewpoint;

/// Marker for the point held items are attached to
#[derive(Component, Default)]
pub struct HandAnchor;

/// Stops the logical-unit walk: children of this entity are the top-level
/// pickable units and surfaces, the boundary itself is never resolved to.
#[derive(Component, Default)]
pub struct GrabBoundary;

/// Marker for the transient placement preview clone
#[derive(Component, Default)]
pub struct PlacementPreview;
