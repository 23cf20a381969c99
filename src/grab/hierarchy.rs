//! Logical-unit resolution over the entity hierarchy.

use bevy::prelude::*;

use super::components::{GrabBoundary, HandAnchor};
use crate::constants::MAX_HIERARCHY_DEPTH;

/// Walk up from a hit leaf to the logical unit it belongs to.
///
/// Climbs while a parent exists and the parent is not a boundary, returning
/// the highest ancestor reached. A leaf with no qualifying parent resolves to
/// itself. The walk stops after [`MAX_HIERARCHY_DEPTH`] steps.
pub fn resolve_logical_unit(
    leaf: Entity,
    parent_of: impl Fn(Entity) -> Option<Entity>,
    is_boundary: impl Fn(Entity) -> bool,
) -> Entity {
    let mut current = leaf;
    for _ in 0..MAX_HIERARCHY_DEPTH {
        match parent_of(current) {
            Some(parent) if !is_boundary(parent) => current = parent,
            _ => break,
        }
    }
    current
}

/// Entities the walk never climbs into: scene boundaries and the hand, so a
/// held item resolves to itself instead of the viewpoint carrying the hand
pub(crate) type BoundaryQuery<'w, 's> =
    Query<'w, 's, (), Or<(With<GrabBoundary>, With<HandAnchor>)>>;

/// [`resolve_logical_unit`] over `ChildOf` and [`BoundaryQuery`]
pub(crate) fn resolve_with_queries(
    leaf: Entity,
    parents: &Query<&ChildOf>,
    boundaries: &BoundaryQuery,
) -> Entity {
    resolve_logical_unit(
        leaf,
        |entity| parents.get(entity).ok().map(ChildOf::parent),
        |entity| boundaries.contains(entity),
    )
}
