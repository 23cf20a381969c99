use bevy::prelude::*;

/// Coarse interaction phase, derived from [`InteractionState`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InteractionPhase {
    /// Nothing held
    #[default]
    Idle,
    /// Item attached to the hand, no visible preview
    Holding,
    /// Item held and its preview shown over a legal surface
    PreviewingDrop,
}

/// The item currently attached to the hand anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeldItem {
    pub entity: Entity,
    /// Local rotation of the item at the moment it was picked up
    pub original_orientation: Quat,
}

/// State of the transient placement preview.
///
/// The preview entity's `Transform` and `Visibility` are written from this
/// every frame, so edits here are the only way to move the preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewPlacement {
    pub entity: Entity,
    /// Held item the preview was cloned from
    pub source_item: Entity,
    pub position: Vec3,
    pub orientation: Quat,
    pub visible: bool,
}

/// All pick-up / put-down state, owned by the grab systems.
#[derive(Resource, Default, Debug, Clone)]
pub struct InteractionState {
    /// Logical item under the aim ray this frame
    pub hovered_item: Option<Entity>,
    /// Logical surface under the aim ray this frame
    pub hovered_surface: Option<Entity>,
    pub held: Option<HeldItem>,
    pub preview: Option<PreviewPlacement>,
    /// True only when this frame's surface hit faces exactly up
    pub drop_legal: bool,
}

impl InteractionState {
    pub fn phase(&self) -> InteractionPhase {
        match (&self.held, &self.preview) {
            (None, _) => InteractionPhase::Idle,
            (Some(_), Some(preview)) if preview.visible => InteractionPhase::PreviewingDrop,
            (Some(_), _) => InteractionPhase::Holding,
        }
    }

    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    pub fn held_entity(&self) -> Option<Entity> {
        self.held.map(|held| held.entity)
    }

    /// Preview entity, if one is currently tracked
    pub fn preview_entity(&self) -> Option<Entity> {
        self.preview.map(|preview| preview.entity)
    }
}

/// Fired when an item is attached to the hand anchor
#[derive(Message, Debug, Clone)]
pub struct ItemPickedUp {
    pub item: Entity,
}

/// Fired when a held item is released onto a legal surface
#[derive(Message, Debug, Clone)]
pub struct ItemDropped {
    /// The item that was held
    pub item: Entity,
    /// Entity left in the scene at the drop location
    pub placed: Entity,
    pub position: Vec3,
    pub orientation: Quat,
}

/// Legal drop surfaces must face exactly up, with no tolerance
pub fn normal_is_up(normal: Vec3) -> bool {
    normal == Vec3::Y
}
