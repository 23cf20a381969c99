//! Centralized constants for the grab controller
//!
//! Default tunables and fixed names shared by the settings, the preview
//! synthesizer and the hierarchy resolver.

/// Default aim range for both ray casts, in world units
pub const DEFAULT_MAX_DISTANCE: f32 = 10.0;

/// Default preview rotation speed in degrees per second
pub const DEFAULT_ROTATION_SPEED: f32 = 30.0;

/// Default local orientation of a held item, Euler XYZ in degrees
pub const DEFAULT_PRESENTATION_POSE: [f32; 3] = [0.0, 130.0, 90.0];

/// Name given to the transient placement preview entity
pub const PREVIEW_NAME: &str = "TEMPORARY_PLACEMENT_PREVIEW";

/// Name given to a preview clone left behind by a consuming drop
pub const PLACED_NAME: &str = "Placed Item";

/// Upper bound on ancestor steps when resolving a logical unit
pub const MAX_HIERARCHY_DEPTH: usize = 64;

/// Directory under the user's config dir holding persisted settings
pub const SETTINGS_DIR: &str = "bevy_grab_place";

/// File name of the persisted settings
pub const SETTINGS_FILE: &str = "grab.ron";
