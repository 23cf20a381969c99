use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{
    DEFAULT_MAX_DISTANCE, DEFAULT_PRESENTATION_POSE, DEFAULT_ROTATION_SPEED, SETTINGS_DIR,
    SETTINGS_FILE,
};

/// Errors raised while reading or writing [`GrabSettings`]
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file could not be accessed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid RON: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("settings could not be serialized: {0}")]
    Serialize(#[from] ron::Error),
}

/// What happens to the held item when a drop is committed
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropCommit {
    /// Despawn the held item. The preview clone stays in the scene as the
    /// placed copy and stops being tracked as a preview.
    #[default]
    Consume,
    /// Detach the held item from the hand and move it to the preview's
    /// position and orientation, then despawn the preview.
    Place,
}

/// Tunables for the grab controller that persist to disk
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GrabSettings {
    /// Preview rotation speed in degrees per second
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f32,
    /// Aim range for the item and surface ray casts
    #[serde(default = "default_max_distance")]
    pub max_distance: f32,
    /// Local orientation of a held item, Euler XYZ in degrees
    #[serde(default = "default_presentation_pose")]
    pub presentation_pose: [f32; 3],
    /// Drop commit policy
    #[serde(default)]
    pub drop_commit: DropCommit,
}

fn default_rotation_speed() -> f32 {
    DEFAULT_ROTATION_SPEED
}

fn default_max_distance() -> f32 {
    DEFAULT_MAX_DISTANCE
}

fn default_presentation_pose() -> [f32; 3] {
    DEFAULT_PRESENTATION_POSE
}

impl Default for GrabSettings {
    fn default() -> Self {
        Self {
            rotation_speed: DEFAULT_ROTATION_SPEED,
            max_distance: DEFAULT_MAX_DISTANCE,
            presentation_pose: DEFAULT_PRESENTATION_POSE,
            drop_commit: DropCommit::default(),
        }
    }
}

impl GrabSettings {
    /// Local rotation applied to an item when it is attached to the hand
    pub fn presentation_rotation(&self) -> Quat {
        let [x, y, z] = self.presentation_pose;
        Quat::from_euler(EulerRot::XYZ, x.to_radians(), y.to_radians(), z.to_radians())
    }

    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push(SETTINGS_DIR);
            p.push(SETTINGS_FILE);
            p
        })
    }

    pub fn from_ron_str(content: &str) -> Result<Self, SettingsError> {
        Ok(ron::from_str(content)?)
    }

    pub fn to_ron_string(&self) -> Result<String, SettingsError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    pub fn read_from(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_ron_string()?)?;
        Ok(())
    }

    /// Load settings from disk, or return defaults if missing or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::read_from(&path) {
            Ok(settings) => {
                info!("Grab settings loaded from: {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Ignoring grab settings at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) {
        let Some(path) = Self::file_path() else {
            error!("Could not determine config directory");
            return;
        };

        match self.write_to(&path) {
            Ok(()) => info!("Grab settings saved to: {:?}", path),
            Err(e) => error!("Failed to save grab settings: {}", e),
        }
    }
}

/// Input bindings for the grab controller
#[derive(Resource, Clone, Debug)]
pub struct GrabBindings {
    /// Picks up the hovered item, or commits a legal drop
    pub grab: MouseButton,
    /// Held to turn the preview by positive yaw
    pub rotate_positive: KeyCode,
    /// Held to turn the preview by negative yaw
    pub rotate_negative: KeyCode,
}

impl Default for GrabBindings {
    fn default() -> Self {
        Self {
            grab: MouseButton::Left,
            rotate_positive: KeyCode::KeyE,
            rotate_negative: KeyCode::KeyQ,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let settings = GrabSettings::from_ron_str("(rotation_speed: 90.0)").unwrap();
        assert_eq!(settings.rotation_speed, 90.0);
        assert_eq!(settings.max_distance, DEFAULT_MAX_DISTANCE);
        assert_eq!(settings.presentation_pose, DEFAULT_PRESENTATION_POSE);
        assert_eq!(settings.drop_commit, DropCommit::Consume);
    }

    #[test]
    fn drop_commit_parses_by_variant_name() {
        let settings =
            GrabSettings::from_ron_str("(rotation_speed: 45.0, drop_commit: Place)").unwrap();
        assert_eq!(settings.drop_commit, DropCommit::Place);
    }

    #[test]
    fn missing_rotation_speed_keeps_the_other_fields() {
        let settings = GrabSettings::from_ron_str("(drop_commit: Place)").unwrap();
        assert_eq!(settings.rotation_speed, DEFAULT_ROTATION_SPEED);
        assert_eq!(settings.drop_commit, DropCommit::Place);
    }

    #[test]
    fn empty_struct_is_all_defaults() {
        assert_eq!(GrabSettings::from_ron_str("()").unwrap(), GrabSettings::default());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let err = GrabSettings::from_ron_str("(rotation_speed: fast)").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn pretty_output_reads_back() {
        let settings = GrabSettings {
            rotation_speed: 12.5,
            max_distance: 4.0,
            presentation_pose: [10.0, 20.0, 30.0],
            drop_commit: DropCommit::Place,
        };
        let text = settings.to_ron_string().unwrap();
        assert_eq!(GrabSettings::from_ron_str(&text).unwrap(), settings);
    }

    #[test]
    fn write_then_read_through_a_file() {
        let dir = std::env::temp_dir().join(format!("grab_settings_{}", std::process::id()));
        let path = dir.join("nested").join(SETTINGS_FILE);
        let settings = GrabSettings {
            rotation_speed: 60.0,
            ..default()
        };

        settings.write_to(&path).unwrap();
        assert_eq!(GrabSettings::read_from(&path).unwrap(), settings);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("grab_settings_does_not_exist.ron");
        let err = GrabSettings::read_from(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn default_presentation_rotation_matches_pose() {
        let rotation = GrabSettings::default().presentation_rotation();
        let expected = Quat::from_euler(
            EulerRot::XYZ,
            0.0,
            130f32.to_radians(),
            90f32.to_radians(),
        );
        assert!(rotation.abs_diff_eq(expected, 1e-6));
    }
}
