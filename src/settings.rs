//! Game settings
//!
//! Tuning and scene layout, persisted as JSON in LocalStorage on the web.
//! Natively, a JSON file named by `CITY_RUNNER_SETTINGS` overrides the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scene::SceneConfig;
use crate::sim::Tuning;

/// Why a settings document was rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
    #[error("cannot read settings file: {0}")]
    Io(#[from] std::io::Error),
}

/// Game settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tuning: Tuning,
    pub scene: SceneConfig,
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "city_runner_settings";

    /// Environment variable naming a settings file
    #[cfg(not(target_arch = "wasm32"))]
    pub const ENV_VAR: &'static str = "CITY_RUNNER_SETTINGS";

    /// Parse and validate a JSON settings document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject values that would break the simulation
    pub fn validate(&self) -> Result<(), SettingsError> {
        let t = &self.tuning;
        let checks: [(bool, &'static str, &'static str); 8] = [
            (t.gravity > 0.0, "tuning.gravity", "must be positive"),
            (t.jump_impulse < 0.0, "tuning.jump_impulse", "must be negative (upward)"),
            (t.scroll_speed > 0.0, "tuning.scroll_speed", "must be positive"),
            (t.floor_y > 0.0, "tuning.floor_y", "must be positive"),
            (t.collision_tolerance_x > 0.0, "tuning.collision_tolerance_x", "must be positive"),
            (t.collision_tolerance_y > 0.0, "tuning.collision_tolerance_y", "must be positive"),
            (self.scene.obstacle_pool > 0, "scene.obstacle_pool", "must be at least 1"),
            (!self.scene.lanes.is_empty(), "scene.lanes", "must not be empty"),
        ];

        match checks.iter().find(|(ok, _, _)| !ok) {
            Some(&(_, field, reason)) => Err(SettingsError::Invalid { field, reason }),
            None => Ok(()),
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the file named by `CITY_RUNNER_SETTINGS`, if any
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_file(std::path::Path::new(&path)) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path, e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_document() {
        let settings =
            Settings::from_json(r#"{"tuning": {"scroll_speed": 6.0}, "scene": {"lanes": [120.0]}}"#)
                .unwrap();
        assert_eq!(settings.tuning.scroll_speed, 6.0);
        assert_eq!(settings.tuning.gravity, GRAVITY);
        assert_eq!(settings.scene.lanes, vec![120.0]);
        assert_eq!(settings.scene.obstacle_pool, OBSTACLE_POOL_SIZE);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_rejects_downward_jump() {
        let err = Settings::from_json(r#"{"tuning": {"jump_impulse": 4.0}}"#).unwrap_err();
        match err {
            SettingsError::Invalid { field, .. } => assert_eq!(field, "tuning.jump_impulse"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_empty_lanes() {
        let err = Settings::from_json(r#"{"scene": {"lanes": []}}"#).unwrap_err();
        assert!(err.to_string().contains("scene.lanes"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip_preserves_custom_values() {
        let mut settings = Settings::default();
        settings.tuning.gravity = 0.25;
        settings.scene.decor_clones = 10;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_file_missing() {
        let err = Settings::load_file(std::path::Path::new("/nonexistent/city-runner.json"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
