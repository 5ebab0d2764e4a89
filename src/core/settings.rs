//=========================================================================
// Scene Settings
//=========================================================================
//
// Tunables read by the coordinator at startup.
//
// Loaded from TOML; every field has a default so a partial (or empty)
// file is valid. Values are checked by `validate()` before use.
//
// Example:
// ```toml
// override_fixed_time_step = true
// fixed_time_step = 0.01
// disable_ui_when_no_player_vehicle = true
// behaviors = ["Simulator", "Racing", "Drift"]
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::core::error::{SceneError, SceneResult};

//=== SceneSettings =======================================================

/// Startup configuration for a [`crate::SceneCoordinator`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    //--- Engine Overrides -------------------------------------------------
    pub override_fixed_time_step: bool,
    pub fixed_time_step: f32,
    pub override_fps: bool,
    pub max_fps: u32,
    pub lock_and_unlock_cursor: bool,

    //--- Behavior Presets -------------------------------------------------
    pub override_behavior: bool,
    pub behavior_selected_index: usize,
    pub behaviors: Vec<String>,

    //--- Player Session ---------------------------------------------------
    /// Every spawned player vehicle becomes the active one.
    pub register_first_vehicle_as_player: bool,
    /// Hide the dashboard while there is no drivable player vehicle.
    pub disable_ui_when_no_player_vehicle: bool,
    /// Load persisted customization when a player vehicle is registered.
    pub load_customization_at_first: bool,

    //--- Coordination -----------------------------------------------------
    pub slow_motion_time_scale: f32,
    /// Control lockout applied after a transport, in seconds.
    pub transport_freeze_seconds: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            override_fixed_time_step: false,
            fixed_time_step: 0.02,
            override_fps: false,
            max_fps: 60,
            lock_and_unlock_cursor: false,
            override_behavior: false,
            behavior_selected_index: 0,
            behaviors: Vec::new(),
            register_first_vehicle_as_player: true,
            disable_ui_when_no_player_vehicle: false,
            load_customization_at_first: true,
            slow_motion_time_scale: 0.2,
            transport_freeze_seconds: 1.0,
        }
    }
}

impl SceneSettings {
    //--- Loading ----------------------------------------------------------

    /// Parses and validates settings from a TOML document.
    pub fn from_toml_str(source: &str) -> SceneResult<Self> {
        let settings: SceneSettings = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates a TOML settings file.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&source)?;
        info!("Loaded scene settings from {}", path.display());
        Ok(settings)
    }

    //--- Validation -------------------------------------------------------

    pub fn validate(&self) -> SceneResult<()> {
        if !(self.fixed_time_step > 0.0) {
            return Err(SceneError::InvalidSettings(format!(
                "fixed_time_step must be positive, got {}",
                self.fixed_time_step
            )));
        }
        if self.max_fps == 0 {
            return Err(SceneError::InvalidSettings("max_fps must be positive".into()));
        }
        if !(self.slow_motion_time_scale > 0.0 && self.slow_motion_time_scale <= 1.0) {
            return Err(SceneError::InvalidSettings(format!(
                "slow_motion_time_scale must be in (0, 1], got {}",
                self.slow_motion_time_scale
            )));
        }
        if !(self.transport_freeze_seconds >= 0.0) {
            return Err(SceneError::InvalidSettings(format!(
                "transport_freeze_seconds must not be negative, got {}",
                self.transport_freeze_seconds
            )));
        }
        Ok(())
    }

    //--- Queries ----------------------------------------------------------

    /// Name of the selected behavior preset, if it is a known preset.
    pub fn selected_behavior(&self) -> Option<&str> {
        self.behaviors
            .get(self.behavior_selected_index)
            .map(String::as_str)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = SceneSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.slow_motion_time_scale, 0.2);
        assert_eq!(settings.transport_freeze_seconds, 1.0);
        assert!(settings.register_first_vehicle_as_player);
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let settings = SceneSettings::from_toml_str("").unwrap();
        assert_eq!(settings, SceneSettings::default());
    }

    #[test]
    fn test_partial_document_overrides_fields() {
        let settings = SceneSettings::from_toml_str(
            r#"
            override_fixed_time_step = true
            fixed_time_step = 0.01
            disable_ui_when_no_player_vehicle = true
            behaviors = ["Simulator", "Racing"]
            behavior_selected_index = 1
            "#,
        )
        .unwrap();

        assert!(settings.override_fixed_time_step);
        assert_eq!(settings.fixed_time_step, 0.01);
        assert!(settings.disable_ui_when_no_player_vehicle);
        assert_eq!(settings.selected_behavior(), Some("Racing"));
        assert_eq!(settings.max_fps, 60);
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        let err = SceneSettings::from_toml_str("fixed_time_step = \"fast\"").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        for source in [
            "fixed_time_step = 0.0",
            "max_fps = 0",
            "slow_motion_time_scale = 1.5",
            "slow_motion_time_scale = 0.0",
            "transport_freeze_seconds = -1.0",
        ] {
            let err = SceneSettings::from_toml_str(source).unwrap_err();
            assert!(
                matches!(err, SceneError::InvalidSettings(_)),
                "{source} should be rejected"
            );
        }
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = SceneSettings::load("/nonexistent/scene.toml").unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }

    #[test]
    fn test_unknown_behavior_index_has_no_name() {
        let settings = SceneSettings {
            behaviors: vec!["Simulator".into()],
            behavior_selected_index: 3,
            ..SceneSettings::default()
        };
        assert_eq!(settings.selected_behavior(), None);
    }
}
