//! Runtime overlay configuration loaded from `assets/pause_overlay.toml`.
//!
//! [`OverlayConfig`] is a Bevy [`Resource`] that mirrors the overlay constants
//! in [`crate::constants`].  At startup, [`load_overlay_config`] reads the TOML
//! file and overwrites the defaults with any values present.  Missing keys fall
//! back to the compile-time defaults, so a minimal file can override just the
//! values you care about:
//!
//! ```toml
//! pause_on_open = false
//! close_fade_secs = 0.0   # close synchronously
//! click_sound = "sounds/click.ogg"
//! ```

use crate::constants::*;
use crate::error::{validate_fade_secs, validate_z_order, OverlayError, OverlayResult};
use crate::overlay::{OverlaySettings, Transition};
use bevy::prelude::*;
use serde::Deserialize;

pub const CONFIG_PATH: &str = "assets/pause_overlay.toml";

/// Runtime-tunable overlay configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    // ── Behaviour ────────────────────────────────────────────────────────────
    pub pause_on_open: bool,
    pub show_cursor_on_open: bool,
    pub z_order: i32,

    // ── Transitions ──────────────────────────────────────────────────────────
    pub open_fade_secs: f32,
    pub close_fade_secs: f32,

    // ── Sounds (asset paths; absent = silent) ────────────────────────────────
    pub open_sound: Option<String>,
    pub close_sound: Option<String>,
    pub hover_sound: Option<String>,
    pub click_sound: Option<String>,

    // ── Demo world ───────────────────────────────────────────────────────────
    pub demo_body_count: usize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            pause_on_open: PAUSE_ON_OPEN,
            show_cursor_on_open: SHOW_CURSOR_ON_OPEN,
            z_order: OVERLAY_Z_ORDER,
            open_fade_secs: OPEN_FADE_SECS,
            close_fade_secs: CLOSE_FADE_SECS,
            open_sound: None,
            close_sound: None,
            hover_sound: None,
            click_sound: None,
            demo_body_count: DEMO_BODY_COUNT,
        }
    }
}

impl OverlayConfig {
    /// Parse a TOML document; unknown keys are ignored, missing keys default.
    pub fn from_toml_str(contents: &str) -> OverlayResult<Self> {
        toml::from_str::<OverlayConfig>(contents).map_err(|e| OverlayError::ConfigParse {
            path: CONFIG_PATH.to_string(),
            message: e.to_string(),
        })
    }

    /// Replace every out-of-range value with its default, returning the
    /// rejected values as errors for logging.
    pub fn sanitized(mut self) -> (Self, Vec<OverlayError>) {
        let defaults = OverlayConfig::default();
        let mut errors = Vec::new();

        if let Err(e) = validate_z_order(self.z_order) {
            errors.push(e);
            self.z_order = defaults.z_order;
        }
        if let Err(e) = validate_fade_secs("open_fade_secs", self.open_fade_secs) {
            errors.push(e);
            self.open_fade_secs = defaults.open_fade_secs;
        }
        if let Err(e) = validate_fade_secs("close_fade_secs", self.close_fade_secs) {
            errors.push(e);
            self.close_fade_secs = defaults.close_fade_secs;
        }
        (self, errors)
    }

    pub fn settings(&self) -> OverlaySettings {
        OverlaySettings {
            pause_on_open: self.pause_on_open,
            show_cursor_on_open: self.show_cursor_on_open,
            z_order: self.z_order,
        }
    }

    /// `None` when the fade is disabled.
    pub fn open_transition(&self) -> Option<Transition> {
        Transition::fade_in(self.open_fade_secs).non_zero()
    }

    /// `None` when the fade is disabled; close then tears down synchronously.
    pub fn close_transition(&self) -> Option<Transition> {
        Transition::fade_out(self.close_fade_secs).non_zero()
    }
}

/// Startup system: attempt to load `assets/pause_overlay.toml` and overwrite
/// the `OverlayConfig` resource with any values present in the file.
///
/// Parse errors and out-of-range values are logged and fall back to defaults.
/// A missing file is not an error.
pub fn load_overlay_config(mut config: ResMut<OverlayConfig>) {
    let contents = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => contents,
        Err(_) => {
            info!("No {CONFIG_PATH} found; using compiled defaults");
            return;
        }
    };

    match OverlayConfig::from_toml_str(&contents) {
        Ok(loaded) => {
            let (loaded, rejected) = loaded.sanitized();
            for err in &rejected {
                warn!("{err}; using default");
            }
            *config = loaded;
            info!("Loaded overlay config from {CONFIG_PATH}");
        }
        Err(err) => warn!("{err}; using defaults"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = OverlayConfig::from_toml_str("pause_on_open = false\nz_order = 12\n")
            .expect("valid toml");
        assert!(!config.pause_on_open);
        assert_eq!(config.z_order, 12);
        assert_eq!(config.close_fade_secs, CLOSE_FADE_SECS);
        assert!(config.show_cursor_on_open);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let err = OverlayConfig::from_toml_str("pause_on_open = maybe").unwrap_err();
        assert!(matches!(err, OverlayError::ConfigParse { .. }));
    }

    #[test]
    fn out_of_range_values_fall_back_to_defaults() {
        let config = OverlayConfig {
            z_order: -5,
            close_fade_secs: -1.0,
            ..OverlayConfig::default()
        };
        let (config, rejected) = config.sanitized();
        assert_eq!(rejected.len(), 2);
        assert_eq!(config.z_order, OVERLAY_Z_ORDER);
        assert_eq!(config.close_fade_secs, CLOSE_FADE_SECS);
    }

    #[test]
    fn zero_fade_disables_transition() {
        let config = OverlayConfig {
            close_fade_secs: 0.0,
            ..OverlayConfig::default()
        };
        assert!(config.close_transition().is_none());
        assert!(config.open_transition().is_some());
    }

    #[test]
    fn sound_paths_are_optional() {
        let config =
            OverlayConfig::from_toml_str("click_sound = \"sounds/click.ogg\"").expect("valid toml");
        assert_eq!(config.click_sound.as_deref(), Some("sounds/click.ogg"));
        assert!(config.open_sound.is_none());
    }
}
