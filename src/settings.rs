//! Sketch settings and preferences
//!
//! Persisted as JSON in LocalStorage. Missing fields fall back to defaults so
//! older saves keep loading.

use serde::{Deserialize, Serialize};

use crate::consts::{BACKGROUND, SPOKE_WIDTH};
use crate::sim::SimConfig;

/// Sketch settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation constants (radius, speeds, ring shape, reveal timing)
    pub sim: SimConfig,

    // === Visuals ===
    /// Canvas clear colour (any CSS colour)
    pub background: String,
    /// Stroke spokes with each satellite's spoke colour instead of white
    pub colored_spokes: bool,
    pub spoke_width: f32,

    // === Input ===
    /// Switch the cursor to a pointer over clickable targets
    pub hover_cursor: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),

            background: BACKGROUND.to_string(),
            colored_spokes: false,
            spoke_width: SPOKE_WIDTH,

            hover_cursor: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "satellite_bounce_settings";

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
                    Err(e) => {
                        // Replace the unreadable entry with defaults
                        log::warn!("Replacing stored settings: {}", e);
                        let settings = Self::default();
                        settings.save();
                        return settings;
                    }
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Settings saved");
                }
                Err(e) => log::warn!("Failed to serialize settings: {}", e),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_sketch() {
        let s = Settings::default();
        assert_eq!(s.background, "#0b0f14");
        assert_eq!(s.spoke_width, 1.5);
        assert!(!s.colored_spokes);
        assert!(s.hover_cursor);
        assert_eq!(s.sim, SimConfig::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{"colored_spokes": true, "sim": {"dot_radius": 20.0}}"#)
            .unwrap();
        assert!(s.colored_spokes);
        assert_eq!(s.sim.dot_radius, 20.0);
        assert_eq!(s.sim.satellite_count, 8);
        assert_eq!(s.background, "#0b0f14");
    }

    #[test]
    fn test_json_roundtrip() {
        let s = Settings {
            background: "black".into(),
            spoke_width: 2.0,
            ..Default::default()
        };
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{not json").is_err());
        assert!(Settings::from_json(r#"{"spoke_width": "wide"}"#).is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_load_is_default() {
        assert_eq!(Settings::load(), Settings::default());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_save_does_not_persist() {
        let s = Settings {
            colored_spokes: true,
            ..Default::default()
        };
        s.save();
        assert_eq!(Settings::load(), Settings::default());
    }
}
