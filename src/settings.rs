//! Runtime settings
//!
//! Diagnostics knobs and shell options only. Physics constants live in
//! [`crate::consts`] and are not configurable.

use serde::{Deserialize, Serialize};

/// Runtime settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Diagnostics ===
    /// Log every body's position/velocity each tick (trace level)
    pub trace_bodies: bool,
    /// Log merges, bounces, drags and wall reflections (debug level)
    pub log_contacts: bool,

    // === Native shell ===
    /// Ticks the scripted headless run lasts before quitting
    pub headless_ticks: u64,

    // === Browser shell ===
    /// CSS pixels per arena unit
    pub canvas_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trace_bodies: false,
            log_contacts: true,
            headless_ticks: 600,
            canvas_scale: 2.0,
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "robot_arena_settings";

    /// Environment variable naming a settings JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub const ENV_VAR: &'static str = "ROBOT_ARENA_SETTINGS";

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

    /// Load settings from the file named by `ROBOT_ARENA_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };
        Self::load_file(&path)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_file(path: &str) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read settings file {}: {}, using defaults", path, e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings file {}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }
}
