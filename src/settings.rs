//! Game settings and preferences
//!
//! Persisted as JSON next to the binary; absent or malformed files fall back
//! to defaults so a fresh checkout runs unconfigured.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Rules;

/// Default settings file, overridable via the `COINFALL_SETTINGS` env var.
const SETTINGS_FILE: &str = "coinfall.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Viewport resolution
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Target loop rate
    pub tick_hz: u32,
    /// Coins needed to win
    pub win_score: u32,
    /// Avatar horizontal speed per tick
    pub avatar_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            tick_hz: TICK_HZ,
            win_score: WIN_SCORE,
            avatar_speed: AVATAR_SPEED,
        }
    }
}

impl Settings {
    fn path() -> String {
        std::env::var("COINFALL_SETTINGS").unwrap_or_else(|_| SETTINGS_FILE.to_owned())
    }

    /// Load settings from the settings file, defaulting when absent or
    /// unreadable.
    pub fn load() -> Self {
        let path = Self::path();
        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {path}");
                    settings
                }
                Err(err) => {
                    log::warn!("settings file {path} is malformed ({err}); using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file at {path}; using defaults");
                Self::default()
            }
        }
    }

    /// Write settings to the settings file. Failure is non-fatal.
    pub fn save(&self) {
        let path = Self::path();
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(&path, json) {
                    log::warn!("could not save settings to {path}: {err}");
                } else {
                    log::info!("settings saved to {path}");
                }
            }
            Err(err) => log::warn!("could not serialize settings: {err}"),
        }
    }

    /// Session rules derived from these settings.
    pub fn rules(&self) -> Rules {
        Rules {
            viewport: Vec2::new(self.viewport_width as f32, self.viewport_height as f32),
            win_score: self.win_score,
            avatar_speed: self.avatar_speed,
        }
    }
}
