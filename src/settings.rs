//! Settings persistence using TOML
//!
//! Stored in ~/.config/gridfall/settings.toml (or platform equivalent).
//! Anything missing or unreadable falls back to the defaults.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub keys: KeySettings,
    pub board: BoardSettings,
}

/// Key bindings, stored as key-name strings for easy editing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeySettings {
    pub move_left: Vec<String>,
    pub move_right: Vec<String>,
    pub soft_drop: Vec<String>,
    pub hard_drop: Vec<String>,
    pub rotate_cw: Vec<String>,
    pub rotate_ccw: Vec<String>,
    pub new_game: Vec<String>,
    pub quit: Vec<String>,
}

impl Default for KeySettings {
    fn default() -> Self {
        fn keys(names: &[&str]) -> Vec<String> {
            names.iter().map(|s| s.to_string()).collect()
        }
        Self {
            move_left: keys(&["left"]),
            move_right: keys(&["right"]),
            soft_drop: keys(&["down"]),
            hard_drop: keys(&["space"]),
            rotate_cw: keys(&["up", "x"]),
            rotate_ccw: keys(&["z"]),
            new_game: keys(&["r"]),
            quit: keys(&["q"]),
        }
    }
}

/// Board geometry. The classic field is 10x20.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            width: crate::board::BOARD_WIDTH,
            height: crate::board::BOARD_HEIGHT,
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gridfall")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
    }

    /// Load settings from disk, falling back to defaults on any failure
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path().ok_or("no config directory available")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let contents = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(&path, contents).map_err(|e| e.to_string())
    }
}
