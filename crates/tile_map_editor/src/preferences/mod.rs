//! User preferences persisted between editor sessions

mod file;

pub use file::*;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::tools::CreationMode;

/// Editor-wide preferences
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorPreferences {
    /// Round object positions and sizes to whole tiles (Ctrl inverts per event)
    pub snap_to_grid: bool,
    /// Creation mode selected when the editor starts
    pub default_creation_mode: CreationMode,
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            snap_to_grid: false,
            default_creation_mode: CreationMode::Area,
        }
    }
}

impl EditorPreferences {
    pub fn toggle_snap_to_grid(&mut self) {
        self.snap_to_grid = !self.snap_to_grid;
    }
}

/// Toggle snap-to-grid with the G key
pub fn handle_preference_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut preferences: ResMut<EditorPreferences>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl && keyboard.just_pressed(KeyCode::KeyG) {
        preferences.toggle_snap_to_grid();
        info!("Snap to grid: {}", preferences.snap_to_grid);
    }
}

/// Write preferences back to disk whenever they change
pub fn save_preferences_on_change(preferences: Res<EditorPreferences>) {
    if !preferences.is_changed() || preferences.is_added() {
        return;
    }
    if let Err(e) = preferences.save() {
        error!("Failed to save preferences: {}", e);
    }
}
