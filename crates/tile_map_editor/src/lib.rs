//! tile_map_editor - Object placement for tile maps, built on Bevy
//!
//! This crate provides the object creation tool of a tile-map editor:
//! - Rectangle areas, tile stamps and polygons drawn on object layers
//! - Optional snap-to-grid, inverted per event with Ctrl
//! - Orthogonal and isometric maps
//! - Undo/redo of placed objects
//!
//! # Usage
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use tile_map_editor::ObjectEditorPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(ObjectEditorPlugin::new())
//!         .run();
//! }
//! ```

pub mod commands;
pub mod document;
pub mod preferences;
pub mod render;
pub mod scene;
pub mod tools;

pub use tile_map_core;

use bevy::prelude::*;
use tile_map_core::{Map, TileRef};

use commands::{handle_history_shortcuts, CommandHistory};
use document::MapDocument;
use preferences::{handle_preference_shortcuts, save_preferences_on_change, EditorPreferences};
use render::MapRenderPlugin;
use tools::{ActiveTool, CreationMode, EditorToolsPlugin};

/// Configuration for the initial editor state
///
/// Fields left as `None` use the saved preferences.
#[derive(Clone, Debug, Default)]
pub struct EditorStateConfig {
    /// Whether to snap to grid on startup
    pub snap_to_grid: Option<bool>,
    /// Creation mode on startup
    pub initial_mode: Option<CreationMode>,
}

/// Main editor plugin with configurable initial state
///
/// # Example
///
/// ```rust,ignore
/// use bevy::prelude::*;
/// use tile_map_editor::{tools::CreationMode, ObjectEditorPlugin};
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(
///         ObjectEditorPlugin::new()
///             .with_snap_to_grid(true)
///             .with_initial_mode(CreationMode::Polygon)
///     )
///     .run();
/// ```
#[derive(Default)]
pub struct ObjectEditorPlugin {
    /// Map to open. If None, an empty map with one object layer is created.
    pub map: Option<Map>,
    /// Initial editor state configuration.
    pub initial_state: EditorStateConfig,
}

impl ObjectEditorPlugin {
    /// Create an editor plugin with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `map` instead of an empty one
    pub fn with_map(mut self, map: Map) -> Self {
        self.map = Some(map);
        self
    }

    /// Set whether to snap to grid on startup, overriding preferences
    pub fn with_snap_to_grid(mut self, snap: bool) -> Self {
        self.initial_state.snap_to_grid = Some(snap);
        self
    }

    /// Set the initial creation mode, overriding preferences
    pub fn with_initial_mode(mut self, mode: CreationMode) -> Self {
        self.initial_state.initial_mode = Some(mode);
        self
    }

    /// Apply the plugin configuration on top of loaded preferences
    fn apply_config(&self, mut preferences: EditorPreferences) -> EditorPreferences {
        if let Some(snap) = self.initial_state.snap_to_grid {
            preferences.snap_to_grid = snap;
        }
        if let Some(mode) = self.initial_state.initial_mode {
            preferences.default_creation_mode = mode;
        }
        preferences
    }
}

impl Plugin for ObjectEditorPlugin {
    fn build(&self, app: &mut App) {
        // Plugin config takes precedence over saved preferences
        let preferences = self.apply_config(EditorPreferences::load());
        bevy::log::info!("Loaded editor preferences");

        let document = self
            .map
            .clone()
            .map(MapDocument::new)
            .unwrap_or_default();

        let editor_state = EditorState {
            selected_layer: document.map.first_object_layer(),
            selected_tile: None,
            creation_mode: preferences.default_creation_mode,
        };
        if editor_state.selected_layer.is_none() {
            bevy::log::warn!("Map has no object layer; object creation is disabled");
        }

        app.add_plugins(MapRenderPlugin)
            .add_plugins(EditorToolsPlugin)
            .insert_resource(ActiveTool::new(editor_state.creation_mode))
            .insert_resource(editor_state)
            .insert_resource(preferences)
            .insert_resource(document)
            .init_resource::<CommandHistory>()
            .add_systems(Startup, setup_editor_camera)
            .add_systems(
                Update,
                (
                    handle_history_shortcuts,
                    handle_preference_shortcuts,
                    save_preferences_on_change,
                ),
            );
    }
}

/// Spawns the editor camera if one doesn't exist
fn setup_editor_camera(mut commands: Commands, camera_query: Query<&Camera2d>) {
    // Only spawn if no Camera2d exists
    if camera_query.is_empty() {
        commands.spawn(Camera2d);
    }
}

/// Global editor state
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EditorState {
    /// Object layer new objects are added to
    pub selected_layer: Option<usize>,
    /// Tile stamped by the tile creation mode
    pub selected_tile: Option<TileRef>,
    pub creation_mode: CreationMode,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            selected_layer: None,
            selected_tile: None,
            creation_mode: CreationMode::Area,
        }
    }
}
