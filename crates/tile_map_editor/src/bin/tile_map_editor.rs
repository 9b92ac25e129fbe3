//! Standalone tile map object editor binary
//!
//! Run with: tile_map_editor

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResolution};
use tile_map_editor::document::MapDocument;
use tile_map_editor::tile_map_core::{Layer, Map, Tileset};
use tile_map_editor::tools::CreationMode;
use tile_map_editor::{EditorState, ObjectEditorPlugin};

/// Number keys selecting each creation mode, in `CreationMode::all` order
const MODE_KEYS: [KeyCode; 3] = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3];

fn main() {
    let mut map = Map::new("Untitled".to_string(), 40, 30, 32, 32);
    let tileset = Tileset::new("Terrain".to_string(), 32, 32, 8, 8);
    map.add_layer(Layer::new_tile_layer("Ground".to_string(), tileset.id, 40, 30));
    map.add_layer(Layer::new_object_layer("Objects".to_string()));
    map.add_tileset(tileset);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Tile Map Editor".to_string(),
                resolution: WindowResolution::new(1280, 720),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ObjectEditorPlugin::new().with_map(map))
        .add_systems(Startup, select_first_tile)
        .add_systems(Update, (select_creation_mode, update_window_title))
        .run();
}

/// Select the first tile of the first tileset so tile mode has something to stamp
fn select_first_tile(document: Res<MapDocument>, mut editor_state: ResMut<EditorState>) {
    let tile = document
        .map
        .tilesets
        .first()
        .and_then(|tileset| tileset.tile_ref(0));
    if let Some(tile) = tile {
        info!("Selected tile {} for tile mode", tile.index);
        editor_state.selected_tile = Some(tile);
    }
}

/// Switch creation mode with the number keys
fn select_creation_mode(keyboard: Res<ButtonInput<KeyCode>>, mut editor_state: ResMut<EditorState>) {
    for (key, mode) in MODE_KEYS.iter().zip(CreationMode::all()) {
        if keyboard.just_pressed(*key) && editor_state.creation_mode != *mode {
            editor_state.creation_mode = *mode;
        }
    }
}

/// Mirror the document title, with its unsaved marker, in the window title
fn update_window_title(
    document: Res<MapDocument>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !document.is_changed() {
        return;
    }
    for mut window in &mut windows {
        window.title = format!("Tile Map Editor - {}", document.title());
    }
}
