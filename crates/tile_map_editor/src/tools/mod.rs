//! Editor tools - object creation
//!
//! Translates viewport mouse input into pointer events for the active tool.

mod create_object;

pub use create_object::{CreateObjectTool, CreationMode};

use bevy::prelude::*;
use tile_map_core::{Map, MapObject};

use crate::commands::{CommandHistory, ObjectHistory};
use crate::document::MapDocument;
use crate::preferences::EditorPreferences;
use crate::render::{world_to_map_pixel, MapRenderer};
use crate::EditorState;

/// Plugin for editor tools and viewport input
pub struct EditorToolsPlugin;

impl Plugin for EditorToolsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportInputState>().add_systems(
            Update,
            (sync_active_tool, handle_viewport_input).chain(),
        );
    }
}

/// Pointer buttons the tools distinguish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Modifier state of a single pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerModifiers {
    /// Invert the snap-to-grid preference for this event (Ctrl)
    pub toggle_snap: bool,
}

/// A press or release in map pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Vec2,
    pub button: PointerButton,
    pub modifiers: PointerModifiers,
}

impl PointerEvent {
    pub fn new(position: Vec2, button: PointerButton) -> Self {
        Self {
            position,
            button,
            modifiers: PointerModifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: PointerModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Everything a tool may read or modify while handling one event
pub struct ToolContext<'a> {
    pub map: &'a mut Map,
    /// Layer new objects go to
    pub layer_index: Option<usize>,
    pub renderer: MapRenderer,
    /// Snap-to-grid preference before modifiers are applied
    pub snap_to_grid: bool,
    pub history: &'a mut dyn ObjectHistory,
}

impl ToolContext<'_> {
    /// Snap setting for an event, with the modifier inverting the preference
    pub fn effective_snap(&self, modifiers: PointerModifiers) -> bool {
        self.snap_to_grid != modifiers.toggle_snap
    }
}

/// The tool receiving viewport input
#[derive(Resource, Debug)]
pub struct ActiveTool {
    tool: CreateObjectTool,
}

impl ActiveTool {
    pub fn new(mode: CreationMode) -> Self {
        Self {
            tool: CreateObjectTool::new(mode),
        }
    }

    pub fn tool(&self) -> &CreateObjectTool {
        &self.tool
    }

    pub fn tool_mut(&mut self) -> &mut CreateObjectTool {
        &mut self.tool
    }

    pub fn mode(&self) -> CreationMode {
        self.tool.mode()
    }

    pub fn is_drafting(&self) -> bool {
        self.tool.is_drafting()
    }

    /// Replace the tool with one for `mode`, abandoning any object in progress
    pub fn switch_mode(&mut self, mode: CreationMode, map: &mut Map) {
        if self.tool.mode() == mode {
            return;
        }
        self.tool.cancel(map);
        let tile = self.tool.tile();
        self.tool = CreateObjectTool::new(mode);
        self.tool.set_tile(tile);
        info!("Switched to {}", mode.display_name());
    }
}

/// State for viewport input handling
#[derive(Resource, Default)]
pub struct ViewportInputState {
    /// Last pointer position in map pixels
    pub last_map_pos: Option<Vec2>,
}

/// Forwards recorded objects to the command history and notes that it did
struct TrackedHistory<'a> {
    history: &'a mut CommandHistory,
    recorded: bool,
}

impl ObjectHistory for TrackedHistory<'_> {
    fn record_add_object(&mut self, map: &mut Map, layer_index: usize, object: MapObject) {
        self.history.record_add_object(map, layer_index, object);
        self.recorded = true;
    }
}

/// Keep the active tool in line with the mode and tile chosen in the editor state
fn sync_active_tool(
    editor_state: Res<EditorState>,
    mut active_tool: ResMut<ActiveTool>,
    mut document: ResMut<MapDocument>,
) {
    if !editor_state.is_changed() {
        return;
    }
    if active_tool.mode() != editor_state.creation_mode {
        active_tool.switch_mode(editor_state.creation_mode, &mut document.map);
    }
    if active_tool.tool().tile() != editor_state.selected_tile {
        active_tool.tool_mut().set_tile(editor_state.selected_tile);
    }
}

/// System to handle viewport input for the active tool
fn handle_viewport_input(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    preferences: Res<EditorPreferences>,
    editor_state: Res<EditorState>,
    mut input_state: ResMut<ViewportInputState>,
    mut active_tool: ResMut<ActiveTool>,
    mut document: ResMut<MapDocument>,
    mut history: ResMut<CommandHistory>,
) {
    let Some(window) = windows.iter().next() else {
        return;
    };
    let Some((camera, camera_transform)) = camera_q.iter().next() else {
        return;
    };
    let Some(cursor_position) = window.cursor_position() else {
        return;
    };
    let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor_position) else {
        return;
    };

    let map_pos = world_to_map_pixel(world_pos);
    let modifiers = PointerModifiers {
        toggle_snap: keyboard.pressed(KeyCode::ControlLeft)
            || keyboard.pressed(KeyCode::ControlRight),
    };

    let renderer = MapRenderer::for_map(&document.map);
    let mut tracked = TrackedHistory {
        history: &mut *history,
        recorded: false,
    };
    // Idle pointer moves must not flag the document as changed
    let mut ctx = ToolContext {
        map: &mut document.bypass_change_detection().map,
        layer_index: editor_state.selected_layer,
        renderer,
        snap_to_grid: preferences.snap_to_grid,
        history: &mut tracked,
    };
    let tool = active_tool.tool_mut();
    let was_drafting = tool.is_drafting();

    if input_state.last_map_pos != Some(map_pos) {
        input_state.last_map_pos = Some(map_pos);
        tool.mouse_moved(&mut ctx, map_pos, modifiers);
    }

    for (mouse_button, button) in [
        (MouseButton::Left, PointerButton::Primary),
        (MouseButton::Right, PointerButton::Secondary),
        (MouseButton::Middle, PointerButton::Middle),
    ] {
        if mouse_buttons.just_pressed(mouse_button) {
            let event = PointerEvent::new(map_pos, button).with_modifiers(modifiers);
            tool.mouse_pressed(&mut ctx, &event);
        }
    }

    if mouse_buttons.just_released(MouseButton::Left) {
        let event = PointerEvent::new(map_pos, PointerButton::Primary).with_modifiers(modifiers);
        tool.mouse_released(&mut ctx, &event);
    }

    if tracked.recorded {
        document.mark_dirty();
    } else if was_drafting || tool.is_drafting() {
        document.set_changed();
    }
}
