//! Keyboard shortcut handling for undo/redo

use bevy::prelude::*;

use super::CommandHistory;
use crate::document::MapDocument;
use crate::tools::ActiveTool;

/// Handle Ctrl+Z (undo) and Ctrl+Shift+Z / Ctrl+Y (redo)
pub fn handle_history_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    tool: Res<ActiveTool>,
    mut document: ResMut<MapDocument>,
    mut history: ResMut<CommandHistory>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    if !ctrl {
        return;
    }

    // The draft object lives in its layer; undoing around it would reorder the group
    if tool.is_drafting() {
        return;
    }

    let undo = keyboard.just_pressed(KeyCode::KeyZ) && !shift;
    let redo = (keyboard.just_pressed(KeyCode::KeyZ) && shift) || keyboard.just_pressed(KeyCode::KeyY);

    if undo && history.undo(&mut document.map) {
        document.mark_dirty();
    } else if redo && history.redo(&mut document.map) {
        document.mark_dirty();
    }
}
