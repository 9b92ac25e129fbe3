//! Undo/redo command history
//!
//! Every persistent document change made by the editor tools goes through a
//! [`CommandHistory`] as an [`EditorCommand`]. Tools that only need to record
//! new objects depend on the narrower [`ObjectHistory`] capability instead.

mod object;
mod shortcuts;

pub use object::AddMapObjectCommand;
pub use shortcuts::handle_history_shortcuts;

use bevy::prelude::Resource;
use tile_map_core::{Map, MapObject};

/// Default number of commands kept on the undo stack
pub const DEFAULT_HISTORY_DEPTH: usize = 100;

/// A reversible change to the map
pub trait EditorCommand: Send + Sync {
    /// Apply the change (also used for redo)
    fn execute(&mut self, map: &mut Map);
    /// Revert the change
    fn undo(&mut self, map: &mut Map);
    /// Human readable name shown in the Edit menu
    fn description(&self) -> &str;
}

/// Records finished objects on behalf of the creation tools
pub trait ObjectHistory {
    /// Record that `object` was added to the object layer at `layer_index`
    fn record_add_object(&mut self, map: &mut Map, layer_index: usize, object: MapObject);
}

/// Undo/redo stacks of executed commands
#[derive(Resource)]
pub struct CommandHistory {
    undo_stack: Vec<Box<dyn EditorCommand>>,
    redo_stack: Vec<Box<dyn EditorCommand>>,
    max_depth: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::with_max_depth(DEFAULT_HISTORY_DEPTH)
    }
}

impl CommandHistory {
    /// Create a history that keeps at most `max_depth` undo steps
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Execute a command and record it for undo. Clears the redo stack.
    pub fn push(&mut self, mut command: Box<dyn EditorCommand>, map: &mut Map) {
        command.execute(map);
        self.undo_stack.push(command);
        self.redo_stack.clear();

        if self.undo_stack.len() > self.max_depth {
            let overflow = self.undo_stack.len() - self.max_depth;
            self.undo_stack.drain(..overflow);
        }
    }

    /// Undo the most recent command. Returns false if there was nothing to undo.
    pub fn undo(&mut self, map: &mut Map) -> bool {
        let Some(mut command) = self.undo_stack.pop() else {
            return false;
        };
        command.undo(map);
        bevy::log::debug!("Undo: {}", command.description());
        self.redo_stack.push(command);
        true
    }

    /// Redo the most recently undone command. Returns false if there was nothing to redo.
    pub fn redo(&mut self, map: &mut Map) -> bool {
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };
        command.execute(map);
        bevy::log::debug!("Redo: {}", command.description());
        self.undo_stack.push(command);
        true
    }

    /// Number of undoable commands
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}

impl ObjectHistory for CommandHistory {
    fn record_add_object(&mut self, map: &mut Map, layer_index: usize, object: MapObject) {
        self.push(Box::new(AddMapObjectCommand::new(layer_index, object)), map);
    }
}
