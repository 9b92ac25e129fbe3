//! Commands adding map objects

use super::EditorCommand;
use tile_map_core::{Map, MapObject};
use uuid::Uuid;

/// Adds an object to an object layer
///
/// While undone the command owns the object; while applied the layer does.
pub struct AddMapObjectCommand {
    layer_index: usize,
    object_id: Uuid,
    object: Option<MapObject>,
    /// Index the object occupied before the last undo
    index: Option<usize>,
}

impl AddMapObjectCommand {
    pub fn new(layer_index: usize, object: MapObject) -> Self {
        Self {
            layer_index,
            object_id: object.id,
            object: Some(object),
            index: None,
        }
    }
}

impl EditorCommand for AddMapObjectCommand {
    fn execute(&mut self, map: &mut Map) {
        let Some(object) = self.object.take() else {
            return;
        };
        let Some(group) = map.object_group_mut(self.layer_index) else {
            bevy::log::warn!(
                "Cannot add object {}: layer {} is not an object layer",
                self.object_id,
                self.layer_index
            );
            self.object = Some(object);
            return;
        };
        match self.index {
            Some(index) => group.insert_object(index, object),
            None => group.add_object(object),
        }
    }

    fn undo(&mut self, map: &mut Map) {
        let Some(group) = map.object_group_mut(self.layer_index) else {
            return;
        };
        if let Some((index, object)) = group.remove_object(self.object_id) {
            self.index = Some(index);
            self.object = Some(object);
        }
    }

    fn description(&self) -> &str {
        "Add Object"
    }
}
