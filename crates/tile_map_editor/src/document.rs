//! The map document being edited

use bevy::prelude::Resource;
use tile_map_core::{Layer, Map};

/// The map currently open in the editor
#[derive(Debug, Clone, Resource)]
pub struct MapDocument {
    pub map: Map,
    /// Unsaved changes exist
    pub dirty: bool,
}

impl Default for MapDocument {
    fn default() -> Self {
        let mut map = Map::new("Untitled".to_string(), 40, 30, 32, 32);
        map.add_layer(Layer::new_object_layer("Objects".to_string()));
        Self::new(map)
    }
}

impl MapDocument {
    pub fn new(map: Map) -> Self {
        Self { map, dirty: false }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Display name with an unsaved-changes marker
    pub fn title(&self) -> String {
        if self.dirty {
            format!("{}*", self.map.name)
        } else {
            self.map.name.clone()
        }
    }
}
