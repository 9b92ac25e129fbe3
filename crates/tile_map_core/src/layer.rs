//! Layer types for tile and object layers

use crate::MapObject;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A layer (tiles or objects)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub visible: bool,
    pub data: LayerData,
}

impl Layer {
    /// Create a new tile layer with the given tileset
    pub fn new_tile_layer(name: String, tileset_id: Uuid, width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            name,
            visible: true,
            data: LayerData::Tiles {
                tileset_id,
                tiles: vec![None; size],
            },
        }
    }

    /// Create a new object layer
    pub fn new_object_layer(name: String) -> Self {
        Self {
            name,
            visible: true,
            data: LayerData::Objects(ObjectGroup::default()),
        }
    }

    /// Get the object group if this is an object layer
    pub fn object_group(&self) -> Option<&ObjectGroup> {
        match &self.data {
            LayerData::Objects(group) => Some(group),
            LayerData::Tiles { .. } => None,
        }
    }

    /// Get the mutable object group if this is an object layer
    pub fn object_group_mut(&mut self) -> Option<&mut ObjectGroup> {
        match &mut self.data {
            LayerData::Objects(group) => Some(group),
            LayerData::Tiles { .. } => None,
        }
    }
}

/// The data contained in a layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LayerData {
    /// Tile layer, row-major; None means empty
    Tiles {
        tileset_id: Uuid,
        tiles: Vec<Option<u32>>,
    },
    /// Object layer
    Objects(ObjectGroup),
}

/// Ordered collection of map objects on an object layer
///
/// Order is draw order: later objects render above earlier ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectGroup {
    objects: Vec<MapObject>,
}

impl ObjectGroup {
    /// Append an object to the end of the group
    pub fn add_object(&mut self, object: MapObject) {
        self.objects.push(object);
    }

    /// Insert an object at `index`, clamped to the end of the group
    pub fn insert_object(&mut self, index: usize, object: MapObject) {
        let index = index.min(self.objects.len());
        self.objects.insert(index, object);
    }

    /// Remove an object by ID, returning its former index and the object
    pub fn remove_object(&mut self, id: Uuid) -> Option<(usize, MapObject)> {
        self.objects
            .iter()
            .position(|o| o.id == id)
            .map(|pos| (pos, self.objects.remove(pos)))
    }

    /// Get object by ID
    pub fn object(&self, id: Uuid) -> Option<&MapObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Get mutable object by ID
    pub fn object_mut(&mut self, id: Uuid) -> Option<&mut MapObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn objects(&self) -> &[MapObject] {
        &self.objects
    }

    pub fn iter(&self) -> impl Iterator<Item = &MapObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
