//! Map objects placed on object layers

use crate::TileRef;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of geometry a map object carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectShape {
    /// Axis-aligned area defined by position and size
    Rectangle,
    /// Single tile stamped at the object position
    Tile,
    /// Closed polygon with points relative to the object position
    Polygon,
}

/// An object on an object layer
///
/// All coordinates are in tile units. Polygon points are relative to
/// `position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapObject {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub object_type: String,
    pub position: [f32; 2],
    #[serde(default)]
    pub size: [f32; 2],
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub polygon: Vec<[f32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile: Option<TileRef>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl MapObject {
    /// Create a new zero-sized object at the given position
    pub fn new(position: [f32; 2]) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            object_type: String::new(),
            position,
            size: [0.0, 0.0],
            polygon: Vec::new(),
            tile: None,
            visible: true,
        }
    }

    pub fn set_position(&mut self, position: [f32; 2]) {
        self.position = position;
    }

    pub fn set_size(&mut self, size: [f32; 2]) {
        self.size = size;
    }

    pub fn set_polygon(&mut self, polygon: Vec<[f32; 2]>) {
        self.polygon = polygon;
    }

    pub fn set_tile(&mut self, tile: Option<TileRef>) {
        self.tile = tile;
    }

    /// Determine the shape from which geometry fields are populated
    pub fn shape(&self) -> ObjectShape {
        if self.tile.is_some() {
            ObjectShape::Tile
        } else if !self.polygon.is_empty() {
            ObjectShape::Polygon
        } else {
            ObjectShape::Rectangle
        }
    }
}
