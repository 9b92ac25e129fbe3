//! Tilesets and tile references

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to a single tile of a tileset, as stamped onto tile objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileRef {
    pub tileset_id: Uuid,
    /// Index of the tile inside its tileset
    pub index: u32,
}

impl TileRef {
    pub fn new(tileset_id: Uuid, index: u32) -> Self {
        Self { tileset_id, index }
    }
}

/// A tile atlas backed by a single image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tileset {
    pub id: Uuid,
    pub name: String,
    pub tile_width: u32,
    pub tile_height: u32,
    pub tile_count: u32,
    pub columns: u32,
    /// Image path relative to the assets directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Tileset {
    pub fn new(name: String, tile_width: u32, tile_height: u32, columns: u32, rows: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            tile_width,
            tile_height,
            tile_count: columns * rows,
            columns,
            image: None,
        }
    }

    /// Build a reference to the tile at `index`, if the tileset has one
    pub fn tile_ref(&self, index: u32) -> Option<TileRef> {
        (index < self.tile_count).then_some(TileRef::new(self.id, index))
    }
}
