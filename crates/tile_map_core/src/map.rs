//! Map containing layers and tilesets

use crate::{Layer, LayerData, ObjectGroup, Tileset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How tile coordinates project onto pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Orthogonal,
    Isometric,
}

/// A map made of tile and object layers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Map {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub orientation: Orientation,
    /// Width in tiles
    pub width: u32,
    /// Height in tiles
    pub height: u32,
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub tilesets: Vec<Tileset>,
}

impl Map {
    /// Create a new empty orthogonal map
    pub fn new(name: String, width: u32, height: u32, tile_width: u32, tile_height: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            orientation: Orientation::Orthogonal,
            width,
            height,
            tile_width,
            tile_height,
            layers: Vec::new(),
            tilesets: Vec::new(),
        }
    }

    /// Add a new layer, returning its index
    pub fn add_layer(&mut self, layer: Layer) -> usize {
        self.layers.push(layer);
        self.layers.len() - 1
    }

    /// Get layer by index
    pub fn get_layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Get the object group of the layer at `index`, if it is an object layer
    pub fn object_group(&self, index: usize) -> Option<&ObjectGroup> {
        self.layers.get(index).and_then(Layer::object_group)
    }

    /// Get the mutable object group of the layer at `index`
    pub fn object_group_mut(&mut self, index: usize) -> Option<&mut ObjectGroup> {
        self.layers.get_mut(index).and_then(Layer::object_group_mut)
    }

    /// Index of the first object layer, if any
    pub fn first_object_layer(&self) -> Option<usize> {
        self.layers
            .iter()
            .position(|l| matches!(l.data, LayerData::Objects(_)))
    }

    /// Add a tileset
    pub fn add_tileset(&mut self, tileset: Tileset) {
        self.tilesets.push(tileset);
    }
}
