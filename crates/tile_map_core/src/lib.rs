//! Core data structures for the tile map editor
//!
//! This crate provides the document model the editor tools operate on:
//! - `Map` - A complete map with layers and tilesets
//! - `Layer` - A single layer (tiles or objects)
//! - `ObjectGroup` - The ordered object list of an object layer
//! - `MapObject` - A placed rectangle, tile or polygon object
//! - `Tileset` / `TileRef` - Tile atlas configuration and tile references

mod layer;
mod map;
mod object;
mod tileset;

pub use layer::{Layer, LayerData, ObjectGroup};
pub use map::{Map, Orientation};
pub use object::{MapObject, ObjectShape};
pub use tileset::{TileRef, Tileset};
