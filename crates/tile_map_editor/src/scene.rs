//! Visual proxies for map objects
//!
//! A [`MapObjectItem`] mirrors the geometry of one [`MapObject`] so the
//! viewport can draw it without borrowing the document.

use tile_map_core::{MapObject, ObjectShape, TileRef};
use uuid::Uuid;

/// Draw order of items being created, above all regular map content
pub const DRAFT_Z_VALUE: f32 = 10000.0;

/// Scene-side copy of a map object's geometry
#[derive(Debug, Clone, PartialEq)]
pub struct MapObjectItem {
    pub object_id: Uuid,
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub polygon: Vec<[f32; 2]>,
    pub tile: Option<TileRef>,
    pub z_value: f32,
}

impl MapObjectItem {
    /// Create an item for `object`, drawn above regular content
    pub fn new(object: &MapObject) -> Self {
        Self {
            object_id: object.id,
            position: object.position,
            size: object.size,
            polygon: object.polygon.clone(),
            tile: object.tile,
            z_value: DRAFT_Z_VALUE,
        }
    }

    /// Copy the current geometry of `object`
    pub fn sync_with_object(&mut self, object: &MapObject) {
        debug_assert_eq!(self.object_id, object.id, "item synced with a foreign object");
        self.position = object.position;
        self.size = object.size;
        self.polygon.clone_from(&object.polygon);
        self.tile = object.tile;
    }

    /// Resize the mirrored object and its model counterpart
    pub fn resize(&mut self, object: &mut MapObject, size: [f32; 2]) {
        object.set_size(size);
        self.sync_with_object(object);
    }

    /// Replace the polygon of the mirrored object and its model counterpart
    pub fn set_polygon(&mut self, object: &mut MapObject, polygon: Vec<[f32; 2]>) {
        object.set_polygon(polygon);
        self.sync_with_object(object);
    }

    /// Closed outline in tile coordinates (first point repeated at the end)
    ///
    /// Tile objects cover the single tile at their position.
    pub fn outline(&self) -> Vec<[f32; 2]> {
        let [x, y] = self.position;
        let rect = |[w, h]: [f32; 2]| vec![[x, y], [x + w, y], [x + w, y + h], [x, y + h]];
        let mut points = match self.shape() {
            ObjectShape::Rectangle => rect(self.size),
            ObjectShape::Tile => rect([1.0, 1.0]),
            ObjectShape::Polygon => self
                .polygon
                .iter()
                .map(|[px, py]| [x + px, y + py])
                .collect(),
        };
        if let Some(&first) = points.first() {
            points.push(first);
        }
        points
    }

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
