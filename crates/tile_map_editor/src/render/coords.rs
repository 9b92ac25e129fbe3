//! Conversion between pixel and tile coordinates

use bevy::math::Vec2;
use tile_map_core::{Map, Orientation};

/// Projects between the map's pixel space and its tile coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapRenderer {
    Orthogonal {
        tile_width: f32,
        tile_height: f32,
    },
    Isometric {
        tile_width: f32,
        tile_height: f32,
        /// Map height in tiles; the top corner of the diamond sits at its
        /// horizontal center
        map_height: u32,
    },
}

impl MapRenderer {
    /// Build the renderer matching a map's orientation and tile size
    pub fn for_map(map: &Map) -> Self {
        let tile_width = map.tile_width.max(1) as f32;
        let tile_height = map.tile_height.max(1) as f32;
        match map.orientation {
            Orientation::Orthogonal => MapRenderer::Orthogonal {
                tile_width,
                tile_height,
            },
            Orientation::Isometric => MapRenderer::Isometric {
                tile_width,
                tile_height,
                map_height: map.height,
            },
        }
    }

    /// Convert a pixel position into (fractional) tile coordinates
    pub fn pixel_to_tile_coords(&self, pixel: Vec2) -> Vec2 {
        match *self {
            MapRenderer::Orthogonal {
                tile_width,
                tile_height,
            } => Vec2::new(pixel.x / tile_width, pixel.y / tile_height),
            MapRenderer::Isometric {
                tile_width,
                tile_height,
                map_height,
            } => {
                let ratio = tile_width / tile_height;
                let x = pixel.x - Self::isometric_origin_x(tile_width, map_height);
                let mx = pixel.y + x / ratio;
                let my = pixel.y - x / ratio;
                Vec2::new(mx / tile_height, my / tile_height)
            }
        }
    }

    /// Convert tile coordinates into a pixel position
    pub fn tile_to_pixel_coords(&self, tile: Vec2) -> Vec2 {
        match *self {
            MapRenderer::Orthogonal {
                tile_width,
                tile_height,
            } => Vec2::new(tile.x * tile_width, tile.y * tile_height),
            MapRenderer::Isometric {
                tile_width,
                tile_height,
                map_height,
            } => {
                let origin_x = Self::isometric_origin_x(tile_width, map_height);
                Vec2::new(
                    (tile.x - tile.y) * tile_width / 2.0 + origin_x,
                    (tile.x + tile.y) * tile_height / 2.0,
                )
            }
        }
    }

    fn isometric_origin_x(tile_width: f32, map_height: u32) -> f32 {
        map_height as f32 * tile_width / 2.0
    }
}
