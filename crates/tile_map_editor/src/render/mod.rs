//! Viewport rendering of objects being created
//!
//! Map pixel space has y pointing down; Bevy world space has y pointing up.

mod coords;

pub use coords::MapRenderer;

use bevy::prelude::*;
use tile_map_core::ObjectShape;

use crate::document::MapDocument;
use crate::scene::MapObjectItem;
use crate::tools::ActiveTool;

/// Plugin for draft object rendering
pub struct MapRenderPlugin;

impl Plugin for MapRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DraftRenderState>()
            .add_systems(Update, sync_draft_rendering);
    }
}

/// Entities spawned for the draft object
#[derive(Resource, Default)]
pub struct DraftRenderState {
    /// Fill sprite of an area or tile draft
    pub fill: Option<Entity>,
}

/// Marker component for the draft fill sprite
#[derive(Component)]
pub struct DraftObjectFill;

const DRAFT_OUTLINE_COLOR: Color = Color::srgb(0.6, 0.6, 1.0);
const DRAFT_FILL_COLOR: Color = Color::srgba(0.2, 0.4, 0.8, 0.3);

/// Convert a Bevy world position into map pixel coordinates
pub fn world_to_map_pixel(world: Vec2) -> Vec2 {
    Vec2::new(world.x, -world.y)
}

/// Convert map pixel coordinates into a Bevy world position
pub fn map_pixel_to_world(pixel: Vec2) -> Vec2 {
    Vec2::new(pixel.x, -pixel.y)
}

/// Outline of an item in world space
pub fn item_outline_world(item: &MapObjectItem, renderer: &MapRenderer) -> Vec<Vec2> {
    item.outline()
        .into_iter()
        .map(|point| map_pixel_to_world(renderer.tile_to_pixel_coords(Vec2::from(point))))
        .collect()
}

/// Redraw the draft object of the active tool
fn sync_draft_rendering(
    mut commands: Commands,
    mut render_state: ResMut<DraftRenderState>,
    mut gizmos: Gizmos,
    active_tool: Res<ActiveTool>,
    document: Res<MapDocument>,
) {
    if let Some(fill) = render_state.fill.take() {
        let _ = commands.get_entity(fill).map(|mut e| e.despawn());
    }

    let Some(item) = active_tool.tool().draft_item() else {
        return;
    };
    let renderer = MapRenderer::for_map(&document.map);
    let outline = item_outline_world(item, &renderer);

    gizmos.linestrip_2d(outline.iter().copied(), DRAFT_OUTLINE_COLOR);

    // Sprites are axis aligned, so only orthogonal rectangles get a fill
    if item.shape() == ObjectShape::Polygon || !matches!(renderer, MapRenderer::Orthogonal { .. })
    {
        return;
    }
    let Some((min, max)) = bounds(&outline) else {
        return;
    };
    let size = max - min;
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }
    let center = (min + max) / 2.0;

    let fill = commands
        .spawn((
            Sprite {
                color: DRAFT_FILL_COLOR,
                custom_size: Some(size),
                ..default()
            },
            // High Z to render on top
            Transform::from_xyz(center.x, center.y, item.z_value),
            DraftObjectFill,
        ))
        .id();
    render_state.fill = Some(fill);
}

fn bounds(points: &[Vec2]) -> Option<(Vec2, Vec2)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
    )
}
