//! Tool for creating rectangle, tile and polygon objects
//!
//! A gesture starts with a primary press on a visible object layer. The new
//! object is attached to the layer right away and mirrored by a
//! [`MapObjectItem`] so the viewport can draw it on top of everything else.
//! Pointer moves reshape the draft without touching the undo history; the
//! finished object is handed to an [`ObjectHistory`] exactly once.
//!
//! | mode    | primary press        | primary release | secondary press          |
//! |---------|----------------------|-----------------|--------------------------|
//! | Area    | start                | commit          | cancel                   |
//! | Tile    | start (needs a tile) | commit          | cancel                   |
//! | Polygon | start / fix point    | -               | commit (≥ 2 points) else cancel |

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};
use tile_map_core::{Map, MapObject, TileRef};
use uuid::Uuid;

use super::{PointerButton, PointerEvent, PointerModifiers, ToolContext};
use crate::scene::MapObjectItem;

/// The kind of object a [`CreateObjectTool`] produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CreationMode {
    /// Drag out a rectangular area
    #[default]
    Area,
    /// Stamp the selected tile
    Tile,
    /// Click polygon points one at a time
    Polygon,
}

impl CreationMode {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            CreationMode::Area => "Insert Object",
            CreationMode::Tile => "Insert Tile",
            CreationMode::Polygon => "Insert Polygon",
        }
    }

    /// Returns all modes for UI enumeration
    pub fn all() -> &'static [CreationMode] {
        &[
            CreationMode::Area,
            CreationMode::Tile,
            CreationMode::Polygon,
        ]
    }
}

/// The object currently being created and its visual proxy
#[derive(Debug)]
struct Draft {
    layer_index: usize,
    item: MapObjectItem,
}

/// Interprets pointer events as object creation gestures
///
/// The mode is fixed for the lifetime of the tool; switch modes by building
/// a new tool.
#[derive(Debug)]
pub struct CreateObjectTool {
    mode: CreationMode,
    tile: Option<TileRef>,
    draft: Option<Draft>,
}

impl CreateObjectTool {
    pub fn new(mode: CreationMode) -> Self {
        Self {
            mode,
            tile: None,
            draft: None,
        }
    }

    pub fn mode(&self) -> CreationMode {
        self.mode
    }

    /// Tile stamped by tile mode
    pub fn tile(&self) -> Option<TileRef> {
        self.tile
    }

    pub fn set_tile(&mut self, tile: Option<TileRef>) {
        self.tile = tile;
    }

    pub fn is_drafting(&self) -> bool {
        self.draft.is_some()
    }

    /// Visual proxy of the object being created
    pub fn draft_item(&self) -> Option<&MapObjectItem> {
        self.draft.as_ref().map(|d| &d.item)
    }

    /// Update the draft geometry to follow the pointer
    pub fn mouse_moved(&mut self, ctx: &mut ToolContext, pos: Vec2, modifiers: PointerModifiers) {
        let Some(draft) = self.draft.as_mut() else {
            return;
        };

        let tile_coords = ctx.renderer.pixel_to_tile_coords(pos);
        let snap_to_grid = ctx.effective_snap(modifiers);

        let Some(object) = draft_object_mut(ctx.map, draft.layer_index, draft.item.object_id)
        else {
            return;
        };

        match self.mode {
            CreationMode::Area => {
                let origin = Vec2::from(object.position);
                let size = snap((tile_coords - origin).max(Vec2::ZERO), snap_to_grid);
                draft.item.resize(object, size.to_array());
            }
            CreationMode::Tile => {
                let position = snap(tile_coords, snap_to_grid);
                object.set_position(position.to_array());
                draft.item.sync_with_object(object);
            }
            CreationMode::Polygon => {
                let point = snap(tile_coords, snap_to_grid) - Vec2::from(object.position);
                let mut polygon = object.polygon.clone();
                if let Some(last) = polygon.last_mut() {
                    *last = point.to_array();
                }
                draft.item.set_polygon(object, polygon);
            }
        }
    }

    pub fn mouse_pressed(&mut self, ctx: &mut ToolContext, event: &PointerEvent) {
        if self.draft.is_some() {
            match (self.mode, event.button) {
                (CreationMode::Area | CreationMode::Tile, PointerButton::Secondary) => {
                    self.cancel_new_object(ctx.map);
                }
                (CreationMode::Polygon, PointerButton::Secondary) => self.finish_polygon(ctx),
                (CreationMode::Polygon, PointerButton::Primary) => self.fix_polygon_point(ctx.map),
                _ => {}
            }
            return;
        }

        if event.button != PointerButton::Primary {
            return;
        }

        let Some(layer_index) = ctx.layer_index else {
            return;
        };
        let Some(layer) = ctx.map.get_layer(layer_index) else {
            return;
        };
        if !layer.visible || layer.object_group().is_none() {
            return;
        }

        let tile_coords = ctx.renderer.pixel_to_tile_coords(event.position);
        let position = snap(tile_coords, ctx.effective_snap(event.modifiers));

        self.start_new_object(ctx.map, position, layer_index);
    }

    pub fn mouse_released(&mut self, ctx: &mut ToolContext, event: &PointerEvent) {
        if event.button != PointerButton::Primary || self.draft.is_none() {
            return;
        }
        match self.mode {
            CreationMode::Area | CreationMode::Tile => self.finish_new_object(ctx),
            // Polygon points are fixed on press
            CreationMode::Polygon => {}
        }
    }

    /// Abandon the object being created, if any
    pub fn cancel(&mut self, map: &mut Map) {
        if self.draft.is_some() {
            self.cancel_new_object(map);
        }
    }

    fn start_new_object(&mut self, map: &mut Map, position: Vec2, layer_index: usize) {
        debug_assert!(self.draft.is_none(), "already creating an object");
        if self.draft.is_some() {
            return;
        }

        if self.mode == CreationMode::Tile && self.tile.is_none() {
            return;
        }

        let mut object = MapObject::new(position.to_array());
        match self.mode {
            CreationMode::Area => {}
            CreationMode::Tile => object.set_tile(self.tile),
            // The last point follows the pointer
            CreationMode::Polygon => object.set_polygon(vec![[0.0, 0.0], [0.0, 0.0]]),
        }

        let Some(group) = map.object_group_mut(layer_index) else {
            return;
        };

        let item = MapObjectItem::new(&object);
        bevy::log::debug!(
            "Started {:?} object {} on layer {}",
            self.mode,
            object.id,
            layer_index
        );
        group.add_object(object);

        self.draft = Some(Draft { layer_index, item });
    }

    /// Detach the draft object from its layer and drop the visual proxy
    fn clear_new_object(&mut self, map: &mut Map) -> Option<(usize, MapObject)> {
        let draft = self.draft.take();
        debug_assert!(draft.is_some(), "no object is being created");
        let draft = draft?;

        let group = map.object_group_mut(draft.layer_index)?;
        let (_, object) = group.remove_object(draft.item.object_id)?;
        Some((draft.layer_index, object))
    }

    fn cancel_new_object(&mut self, map: &mut Map) {
        if let Some((_, object)) = self.clear_new_object(map) {
            bevy::log::debug!("Cancelled object {}", object.id);
        }
    }

    fn finish_new_object(&mut self, ctx: &mut ToolContext) {
        let Some((layer_index, object)) = self.clear_new_object(ctx.map) else {
            return;
        };
        bevy::log::debug!("Created object {} on layer {}", object.id, layer_index);
        ctx.history.record_add_object(ctx.map, layer_index, object);
    }

    /// Make the live polygon point permanent by duplicating it
    fn fix_polygon_point(&mut self, map: &mut Map) {
        let Some(draft) = self.draft.as_mut() else {
            return;
        };
        let Some(object) = draft_object_mut(map, draft.layer_index, draft.item.object_id) else {
            return;
        };
        let mut polygon = object.polygon.clone();
        if let Some(&last) = polygon.last() {
            polygon.push(last);
        }
        draft.item.set_polygon(object, polygon);
    }

    /// Drop the live point and commit, or cancel if fewer than two points remain
    fn finish_polygon(&mut self, ctx: &mut ToolContext) {
        let Some(draft) = self.draft.as_mut() else {
            return;
        };
        let mut polygon = draft.item.polygon.clone();
        polygon.pop();

        if polygon.len() < 2 {
            self.cancel_new_object(ctx.map);
            return;
        }

        if let Some(object) = draft_object_mut(ctx.map, draft.layer_index, draft.item.object_id) {
            draft.item.set_polygon(object, polygon);
        }
        self.finish_new_object(ctx);
    }
}

fn draft_object_mut(map: &mut Map, layer_index: usize, object_id: Uuid) -> Option<&mut MapObject> {
    map.object_group_mut(layer_index)
        .and_then(|group| group.object_mut(object_id))
}

/// Round to whole tiles when snapping, with halves rounding up (-2.5 -> -2)
fn snap(tile_coords: Vec2, snap_to_grid: bool) -> Vec2 {
    if snap_to_grid {
        (tile_coords + Vec2::splat(0.5)).floor()
    } else {
        tile_coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CommandHistory, ObjectHistory};
    use crate::render::MapRenderer;
    use crate::scene::DRAFT_Z_VALUE;
    use tile_map_core::{Layer, ObjectShape, Tileset};

    const TILE: f32 = 32.0;
    const OBJECTS: usize = 0;
    const GROUND: usize = 1;

    /// Records finished objects without applying them
    #[derive(Default)]
    struct RecordingHistory {
        added: Vec<(usize, MapObject)>,
    }

    impl ObjectHistory for RecordingHistory {
        fn record_add_object(&mut self, _map: &mut Map, layer_index: usize, object: MapObject) {
            self.added.push((layer_index, object));
        }
    }

    struct Harness<H: ObjectHistory> {
        map: Map,
        history: H,
        layer: Option<usize>,
        snap_to_grid: bool,
    }

    impl<H: ObjectHistory + Default> Harness<H> {
        fn new(snap_to_grid: bool) -> Self {
            let mut map = Map::new("Test".to_string(), 20, 20, TILE as u32, TILE as u32);
            let tileset = Tileset::new("Terrain".to_string(), 32, 32, 4, 4);
            let tileset_id = tileset.id;
            map.add_tileset(tileset);
            map.add_layer(Layer::new_object_layer("Objects".to_string()));
            map.add_layer(Layer::new_tile_layer("Ground".to_string(), tileset_id, 20, 20));
            Self {
                map,
                history: H::default(),
                layer: Some(OBJECTS),
                snap_to_grid,
            }
        }
    }

    impl<H: ObjectHistory + 'static> Harness<H> {
        fn ctx(&mut self) -> ToolContext<'_> {
            let renderer = MapRenderer::for_map(&self.map);
            ToolContext {
                map: &mut self.map,
                layer_index: self.layer,
                renderer,
                snap_to_grid: self.snap_to_grid,
                history: &mut self.history,
            }
        }

        fn press(&mut self, tool: &mut CreateObjectTool, button: PointerButton, x: f32, y: f32) {
            self.press_with(tool, button, x, y, PointerModifiers::default());
        }

        fn press_with(
            &mut self,
            tool: &mut CreateObjectTool,
            button: PointerButton,
            x: f32,
            y: f32,
            modifiers: PointerModifiers,
        ) {
            let event = PointerEvent::new(pixel(x, y), button).with_modifiers(modifiers);
            tool.mouse_pressed(&mut self.ctx(), &event);
        }

        fn move_to(&mut self, tool: &mut CreateObjectTool, x: f32, y: f32) {
            self.move_with(tool, x, y, PointerModifiers::default());
        }

        fn move_with(
            &mut self,
            tool: &mut CreateObjectTool,
            x: f32,
            y: f32,
            modifiers: PointerModifiers,
        ) {
            tool.mouse_moved(&mut self.ctx(), pixel(x, y), modifiers);
        }

        fn release(&mut self, tool: &mut CreateObjectTool, x: f32, y: f32) {
            let event = PointerEvent::new(pixel(x, y), PointerButton::Primary);
            tool.mouse_released(&mut self.ctx(), &event);
        }

        fn object_count(&self) -> usize {
            self.map.object_group(OBJECTS).map(|g| g.len()).unwrap_or(0)
        }

        fn draft_object(&self, tool: &CreateObjectTool) -> &MapObject {
            let item = tool.draft_item().expect("tool should be drafting");
            self.map
                .object_group(OBJECTS)
                .and_then(|g| g.object(item.object_id))
                .expect("draft object should be attached to its layer")
        }
    }

    /// Pixel position of a tile coordinate on the 32x32 test map
    fn pixel(x: f32, y: f32) -> Vec2 {
        Vec2::new(x * TILE, y * TILE)
    }

    fn toggle() -> PointerModifiers {
        PointerModifiers { toggle_snap: true }
    }

    fn selected_tile(map: &Map) -> TileRef {
        map.tilesets[0].tile_ref(5).unwrap()
    }

    #[test]
    fn test_area_commit_snapped() {
        let mut harness = Harness::<CommandHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Area);

        harness.press(&mut tool, PointerButton::Primary, 2.0, 3.0);
        assert!(tool.is_drafting());
        harness.move_to(&mut tool, 4.2, 6.1);
        harness.move_to(&mut tool, 5.0, 7.0);
        harness.release(&mut tool, 5.0, 7.0);

        assert!(!tool.is_drafting());
        assert_eq!(harness.history.len(), 1);
        assert_eq!(harness.object_count(), 1);

        let object = &harness.map.object_group(OBJECTS).unwrap().objects()[0];
        assert_eq!(object.position, [2.0, 3.0]);
        assert_eq!(object.size, [3.0, 4.0]);
        assert_eq!(object.shape(), ObjectShape::Rectangle);
    }

    #[test]
    fn test_area_snapping_rounds_size() {
        let mut harness = Harness::<RecordingHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Area);

        harness.press(&mut tool, PointerButton::Primary, 2.25, 2.75);
        harness.move_to(&mut tool, 5.75, 6.0);

        let object = harness.draft_object(&tool);
        assert_eq!(object.position, [2.0, 3.0]);
        assert_eq!(object.size, [4.0, 3.0]);
    }

    #[test]
    fn test_area_unsnapped_exact_and_clamped() {
        let mut harness = Harness::<RecordingHistory>::new(false);
        let mut tool = CreateObjectTool::new(CreationMode::Area);

        harness.press(&mut tool, PointerButton::Primary, 2.25, 3.5);
        harness.move_to(&mut tool, 4.0, 3.0);
        assert_eq!(harness.draft_object(&tool).size, [1.75, 0.0]);

        // Above and left of the anchor the rectangle collapses instead of flipping
        harness.move_to(&mut tool, 1.0, 1.0);
        assert_eq!(harness.draft_object(&tool).size, [0.0, 0.0]);

        harness.move_to(&mut tool, 3.5, 5.25);
        harness.release(&mut tool, 3.5, 5.25);

        assert_eq!(harness.history.added.len(), 1);
        let (layer, object) = &harness.history.added[0];
        assert_eq!(*layer, OBJECTS);
        assert_eq!(object.position, [2.25, 3.5]);
        assert_eq!(object.size, [1.25, 1.75]);
    }

    #[test]
    fn test_draft_item_tracks_object() {
        let mut harness = Harness::<RecordingHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Area);
        assert!(tool.draft_item().is_none());

        harness.press(&mut tool, PointerButton::Primary, 1.0, 1.0);
        harness.move_to(&mut tool, 3.0, 2.0);

        let item = tool.draft_item().unwrap();
        assert_eq!(item.z_value, DRAFT_Z_VALUE);
        assert_eq!(item.size, [2.0, 1.0]);
        assert_eq!(item.size, harness.draft_object(&tool).size);

        // Moves don't touch the history
        assert!(harness.history.added.is_empty());
    }

    #[test]
    fn test_tile_mode_without_tile_is_ignored() {
        let mut harness = Harness::<CommandHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Tile);

        harness.press(&mut tool, PointerButton::Primary, 2.0, 2.0);
        harness.release(&mut tool, 2.0, 2.0);

        assert!(!tool.is_drafting());
        assert_eq!(harness.object_count(), 0);
        assert!(harness.history.is_empty());
    }

    #[test]
    fn test_tile_mode_places_selected_tile() {
        let mut harness = Harness::<CommandHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Tile);
        let tile = selected_tile(&harness.map);
        tool.set_tile(Some(tile));

        harness.press(&mut tool, PointerButton::Primary, 1.4, 2.6);
        assert_eq!(harness.draft_object(&tool).position, [1.0, 3.0]);

        harness.move_to(&mut tool, 4.2, 5.7);
        assert_eq!(harness.draft_object(&tool).position, [4.0, 6.0]);
        assert_eq!(tool.draft_item().unwrap().position, [4.0, 6.0]);

        harness.release(&mut tool, 4.2, 5.7);

        assert_eq!(harness.history.len(), 1);
        let object = &harness.map.object_group(OBJECTS).unwrap().objects()[0];
        assert_eq!(object.tile, Some(tile));
        assert_eq!(object.position, [4.0, 6.0]);
        assert_eq!(object.shape(), ObjectShape::Tile);
    }

    #[test]
    fn test_polygon_needs_two_points() {
        let mut harness = Harness::<CommandHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Polygon);

        harness.press(&mut tool, PointerButton::Primary, 1.0, 1.0);
        assert_eq!(harness.draft_object(&tool).polygon, vec![[0.0, 0.0], [0.0, 0.0]]);

        harness.move_to(&mut tool, 3.0, 1.0);
        harness.press(&mut tool, PointerButton::Secondary, 3.0, 1.0);

        assert!(!tool.is_drafting());
        assert_eq!(harness.object_count(), 0);
        assert!(harness.history.is_empty());
    }

    #[test]
    fn test_polygon_commit() {
        let mut harness = Harness::<CommandHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Polygon);

        harness.press(&mut tool, PointerButton::Primary, 1.0, 1.0);
        harness.move_to(&mut tool, 3.0, 1.0);
        harness.press(&mut tool, PointerButton::Primary, 3.0, 1.0);
        assert_eq!(
            harness.draft_object(&tool).polygon,
            vec![[0.0, 0.0], [2.0, 0.0], [2.0, 0.0]]
        );

        harness.move_to(&mut tool, 3.0, 4.0);
        assert_eq!(tool.draft_item().unwrap().polygon[2], [2.0, 3.0]);

        harness.press(&mut tool, PointerButton::Secondary, 3.0, 4.0);

        assert!(!tool.is_drafting());
        assert_eq!(harness.history.len(), 1);
        let object = &harness.map.object_group(OBJECTS).unwrap().objects()[0];
        assert_eq!(object.position, [1.0, 1.0]);
        assert_eq!(object.polygon, vec![[0.0, 0.0], [2.0, 0.0]]);
    }

    #[test]
    fn test_polygon_points_are_relative_and_snapped() {
        let mut harness = Harness::<RecordingHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Polygon);

        harness.press(&mut tool, PointerButton::Primary, 2.2, 2.4);
        harness.move_to(&mut tool, 0.6, 5.3);
        assert_eq!(harness.draft_object(&tool).position, [2.0, 2.0]);
        assert_eq!(harness.draft_object(&tool).polygon[1], [-1.0, 3.0]);
    }

    #[test]
    fn test_polygon_release_is_noop() {
        let mut harness = Harness::<RecordingHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Polygon);

        harness.press(&mut tool, PointerButton::Primary, 1.0, 1.0);
        harness.move_to(&mut tool, 2.0, 2.0);
        harness.release(&mut tool, 2.0, 2.0);

        assert!(tool.is_drafting());
        assert_eq!(harness.draft_object(&tool).polygon.len(), 2);
        assert!(harness.history.added.is_empty());
    }

    #[test]
    fn test_cancel_leaves_no_trace() {
        for mode in [CreationMode::Area, CreationMode::Tile] {
            let mut harness = Harness::<CommandHistory>::new(true);
            harness
                .map
                .object_group_mut(OBJECTS)
                .unwrap()
                .add_object(MapObject::new([0.0, 0.0]));
            let mut tool = CreateObjectTool::new(mode);
            tool.set_tile(Some(selected_tile(&harness.map)));

            let count_before = harness.object_count();
            let history_before = harness.history.len();

            harness.press(&mut tool, PointerButton::Primary, 2.0, 2.0);
            assert_eq!(harness.object_count(), count_before + 1);
            harness.move_to(&mut tool, 5.0, 5.0);
            harness.press(&mut tool, PointerButton::Secondary, 5.0, 5.0);

            assert!(!tool.is_drafting());
            assert_eq!(harness.object_count(), count_before);
            assert_eq!(harness.history.len(), history_before);

            // A release after cancelling has nothing to commit
            harness.release(&mut tool, 5.0, 5.0);
            assert_eq!(harness.history.len(), history_before);
        }
    }

    #[test]
    fn test_snap_inversion_is_per_event() {
        let mut harness = Harness::<RecordingHistory>::new(false);
        let mut tool = CreateObjectTool::new(CreationMode::Tile);
        tool.set_tile(Some(selected_tile(&harness.map)));

        harness.press_with(&mut tool, PointerButton::Primary, 2.4, 3.6, toggle());
        assert_eq!(harness.draft_object(&tool).position, [2.0, 4.0]);

        harness.move_to(&mut tool, 5.25, 7.5);
        assert_eq!(harness.draft_object(&tool).position, [5.25, 7.5]);

        harness.move_with(&mut tool, 5.25, 7.5, toggle());
        assert_eq!(harness.draft_object(&tool).position, [5.0, 8.0]);

        // With snapping preferred, the modifier turns it off
        harness.snap_to_grid = true;
        harness.move_with(&mut tool, 5.25, 7.5, toggle());
        assert_eq!(harness.draft_object(&tool).position, [5.25, 7.5]);
        harness.move_to(&mut tool, 5.25, 7.5);
        assert_eq!(harness.draft_object(&tool).position, [5.0, 8.0]);
    }

    #[test]
    fn test_press_requires_visible_object_layer() {
        let mut harness = Harness::<RecordingHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Area);

        harness.layer = None;
        harness.press(&mut tool, PointerButton::Primary, 1.0, 1.0);
        assert!(!tool.is_drafting());

        harness.layer = Some(GROUND);
        harness.press(&mut tool, PointerButton::Primary, 1.0, 1.0);
        assert!(!tool.is_drafting());

        harness.layer = Some(OBJECTS);
        harness.map.layers[OBJECTS].visible = false;
        harness.press(&mut tool, PointerButton::Primary, 1.0, 1.0);
        assert!(!tool.is_drafting());
        assert_eq!(harness.object_count(), 0);
    }

    #[test]
    fn test_secondary_press_while_idle_is_ignored() {
        let mut harness = Harness::<RecordingHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Polygon);

        harness.press(&mut tool, PointerButton::Secondary, 1.0, 1.0);
        harness.press(&mut tool, PointerButton::Middle, 1.0, 1.0);
        assert!(!tool.is_drafting());
        assert_eq!(harness.object_count(), 0);
    }

    #[test]
    fn test_single_draft_while_pressing_again() {
        let mut harness = Harness::<RecordingHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Area);

        harness.press(&mut tool, PointerButton::Primary, 1.0, 1.0);
        let first = tool.draft_item().unwrap().object_id;

        harness.press(&mut tool, PointerButton::Primary, 4.0, 4.0);
        assert_eq!(tool.draft_item().unwrap().object_id, first);
        assert_eq!(harness.object_count(), 1);
        assert_eq!(harness.draft_object(&tool).position, [1.0, 1.0]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "already creating an object")]
    fn test_starting_second_draft_asserts() {
        let mut harness = Harness::<RecordingHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Area);

        harness.press(&mut tool, PointerButton::Primary, 1.0, 1.0);
        tool.start_new_object(&mut harness.map, Vec2::new(2.0, 2.0), OBJECTS);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no object is being created")]
    fn test_clearing_without_draft_asserts() {
        let mut harness = Harness::<RecordingHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Area);
        tool.clear_new_object(&mut harness.map);
    }

    #[test]
    fn test_public_cancel_is_safe_when_idle() {
        let mut harness = Harness::<RecordingHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Polygon);

        tool.cancel(&mut harness.map);
        assert!(!tool.is_drafting());

        harness.press(&mut tool, PointerButton::Primary, 1.0, 1.0);
        tool.cancel(&mut harness.map);
        assert!(!tool.is_drafting());
        assert_eq!(harness.object_count(), 0);
    }

    #[test]
    fn test_undo_removes_committed_object() {
        let mut harness = Harness::<CommandHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Area);

        harness.press(&mut tool, PointerButton::Primary, 1.0, 1.0);
        harness.move_to(&mut tool, 2.0, 2.0);
        harness.release(&mut tool, 2.0, 2.0);
        assert_eq!(harness.object_count(), 1);

        assert!(harness.history.undo(&mut harness.map));
        assert_eq!(harness.object_count(), 0);

        assert!(harness.history.redo(&mut harness.map));
        assert_eq!(harness.object_count(), 1);
    }

    #[test]
    fn test_snap_rounds_halves_up() {
        assert_eq!(snap(Vec2::new(-2.5, 2.5), true), Vec2::new(-2.0, 3.0));
        assert_eq!(snap(Vec2::new(-0.4, -1.6), true), Vec2::new(0.0, -2.0));
        assert_eq!(snap(Vec2::new(-2.5, 2.5), false), Vec2::new(-2.5, 2.5));
    }

    #[test]
    fn test_polygon_snaps_negative_half_up() {
        let mut harness = Harness::<RecordingHistory>::new(true);
        let mut tool = CreateObjectTool::new(CreationMode::Polygon);

        harness.press(&mut tool, PointerButton::Primary, 3.0, 3.0);
        // Half a tile left of the map edge rounds towards the edge
        harness.move_to(&mut tool, -0.5, 1.5);
        assert_eq!(harness.draft_object(&tool).polygon[1], [-3.0, -1.0]);
    }

    #[test]
    fn test_mode_helpers() {
        assert_eq!(CreationMode::all().len(), 3);
        assert_eq!(CreationMode::Polygon.display_name(), "Insert Polygon");
        assert_eq!(CreateObjectTool::new(CreationMode::Tile).mode(), CreationMode::Tile);
    }
}
