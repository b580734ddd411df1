//! # WonderGame Explore
//!
//! The walkable mode: a player glyph moving through the same room files
//! the editor writes. Movement is axis-separated so the player slides
//! along obstacles, and touching an entity raises at most one interaction
//! until the player backs off it.

use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};
use wondergame_core::constants::{
    HOTSPOT_SENTINEL, PLAYER_GLYPH, PLAYER_SPEED, SINGLE_LINE_DESCENT_TRIM, VIEWPORT_HEIGHT,
    VIEWPORT_WIDTH, WALL_THICKNESS,
};
use wondergame_core::data::{load_room, WorldEntity};
use wondergame_core::geom::{Rect, Vec2};
use wondergame_core::text::LabelMetrics;

/// Where the player appears when a room is entered.
const PLAYER_START: Vec2 = Vec2 { x: 250.0, y: 200.0 };

/// Raised when the player touches an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// The entity is a door; the payload is the destination room name.
    Door(String),
    /// A plain entity; the payload is its description text.
    Describe(String),
    /// An invisible trigger zone; the payload is its description text.
    Hotspot(String),
}

/// One room being walked through.
pub struct ExploreMode {
    room_name: String,
    entities: Vec<WorldEntity>,
    walls: [Rect; 4],
    player: Vec2,
    player_size: (i32, i32),
    /// Entity index the player is still resting against, so contact does
    /// not re-raise its interaction every frame.
    last_touched: Option<usize>,
}

impl ExploreMode {
    /// Loads `room_name` from under `rooms_root` and places the player at
    /// the room entry point.
    pub fn load(
        rooms_root: &Path,
        room_name: &str,
        metrics: &dyn LabelMetrics,
    ) -> anyhow::Result<Self> {
        let room = load_room(rooms_root, room_name)
            .with_context(|| format!("loading room '{room_name}' for exploration"))?;
        let entities = room
            .objects
            .into_iter()
            .map(|data| WorldEntity::new(data, metrics))
            .collect();

        let (w, h) = metrics.measure(PLAYER_GLYPH);
        let player_size = (w as i32, (h * (1.0 - SINGLE_LINE_DESCENT_TRIM)) as i32);

        info!(room = room_name, "entered room");
        Ok(Self {
            room_name: room_name.to_string(),
            entities,
            walls: room_walls(),
            player: PLAYER_START,
            player_size,
            last_touched: None,
        })
    }

    pub fn room_name(&self) -> &str {
        &self.room_name
    }

    pub fn entities(&self) -> &[WorldEntity] {
        &self.entities
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    /// Labels the renderer should draw. Hotspot trigger zones are
    /// invisible in this mode.
    pub fn visible_labels(&self) -> impl Iterator<Item = &WorldEntity> {
        self.entities
            .iter()
            .filter(|e| !e.data.name.starts_with(HOTSPOT_SENTINEL))
    }

    fn player_rect_at(&self, pos: Vec2) -> Rect {
        Rect::new(
            pos.x as i32,
            pos.y as i32,
            self.player_size.0,
            self.player_size.1,
        )
    }

    fn blocked_by(&self, rect: &Rect) -> Option<Option<usize>> {
        if self.walls.iter().any(|w| rect.intersects(w)) {
            return Some(None);
        }
        for (i, e) in self.entities.iter().enumerate() {
            if rect.intersects(&e.bounding_box()) {
                return Some(Some(i));
            }
        }
        None
    }

    /// Advances the player by one frame of movement in `dir`.
    ///
    /// Each axis is attempted independently; a blocked axis is cancelled
    /// while the other may still slide. Returns the interaction of a
    /// newly touched entity, if any.
    pub fn update(&mut self, dir: Vec2, dt: f32) -> Option<Interaction> {
        let step = dir.normalized();
        let dx = step.x * PLAYER_SPEED * dt;
        let dy = step.y * PLAYER_SPEED * dt;
        let mut touched: Option<usize> = None;
        let mut moved = false;

        let next = Vec2::new(self.player.x + dx, self.player.y);
        match self.blocked_by(&self.player_rect_at(next)) {
            None => {
                moved |= dx != 0.0;
                self.player.x = next.x;
            }
            Some(hit) => touched = touched.or(hit),
        }
        let next = Vec2::new(self.player.x, self.player.y + dy);
        match self.blocked_by(&self.player_rect_at(next)) {
            None => {
                moved |= dy != 0.0;
                self.player.y = next.y;
            }
            Some(hit) => touched = touched.or(hit),
        }

        match touched {
            Some(i) if self.last_touched == Some(i) => None,
            Some(i) => {
                self.last_touched = Some(i);
                debug!(entity = %self.entities[i].data.name, "touched");
                Some(self.interaction_for(i))
            }
            None => {
                // Pressing against an obstacle keeps the dampener armed;
                // any free movement clears it.
                if moved {
                    self.last_touched = None;
                }
                None
            }
        }
    }

    fn interaction_for(&self, index: usize) -> Interaction {
        let data = &self.entities[index].data;
        let description = data
            .description
            .clone()
            .unwrap_or_else(|| format!("You see {}.", data.name));
        if let Some(room) = &data.door_to {
            Interaction::Door(room.clone())
        } else if data.name.starts_with(HOTSPOT_SENTINEL) {
            Interaction::Hotspot(description)
        } else {
            Interaction::Describe(description)
        }
    }
}

/// The four room walls framing the viewport.
fn room_walls() -> [Rect; 4] {
    let w = VIEWPORT_WIDTH;
    let h = VIEWPORT_HEIGHT;
    let t = WALL_THICKNESS;
    [
        Rect::new(0, 0, w, t),
        Rect::new(0, h - t, w, t),
        Rect::new(0, t, t, h - 2 * t),
        Rect::new(w - t, t, t, h - 2 * t),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wondergame_core::data::{save_room, Room, RoomObject};
    use wondergame_core::text::MonospaceMetrics;

    fn metrics() -> MonospaceMetrics {
        MonospaceMetrics::new(10.0, 10.0)
    }

    fn room_with(objects: Vec<RoomObject>) -> (TempDir, ExploreMode) {
        let dir = TempDir::new().unwrap();
        save_room(dir.path(), "room_1", &Room { objects }).unwrap();
        let mode = ExploreMode::load(dir.path(), "room_1", &metrics()).unwrap();
        (dir, mode)
    }

    fn obj(name: &str, x: i32, y: i32) -> RoomObject {
        RoomObject {
            name: name.to_string(),
            x,
            y,
            ..Default::default()
        }
    }

    #[test]
    fn player_starts_at_the_entry_point() {
        let (_dir, mode) = room_with(vec![]);
        assert_eq!(mode.player(), Vec2::new(250.0, 200.0));
    }

    #[test]
    fn walls_stop_movement() {
        let (_dir, mut mode) = room_with(vec![]);
        for _ in 0..100 {
            mode.update(Vec2::new(-1.0, 0.0), 0.1);
        }
        // Never inside the left wall.
        assert!(mode.player().x >= WALL_THICKNESS as f32);
    }

    #[test]
    fn diagonal_movement_slides_along_a_wall() {
        let (_dir, mut mode) = room_with(vec![]);
        for _ in 0..100 {
            mode.update(Vec2::new(-1.0, 1.0), 0.1);
        }
        let p = mode.player();
        assert!(p.x >= WALL_THICKNESS as f32);
        // The vertical component kept sliding down to the bottom wall.
        assert!(p.y > 400.0);
    }

    #[test]
    fn touching_a_door_raises_a_door_interaction_once() {
        // Door directly right of the player start.
        let (_dir, mut mode) = room_with(vec![RoomObject {
            door_to: Some("room_2".to_string()),
            ..obj("DOOR", 300, 200)
        }]);

        let mut first = None;
        for _ in 0..50 {
            if let Some(i) = mode.update(Vec2::new(1.0, 0.0), 0.05) {
                first = Some(i);
                break;
            }
        }
        assert_eq!(first, Some(Interaction::Door("room_2".to_string())));

        // Still pressing into the door: the dampener holds.
        assert_eq!(mode.update(Vec2::new(1.0, 0.0), 0.05), None);
    }

    #[test]
    fn description_falls_back_to_the_entity_name() {
        let (_dir, mut mode) = room_with(vec![obj("CRATE", 300, 200)]);
        let mut seen = None;
        for _ in 0..50 {
            if let Some(i) = mode.update(Vec2::new(1.0, 0.0), 0.05) {
                seen = Some(i);
                break;
            }
        }
        assert_eq!(
            seen,
            Some(Interaction::Describe("You see CRATE.".to_string()))
        );
    }

    #[test]
    fn backing_off_rearms_the_interaction() {
        let (_dir, mut mode) = room_with(vec![RoomObject {
            description: Some("An old bunk.".to_string()),
            ..obj("BUNK", 300, 200)
        }]);

        let mut hits = 0;
        for _ in 0..50 {
            if mode.update(Vec2::new(1.0, 0.0), 0.05).is_some() {
                hits += 1;
            }
        }
        assert_eq!(hits, 1);

        // Walk away, then return.
        for _ in 0..20 {
            mode.update(Vec2::new(-1.0, 0.0), 0.05);
        }
        for _ in 0..50 {
            if mode.update(Vec2::new(1.0, 0.0), 0.05).is_some() {
                hits += 1;
            }
        }
        assert_eq!(hits, 2);
    }

    #[test]
    fn hotspots_trigger_but_are_not_drawn() {
        let (_dir, mut mode) = room_with(vec![RoomObject {
            description: Some("Something hums beneath the floor.".to_string()),
            ..obj("!hotspot_floor", 300, 200)
        }]);
        assert_eq!(mode.visible_labels().count(), 0);

        let mut seen = None;
        for _ in 0..50 {
            if let Some(i) = mode.update(Vec2::new(1.0, 0.0), 0.05) {
                seen = Some(i);
                break;
            }
        }
        assert_eq!(
            seen,
            Some(Interaction::Hotspot(
                "Something hums beneath the floor.".to_string()
            ))
        );
    }

    #[test]
    fn missing_room_loads_empty() {
        let dir = TempDir::new().unwrap();
        let mode = ExploreMode::load(dir.path(), "nowhere", &metrics()).unwrap();
        assert!(mode.entities().is_empty());
    }
}
