//! Property tests over group resolution and group dragging.

use proptest::prelude::*;
use tempfile::TempDir;
use wondergame_core::{save_room, MonospaceMetrics, Room, RoomObject, WorldEntity};
use wondergame_editor::{group_bounds, EditorLayout, EditorSession, InputSnapshot};

fn entity(x: i32, y: i32) -> WorldEntity {
    let metrics = MonospaceMetrics::new(10.0, 10.0);
    WorldEntity::new(
        RoomObject {
            name: "XX\nXX".to_string(),
            x,
            y,
            group_id: Some("g".to_string()),
            ..Default::default()
        },
        &metrics,
    )
}

// Member positions kept right of the inspector pane so a press on a
// member box never lands on editor chrome.
fn member_positions() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((240..700i32, 50..500i32), 1..6)
}

proptest! {
    #[test]
    fn group_bounds_ignore_member_order(positions in member_positions()) {
        let forward: Vec<_> = positions.iter().map(|&(x, y)| entity(x, y)).collect();
        let mut reversed = forward.clone();
        reversed.reverse();
        let last = reversed.len() - 1;
        prop_assert_eq!(group_bounds(&forward, 0), group_bounds(&reversed, last));
    }

    #[test]
    fn group_bounds_contain_every_member(positions in member_positions()) {
        let entities: Vec<_> = positions.iter().map(|&(x, y)| entity(x, y)).collect();
        let bounds = group_bounds(&entities, 0);
        for e in &entities {
            prop_assert_eq!(bounds.union(&e.bounding_box()), bounds);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Dragging a group moves every member by the same integer delta, so
    /// all pairwise offsets survive, and any actual movement lands the
    /// group center on a grid line.
    #[test]
    fn drag_preserves_pairwise_offsets(
        positions in member_positions(),
        target in (0..800i32, 0..600i32),
    ) {
        let dir = TempDir::new().unwrap();
        let objects = positions
            .iter()
            .map(|&(x, y)| RoomObject {
                name: "XX\nXX".to_string(),
                x,
                y,
                group_id: Some("g".to_string()),
                ..Default::default()
            })
            .collect();
        save_room(dir.path(), "prop", &Room { objects }).unwrap();
        let mut session = EditorSession::new(
            dir.path(),
            "prop",
            EditorLayout::new(800, 600),
            Box::new(MonospaceMetrics::new(10.0, 10.0)),
        )
        .unwrap();

        let before: Vec<_> = session
            .entities()
            .iter()
            .map(|e| (e.data.x, e.data.y))
            .collect();
        let old_center = group_bounds(session.entities(), 0).center();

        // Press in the middle of the first member's 20x20 box.
        let (px, py) = (positions[0].0 + 10, positions[0].1 + 10);
        session.update(&InputSnapshot::press_at(px, py)).unwrap();
        prop_assert_eq!(session.selected(), Some(0));
        session.update(&InputSnapshot::hold_at(target.0, target.1)).unwrap();

        let after: Vec<_> = session
            .entities()
            .iter()
            .map(|e| (e.data.x, e.data.y))
            .collect();
        let dx = after[0].0 - before[0].0;
        let dy = after[0].1 - before[0].1;
        for (b, a) in before.iter().zip(&after) {
            prop_assert_eq!(a.0 - b.0, dx);
            prop_assert_eq!(a.1 - b.1, dy);
        }

        let center = group_bounds(session.entities(), 0).center();
        if (dx, dy) != (0, 0) {
            prop_assert_eq!(center.x % 10, 0);
            prop_assert_eq!(center.y % 10, 0);
        } else {
            prop_assert_eq!(center, old_center);
        }
    }
}
