//! Group resolution over a room's entity list.
//!
//! A group is not stored anywhere: it is the set of entities sharing a
//! non-empty `groupId`, resolved fresh from the entity list whenever it is
//! needed. Its bounding box is the min/max union of member boxes, so the
//! result is independent of list ordering.

use smallvec::SmallVec;
use wondergame_core::data::{RoomObject, WorldEntity};
use wondergame_core::geom::Rect;

/// Group member indices; groups are almost always a handful of entities.
pub type GroupIndices = SmallVec<[usize; 4]>;

/// The effective group key of a record: a non-empty `groupId`, or `None`.
/// An empty string is treated the same as an absent one.
pub fn group_key(data: &RoomObject) -> Option<&str> {
    data.group_id.as_deref().filter(|g| !g.is_empty())
}

/// Indices of all entities rigidly linked to `entities[anchor]`,
/// including the anchor itself. Ungrouped entities resolve to a
/// singleton.
pub fn group_members(entities: &[WorldEntity], anchor: usize) -> GroupIndices {
    let mut members = GroupIndices::new();
    match group_key(&entities[anchor].data) {
        None => members.push(anchor),
        Some(key) => {
            for (i, e) in entities.iter().enumerate() {
                if group_key(&e.data) == Some(key) {
                    members.push(i);
                }
            }
            // Degenerate but possible if the anchor's key was cleared
            // mid-frame; the anchor always belongs to its own group.
            if members.is_empty() {
                members.push(anchor);
            }
        }
    }
    members
}

/// Union bounding box of the anchor's resolved group.
///
/// An ungrouped entity's group box is its own box.
pub fn group_bounds(entities: &[WorldEntity], anchor: usize) -> Rect {
    let members = group_members(entities, anchor);
    let mut bounds = entities[members[0]].bounding_box();
    for &i in members.iter().skip(1) {
        bounds = bounds.union(&entities[i].bounding_box());
    }
    bounds
}
