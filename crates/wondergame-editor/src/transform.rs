//! Grid-snapped drag and corner-anchored resize.
//!
//! Both operations act on the whole resolved group of the selection.
//! Dragging applies one integer delta to every member, so relative
//! placement inside a group is exact. Resizing scales member offsets from
//! the anchored corner and compounds each member's scale factors, so a
//! later save preserves the visual result.

use wondergame_core::constants::GRID_SIZE;
use wondergame_core::geom::{Point, Rect};

use crate::group::{group_bounds, group_members};
use crate::session::{Corner, EditorSession};

/// Snaps a coordinate to the editor grid, rounding to the nearest line.
pub(crate) fn snap(v: f32) -> i32 {
    (v / GRID_SIZE as f32).round() as i32 * GRID_SIZE
}

impl EditorSession {
    /// Moves the selected group so its box center lands on the grid point
    /// nearest `pointer - offset`.
    pub(crate) fn drag_group_to(&mut self, pointer: Point, offset: Point) {
        let Some(anchor) = self.selected else { return };
        let bounds = group_bounds(&self.entities, anchor);
        let center = bounds.center();
        let dx = snap((pointer.x - offset.x) as f32) - center.x;
        let dy = snap((pointer.y - offset.y) as f32) - center.y;
        if dx == 0 && dy == 0 {
            return;
        }
        let members = group_members(&self.entities, anchor);
        let metrics = &*self.metrics;
        for &i in &members {
            let e = &mut self.entities[i];
            e.data.x += dx;
            e.data.y += dy;
            e.update_bounding_box(metrics);
        }
    }

    /// Resizes the selected group by dragging `corner` to the grid point
    /// nearest `pointer`, keeping the opposite corner fixed.
    ///
    /// Member scale factors are multiplied by the box scale, so repeated
    /// resizes compound. A zero-area group cannot be resized.
    pub(crate) fn resize_group_to(&mut self, pointer: Point, corner: Corner) {
        let Some(anchor) = self.selected else { return };
        let old = group_bounds(&self.entities, anchor);
        if old.width == 0 || old.height == 0 {
            return;
        }

        let px = snap(pointer.x as f32);
        let py = snap(pointer.y as f32);
        let new = match corner {
            Corner::BottomRight => {
                let w = (px - old.left()).max(GRID_SIZE);
                let h = (py - old.top()).max(GRID_SIZE);
                Rect::new(old.left(), old.top(), w, h)
            }
            Corner::BottomLeft => {
                let w = (old.right() - px).max(GRID_SIZE);
                let h = (py - old.top()).max(GRID_SIZE);
                Rect::new(old.right() - w, old.top(), w, h)
            }
            Corner::TopRight => {
                let w = (px - old.left()).max(GRID_SIZE);
                let h = (old.bottom() - py).max(GRID_SIZE);
                Rect::new(old.left(), old.bottom() - h, w, h)
            }
            Corner::TopLeft => {
                let w = (old.right() - px).max(GRID_SIZE);
                let h = (old.bottom() - py).max(GRID_SIZE);
                Rect::new(old.right() - w, old.bottom() - h, w, h)
            }
        };
        if new == old {
            return;
        }

        let scale_x = new.width as f32 / old.width as f32;
        let scale_y = new.height as f32 / old.height as f32;
        let members = group_members(&self.entities, anchor);
        let metrics = &*self.metrics;
        for &i in &members {
            let e = &mut self.entities[i];
            let rel_x = (e.data.x - old.x) as f32;
            let rel_y = (e.data.y - old.y) as f32;
            e.data.x = new.x + (rel_x * scale_x) as i32;
            e.data.y = new.y + (rel_y * scale_y) as i32;
            e.data.scale_x *= scale_x;
            e.data.scale_y *= scale_y;
            e.update_bounding_box(metrics);
        }
    }
}
