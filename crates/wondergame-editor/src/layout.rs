//! Fixed screen layout of the editor chrome.
//!
//! All rectangles are derived from the viewport size at construction, so
//! hit-testing and scene building agree by sharing one layout value.

use wondergame_core::geom::Rect;

const INSPECTOR_PANE: Rect = Rect {
    x: 10,
    y: 50,
    width: 220,
    height: 300,
};

const FIELD_ROW_HEIGHT: i32 = 20;
const FIELD_ROWS_TOP: i32 = 30;
const FIELD_VALUE_INSET: i32 = 70;

const BUTTON_WIDTH: i32 = 100;
const BUTTON_HEIGHT: i32 = 40;

const DIALOG_WIDTH: i32 = 300;
const DIALOG_HEIGHT: i32 = 100;

/// Screen-space placement of the inspector pane, buttons, and the save
/// confirmation dialog.
#[derive(Debug, Clone, Copy)]
pub struct EditorLayout {
    pub viewport_width: i32,
    pub viewport_height: i32,
    pub inspector_pane: Rect,
    pub save_button: Rect,
    pub revert_button: Rect,
}

impl EditorLayout {
    pub fn new(viewport_width: i32, viewport_height: i32) -> Self {
        Self {
            viewport_width,
            viewport_height,
            inspector_pane: INSPECTOR_PANE,
            save_button: Rect::new(
                viewport_width - 120,
                viewport_height - 60,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            revert_button: Rect::new(
                viewport_width - 240,
                viewport_height - 60,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
        }
    }

    /// Top of the inspector row for field `index`.
    pub fn field_row_y(&self, index: usize) -> i32 {
        self.inspector_pane.y + FIELD_ROWS_TOP + FIELD_ROW_HEIGHT * index as i32
    }

    /// The clickable value region of the inspector row for field `index`.
    pub fn field_value_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.inspector_pane.x + FIELD_VALUE_INSET,
            self.field_row_y(index),
            self.inspector_pane.width - FIELD_VALUE_INSET - 10,
            FIELD_ROW_HEIGHT,
        )
    }

    /// The modal save-confirmation dialog, centered in the viewport.
    pub fn dialog_rect(&self) -> Rect {
        Rect::new(
            (self.viewport_width - DIALOG_WIDTH) / 2,
            (self.viewport_height - DIALOG_HEIGHT) / 2,
            DIALOG_WIDTH,
            DIALOG_HEIGHT,
        )
    }

    pub fn dialog_yes_button(&self) -> Rect {
        let d = self.dialog_rect();
        Rect::new(d.x + 40, d.y + 50, 80, 30)
    }

    pub fn dialog_no_button(&self) -> Rect {
        let d = self.dialog_rect();
        Rect::new(d.x + 180, d.y + 50, 80, 30)
    }
}

impl Default for EditorLayout {
    fn default() -> Self {
        Self::new(
            wondergame_core::constants::VIEWPORT_WIDTH,
            wondergame_core::constants::VIEWPORT_HEIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wondergame_core::geom::Point;

    #[test]
    fn buttons_sit_in_the_bottom_right() {
        let layout = EditorLayout::new(800, 600);
        assert_eq!(layout.save_button, Rect::new(680, 540, 100, 40));
        assert_eq!(layout.revert_button, Rect::new(560, 540, 100, 40));
    }

    #[test]
    fn field_value_rects_stack_by_row() {
        let layout = EditorLayout::new(800, 600);
        let first = layout.field_value_rect(0);
        let second = layout.field_value_rect(1);
        assert_eq!(first.y + 20, second.y);
        assert!(layout.inspector_pane.contains(Point::new(first.x, first.y)));
    }

    #[test]
    fn dialog_buttons_inside_dialog() {
        let layout = EditorLayout::new(800, 600);
        let d = layout.dialog_rect();
        let yes = layout.dialog_yes_button();
        let no = layout.dialog_no_button();
        assert!(d.contains(Point::new(yes.x, yes.y)));
        assert!(d.contains(Point::new(no.x, no.y)));
        assert!(!yes.intersects(&no));
    }
}
