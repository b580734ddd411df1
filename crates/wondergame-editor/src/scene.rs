//! Render-agnostic scene description.
//!
//! The session never draws; it builds a [`SceneFrame`] each frame and the
//! front-end renders it however it likes. Tests assert on the frame
//! directly instead of reading pixels back.

use wondergame_core::constants::GRID_SIZE;
use wondergame_core::geom::{Point, Rect};

use crate::group::group_members;
use crate::inspector::{field_spec, FIELDS};
use crate::session::{Corner, EditorSession, Mode};

/// One entity label to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScene {
    pub text: String,
    pub position: Point,
    pub scale: (f32, f32),
    /// Member of the selected group; front-ends tint these.
    pub highlighted: bool,
}

/// Selection chrome: the group outline and its four corner handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionScene {
    pub outline: Rect,
    pub handles: [Rect; 4],
}

/// One inspector row: label, displayed value, and whether the value is
/// the live edit buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorRow {
    pub label: &'static str,
    pub value: String,
    pub editing: bool,
}

/// The modal save-confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogScene {
    pub frame: Rect,
    pub message: String,
    pub yes_button: Rect,
    pub no_button: Rect,
}

/// Everything a renderer needs to draw one editor frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub grid_spacing: i32,
    pub labels: Vec<LabelScene>,
    pub selection: Option<SelectionScene>,
    /// Present only while an entity is selected.
    pub inspector: Option<Vec<InspectorRow>>,
    pub save_button: Rect,
    pub revert_button: Rect,
    pub dialog: Option<DialogScene>,
    pub status_line: String,
}

impl EditorSession {
    /// Builds the scene for the current session state. Pure: calling it
    /// never mutates the session.
    pub fn scene(&self) -> SceneFrame {
        let highlighted = self
            .selected
            .map(|anchor| group_members(&self.entities, anchor))
            .unwrap_or_default();

        let labels = self
            .entities
            .iter()
            .enumerate()
            .map(|(i, e)| LabelScene {
                text: e.data.name.clone(),
                position: Point::new(e.data.x, e.data.y),
                scale: (e.data.scale_x, e.data.scale_y),
                highlighted: highlighted.contains(&i),
            })
            .collect();

        let selection = self.selected.map(|anchor| {
            let outline = crate::group::group_bounds(&self.entities, anchor);
            SelectionScene {
                outline,
                handles: Corner::ALL.map(|c| c.handle_rect(&outline)),
            }
        });

        let inspector = self.selected.map(|idx| {
            let data = &self.entities[idx].data;
            FIELDS
                .iter()
                .map(|spec| match &self.mode {
                    Mode::EditingProperty { field, buffer } if *field == spec.id => InspectorRow {
                        label: spec.label,
                        value: buffer.clone(),
                        editing: true,
                    },
                    _ => InspectorRow {
                        label: spec.label,
                        value: (field_spec(spec.id).format)(data),
                        editing: false,
                    },
                })
                .collect()
        });

        let dialog = matches!(self.mode, Mode::ConfirmingSave).then(|| DialogScene {
            frame: self.layout.dialog_rect(),
            message: format!("Save changes to {}?", self.room_name()),
            yes_button: self.layout.dialog_yes_button(),
            no_button: self.layout.dialog_no_button(),
        });

        SceneFrame {
            grid_spacing: GRID_SIZE,
            labels,
            selection,
            inspector,
            save_button: self.layout.save_button,
            revert_button: self.layout.revert_button,
            dialog,
            status_line: "[P/ESC] Return to Game | [D] Duplicate Selected".to_string(),
        }
    }
}
