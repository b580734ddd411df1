//! The editor session: one room document under edit.
//!
//! The session owns the entity list, the current selection, and a small
//! pointer state machine. Each frame the front-end hands it an
//! [`InputSnapshot`]; the session mutates the document and reports whether
//! the editor should stay open.
//!
//! Input priority is strict: an open save dialog captures everything, an
//! active property edit captures all text, then shortcut keys, buttons,
//! inspector rows, resize handles, and finally entity hit-testing.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info, warn};
use wondergame_core::constants::{DUPLICATE_OFFSET_X, HANDLE_HITBOX, HANDLE_SIZE};
use wondergame_core::data::{load_room, save_room, Room, WorldEntity};
use wondergame_core::geom::{Point, Rect};
use wondergame_core::text::LabelMetrics;

use crate::group::group_bounds;
use crate::input::{EditorKey, InputSnapshot, TextEvent};
use crate::inspector::{field_spec, FieldId, FIELDS};
use crate::layout::EditorLayout;

/// One corner of a selection box, identifying a resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// The corner's point on `bounds`.
    pub fn point_of(&self, bounds: &Rect) -> Point {
        match self {
            Corner::TopLeft => Point::new(bounds.left(), bounds.top()),
            Corner::TopRight => Point::new(bounds.right(), bounds.top()),
            Corner::BottomLeft => Point::new(bounds.left(), bounds.bottom()),
            Corner::BottomRight => Point::new(bounds.right(), bounds.bottom()),
        }
    }

    fn centered_square(&self, bounds: &Rect, size: i32) -> Rect {
        let p = self.point_of(bounds);
        Rect::new(p.x - size / 2, p.y - size / 2, size, size)
    }

    /// Clickable region of this handle. Twice the drawn size, so handles
    /// are grabbable without pixel precision.
    pub fn hitbox(&self, bounds: &Rect) -> Rect {
        self.centered_square(bounds, HANDLE_HITBOX)
    }

    /// Drawn square of this handle.
    pub fn handle_rect(&self, bounds: &Rect) -> Rect {
        self.centered_square(bounds, HANDLE_SIZE)
    }
}

/// What the pointer is currently doing.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Mode {
    Idle,
    /// Dragging the selected group; `offset` is pointer minus group center
    /// at press time, so the grab point stays under the cursor.
    Dragging { offset: Point },
    Resizing { corner: Corner },
    /// Text-editing one inspector field of the selected entity.
    EditingProperty { field: FieldId, buffer: String },
    /// The modal save-confirmation dialog is open.
    ConfirmingSave,
}

/// Whether the editor stays open after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorSignal {
    Continue,
    /// The user pressed an exit key; return to exploration mode.
    ExitToGame,
}

/// An in-progress editing session over one room file.
pub struct EditorSession {
    rooms_root: PathBuf,
    room_name: String,
    pub(crate) layout: EditorLayout,
    pub(crate) metrics: Box<dyn LabelMetrics>,
    pub(crate) entities: Vec<WorldEntity>,
    /// Deep snapshot of the records as loaded, for revert.
    original: Vec<wondergame_core::data::RoomObject>,
    pub(crate) selected: Option<usize>,
    pub(crate) mode: Mode,
}

impl EditorSession {
    /// Loads `room_name` from under `rooms_root` and opens a session on
    /// it. A missing room file opens as an empty room.
    pub fn new(
        rooms_root: &Path,
        room_name: &str,
        layout: EditorLayout,
        metrics: Box<dyn LabelMetrics>,
    ) -> anyhow::Result<Self> {
        let room = load_room(rooms_root, room_name)
            .with_context(|| format!("loading room '{room_name}' for editing"))?;
        let entities = room
            .objects
            .iter()
            .cloned()
            .map(|data| WorldEntity::new(data, &*metrics))
            .collect();
        info!(room = room_name, "editor session opened");
        Ok(Self {
            rooms_root: rooms_root.to_path_buf(),
            room_name: room_name.to_string(),
            layout,
            metrics,
            entities,
            original: room.objects,
            selected: None,
            mode: Mode::Idle,
        })
    }

    pub fn room_name(&self) -> &str {
        &self.room_name
    }

    pub fn entities(&self) -> &[WorldEntity] {
        &self.entities
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The current document as it would be saved.
    pub fn document(&self) -> Room {
        Room {
            objects: self.entities.iter().map(|e| e.data.clone()).collect(),
        }
    }

    /// Advances the session by one frame of input.
    pub fn update(&mut self, input: &InputSnapshot) -> anyhow::Result<EditorSignal> {
        if matches!(self.mode, Mode::ConfirmingSave) {
            self.handle_dialog(input)?;
            return Ok(EditorSignal::Continue);
        }
        if matches!(self.mode, Mode::EditingProperty { .. }) {
            self.handle_text_edit(input);
            return Ok(EditorSignal::Continue);
        }

        if input.keys.contains(&EditorKey::ReturnToGame) {
            return Ok(EditorSignal::ExitToGame);
        }
        if input.keys.contains(&EditorKey::Duplicate) {
            self.duplicate_selected();
        }

        if input.left_pressed {
            if !self.handle_buttons(input.pointer) {
                self.handle_press(input.pointer);
                // A press that starts a drag or resize applies its
                // transform in the same frame, so a bare click on an
                // off-grid group already snaps it.
                if matches!(self.mode, Mode::Dragging { .. } | Mode::Resizing { .. }) {
                    self.handle_pointer_move(input.pointer);
                }
            }
        } else if input.left_down {
            self.handle_pointer_move(input.pointer);
        } else if !matches!(self.mode, Mode::Idle) {
            // Button no longer held: any drag or resize ends here.
            self.mode = Mode::Idle;
        }

        Ok(EditorSignal::Continue)
    }

    /// Save/revert buttons. Returns true if the press was consumed.
    fn handle_buttons(&mut self, pointer: Point) -> bool {
        if self.layout.save_button.contains(pointer) {
            self.mode = Mode::ConfirmingSave;
            return true;
        }
        if self.layout.revert_button.contains(pointer) {
            self.revert_changes();
            return true;
        }
        false
    }

    fn handle_press(&mut self, pointer: Point) {
        if self.selected.is_some() && self.layout.inspector_pane.contains(pointer) {
            for (idx, field) in FIELDS.iter().enumerate() {
                if self.layout.field_value_rect(idx).contains(pointer) {
                    self.begin_property_edit(field.id);
                    return;
                }
            }
            // Pane background: swallow the press so entities underneath
            // are not hit through it.
            return;
        }

        if let Some(anchor) = self.selected {
            let bounds = group_bounds(&self.entities, anchor);
            for corner in Corner::ALL {
                if corner.hitbox(&bounds).contains(pointer) {
                    self.mode = Mode::Resizing { corner };
                    return;
                }
            }
        }

        // Largest entities first, so a big backdrop's group is preferred
        // over a small prop when boxes overlap. The hit region of an
        // entity is its whole group's box.
        let mut order: Vec<usize> = (0..self.entities.len()).collect();
        order.sort_by_key(|&i| std::cmp::Reverse(self.entities[i].bounding_box().area()));
        for i in order {
            let bounds = group_bounds(&self.entities, i);
            if bounds.contains(pointer) {
                let center = bounds.center();
                self.selected = Some(i);
                self.mode = Mode::Dragging {
                    offset: Point::new(pointer.x - center.x, pointer.y - center.y),
                };
                debug!(entity = %self.entities[i].data.name, "selected");
                return;
            }
        }

        self.selected = None;
        self.mode = Mode::Idle;
    }

    fn handle_pointer_move(&mut self, pointer: Point) {
        match self.mode {
            Mode::Dragging { offset } => self.drag_group_to(pointer, offset),
            Mode::Resizing { corner } => self.resize_group_to(pointer, corner),
            _ => {}
        }
    }

    fn begin_property_edit(&mut self, field: FieldId) {
        let Some(idx) = self.selected else { return };
        let buffer = (field_spec(field).format)(&self.entities[idx].data);
        self.mode = Mode::EditingProperty { field, buffer };
    }

    fn handle_text_edit(&mut self, input: &InputSnapshot) {
        let Mode::EditingProperty { field, mut buffer } =
            std::mem::replace(&mut self.mode, Mode::Idle)
        else {
            return;
        };
        for event in &input.text {
            match event {
                TextEvent::Char(c) => buffer.push(*c),
                TextEvent::Backspace => {
                    buffer.pop();
                }
                TextEvent::Enter => {
                    self.commit_edit(field, &buffer);
                    return;
                }
                TextEvent::Escape => {
                    debug!("property edit cancelled");
                    return;
                }
            }
        }
        self.mode = Mode::EditingProperty { field, buffer };
    }

    /// Commits a finished property edit. A value that fails to parse is
    /// logged and discarded; the field keeps its previous value.
    fn commit_edit(&mut self, field: FieldId, buffer: &str) {
        let Some(idx) = self.selected else { return };
        let metrics = &*self.metrics;
        match (field_spec(field).parse)(&mut self.entities[idx].data, buffer) {
            Ok(()) => {
                self.entities[idx].update_bounding_box(metrics);
                debug!(field = field_spec(field).label, value = buffer, "property committed");
            }
            Err(err) => warn!(%err, "discarding property edit"),
        }
    }

    fn handle_dialog(&mut self, input: &InputSnapshot) -> anyhow::Result<()> {
        if !input.left_pressed {
            return Ok(());
        }
        if self.layout.dialog_yes_button().contains(input.pointer) {
            self.save_changes()?;
            self.mode = Mode::Idle;
        } else if self.layout.dialog_no_button().contains(input.pointer) {
            self.mode = Mode::Idle;
        }
        // Presses elsewhere are swallowed; the dialog is modal.
        Ok(())
    }

    fn duplicate_selected(&mut self) {
        let Some(idx) = self.selected else { return };
        let mut data = self.entities[idx].data.clone();
        data.x += DUPLICATE_OFFSET_X;
        let clone = WorldEntity::new(data, &*self.metrics);
        info!(entity = %clone.data.name, "duplicated");
        self.entities.push(clone);
        self.selected = Some(self.entities.len() - 1);
        self.mode = Mode::Idle;
    }

    fn save_changes(&mut self) -> anyhow::Result<()> {
        let room = self.document();
        save_room(&self.rooms_root, &self.room_name, &room)
            .with_context(|| format!("saving room '{}'", self.room_name))?;
        Ok(())
    }

    /// Discards all edits since load, restoring the snapshot taken when
    /// the session opened. Clears the selection.
    fn revert_changes(&mut self) {
        let metrics = &*self.metrics;
        self.entities = self
            .original
            .iter()
            .cloned()
            .map(|data| WorldEntity::new(data, metrics))
            .collect();
        self.selected = None;
        self.mode = Mode::Idle;
        info!(room = %self.room_name, "reverted to loaded state");
    }
}
