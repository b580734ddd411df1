//! # WonderGame Editor
//!
//! The embedded room editor: an interactive tool for placing and adjusting
//! the spatial entities the exploration mode walks through.
//!
//! ## Core Components
//!
//! - **Session** ([`EditorSession`]): one room document under edit, the
//!   current selection, and the pointer state machine
//!   (idle / dragging / resizing / editing a property / confirming a save)
//! - **Group resolver**: entities sharing a non-empty `groupId` act as a
//!   rigid unit for selection, drag, and resize
//! - **Transforms**: grid-snapped translation and corner-anchored
//!   proportional resize that compounds per-member scale factors
//! - **Inspector**: a data-driven field table for text-editing one
//!   entity's attributes
//! - **Persistence**: confirm-gated save and revert-to-loaded-snapshot
//!   against the shared room file format
//!
//! The editor is presentation-agnostic: it consumes an [`InputSnapshot`]
//! per frame and exposes a [`SceneFrame`] describing everything a renderer
//! should draw. No rendering context is required to drive or test it.

pub mod group;
pub mod input;
pub mod inspector;
pub mod layout;
pub mod scene;
pub mod session;
mod transform;

pub use group::group_bounds;
pub use input::{EditorKey, InputSnapshot, TextEvent};
pub use inspector::{EditError, FieldId, FieldSpec, FIELDS};
pub use layout::EditorLayout;
pub use scene::{DialogScene, InspectorRow, LabelScene, SceneFrame, SelectionScene};
pub use session::{Corner, EditorSession, EditorSignal};
