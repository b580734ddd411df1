//! # WonderGame Core
//!
//! Core types, traits, and utilities shared by the narrative, exploration,
//! and editor layers of WonderGame:
//!
//! - **Geometry**: integer rectangles and float vectors used for label
//!   placement, hit-testing, and collision
//! - **Room documents**: the persisted room format, the one contract shared
//!   by the room editor (writer) and the exploration mode (reader)
//! - **Label metrics**: the measuring seam between game logic and whatever
//!   font the presentation layer renders with
//! - **Constants**: grid size, layout metrics, and theme-independent tuning

pub mod constants;
pub mod data;
pub mod error;
pub mod geom;
pub mod text;

pub use data::{load_room, room_path, save_room, Room, RoomObject, WorldEntity};
pub use error::{Result, RoomError};
pub use geom::{Point, Rect, Vec2};
pub use text::{LabelMetrics, MonospaceMetrics};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
