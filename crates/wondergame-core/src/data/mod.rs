//! Room document data model and file I/O.

mod entity;
mod room;

pub use entity::WorldEntity;
pub use room::{load_room, room_path, save_room, Room, RoomObject};
