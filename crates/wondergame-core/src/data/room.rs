//! The persisted room format.
//!
//! One JSON file per room, under `data/rooms/<name>.json` relative to a
//! caller-supplied root. This format is the sole contract between the room
//! editor (which writes it) and the exploration mode (which reads it to
//! place entities, build collision, and wire doors).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;

fn one() -> f32 {
    1.0
}

/// One placed entity record as stored on disk.
///
/// `description` and `door_to` are interpreted by the exploration mode
/// (touch descriptions and door transitions); `group_id` rigidly links
/// entities for selection, drag, and resize in the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomObject {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default = "one")]
    pub scale_x: f32,
    #[serde(default = "one")]
    pub scale_y: f32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub door_to: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
}

impl Default for RoomObject {
    fn default() -> Self {
        Self {
            name: String::new(),
            x: 0,
            y: 0,
            scale_x: 1.0,
            scale_y: 1.0,
            description: None,
            door_to: None,
            group_id: None,
        }
    }
}

/// A room document: an insertion-ordered list of entity records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Room {
    #[serde(default)]
    pub objects: Vec<RoomObject>,
}

/// Path of the room file for `name` under `root`.
pub fn room_path(root: &Path, name: &str) -> PathBuf {
    root.join("data").join("rooms").join(format!("{name}.json"))
}

/// Loads a room document.
///
/// A missing file is not an error: the editor starts such rooms empty and
/// the caller is expected to notice and route the player elsewhere.
pub fn load_room(root: &Path, name: &str) -> Result<Room> {
    let path = room_path(root, name);
    if !path.exists() {
        debug!(room = name, "room file missing, starting empty");
        return Ok(Room::default());
    }
    let contents = fs::read_to_string(&path)?;
    let room: Room = serde_json::from_str(&contents)?;
    debug!(room = name, objects = room.objects.len(), "loaded room");
    Ok(room)
}

/// Serializes `room` to its file location, overwriting any previous
/// contents. The write is a plain truncating write; there is no
/// append-and-rename step.
pub fn save_room(root: &Path, name: &str, room: &Room) -> Result<()> {
    let path = room_path(root, name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(room)?;
    fs::write(&path, json)?;
    info!(room = name, objects = room.objects.len(), "saved room");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_room() -> Room {
        Room {
            objects: vec![
                RoomObject {
                    name: "TABLE".to_string(),
                    x: 300,
                    y: 250,
                    ..Default::default()
                },
                RoomObject {
                    name: "D\nO\nO\nR".to_string(),
                    x: 600,
                    y: 200,
                    scale_x: 1.5,
                    scale_y: 2.0,
                    description: Some("A heavy door.".to_string()),
                    door_to: Some("room_2".to_string()),
                    group_id: None,
                },
            ],
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let room = sample_room();
        save_room(dir.path(), "room_1", &room).unwrap();
        let loaded = load_room(dir.path(), "room_1").unwrap();
        assert_eq!(loaded, room);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let room = load_room(dir.path(), "nowhere").unwrap();
        assert!(room.objects.is_empty());
    }

    #[test]
    fn file_uses_contract_field_names() {
        let dir = TempDir::new().unwrap();
        save_room(dir.path(), "room_1", &sample_room()).unwrap();
        let raw = std::fs::read_to_string(room_path(dir.path(), "room_1")).unwrap();
        for field in ["\"name\"", "\"x\"", "\"y\"", "\"scaleX\"", "\"scaleY\"", "\"doorTo\"", "\"groupId\""] {
            assert!(raw.contains(field), "missing {field} in {raw}");
        }
    }

    #[test]
    fn absent_optional_fields_default() {
        let dir = TempDir::new().unwrap();
        let path = room_path(dir.path(), "sparse");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"objects":[{"name":"SIGN","x":5,"y":7}]}"#).unwrap();
        let room = load_room(dir.path(), "sparse").unwrap();
        let obj = &room.objects[0];
        assert_eq!(obj.scale_x, 1.0);
        assert_eq!(obj.scale_y, 1.0);
        assert!(obj.description.is_none());
        assert!(obj.group_id.is_none());
    }
}
