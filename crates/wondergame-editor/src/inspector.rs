//! Property inspector field table.
//!
//! The eight editable fields of an entity are described by one ordered
//! table of formatter/parser pairs, so the inspector renders and commits
//! edits without a per-field conditional chain. Optional fields render as
//! the literal `null` and accept the same literal to clear themselves.

use thiserror::Error;
use wondergame_core::data::RoomObject;

/// Sentinel rendered for (and accepted into) absent optional fields.
const NULL_SENTINEL: &str = "null";

/// A failed attempt to commit a property edit. The session logs these and
/// leaves the field unchanged; there is no user-visible error surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("'{value}' is not a valid integer for {field}")]
    InvalidInt { field: &'static str, value: String },

    #[error("'{value}' is not a valid number for {field}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Identifies one editable entity field, in inspector display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    X,
    Y,
    ScaleX,
    ScaleY,
    Description,
    DoorTo,
    GroupId,
}

/// One row of the inspector: how to display and how to commit a field.
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub format: fn(&RoomObject) -> String,
    pub parse: fn(&mut RoomObject, &str) -> Result<(), EditError>,
}

fn format_opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NULL_SENTINEL.to_string())
}

fn parse_opt(raw: &str) -> Option<String> {
    if raw == NULL_SENTINEL {
        None
    } else {
        Some(raw.to_string())
    }
}

fn parse_i32(field: &'static str, raw: &str) -> Result<i32, EditError> {
    raw.trim().parse().map_err(|_| EditError::InvalidInt {
        field,
        value: raw.to_string(),
    })
}

fn parse_f32(field: &'static str, raw: &str) -> Result<f32, EditError> {
    raw.trim().parse().map_err(|_| EditError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// The inspector's field table, in display order.
pub const FIELDS: [FieldSpec; 8] = [
    FieldSpec {
        id: FieldId::Name,
        label: "Name",
        format: |o| o.name.clone(),
        parse: |o, raw| {
            o.name = raw.to_string();
            Ok(())
        },
    },
    FieldSpec {
        id: FieldId::X,
        label: "X",
        format: |o| o.x.to_string(),
        parse: |o, raw| {
            o.x = parse_i32("X", raw)?;
            Ok(())
        },
    },
    FieldSpec {
        id: FieldId::Y,
        label: "Y",
        format: |o| o.y.to_string(),
        parse: |o, raw| {
            o.y = parse_i32("Y", raw)?;
            Ok(())
        },
    },
    FieldSpec {
        id: FieldId::ScaleX,
        label: "ScaleX",
        format: |o| format!("{:.2}", o.scale_x),
        parse: |o, raw| {
            o.scale_x = parse_f32("ScaleX", raw)?;
            Ok(())
        },
    },
    FieldSpec {
        id: FieldId::ScaleY,
        label: "ScaleY",
        format: |o| format!("{:.2}", o.scale_y),
        parse: |o, raw| {
            o.scale_y = parse_f32("ScaleY", raw)?;
            Ok(())
        },
    },
    FieldSpec {
        id: FieldId::Description,
        label: "Description",
        format: |o| format_opt(&o.description),
        parse: |o, raw| {
            o.description = parse_opt(raw);
            Ok(())
        },
    },
    FieldSpec {
        id: FieldId::DoorTo,
        label: "DoorTo",
        format: |o| format_opt(&o.door_to),
        parse: |o, raw| {
            o.door_to = parse_opt(raw);
            Ok(())
        },
    },
    FieldSpec {
        id: FieldId::GroupId,
        label: "GroupId",
        format: |o| format_opt(&o.group_id),
        parse: |o, raw| {
            o.group_id = parse_opt(raw);
            Ok(())
        },
    },
];

/// Looks up the table entry for `id`.
pub fn field_spec(id: FieldId) -> &'static FieldSpec {
    FIELDS
        .iter()
        .find(|f| f.id == id)
        .expect("every FieldId has a table entry")
}
