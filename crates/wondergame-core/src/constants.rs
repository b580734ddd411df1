//! Shared tuning constants for the editor and exploration layers.

/// Quantization step (in pixels) applied to drag and resize targets in the
/// room editor. Also the spacing of the editor's background grid.
pub const GRID_SIZE: i32 = 10;

/// Side length of the drawn corner resize handles.
pub const HANDLE_SIZE: i32 = 8;

/// Side length of the square hit zone centered on each resize handle.
/// Deliberately larger than [`HANDLE_SIZE`] to ease targeting.
pub const HANDLE_HITBOX: i32 = 16;

/// Horizontal offset applied to a duplicated entity so the copy does not
/// visually coincide with its source.
pub const DUPLICATE_OFFSET_X: i32 = 20;

/// Fraction of the measured label height trimmed from a single-line
/// entity's bounding box, compensating for the font's descender padding.
/// Multi-line labels use their full measured height.
pub const SINGLE_LINE_DESCENT_TRIM: f32 = 0.35;

/// Default viewport dimensions assumed by the editor layout and used as
/// the exploration room extents.
pub const VIEWPORT_WIDTH: i32 = 800;
pub const VIEWPORT_HEIGHT: i32 = 600;

/// Thickness of the four static perimeter walls enclosing an exploration
/// room.
pub const WALL_THICKNESS: i32 = 10;

/// Player movement speed in pixels per second.
pub const PLAYER_SPEED: f32 = 200.0;

/// The glyph drawn (and measured) for the player in exploration mode.
pub const PLAYER_GLYPH: &str = "@";

/// Name prefix marking an entity as an invisible trigger zone. The
/// exploration mode hides these labels and raises their description on
/// contact; the editor shows them like any other entity.
pub const HOTSPOT_SENTINEL: &str = "!hotspot";
