//! Runtime entity wrapper: a room record plus its derived bounding box.

use crate::constants::SINGLE_LINE_DESCENT_TRIM;
use crate::data::RoomObject;
use crate::geom::Rect;
use crate::text::LabelMetrics;

/// A spatial entity placed in a room: its persisted record plus the
/// bounding box derived from the measured label size and scale.
///
/// The box is never stored independently of its source fields; call
/// [`WorldEntity::update_bounding_box`] after mutating name, position, or
/// scale.
#[derive(Debug, Clone)]
pub struct WorldEntity {
    pub data: RoomObject,
    bounding_box: Rect,
}

impl WorldEntity {
    pub fn new(data: RoomObject, metrics: &dyn LabelMetrics) -> Self {
        let bounding_box = compute_bounding_box(&data, metrics);
        Self { data, bounding_box }
    }

    pub fn bounding_box(&self) -> Rect {
        self.bounding_box
    }

    /// Re-derives the bounding box from the current record fields.
    pub fn update_bounding_box(&mut self, metrics: &dyn LabelMetrics) {
        self.bounding_box = compute_bounding_box(&self.data, metrics);
    }
}

/// Derives an entity's bounding box from its name, position, and scale.
///
/// Pure given the record and the measurer. Single-line labels trim a fixed
/// fraction from the measured height to compensate for the font's
/// descender padding; a label with an embedded line break keeps its full
/// height. A zero-length name yields a zero-size box.
pub fn compute_bounding_box(data: &RoomObject, metrics: &dyn LabelMetrics) -> Rect {
    let (w, h) = metrics.measure(&data.name);
    let height_factor = if data.name.contains('\n') {
        1.0
    } else {
        1.0 - SINGLE_LINE_DESCENT_TRIM
    };
    Rect::new(
        data.x,
        data.y,
        (w * data.scale_x) as i32,
        (h * data.scale_y * height_factor) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::MonospaceMetrics;

    #[test]
    fn single_line_box_trims_descent() {
        let metrics = MonospaceMetrics::new(10.0, 20.0);
        let data = RoomObject {
            name: "TABLE".to_string(),
            x: 100,
            y: 50,
            ..Default::default()
        };
        let bbox = compute_bounding_box(&data, &metrics);
        assert_eq!(bbox, Rect::new(100, 50, 50, 13)); // 20 * 0.65 = 13
    }

    #[test]
    fn multiline_box_keeps_full_height() {
        let metrics = MonospaceMetrics::new(10.0, 20.0);
        let data = RoomObject {
            name: "D\nO".to_string(),
            ..Default::default()
        };
        let bbox = compute_bounding_box(&data, &metrics);
        assert_eq!(bbox, Rect::new(0, 0, 10, 40));
    }

    #[test]
    fn scale_multiplies_measured_size() {
        let metrics = MonospaceMetrics::new(10.0, 20.0);
        let data = RoomObject {
            name: "A\nB".to_string(),
            scale_x: 2.0,
            scale_y: 0.5,
            ..Default::default()
        };
        let bbox = compute_bounding_box(&data, &metrics);
        assert_eq!(bbox, Rect::new(0, 0, 20, 20));
    }

    #[test]
    fn empty_name_yields_zero_size_box() {
        let metrics = MonospaceMetrics::default();
        let data = RoomObject {
            x: 7,
            y: 9,
            ..Default::default()
        };
        assert_eq!(compute_bounding_box(&data, &metrics), Rect::new(7, 9, 0, 0));
    }

    #[test]
    fn recompute_is_deterministic() {
        let metrics = MonospaceMetrics::default();
        let data = RoomObject {
            name: "FRIDGE".to_string(),
            x: 500,
            y: 150,
            scale_x: 1.25,
            scale_y: 1.25,
            ..Default::default()
        };
        let mut entity = WorldEntity::new(data, &metrics);
        let before = entity.bounding_box();
        entity.update_bounding_box(&metrics);
        assert_eq!(entity.bounding_box(), before);
    }
}
