//! Label measurement seam.
//!
//! Entities are drawn as text labels, so their footprint depends on the
//! font the presentation layer renders with. Game logic only ever talks to
//! this trait; tests and the headless front-end use [`MonospaceMetrics`].

/// Measures the natural (unscaled) pixel size of a text label.
pub trait LabelMetrics {
    /// Returns `(width, height)` of `text` as the presentation layer would
    /// draw it, honoring embedded line breaks. An empty string measures
    /// `(0.0, 0.0)`.
    fn measure(&self, text: &str) -> (f32, f32);
}

/// Fixed-advance metrics for tests and terminal-only builds.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    pub advance: f32,
    pub line_height: f32,
}

impl MonospaceMetrics {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        // Roughly the 8x16 cell of the stock terminal font.
        Self::new(8.0, 16.0)
    }
}

impl LabelMetrics for MonospaceMetrics {
    fn measure(&self, text: &str) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let mut max_cols = 0usize;
        let mut lines = 0usize;
        for line in text.split('\n') {
            max_cols = max_cols.max(line.chars().count());
            lines += 1;
        }
        (max_cols as f32 * self.advance, lines as f32 * self.line_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_label_measures_zero() {
        let m = MonospaceMetrics::default();
        assert_eq!(m.measure(""), (0.0, 0.0));
    }

    #[test]
    fn multiline_uses_widest_line() {
        let m = MonospaceMetrics::new(10.0, 20.0);
        assert_eq!(m.measure("DOOR"), (40.0, 20.0));
        assert_eq!(m.measure("D\nOO\nR"), (20.0, 60.0));
    }
}
