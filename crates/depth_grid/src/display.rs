//! Toolkit-independent display state for the distance grid.
//!
//! [`DisplayState`] holds one text per grid region plus a free-form debug text.
//! The sampler writes to it; a view layer reads it and renders however it likes.
//! Region texts keep their last published value until a newer reliable reading arrives.
use std::fmt;

/// Names of the nine regions of a 3×3 grid, in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionLabel {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    CenterCenter,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl RegionLabel {
    pub const ALL: [RegionLabel; 9] = [
        RegionLabel::TopLeft,
        RegionLabel::TopCenter,
        RegionLabel::TopRight,
        RegionLabel::CenterLeft,
        RegionLabel::CenterCenter,
        RegionLabel::CenterRight,
        RegionLabel::BottomLeft,
        RegionLabel::BottomCenter,
        RegionLabel::BottomRight,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major region index.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            RegionLabel::TopLeft => "top-left",
            RegionLabel::TopCenter => "top-center",
            RegionLabel::TopRight => "top-right",
            RegionLabel::CenterLeft => "center-left",
            RegionLabel::CenterCenter => "center-center",
            RegionLabel::CenterRight => "center-right",
            RegionLabel::BottomLeft => "bottom-left",
            RegionLabel::BottomCenter => "bottom-center",
            RegionLabel::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for RegionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Formats a distance as a plain decimal with at most two fraction digits (`0.##`).
pub fn format_distance(distance: f32) -> String {
    let mut s = format!("{distance:.2}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".into();
    }
    s
}

/// Region texts, the frame-center reading and a debug text, as shown to the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayState {
    regions: Vec<Option<String>>,
    center: Option<String>,
    debug: String,
}

impl DisplayState {
    /// Creates a display with `region_count` empty region texts.
    pub fn new(region_count: usize) -> Self {
        Self {
            regions: vec![None; region_count],
            center: None,
            debug: String::new(),
        }
    }

    pub fn regions(&self) -> &[Option<String>] {
        &self.regions
    }

    pub fn region(&self, index: usize) -> Option<&str> {
        self.regions.get(index).and_then(|r| r.as_deref())
    }

    /// Region text by 3×3 label.
    pub fn label(&self, label: RegionLabel) -> Option<&str> {
        self.region(label.index())
    }

    /// Latest frame-center reading, e.g. `"Dist = 1.5"`.
    pub fn center(&self) -> Option<&str> {
        self.center.as_deref()
    }

    pub fn set_center_distance(&mut self, distance: f32) {
        self.center = Some(format!("Dist = {}", format_distance(distance)));
    }

    pub fn debug(&self) -> &str {
        &self.debug
    }

    pub fn set_debug(&mut self, text: impl Into<String>) {
        self.debug = text.into();
    }

    /// Writes a formatted distance to a region. Out-of-range indices are ignored.
    pub fn publish(&mut self, index: usize, distance: f32) -> bool {
        match self.regions.get_mut(index) {
            Some(slot) => {
                *slot = Some(format_distance(distance));
                true
            }
            None => false,
        }
    }

    /// Clears every text.
    pub fn clear(&mut self) {
        self.regions.iter_mut().for_each(|r| *r = None);
        self.center = None;
        self.debug.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_distance_drops_trailing_zeros() {
        assert_eq!(format_distance(1.5), "1.5");
        assert_eq!(format_distance(2.0), "2");
        assert_eq!(format_distance(0.0), "0");
        assert_eq!(format_distance(12.25), "12.25");
        assert_eq!(format_distance(0.3), "0.3");
    }

    #[test]
    fn format_distance_rounds_to_two_digits() {
        assert_eq!(format_distance(0.456), "0.46");
        assert_eq!(format_distance(1.004), "1");
        assert_eq!(format_distance(99.999), "100");
    }

    #[test]
    fn labels_map_to_row_major_indices() {
        for (i, label) in RegionLabel::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
            assert_eq!(RegionLabel::from_index(i), Some(*label));
        }
        assert_eq!(RegionLabel::from_index(9), None);
        assert_eq!(RegionLabel::BottomCenter.to_string(), "bottom-center");
    }

    #[test]
    fn publish_sets_text_and_ignores_unknown_regions() {
        let mut display = DisplayState::new(9);
        assert_eq!(display.label(RegionLabel::TopLeft), None);

        assert!(display.publish(0, 1.25));
        assert_eq!(display.label(RegionLabel::TopLeft), Some("1.25"));
        assert!(!display.publish(9, 1.0));

        display.set_debug("hello");
        display.clear();
        assert_eq!(display.region(0), None);
        assert_eq!(display.debug(), "");
    }

    #[test]
    fn center_reading_uses_distance_format() {
        let mut display = DisplayState::new(9);
        assert_eq!(display.center(), None);

        display.set_center_distance(2.504);
        assert_eq!(display.center(), Some("Dist = 2.5"));
        display.set_center_distance(3.0);
        assert_eq!(display.center(), Some("Dist = 3"));

        display.clear();
        assert_eq!(display.center(), None);
    }
}
