//! Legend handles

use medvis_core::Rgba;

/// Marker size of legend handles, in points
pub const DEFAULT_MARKER_SIZE: f64 = 10.0;

/// Glyph drawn for a legend entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    Circle,
    Square,
}

impl Marker {
    /// Whether a point at normalised offset `(dy, dx)` from the glyph
    /// centre (both in [-1, 1]) is covered by the glyph.
    pub fn covers(&self, dy: f64, dx: f64) -> bool {
        match self {
            Marker::Circle => dy * dy + dx * dx <= 1.0,
            Marker::Square => dy.abs() <= 1.0 && dx.abs() <= 1.0,
        }
    }
}

/// Placeholder artist that only carries a face colour into a legend.
///
/// Line and edge colours are fully transparent, so the legend glyph is the
/// only place the colour shows up.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerHandle {
    pub marker: Marker,
    pub size: f64,
    pub line_colour: Rgba,
    pub edge_colour: Rgba,
    pub face_colour: Rgba,
}

impl MarkerHandle {
    /// Circle handle of default size filled with `face_colour`.
    pub fn swatch(face_colour: Rgba) -> Self {
        Self {
            marker: Marker::Circle,
            size: DEFAULT_MARKER_SIZE,
            line_colour: Rgba::TRANSPARENT,
            edge_colour: Rgba::TRANSPARENT,
            face_colour,
        }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }
}

/// One labelled row of a legend
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub handle: MarkerHandle,
}

impl LegendEntry {
    pub fn new(label: impl Into<String>, handle: MarkerHandle) -> Self {
        Self {
            label: label.into(),
            handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_is_invisible_apart_from_face() {
        let handle = MarkerHandle::swatch(Rgba::opaque(1.0, 0.0, 0.0));
        assert_eq!(handle.marker, Marker::Circle);
        assert_eq!(handle.size, 10.0);
        assert_eq!(handle.line_colour, Rgba::TRANSPARENT);
        assert_eq!(handle.edge_colour, Rgba::TRANSPARENT);
        assert_eq!(handle.face_colour.a, 1.0);
    }

    #[test]
    fn test_marker_coverage() {
        assert!(Marker::Circle.covers(0.0, 0.0));
        assert!(!Marker::Circle.covers(0.9, 0.9));
        assert!(Marker::Square.covers(0.9, 0.9));
        assert!(!Marker::Square.covers(1.1, 0.0));
    }

    #[test]
    fn test_entry_label() {
        let entry = LegendEntry::new("Tumour", MarkerHandle::swatch(Rgba::WHITE).with_marker(Marker::Square));
        assert_eq!(entry.label, "Tumour");
        assert_eq!(entry.handle.marker, Marker::Square);
    }
}
