//! Ruling-line derivation from rectangle shapes.
//!
//! Table dividers in page descriptions are usually drawn as very thin filled
//! rectangles. This module filters a page's rectangles down to the ones that
//! can act as dividers and collapses each to a degenerate line segment.

use serde::{Deserialize, Serialize};

use crate::geometry::BBox;

/// Maximum thickness for a rectangle to count as a ruling line, in points.
pub const MAX_RULING_THICKNESS: f64 = 2.0;

/// Minimum area for a rectangle to count as a ruling line, in square points.
pub const MIN_RULING_AREA: f64 = 1.0;

/// Direction of a ruling line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A degenerate rectangle treated as a table divider.
///
/// Horizontal segments collapse onto the source rectangle's bottom edge, so
/// their relevant coordinate is `y0`; vertical segments collapse onto the
/// left edge and their relevant coordinate is `x0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub orientation: Orientation,
}

impl LineSegment {
    /// Cast a rectangle to its ruling-line form.
    ///
    /// Horizontal when the horizontal extent is at least the vertical
    /// extent, else vertical.
    #[must_use = "returns the ruling-line form of the rectangle"]
    pub fn from_rect(rect: &BBox) -> Self {
        if rect.width() >= rect.height() {
            Self {
                x0: rect.x0,
                y0: rect.y0,
                x1: rect.x1,
                y1: rect.y0,
                orientation: Orientation::Horizontal,
            }
        } else {
            Self {
                x0: rect.x0,
                y0: rect.y0,
                x1: rect.x0,
                y1: rect.y1,
                orientation: Orientation::Vertical,
            }
        }
    }
}

/// Filter rectangle shapes down to usable ruling lines.
///
/// A rectangle qualifies when its shorter side is thinner than
/// [`MAX_RULING_THICKNESS`] and its area exceeds [`MIN_RULING_AREA`]: the
/// thickness cap rejects filled boxes, the area floor rejects zero-extent
/// artifacts that would otherwise yield degenerate walls. No deduplication
/// is attempted; the resolver only consults extremal coordinates, so
/// overlapping duplicates are harmless.
#[must_use = "returns the derived ruling lines"]
pub fn derive_lines(rects: &[BBox]) -> Vec<LineSegment> {
    rects
        .iter()
        .filter(|rect| rect.min_side() < MAX_RULING_THICKNESS && rect.area() > MIN_RULING_AREA)
        .map(LineSegment::from_rect)
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    // wide and thin: kept, horizontal
    #[case(BBox::new(0.0, 0.0, 100.0, 1.0), true)]
    // tall and thin: kept, vertical
    #[case(BBox::new(0.0, 0.0, 1.0, 100.0), true)]
    // zero-height artifact: area 0, dropped
    #[case(BBox::new(0.0, 0.0, 100.0, 0.0), false)]
    // thick fill rectangle: dropped
    #[case(BBox::new(0.0, 0.0, 50.0, 50.0), false)]
    // thin but tiny: area below the floor, dropped
    #[case(BBox::new(0.0, 0.0, 0.5, 1.5), false)]
    // exactly at the thickness cap: dropped
    #[case(BBox::new(0.0, 0.0, 2.0, 100.0), false)]
    fn test_ruling_filter(#[case] rect: BBox, #[case] kept: bool) {
        assert_eq!(derive_lines(&[rect]).len(), usize::from(kept));
    }

    #[rstest]
    #[case(BBox::new(0.0, 0.0, 100.0, 1.0), Orientation::Horizontal)]
    #[case(BBox::new(0.0, 0.0, 1.0, 100.0), Orientation::Vertical)]
    // square: horizontal extent equals vertical extent
    #[case(BBox::new(0.0, 0.0, 1.5, 1.5), Orientation::Horizontal)]
    fn test_orientation(#[case] rect: BBox, #[case] expected: Orientation) {
        assert_eq!(LineSegment::from_rect(&rect).orientation, expected);
    }

    #[test]
    fn test_horizontal_degenerates_to_bottom_edge() {
        let line = LineSegment::from_rect(&BBox::new(10.0, 20.0, 110.0, 21.5));
        assert_eq!((line.x0, line.y0, line.x1, line.y1), (10.0, 20.0, 110.0, 20.0));
    }

    #[test]
    fn test_vertical_degenerates_to_left_edge() {
        let line = LineSegment::from_rect(&BBox::new(10.0, 20.0, 11.5, 120.0));
        assert_eq!((line.x0, line.y0, line.x1, line.y1), (10.0, 20.0, 10.0, 120.0));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let rect = BBox::new(0.0, 0.0, 100.0, 1.0);
        assert_eq!(derive_lines(&[rect, rect]).len(), 2);
    }
}
