//! Nearest-enclosing-rectangle queries against the ruling-line set.

use ordered_float::OrderedFloat;

use crate::geometry::Point;
use crate::lines::{LineSegment, Orientation};

/// The smallest rectangle around a query point bounded by ruling lines on
/// all four sides.
///
/// Serves as the table's cell key: two query points that resolve to the same
/// four coordinates are the same cell. `OrderedFloat` gives the coordinates
/// a total order, which makes the key hashable without lossy rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellBoundary {
    pub x0: OrderedFloat<f64>,
    pub y0: OrderedFloat<f64>,
    pub x1: OrderedFloat<f64>,
    pub y1: OrderedFloat<f64>,
}

impl CellBoundary {
    /// Create a cell boundary from raw coordinates.
    #[inline]
    #[must_use = "returns a new CellBoundary instance"]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0: OrderedFloat(x0),
            y0: OrderedFloat(y0),
            x1: OrderedFloat(x1),
            y1: OrderedFloat(y1),
        }
    }

    /// Left edge x, the column key.
    #[inline]
    #[must_use]
    pub fn left(&self) -> f64 {
        self.x0.0
    }

    /// Bottom edge y, the row key.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y0.0
    }

    /// Area of the cell.
    #[inline]
    #[must_use = "returns the cell area"]
    pub fn area(&self) -> f64 {
        (self.x1.0 - self.x0.0) * (self.y1.0 - self.y0.0)
    }
}

#[inline]
fn span_contains(lo: f64, hi: f64, value: f64) -> bool {
    value >= lo && value <= hi
}

/// Find the smallest cell enclosing `point`.
///
/// The walls are the nearest vertical rulings strictly left and right of the
/// point among those whose y-span covers `point.y`, and the nearest
/// horizontal rulings strictly below and above among those whose x-span
/// covers `point.x`. Returns `None` when either axis has fewer than two
/// covering rulings, or when the point sits at or outside the outermost
/// ones; that is the normal outcome for margin text, not an error.
///
/// Span bounds are inclusive, so a point exactly on a ruling can resolve to
/// a cell on either side of it; which side wins is implementation-defined.
///
/// Linear in the number of lines. Per-page ruling counts are small enough
/// that a spatial index would not pay for itself.
#[must_use = "returns the enclosing cell, if any"]
pub fn resolve(point: Point, lines: &[LineSegment]) -> Option<CellBoundary> {
    let mut vertical_covering = 0usize;
    let mut horizontal_covering = 0usize;
    let mut left: Option<f64> = None;
    let mut right: Option<f64> = None;
    let mut below: Option<f64> = None;
    let mut above: Option<f64> = None;

    for line in lines {
        match line.orientation {
            Orientation::Vertical if span_contains(line.y0, line.y1, point.y) => {
                vertical_covering += 1;
                if line.x0 < point.x {
                    left = Some(left.map_or(line.x0, |x| x.max(line.x0)));
                } else if line.x0 > point.x {
                    right = Some(right.map_or(line.x0, |x| x.min(line.x0)));
                }
            }
            Orientation::Horizontal if span_contains(line.x0, line.x1, point.x) => {
                horizontal_covering += 1;
                if line.y0 < point.y {
                    below = Some(below.map_or(line.y0, |y| y.max(line.y0)));
                } else if line.y0 > point.y {
                    above = Some(above.map_or(line.y0, |y| y.min(line.y0)));
                }
            }
            _ => {}
        }
    }

    if vertical_covering < 2 || horizontal_covering < 2 {
        return None;
    }

    Some(CellBoundary::new(left?, below?, right?, above?))
}
