//! Geometric primitives shared across the reconstruction pipeline.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in page coordinates.
///
/// Coordinates are PDF page points with y increasing upward, so `y0` is the
/// bottom edge and `y1` the top edge. Boxes are expected normalized
/// (`x0 <= x1`, `y0 <= y1`), as layout extractors produce them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BBox {
    /// Create a new bounding box.
    #[inline]
    #[must_use = "returns a new BBox instance"]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Horizontal extent.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Vertical extent.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Length of the shorter side.
    #[inline]
    #[must_use]
    pub fn min_side(&self) -> f64 {
        self.width().min(self.height())
    }

    /// Length of the longer side.
    #[inline]
    #[must_use]
    pub fn max_side(&self) -> f64 {
        self.width().max(self.height())
    }

    /// Area of the box.
    #[inline]
    #[must_use = "returns the bounding box area"]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// A point in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use = "returns a new Point instance"]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
