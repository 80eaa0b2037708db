//! Empty-cell discovery by probing a coordinate grid.
//!
//! Cells that contain no text never show up in the vote-based assignment and
//! would silently vanish from the table. Probing a grid of points through
//! the resolver recovers them.

use log::debug;

use crate::classify::CellMap;
use crate::geometry::Point;
use crate::lines::LineSegment;
use crate::resolver::resolve;

/// Default probe spacing, in points.
pub const DEFAULT_GRID_STEP: f64 = 10.0;

/// Register cells that contain no characters.
///
/// Probes points spaced `step` apart across the bounding hull of the ruling
/// lines; every probe that resolves to a cell not yet in `map` adds it with
/// empty content. The hull is exactly the region where resolution can ever
/// succeed, so no assumption about page size or table placement is needed.
/// Probes that resolve nowhere are skipped.
///
/// Cells whose interior is narrower than `step` in either direction can be
/// missed; callers with unusually fine tables should lower the step.
pub fn scan_empty_cells(map: &mut CellMap, lines: &[LineSegment], step: f64) {
    let Some((x_min, y_min, x_max, y_max)) = line_hull(lines) else {
        return;
    };

    let before = map.len();
    let mut probes = 0usize;
    let mut x = x_min;
    while x <= x_max {
        let mut y = y_min;
        while y <= y_max {
            probes += 1;
            if let Some(cell) = resolve(Point::new(x, y), lines) {
                map.entry(cell).or_default();
            }
            y += step;
        }
        x += step;
    }

    debug!(
        "grid scan: {} probes over hull ({:.1},{:.1})-({:.1},{:.1}), {} empty cells registered",
        probes,
        x_min,
        y_min,
        x_max,
        y_max,
        map.len() - before
    );
}

/// Bounding hull of the ruling lines as `(x_min, y_min, x_max, y_max)`.
///
/// Segments are normalized (`x0 <= x1`, `y0 <= y1`), so only the paired
/// extremes need comparing.
fn line_hull(lines: &[LineSegment]) -> Option<(f64, f64, f64, f64)> {
    let first = lines.first()?;
    let mut hull = (first.x0, first.y0, first.x1, first.y1);
    for line in &lines[1..] {
        hull.0 = hull.0.min(line.x0);
        hull.1 = hull.1.min(line.y0);
        hull.2 = hull.2.max(line.x1);
        hull.3 = hull.3.max(line.y1);
    }
    Some(hull)
}
