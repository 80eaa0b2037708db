//! Character-to-cell assignment by majority vote.
//!
//! Each character is probed at three points and the resolved cells vote on
//! where it belongs. The redundancy absorbs characters that overhang a
//! ruling slightly: two agreeing corners outvote a stray one.

use log::trace;
use rustc_hash::FxHashMap;

use crate::geometry::Point;
use crate::layout::Char;
use crate::lines::LineSegment;
use crate::resolver::{resolve, CellBoundary};

/// Accumulated mapping from cell key to the characters assigned to it.
///
/// Built additively: vote-based assignment first, then grid-discovered empty
/// cells. Consumed once by the table assembler.
pub type CellMap = FxHashMap<CellBoundary, Vec<Char>>;

/// The three probe points for a character, in vote order: lower-left corner,
/// floored center, upper-right corner.
#[must_use = "returns the character's probe points"]
pub fn sample_points(c: &Char) -> [Point; 3] {
    let b = &c.bbox;
    [
        Point::new(b.x0, b.y0),
        Point::new(((b.x0 + b.x1) / 2.0).floor(), ((b.y0 + b.y1) / 2.0).floor()),
        Point::new(b.x1, b.y1),
    ]
}

/// Pick the cell for one character, or `None` to drop it.
///
/// Each probe point that resolves casts one vote. When every resolved probe
/// lands in a different cell the floored-center probe decides; otherwise the
/// most-voted cell wins, with equal counts going to the earliest probe in
/// vote order. Characters whose deciding probe resolves nowhere (margin
/// text, footnotes outside the rulings) are dropped, deliberately.
#[must_use = "returns the chosen cell, if any"]
pub fn classify(c: &Char, lines: &[LineSegment]) -> Option<CellBoundary> {
    let resolved = sample_points(c).map(|point| resolve(point, lines));

    // Insertion-ordered tally; first-seen wins on equal counts.
    let mut votes: Vec<(CellBoundary, usize)> = Vec::with_capacity(3);
    for cell in resolved.iter().flatten() {
        match votes.iter_mut().find(|(seen, _)| seen == cell) {
            Some((_, count)) => *count += 1,
            None => votes.push((*cell, 1)),
        }
    }

    let mut best: Option<(CellBoundary, usize)> = None;
    for &(cell, count) in &votes {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((cell, count));
        }
    }

    let (cell, count) = best?;
    if count == 1 {
        // All resolved probes disagree; trust the center.
        return resolved[1];
    }
    Some(cell)
}

/// Build the cell map for a page's characters.
///
/// Characters that classify nowhere are skipped; everything else is appended
/// to its cell in input order.
#[must_use = "returns the populated cell map"]
pub fn assign_chars(chars: &[Char], lines: &[LineSegment]) -> CellMap {
    let mut map = CellMap::default();
    for c in chars {
        if let Some(cell) = classify(c, lines) {
            map.entry(cell).or_default().push(c.clone());
        } else {
            trace!(
                "dropped {:?} at ({:.1},{:.1}): no enclosing cell",
                c.text,
                c.bbox.x0,
                c.bbox.y0
            );
        }
    }
    map
}
