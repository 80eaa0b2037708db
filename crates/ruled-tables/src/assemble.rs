//! Ordering discovered cells into the final table.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::classify::CellMap;
use crate::layout::Char;
use crate::resolver::CellBoundary;

/// Default tolerance for grouping character baselines into text-lines, in
/// points. Absorbs extractor floating-point noise without merging genuinely
/// distinct lines, which sit at least a font-height apart.
pub const DEFAULT_BASELINE_EPSILON: f64 = 0.5;

/// A reconstructed table: rows top-to-bottom, columns left-to-right.
///
/// Directly serializable; a row of strings maps straight onto a CSV or TSV
/// record, which is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Order the completed cell map into a table.
///
/// Rows are the distinct bottom-y values of the cell keys, topmost first
/// (page y grows upward); cells within a row are ordered by left edge. Row
/// keys come from shared ruling coordinates, so exact equality is the right
/// grouping for them; only character baselines inside a cell need the
/// epsilon treatment.
#[must_use = "returns the assembled table"]
pub fn build_table(map: &CellMap, baseline_epsilon: f64) -> Table {
    let mut bottoms: Vec<f64> = map.keys().map(CellBoundary::bottom).collect();
    bottoms.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    bottoms.dedup();

    let mut rows = Vec::with_capacity(bottoms.len());
    for bottom in bottoms {
        let mut row_cells: Vec<&CellBoundary> =
            map.keys().filter(|cell| cell.bottom() == bottom).collect();
        row_cells.sort_by(|a, b| {
            a.left()
                .partial_cmp(&b.left())
                .unwrap_or(Ordering::Equal)
        });
        rows.push(
            row_cells
                .into_iter()
                .map(|cell| chars_to_string(&map[cell], baseline_epsilon))
                .collect(),
        );
    }

    Table { rows }
}

/// Join one cell's characters into its text.
///
/// Characters are grouped into text-lines by baseline, clustering baselines
/// closer than `epsilon` so extractor float noise cannot split a line.
/// Lines run top-first; within a line characters run left to right; nothing
/// is inserted between lines.
#[must_use = "returns the joined cell text"]
pub fn chars_to_string(chars: &[Char], epsilon: f64) -> String {
    let mut ordered: Vec<&Char> = chars.iter().collect();
    if ordered.is_empty() {
        return String::new();
    }
    ordered.sort_by(|a, b| {
        b.baseline()
            .partial_cmp(&a.baseline())
            .unwrap_or(Ordering::Equal)
    });

    // Baselines are sorted descending; a drop beyond epsilon from the
    // cluster's anchor starts the next text-line.
    let mut text = String::new();
    let mut line: Vec<&Char> = Vec::new();
    let mut anchor = ordered[0].baseline();
    for c in ordered {
        if anchor - c.baseline() > epsilon {
            flush_line(&mut text, &mut line);
            anchor = c.baseline();
        }
        line.push(c);
    }
    flush_line(&mut text, &mut line);
    text
}

fn flush_line(text: &mut String, line: &mut Vec<&Char>) {
    line.sort_by(|a, b| {
        a.bbox
            .x0
            .partial_cmp(&b.bbox.x0)
            .unwrap_or(Ordering::Equal)
    });
    for c in line.drain(..) {
        text.push_str(&c.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BBox;

    fn ch(x: f64, y: f64, text: &str) -> Char {
        Char::new(BBox::new(x, y, x + 5.0, y + 10.0), text)
    }

    #[test]
    fn test_empty_cell_yields_empty_string() {
        assert_eq!(chars_to_string(&[], DEFAULT_BASELINE_EPSILON), "");
    }

    #[test]
    fn test_single_line_orders_left_to_right() {
        let chars = vec![ch(20.0, 100.0, "c"), ch(0.0, 100.0, "a"), ch(10.0, 100.0, "b")];
        assert_eq!(chars_to_string(&chars, DEFAULT_BASELINE_EPSILON), "abc");
    }

    #[test]
    fn test_lines_order_top_first_without_separator() {
        let chars = vec![
            ch(0.0, 100.0, "lo"),
            ch(0.0, 120.0, "hi"),
        ];
        assert_eq!(chars_to_string(&chars, DEFAULT_BASELINE_EPSILON), "hilo");
    }

    #[test]
    fn test_noisy_baselines_cluster_into_one_line() {
        // Extractor jitter of a few hundredths of a point must not split
        // the line.
        let chars = vec![
            ch(10.0, 100.02, "b"),
            ch(0.0, 100.0, "a"),
            ch(20.0, 99.98, "c"),
        ];
        assert_eq!(chars_to_string(&chars, DEFAULT_BASELINE_EPSILON), "abc");
    }

    #[test]
    fn test_zero_epsilon_reproduces_exact_grouping() {
        let chars = vec![ch(10.0, 100.02, "b"), ch(0.0, 100.0, "a")];
        assert_eq!(chars_to_string(&chars, 0.0), "ba");
    }

    #[test]
    fn test_build_table_orders_rows_and_columns() {
        let mut map = CellMap::default();
        // 2x2 grid of cells with ruling coordinates 0, 100, 200.
        map.insert(CellBoundary::new(0.0, 100.0, 100.0, 200.0), vec![ch(10.0, 150.0, "a")]);
        map.insert(CellBoundary::new(100.0, 100.0, 200.0, 200.0), vec![ch(110.0, 150.0, "b")]);
        map.insert(CellBoundary::new(0.0, 0.0, 100.0, 100.0), vec![ch(10.0, 50.0, "c")]);
        map.insert(CellBoundary::new(100.0, 0.0, 200.0, 100.0), Vec::new());

        let table = build_table(&map, DEFAULT_BASELINE_EPSILON);
        assert_eq!(
            table.rows,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), String::new()],
            ]
        );
    }

    #[test]
    fn test_row_count_matches_distinct_bottoms() {
        let mut map = CellMap::default();
        map.insert(CellBoundary::new(0.0, 0.0, 50.0, 50.0), Vec::new());
        map.insert(CellBoundary::new(50.0, 0.0, 100.0, 50.0), Vec::new());
        map.insert(CellBoundary::new(0.0, 50.0, 50.0, 100.0), Vec::new());

        let table = build_table(&map, DEFAULT_BASELINE_EPSILON);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(table.rows[1].len(), 2);
    }
}
