//! Property-based tests for the resolver and classifier invariants.

use proptest::prelude::*;
use ruled_tables::{classify, resolve, BBox, Char, LineSegment, Orientation, Point};

fn vline(x: f64, y0: f64, y1: f64) -> LineSegment {
    LineSegment {
        x0: x,
        y0,
        x1: x,
        y1,
        orientation: Orientation::Vertical,
    }
}

fn hline(y: f64, x0: f64, x1: f64) -> LineSegment {
    LineSegment {
        x0,
        y0: y,
        x1,
        y1: y,
        orientation: Orientation::Horizontal,
    }
}

fn arb_line() -> impl Strategy<Value = LineSegment> {
    prop_oneof![
        (0.0..300.0f64, 0.0..150.0f64, 50.0..150.0f64)
            .prop_map(|(x, y0, len)| vline(x, y0, y0 + len)),
        (0.0..150.0f64, 50.0..150.0f64, 0.0..300.0f64)
            .prop_map(|(x0, len, y)| hline(y, x0, x0 + len)),
    ]
}

fn arb_lines(max: usize) -> impl Strategy<Value = Vec<LineSegment>> {
    prop::collection::vec(arb_line(), 0..max)
}

proptest! {
    /// Every wall of a resolved cell is the relevant coordinate of one of
    /// the input rulings.
    #[test]
    fn resolved_walls_come_from_input_lines(
        lines in arb_lines(16),
        x in 0.0..300.0f64,
        y in 0.0..300.0f64,
    ) {
        if let Some(cell) = resolve(Point::new(x, y), &lines) {
            let has_vertical_at = |wall: f64| {
                lines
                    .iter()
                    .any(|l| l.orientation == Orientation::Vertical && l.x0 == wall)
            };
            let has_horizontal_at = |wall: f64| {
                lines
                    .iter()
                    .any(|l| l.orientation == Orientation::Horizontal && l.y0 == wall)
            };
            prop_assert!(has_vertical_at(cell.x0.0));
            prop_assert!(has_vertical_at(cell.x1.0));
            prop_assert!(has_horizontal_at(cell.y0.0));
            prop_assert!(has_horizontal_at(cell.y1.0));
            // Walls bracket the query point.
            prop_assert!(cell.x0.0 < x && x < cell.x1.0);
            prop_assert!(cell.y0.0 < y && y < cell.y1.0);
        }
    }

    /// Adding rulings never makes a resolvable point unresolvable, and can
    /// only shrink the resolved cell.
    #[test]
    fn resolve_is_monotonic_in_line_density(
        base in arb_lines(12),
        extra in arb_lines(8),
        x in 0.0..300.0f64,
        y in 0.0..300.0f64,
    ) {
        let point = Point::new(x, y);
        if let Some(sparse) = resolve(point, &base) {
            let mut superset = base.clone();
            superset.extend(extra.iter().copied());

            let dense = resolve(point, &superset);
            prop_assert!(dense.is_some());
            prop_assert!(dense.unwrap().area() <= sparse.area());
        }
    }

    /// Classification of an unchanged character against an unchanged line
    /// set is stable.
    #[test]
    fn classification_is_idempotent(
        lines in arb_lines(16),
        x0 in 0.0..280.0f64,
        y0 in 0.0..280.0f64,
        w in 0.5..20.0f64,
        h in 0.5..20.0f64,
    ) {
        let c = Char::new(BBox::new(x0, y0, x0 + w, y0 + h), "x");
        prop_assert_eq!(classify(&c, &lines), classify(&c, &lines));
    }
}
