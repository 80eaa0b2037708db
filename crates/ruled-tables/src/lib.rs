//! # ruled-tables
//!
//! Reconstructs tabular text grids from the raw geometric output of a
//! page-layout extractor: positioned characters plus positioned rectangle
//! shapes. Thin rectangles are treated as ruling lines (table dividers),
//! characters are assigned to the cells those rulings bound, cells with no
//! text are discovered by grid probing, and the result is an ordered 2D
//! table of strings.
//!
//! Opening a document and decoding its pages is the upstream extractor's
//! job; this crate consumes its per-page element trees and nothing else.
//! Tables without ruling lines, merged cells, and rotated text are out of
//! scope.
//!
//! ## Pipeline
//!
//! [`PageReconstructor::reconstruct`] runs four stages per page:
//!
//! 1. [`derive_lines`] filters rectangles into ruling [`LineSegment`]s.
//! 2. [`assign_chars`] resolves each character's three probe points through
//!    [`resolve`] and assigns it to the majority cell.
//! 3. [`scan_empty_cells`] probes a grid over the rulings' hull to register
//!    cells with no text.
//! 4. [`build_table`] orders cells into rows and columns and joins each
//!    cell's text.
//!
//! ## Quick start
//!
//! ```
//! use ruled_tables::{BBox, Char, LayoutElement, PageReconstructor};
//!
//! // Four thin rectangles drawing a 1x1 grid, one character inside it.
//! let elements = vec![
//!     LayoutElement::Rect(BBox::new(100.0, 100.0, 101.0, 200.0)),
//!     LayoutElement::Rect(BBox::new(200.0, 100.0, 201.0, 200.0)),
//!     LayoutElement::Rect(BBox::new(100.0, 100.0, 200.0, 101.0)),
//!     LayoutElement::Rect(BBox::new(100.0, 200.0, 200.0, 201.0)),
//!     LayoutElement::Text(vec![LayoutElement::Char(Char::new(
//!         BBox::new(150.0, 150.0, 160.0, 160.0),
//!         "A",
//!     ))]),
//! ];
//!
//! let table = PageReconstructor::new().reconstruct(&elements);
//! assert_eq!(table.rows, vec![vec!["A".to_string()]]);
//! ```
//!
//! ## Errors and logging
//!
//! The pipeline never fails: characters and probes that resolve to no cell
//! are absorbed silently and the table is at worst sparse or empty. The only
//! fallible call is [`ReconstructorConfigBuilder::build`]. Stage counts are
//! logged through the [`log`] facade at `debug!`/`trace!` level.
//!
//! ## Concurrency
//!
//! Everything is synchronous and single-threaded over per-page data. Pages
//! are independent, so callers may process them in parallel with one
//! [`PageReconstructor::reconstruct`] call each.

pub mod assemble;
pub mod classify;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod lines;
pub mod page;
pub mod resolver;
pub mod scan;

pub use assemble::{build_table, chars_to_string, Table, DEFAULT_BASELINE_EPSILON};
pub use classify::{assign_chars, classify, sample_points, CellMap};
pub use error::{ReconstructError, Result};
pub use geometry::{BBox, Point};
pub use layout::{collect_chars, collect_rects, Char, LayoutElement};
pub use lines::{
    derive_lines, LineSegment, Orientation, MAX_RULING_THICKNESS, MIN_RULING_AREA,
};
pub use page::{PageReconstructor, ReconstructorConfig, ReconstructorConfigBuilder};
pub use resolver::{resolve, CellBoundary};
pub use scan::{scan_empty_cells, DEFAULT_GRID_STEP};
