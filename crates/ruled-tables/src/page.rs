//! Per-page reconstruction pipeline.

use log::debug;

use crate::assemble::{build_table, Table, DEFAULT_BASELINE_EPSILON};
use crate::classify::assign_chars;
use crate::error::{ReconstructError, Result};
use crate::layout::{collect_chars, collect_rects, LayoutElement};
use crate::lines::derive_lines;
use crate::scan::{scan_empty_cells, DEFAULT_GRID_STEP};

/// Tuning knobs for the per-page pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconstructorConfig {
    /// Spacing of the empty-cell probe grid, in points.
    pub grid_step: f64,
    /// Baseline clustering tolerance for text-lines within a cell, in points.
    pub baseline_epsilon: f64,
}

impl Default for ReconstructorConfig {
    #[inline]
    fn default() -> Self {
        Self {
            grid_step: DEFAULT_GRID_STEP,
            baseline_epsilon: DEFAULT_BASELINE_EPSILON,
        }
    }
}

impl ReconstructorConfig {
    /// Start building a configuration.
    #[inline]
    #[must_use = "returns a new builder"]
    pub fn builder() -> ReconstructorConfigBuilder {
        ReconstructorConfigBuilder::default()
    }
}

/// Builder for [`ReconstructorConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconstructorConfigBuilder {
    grid_step: Option<f64>,
    baseline_epsilon: Option<f64>,
}

impl ReconstructorConfigBuilder {
    /// Create a builder with every knob at its default.
    #[inline]
    #[must_use = "returns a new builder"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the empty-cell probe spacing.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub fn grid_step(mut self, step: f64) -> Self {
        self.grid_step = Some(step);
        self
    }

    /// Set the baseline clustering tolerance.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub fn baseline_epsilon(mut self, epsilon: f64) -> Self {
        self.baseline_epsilon = Some(epsilon);
        self
    }

    /// Validate and produce the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructError::InvalidConfig`] when the grid step is not
    /// a positive finite number or the epsilon is negative or non-finite.
    pub fn build(self) -> Result<ReconstructorConfig> {
        let config = ReconstructorConfig {
            grid_step: self.grid_step.unwrap_or(DEFAULT_GRID_STEP),
            baseline_epsilon: self.baseline_epsilon.unwrap_or(DEFAULT_BASELINE_EPSILON),
        };

        if !config.grid_step.is_finite() || config.grid_step <= 0.0 {
            return Err(ReconstructError::InvalidConfig(format!(
                "grid_step must be positive and finite, got {}",
                config.grid_step
            )));
        }
        if !config.baseline_epsilon.is_finite() || config.baseline_epsilon < 0.0 {
            return Err(ReconstructError::InvalidConfig(format!(
                "baseline_epsilon must be non-negative and finite, got {}",
                config.baseline_epsilon
            )));
        }

        Ok(config)
    }
}

/// Reconstructs one page's table from extractor layout elements.
///
/// The pipeline runs line derivation, vote-based character assignment,
/// empty-cell discovery, and table assembly, in that order. It never fails:
/// unresolvable characters and probes are absorbed, and the result is at
/// worst a sparse or empty table.
///
/// Pages are independent. A reconstructor holds no per-page state, so one
/// instance can serve any number of pages, including from parallel callers
/// handling one page each.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageReconstructor {
    config: ReconstructorConfig,
}

impl PageReconstructor {
    /// Create a reconstructor with default configuration.
    #[inline]
    #[must_use = "returns a new PageReconstructor instance"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reconstructor with custom configuration.
    #[inline]
    #[must_use = "returns a new PageReconstructor with custom config"]
    pub const fn with_config(config: ReconstructorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ReconstructorConfig {
        &self.config
    }

    /// Reconstruct the table for one page.
    #[must_use = "returns the reconstructed table"]
    pub fn reconstruct(&self, elements: &[LayoutElement]) -> Table {
        let chars = collect_chars(elements);
        let rects = collect_rects(elements);
        let lines = derive_lines(&rects);
        debug!(
            "page: {} chars, {} rects, {} ruling lines",
            chars.len(),
            rects.len(),
            lines.len()
        );

        let mut cells = assign_chars(&chars, &lines);
        let populated = cells.len();
        scan_empty_cells(&mut cells, &lines, self.config.grid_step);
        debug!(
            "page: {} populated cells, {} total after grid scan",
            populated,
            cells.len()
        );

        build_table(&cells, self.config.baseline_epsilon)
    }
}
