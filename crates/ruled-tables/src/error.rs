//! Error types for table reconstruction.

use thiserror::Error;

/// Errors surfaced by the reconstruction API.
///
/// Unresolvable query points are conditions, not errors: the classifier
/// drops the character and the grid scanner skips the probe (see
/// [`crate::resolver::resolve`]). The pipeline itself never fails; only
/// configuration validation does.
#[derive(Error, Debug)]
pub enum ReconstructError {
    /// Rejected reconstructor configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Type alias for [`Result<T, ReconstructError>`].
pub type Result<T> = std::result::Result<T, ReconstructError>;
