//! Error types for grid assembly.

use grid_minpv::MinpvError;
use grid_types::DescriptorError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`crate::GridManager`] construction entry points.
///
/// Assembly is deterministic, so none of these are retried internally and
/// no partial mesh is ever produced alongside one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// A structured-grid request with a zero dimension.
    #[error("invalid grid dimensions ({nx}, {ny}, {nz}): each must be >= 1")]
    InvalidDimensions {
        /// Requested cell count in x.
        nx: usize,
        /// Requested cell count in y.
        ny: usize,
        /// Requested cell count in z.
        nz: usize,
    },

    /// The file-based construction path could not read or parse its input.
    #[error("failed to read grid from file {path}")]
    FileReadFailed {
        /// The file that could not be read.
        path: PathBuf,
    },

    /// The topology builder rejected the final arrays.
    #[error("failed to construct grid: {reason}")]
    ConstructionFailed {
        /// What the builder reported, if anything.
        reason: String,
    },

    /// The geometry descriptor violated a length invariant.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// A minpv precondition was violated by the caller.
    #[error("caller contract violated: {0}")]
    ContractViolation(#[from] MinpvError),

    /// A negative vertical-merge tolerance was supplied.
    #[error("negative pinch tolerance {value}")]
    NegativePinchTolerance {
        /// The negative value supplied.
        value: f64,
    },
}
