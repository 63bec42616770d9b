//! Error types for grid descriptor construction.

use thiserror::Error;

/// Errors that can occur while building a [`crate::GridDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// One or more grid dimensions is zero.
    #[error("invalid grid dimensions ({nx}, {ny}, {nz}): each must be >= 1")]
    InvalidDimensions {
        /// Number of cells in the x direction.
        nx: usize,
        /// Number of cells in the y direction.
        ny: usize,
        /// Number of cells in the z direction.
        nz: usize,
    },

    /// The pillar coordinate array has the wrong length.
    #[error("coord length mismatch: expected 6*(nx+1)*(ny+1) = {expected}, got {actual}")]
    CoordLengthMismatch {
        /// Required length, `6*(nx+1)*(ny+1)`.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// The corner depth array has the wrong length.
    #[error("zcorn length mismatch: expected 8*nx*ny*nz = {expected}, got {actual}")]
    ZcornLengthMismatch {
        /// Required length, `8*nx*ny*nz`.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// The active-cell mask is neither empty nor one entry per cell.
    #[error("actnum length mismatch: expected 0 or nx*ny*nz = {expected}, got {actual}")]
    ActnumLengthMismatch {
        /// Required length, `nx*ny*nz`.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}
