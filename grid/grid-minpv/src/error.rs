//! Contract checks for minpv inputs.
//!
//! [`MinpvProcessor::process`](crate::MinpvProcessor::process) itself never
//! fails; the assembler is responsible for rejecting malformed inputs before
//! the pass runs. These checks make that responsibility explicit.

use thiserror::Error;

/// Caller contract violations detected before a minpv pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MinpvError {
    /// A pore volume is negative, which has no physical meaning.
    #[error("negative pore volume {value} for cell {cell}")]
    NegativePoreVolume {
        /// Row-major index of the offending cell.
        cell: usize,
        /// The negative value supplied.
        value: f64,
    },

    /// The minpv threshold is negative.
    #[error("negative minpv threshold {value}")]
    NegativeThreshold {
        /// The negative value supplied.
        value: f64,
    },

    /// The pore volume vector is neither empty nor one entry per cell.
    #[error("pore volume length mismatch: expected {expected}, got {actual}")]
    PoreVolumeLengthMismatch {
        /// Number of cells in the grid.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

/// Validate minpv inputs against the processor's preconditions.
///
/// An empty `pore_volumes` is valid (it means "skip minpv processing
/// entirely") and passes unconditionally.
///
/// # Errors
///
/// Returns the first [`MinpvError`] found: a length mismatch, a negative
/// threshold, or a negative pore volume.
pub fn validate_minpv_inputs(
    pore_volumes: &[f64],
    threshold: f64,
    cell_count: usize,
) -> Result<(), MinpvError> {
    if pore_volumes.is_empty() {
        return Ok(());
    }
    if pore_volumes.len() != cell_count {
        return Err(MinpvError::PoreVolumeLengthMismatch {
            expected: cell_count,
            actual: pore_volumes.len(),
        });
    }
    if threshold < 0.0 {
        return Err(MinpvError::NegativeThreshold { value: threshold });
    }
    if let Some((cell, &value)) = pore_volumes
        .iter()
        .enumerate()
        .find(|&(_, &pv)| pv < 0.0)
    {
        return Err(MinpvError::NegativePoreVolume { cell, value });
    }
    Ok(())
}
