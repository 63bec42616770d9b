//! Minimum-pore-volume (minpv) cell collapsing.
//!
//! Reservoir decks routinely contain cells whose pore volume is too small to
//! matter for flow but whose presence forces tiny timesteps. The minpv pass
//! deactivates such cells and rewrites their corner depths so the mesh stays
//! geometrically consistent: collapsed cells become zero-thickness slabs
//! rather than holes, preserving the row-major cell indexing a topology
//! builder relies on.
//!
//! The crate is organized around these types:
//!
//! - [`MinpvProcessor`] - The in-place collapsing pass over `actnum`/`zcorn`
//! - [`MinpvParams`] / [`MinpvMode`] - Threshold, mode, and corner policy
//! - [`MinpvSummary`] - How many cells a pass deactivated
//!
//! # Example
//!
//! ```
//! use grid_minpv::MinpvProcessor;
//! use grid_types::cartesian_zcorn;
//!
//! // A single column of three unit cells; the middle one is nearly empty.
//! let dims = [1, 1, 3];
//! let mut zcorn = cartesian_zcorn(dims, 1.0);
//! let mut actnum = vec![1, 1, 1];
//! let pore_volumes = [0.2, 1e-9, 0.2];
//!
//! let processor = MinpvProcessor::new(1, 1, 3);
//! let summary = processor.process(&pore_volumes, 1e-6, &mut actnum, true, &mut zcorn);
//!
//! assert_eq!(summary.cells_collapsed, 1);
//! assert_eq!(actnum, vec![1, 0, 1]);
//! ```
//!
//! # Contract
//!
//! The processor is a pure array transform and never fails at runtime; its
//! preconditions (non-negative pore volumes and threshold, matching array
//! lengths) are checked by the caller via [`validate_minpv_inputs`] before
//! invocation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod params;
mod process;
mod result;

pub use error::{validate_minpv_inputs, MinpvError};
pub use params::{MinpvMode, MinpvParams};
pub use process::{verify_column_monotonic, MinpvProcessor};
pub use result::MinpvSummary;
