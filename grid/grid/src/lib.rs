//! Corner-point grid preparation for reservoir simulation.
//!
//! This umbrella crate re-exports the grid-* crates, providing a unified API
//! for turning a corner-point geometry description into a simulation-ready
//! mesh.
//!
//! # Quick Start
//!
//! ```
//! use grid::prelude::*;
//!
//! // Geometry arrays for a 2x2x2 block of unit cells
//! let dims = [2, 2, 2];
//! let descriptor = GridDescriptor::new(
//!     dims,
//!     grid::types::cartesian_coord(dims, [1.0, 1.0, 1.0]),
//!     grid::types::cartesian_zcorn(dims, 1.0),
//!     vec![],
//!     None,
//! )
//! .unwrap();
//!
//! // Collapse cells with less than a thousandth of pore volume
//! let params = MinpvParams::opmfil(1e-3);
//! assert!(params.mode.is_active());
//! assert_eq!(descriptor.cell_count(), 8);
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - `GridDescriptor`, `GrdeclView`, indexing conventions
//! - [`minpv`] - The minimum-pore-volume collapsing pass
//! - [`manager`] - Grid assembly and mesh-handle ownership

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures and indexing: `GridDescriptor`, `GrdeclView`.
pub use grid_types as types;

/// Minimum-pore-volume cell collapsing.
pub use grid_minpv as minpv;

/// Grid assembly and mesh-handle ownership.
pub use grid_manager as manager;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for grid preparation.
///
/// # Usage
///
/// ```
/// use grid::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use grid_types::{GrdeclView, GridDescriptor};

    // Minpv
    pub use grid_minpv::{MinpvMode, MinpvParams, MinpvProcessor, MinpvSummary};

    // Assembly
    pub use grid_manager::{GeometrySource, GridError, GridManager, TopologyBuilder};
}

// =============================================================================
// Tests
// =============================================================================
