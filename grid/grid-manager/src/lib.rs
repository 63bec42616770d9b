//! Grid assembly orchestration for reservoir simulation setup.
//!
//! The crate is organized around these types:
//!
//! - [`GridManager`] - Assembles a grid and owns the resulting mesh handle
//! - [`TopologyBuilder`] - Seam to the external geometric kernel
//! - [`GeometrySource`] - Seam to the external corner-point geometry provider
//! - [`GridError`] - The construction error taxonomy
//!
//! # Construction paths
//!
//! The manager exposes structured cartesian and hexahedral paths, a file
//! path, and the corner-point path. Only the corner-point path involves the
//! minpv collapsing pass from [`grid_minpv`]; the others are direct
//! delegations to the builder. Every path yields the same mesh-handle
//! ownership: one handle per manager, released once on drop.
//!
//! # Example
//!
//! The topology builder is supplied by the integrating application; here a
//! minimal fake stands in for it.
//!
//! ```
//! use grid_manager::{GridManager, TopologyBuilder};
//! use grid_types::GrdeclView;
//! use std::path::Path;
//!
//! struct CountingKernel;
//!
//! impl TopologyBuilder for CountingKernel {
//!     type Mesh = usize; // "mesh" = number of cells requested
//!
//!     fn cartesian_2d(&self, nx: usize, ny: usize, _dx: f64, _dy: f64) -> Option<usize> {
//!         Some(nx * ny)
//!     }
//!     fn cartesian_3d(&self, nx: usize, ny: usize, nz: usize) -> Option<usize> {
//!         Some(nx * ny * nz)
//!     }
//!     fn hexahedral_3d(
//!         &self, nx: usize, ny: usize, nz: usize, _dx: f64, _dy: f64, _dz: f64,
//!     ) -> Option<usize> {
//!         Some(nx * ny * nz)
//!     }
//!     fn read_from_file(&self, _path: &Path) -> Option<usize> {
//!         None
//!     }
//!     fn cornerpoint(&self, view: &GrdeclView<'_>, _z_tolerance: f64) -> Option<usize> {
//!         Some(view.cell_count())
//!     }
//!     fn attach_zcorn_copy(&self, _mesh: &mut usize, _zcorn: &[f64]) {}
//! }
//!
//! let manager = GridManager::cartesian_3d(CountingKernel, 4, 3, 2).unwrap();
//! assert_eq!(*manager.mesh(), 24);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod manager;
mod traits;

pub use error::GridError;
pub use manager::GridManager;
pub use traits::{GeometrySource, TopologyBuilder};

// Re-export what callers of the assembly API need from the lower crates
pub use grid_minpv::{MinpvMode, MinpvParams, MinpvSummary};
pub use grid_types::{GrdeclView, GridDescriptor};
