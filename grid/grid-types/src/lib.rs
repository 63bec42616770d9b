//! Core types for corner-point reservoir grids.
//!
//! This crate provides the foundational types for grid preparation:
//!
//! - [`GridDescriptor`] - Owned, length-checked corner-point geometry arrays
//! - [`GrdeclView`] - Borrowed read-only view for handing to a geometric kernel
//! - [`zcorn_index`] / [`cell_index`] - The shared indexing conventions
//!
//! # Conventions
//!
//! Cells are addressed by `(i, j, k)` with `0 <= i < nx`, `0 <= j < ny`,
//! `0 <= k < nz`, laid out row-major as `i + nx*(j + ny*k)`. Depth (`z`)
//! increases downward, so within a column the top of a cell has a *smaller*
//! corner depth than its bottom, and `k = 0` is the shallowest layer.
//!
//! Each cell owns 8 entries of the `zcorn` array, one depth per corner.
//! Corner `c` decomposes as `c = dx + 2*dy + 4*dz`: corners `0..=3` lie on
//! the top face, `4..=7` on the bottom face.
//!
//! # Example
//!
//! ```
//! use grid_types::{GridDescriptor, cell_index};
//!
//! // A unit 1x1x1 grid: one vertical cell between four vertical pillars.
//! let coord = grid_types::cartesian_coord([1, 1, 1], [1.0, 1.0, 1.0]);
//! let zcorn = grid_types::cartesian_zcorn([1, 1, 1], 1.0);
//! let descriptor = GridDescriptor::new([1, 1, 1], coord, zcorn, vec![1], None).unwrap();
//!
//! assert_eq!(descriptor.cell_count(), 1);
//! assert_eq!(cell_index(descriptor.dims(), 0, 0, 0), 0);
//! assert!(descriptor.is_active(0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod cartesian;
mod descriptor;
mod error;
mod index;
mod view;

pub use cartesian::{cartesian_coord, cartesian_zcorn, uniform_pore_volumes};
pub use descriptor::GridDescriptor;
pub use error::DescriptorError;
pub use index::{cell_index, pillar_index, zcorn_index};
pub use view::GrdeclView;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
