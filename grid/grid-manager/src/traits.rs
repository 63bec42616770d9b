//! Seams to the external collaborators.
//!
//! The topology builder (the geometric kernel that turns corner arrays into
//! a connectivity graph) and the geometry source (whatever produced the
//! corner-point description) are not part of this workspace. They are
//! consumed through these traits so the assembler can be exercised against
//! fakes and wired to a real kernel without changes.

use crate::error::GridError;
use grid_minpv::MinpvParams;
use grid_types::{GrdeclView, GridDescriptor};
use std::path::Path;

/// The external geometric kernel.
///
/// Every method producing a mesh returns `Option`: `None` is the kernel's
/// failure signal, and there is never a partial mesh to clean up. The
/// produced `Mesh` is an opaque handle; the [`crate::GridManager`] that
/// receives it owns it for the rest of its life and releases it exactly
/// once, on drop.
pub trait TopologyBuilder {
    /// Opaque mesh handle produced by the kernel.
    type Mesh;

    /// A 2D cartesian grid with `nx` by `ny` cells of size `dx` by `dy`.
    fn cartesian_2d(&self, nx: usize, ny: usize, dx: f64, dy: f64) -> Option<Self::Mesh>;

    /// A 3D cartesian grid with unit cells.
    fn cartesian_3d(&self, nx: usize, ny: usize, nz: usize) -> Option<Self::Mesh>;

    /// A 3D hexahedral grid with cells of size `dx` by `dy` by `dz`.
    fn hexahedral_3d(
        &self,
        nx: usize,
        ny: usize,
        nz: usize,
        dx: f64,
        dy: f64,
        dz: f64,
    ) -> Option<Self::Mesh>;

    /// A grid read from a kernel-specific file format.
    fn read_from_file(&self, path: &Path) -> Option<Self::Mesh>;

    /// A corner-point grid from validated geometry arrays.
    ///
    /// `z_tolerance` is the vertical gap below which adjacent layers are
    /// merged; `0` disables merging.
    fn cornerpoint(&self, view: &GrdeclView<'_>, z_tolerance: f64) -> Option<Self::Mesh>;

    /// Attach a copy of post-collapse corner depths to a mesh.
    ///
    /// Downstream consumers of a minpv-processed grid need the mutated
    /// corner data distinct from the originally submitted buffer; only the
    /// kernel knows how to hang auxiliary data off its mesh handle.
    fn attach_zcorn_copy(&self, mesh: &mut Self::Mesh, zcorn: &[f64]);
}

/// The external provider of corner-point geometry.
///
/// Mirrors what a parsed reservoir deck exposes: the geometry arrays plus
/// the minpv and pinch settings it carried. Parsing itself is out of scope
/// here.
pub trait GeometrySource {
    /// Produce the owned geometry descriptor for one assembly operation.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] when the source cannot produce arrays that
    /// satisfy the descriptor's length invariants.
    fn descriptor(&self) -> Result<GridDescriptor, GridError>;

    /// The minpv settings requested by the source.
    fn minpv_params(&self) -> MinpvParams;

    /// The vertical-merge tolerance; `0` disables merging.
    fn pinch_tolerance(&self) -> f64;
}
