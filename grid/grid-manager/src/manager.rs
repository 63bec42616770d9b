//! The grid assembler.

use crate::error::GridError;
use crate::traits::{GeometrySource, TopologyBuilder};
use grid_minpv::{validate_minpv_inputs, MinpvParams, MinpvProcessor, MinpvSummary};
use grid_types::GridDescriptor;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Owner of one assembled mesh handle.
///
/// A `GridManager` is constructed through exactly one of its entry points
/// (structured cartesian, hexahedral, corner-point, or file) and owns the
/// resulting mesh for its whole life. Whatever path produced the handle,
/// drop releases it exactly once; on a failed construction no handle is
/// allocated, so there is nothing to release.
///
/// The corner-point path ([`GridManager::assemble`]) is the interesting
/// one: it validates the minpv preconditions, runs the collapsing pass in
/// place when requested, and forwards the final arrays to the topology
/// builder.
pub struct GridManager<B: TopologyBuilder> {
    builder: B,
    mesh: B::Mesh,
}

// Manual impl: the mesh handle is opaque and the builder is a
// caller-supplied kernel, so neither can be required to be Debug.
impl<B: TopologyBuilder> fmt::Debug for GridManager<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridManager").finish_non_exhaustive()
    }
}

impl<B: TopologyBuilder> GridManager<B> {
    /// A 2D cartesian grid with unit cells.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidDimensions`] if `nx` or `ny` is zero;
    /// [`GridError::ConstructionFailed`] if the builder rejects the request.
    pub fn cartesian_2d(builder: B, nx: usize, ny: usize) -> Result<Self, GridError> {
        Self::cartesian_2d_sized(builder, nx, ny, 1.0, 1.0)
    }

    /// A 2D cartesian grid with cells of size `dx` by `dy`.
    ///
    /// # Errors
    ///
    /// Same as [`GridManager::cartesian_2d`].
    pub fn cartesian_2d_sized(
        builder: B,
        nx: usize,
        ny: usize,
        dx: f64,
        dy: f64,
    ) -> Result<Self, GridError> {
        check_dims(nx, ny, 1)?;
        let mesh = builder
            .cartesian_2d(nx, ny, dx, dy)
            .ok_or_else(|| construction_failed("2d cartesian"))?;
        Ok(Self { builder, mesh })
    }

    /// A 3D cartesian grid with unit cells.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidDimensions`] if any dimension is zero;
    /// [`GridError::ConstructionFailed`] if the builder rejects the request.
    pub fn cartesian_3d(builder: B, nx: usize, ny: usize, nz: usize) -> Result<Self, GridError> {
        check_dims(nx, ny, nz)?;
        let mesh = builder
            .cartesian_3d(nx, ny, nz)
            .ok_or_else(|| construction_failed("3d cartesian"))?;
        Ok(Self { builder, mesh })
    }

    /// A 3D hexahedral grid with cells of size `dx` by `dy` by `dz`.
    ///
    /// # Errors
    ///
    /// Same as [`GridManager::cartesian_3d`].
    pub fn hexahedral_3d(
        builder: B,
        nx: usize,
        ny: usize,
        nz: usize,
        dx: f64,
        dy: f64,
        dz: f64,
    ) -> Result<Self, GridError> {
        check_dims(nx, ny, nz)?;
        let mesh = builder
            .hexahedral_3d(nx, ny, nz, dx, dy, dz)
            .ok_or_else(|| construction_failed("3d hexahedral"))?;
        Ok(Self { builder, mesh })
    }

    /// A grid read from a builder-specific file.
    ///
    /// # Errors
    ///
    /// [`GridError::FileReadFailed`] when the builder cannot read the file.
    pub fn from_file(builder: B, path: impl AsRef<Path>) -> Result<Self, GridError> {
        let path = path.as_ref();
        let mesh = builder
            .read_from_file(path)
            .ok_or_else(|| GridError::FileReadFailed {
                path: path.to_path_buf(),
            })?;
        Ok(Self { builder, mesh })
    }

    /// A corner-point grid from an external geometry source.
    ///
    /// Pulls the descriptor and settings from the source, then delegates to
    /// [`GridManager::assemble`]. Pass an empty `pore_volumes` slice to
    /// skip minpv processing regardless of the source's mode.
    ///
    /// # Errors
    ///
    /// Anything the source or [`GridManager::assemble`] reports.
    pub fn from_geometry<S: GeometrySource>(
        builder: B,
        source: &S,
        pore_volumes: &[f64],
    ) -> Result<Self, GridError> {
        let descriptor = source.descriptor()?;
        Self::assemble(
            builder,
            descriptor,
            pore_volumes,
            source.minpv_params(),
            source.pinch_tolerance(),
        )
    }

    /// Assemble a corner-point grid, running minpv collapsing when asked.
    ///
    /// The collapsing pass runs only when `pore_volumes` is non-empty and
    /// `minpv.mode` is active. It mutates the descriptor's `actnum`/`zcorn`
    /// in place under this function's exclusive ownership of the
    /// descriptor; the topology builder then consumes a read-only view of
    /// the final arrays. If at least one cell was collapsed, a copy of the
    /// mutated corner depths is attached to the produced mesh for
    /// downstream consumers.
    ///
    /// # Errors
    ///
    /// [`GridError::ContractViolation`] for negative pore volumes, a
    /// negative threshold, or a pore-volume length mismatch;
    /// [`GridError::NegativePinchTolerance`] for a negative merge
    /// tolerance; [`GridError::ConstructionFailed`] when the builder
    /// rejects the final arrays.
    pub fn assemble(
        builder: B,
        mut descriptor: GridDescriptor,
        pore_volumes: &[f64],
        minpv: MinpvParams,
        pinch_tolerance: f64,
    ) -> Result<Self, GridError> {
        validate_minpv_inputs(pore_volumes, minpv.threshold, descriptor.cell_count())?;
        if pinch_tolerance < 0.0 {
            return Err(GridError::NegativePinchTolerance {
                value: pinch_tolerance,
            });
        }

        let mut summary = MinpvSummary::default();
        if !pore_volumes.is_empty() && minpv.mode.is_active() {
            let [nx, ny, nz] = descriptor.dims();
            descriptor.ensure_actnum();
            let processor = MinpvProcessor::new(nx, ny, nz);
            let (actnum, zcorn) = descriptor.minpv_buffers_mut();
            summary = processor.process(
                pore_volumes,
                minpv.threshold,
                actnum,
                minpv.fill_from_above,
                zcorn,
            );
        } else {
            debug!("minpv processing skipped");
        }

        let mut mesh = builder
            .cornerpoint(&descriptor.view(), pinch_tolerance)
            .ok_or_else(|| construction_failed("corner-point"))?;

        if !summary.is_noop() {
            builder.attach_zcorn_copy(&mut mesh, descriptor.zcorn());
        }

        info!(
            cells = descriptor.cell_count(),
            active = descriptor.active_cell_count(),
            cells_collapsed = summary.cells_collapsed,
            "assembled corner-point grid"
        );
        Ok(Self { builder, mesh })
    }

    /// The owned mesh handle.
    ///
    /// Read-only from the caller's perspective; the manager remains the
    /// sole owner for deallocation purposes.
    #[inline]
    pub const fn mesh(&self) -> &B::Mesh {
        &self.mesh
    }

    /// The topology builder this manager was constructed with.
    #[inline]
    pub const fn builder(&self) -> &B {
        &self.builder
    }
}

fn check_dims(nx: usize, ny: usize, nz: usize) -> Result<(), GridError> {
    if nx < 1 || ny < 1 || nz < 1 {
        return Err(GridError::InvalidDimensions { nx, ny, nz });
    }
    Ok(())
}

fn construction_failed(path: &str) -> GridError {
    GridError::ConstructionFailed {
        reason: format!("topology builder rejected the {path} request"),
    }
}
