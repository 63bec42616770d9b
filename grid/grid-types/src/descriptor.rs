//! Owned corner-point geometry container.

use crate::error::DescriptorError;
use crate::index::{cell_index, pillar_index, zcorn_index};
use crate::view::GrdeclView;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An owned, length-checked corner-point geometry description.
///
/// This is the bounds-checked replacement for the C-style struct-of-pointers
/// a geometric kernel consumes. Arrays are validated once at construction;
/// every later access can rely on the length invariants:
///
/// - `coord.len() == 6 * (nx+1) * (ny+1)`
/// - `zcorn.len() == 8 * nx * ny * nz`
/// - `actnum.len() == 0` (all cells active) or `nx * ny * nz`
///
/// The descriptor is the single owner of its buffers for the duration of one
/// assembly operation. A minpv pass borrows `actnum`/`zcorn` mutably through
/// [`GridDescriptor::minpv_buffers_mut`]; the kernel gets a read-only
/// [`GrdeclView`] through [`GridDescriptor::view`].
///
/// # Example
///
/// ```
/// use grid_types::{GridDescriptor, cartesian_coord, cartesian_zcorn};
///
/// let dims = [2, 2, 1];
/// let coord = cartesian_coord(dims, [100.0, 100.0, 10.0]);
/// let zcorn = cartesian_zcorn(dims, 10.0);
/// let descriptor = GridDescriptor::new(dims, coord, zcorn, vec![], None).unwrap();
///
/// assert_eq!(descriptor.cell_count(), 4);
/// assert_eq!(descriptor.active_cell_count(), 4); // empty actnum = all active
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridDescriptor {
    dims: [usize; 3],
    coord: Vec<f64>,
    zcorn: Vec<f64>,
    actnum: Vec<i32>,
    mapaxes: Option<[f64; 6]>,
}

impl GridDescriptor {
    /// Build a descriptor, validating every length invariant.
    ///
    /// An empty `actnum` means all cells are active. `mapaxes` of `None`
    /// means the identity map transform.
    ///
    /// # Errors
    ///
    /// Returns a [`DescriptorError`] if any dimension is zero or any array
    /// length disagrees with the dimensions.
    pub fn new(
        dims: [usize; 3],
        coord: Vec<f64>,
        zcorn: Vec<f64>,
        actnum: Vec<i32>,
        mapaxes: Option<[f64; 6]>,
    ) -> Result<Self, DescriptorError> {
        let [nx, ny, nz] = dims;
        if nx < 1 || ny < 1 || nz < 1 {
            return Err(DescriptorError::InvalidDimensions { nx, ny, nz });
        }

        let expected_coord = 6 * (nx + 1) * (ny + 1);
        if coord.len() != expected_coord {
            return Err(DescriptorError::CoordLengthMismatch {
                expected: expected_coord,
                actual: coord.len(),
            });
        }

        let cells = nx * ny * nz;
        if zcorn.len() != 8 * cells {
            return Err(DescriptorError::ZcornLengthMismatch {
                expected: 8 * cells,
                actual: zcorn.len(),
            });
        }

        if !actnum.is_empty() && actnum.len() != cells {
            return Err(DescriptorError::ActnumLengthMismatch {
                expected: cells,
                actual: actnum.len(),
            });
        }

        Ok(Self {
            dims,
            coord,
            zcorn,
            actnum,
            mapaxes,
        })
    }

    /// Grid dimensions `[nx, ny, nz]`.
    #[inline]
    #[must_use]
    pub const fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Total number of cells, `nx * ny * nz`.
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.dims[0] * self.dims[1] * self.dims[2]
    }

    /// Number of pillars, `(nx+1) * (ny+1)`.
    #[inline]
    #[must_use]
    pub const fn pillar_count(&self) -> usize {
        (self.dims[0] + 1) * (self.dims[1] + 1)
    }

    /// Row-major index of cell `(i, j, k)`.
    #[inline]
    #[must_use]
    pub fn cell_index(&self, i: usize, j: usize, k: usize) -> usize {
        cell_index(self.dims, i, j, k)
    }

    /// Pillar coordinate array, `6 * (nx+1) * (ny+1)` values.
    #[inline]
    #[must_use]
    pub fn coord(&self) -> &[f64] {
        &self.coord
    }

    /// Corner depth array, `8 * nx * ny * nz` values.
    #[inline]
    #[must_use]
    pub fn zcorn(&self) -> &[f64] {
        &self.zcorn
    }

    /// Active-cell mask; empty means every cell is active.
    #[inline]
    #[must_use]
    pub fn actnum(&self) -> &[i32] {
        &self.actnum
    }

    /// The optional 6-value map-axes transform.
    #[inline]
    #[must_use]
    pub const fn mapaxes(&self) -> Option<[f64; 6]> {
        self.mapaxes
    }

    /// Whether cell `cell` (row-major) is active.
    #[inline]
    #[must_use]
    pub fn is_active(&self, cell: usize) -> bool {
        self.actnum.is_empty() || self.actnum[cell] != 0
    }

    /// Number of active cells.
    #[must_use]
    pub fn active_cell_count(&self) -> usize {
        if self.actnum.is_empty() {
            self.cell_count()
        } else {
            self.actnum.iter().filter(|&&a| a != 0).count()
        }
    }

    /// The two endpoints (top, bottom) of pillar `(i, j)`.
    ///
    /// Pillars are indexed on the `(nx+1) x (ny+1)` corner lattice.
    #[must_use]
    pub fn pillar(&self, i: usize, j: usize) -> (Point3<f64>, Point3<f64>) {
        let base = pillar_index(self.dims, i, j);
        let p = &self.coord[base..base + 6];
        (
            Point3::new(p[0], p[1], p[2]),
            Point3::new(p[3], p[4], p[5]),
        )
    }

    /// The 8 corner depths of cell `(i, j, k)` in corner order.
    #[must_use]
    pub fn cell_zcorn(&self, i: usize, j: usize, k: usize) -> [f64; 8] {
        let mut cz = [0.0; 8];
        for (corner, z) in cz.iter_mut().enumerate() {
            *z = self.zcorn[zcorn_index(self.dims, i, j, k, corner)];
        }
        cz
    }

    /// Materialize an explicit all-active mask when `actnum` is empty.
    ///
    /// A minpv pass needs per-cell flags it can flip, so the implicit
    /// all-active form must be expanded before processing.
    pub fn ensure_actnum(&mut self) {
        if self.actnum.is_empty() {
            self.actnum = vec![1; self.cell_count()];
        }
    }

    /// Mutable access to the buffers a minpv pass rewrites in place.
    ///
    /// Returns `(actnum, zcorn)`. Slices cannot be resized, so the length
    /// invariants survive any mutation through this borrow.
    pub fn minpv_buffers_mut(&mut self) -> (&mut [i32], &mut [f64]) {
        (&mut self.actnum, &mut self.zcorn)
    }

    /// A read-only borrowed view for handing to a geometric kernel.
    #[must_use]
    pub fn view(&self) -> GrdeclView<'_> {
        GrdeclView {
            dims: self.dims,
            coord: &self.coord,
            zcorn: &self.zcorn,
            actnum: &self.actnum,
            mapaxes: self.mapaxes.as_ref(),
        }
    }
}
