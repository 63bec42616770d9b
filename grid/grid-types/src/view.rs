//! Read-only geometry view for geometric kernels.

/// A borrowed, read-only view over corner-point geometry arrays.
///
/// This is what gets handed across the seam to an external topology
/// builder: no copies, no ownership transfer, no way to mutate the
/// descriptor through it. Lives only as long as the borrow of the
/// [`crate::GridDescriptor`] it came from.
#[derive(Debug, Clone, Copy)]
pub struct GrdeclView<'a> {
    /// Grid dimensions `[nx, ny, nz]`.
    pub dims: [usize; 3],

    /// Pillar coordinates, `6 * (nx+1) * (ny+1)` values.
    pub coord: &'a [f64],

    /// Corner depths, `8 * nx * ny * nz` values.
    pub zcorn: &'a [f64],

    /// Active-cell mask; empty means every cell is active.
    pub actnum: &'a [i32],

    /// Optional 6-value map-axes transform; `None` is the identity.
    pub mapaxes: Option<&'a [f64; 6]>,
}

impl GrdeclView<'_> {
    /// Total number of cells, `nx * ny * nz`.
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.dims[0] * self.dims[1] * self.dims[2]
    }

    /// Whether cell `cell` (row-major) is active.
    #[inline]
    #[must_use]
    pub fn is_active(&self, cell: usize) -> bool {
        self.actnum.is_empty() || self.actnum[cell] != 0
    }

    /// Whether any cell is active.
    #[must_use]
    pub fn any_active(&self) -> bool {
        self.actnum.is_empty() || self.actnum.iter().any(|&a| a != 0)
    }
}
