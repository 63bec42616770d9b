//! The in-place collapsing pass.

use grid_types::{cell_index, zcorn_index};
use tracing::{debug, info};

use crate::result::MinpvSummary;

/// Which of a cell's own horizontal faces a collapsed slab snaps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnapFace {
    Top,
    Bottom,
}

/// The minimum-pore-volume collapsing pass for one grid shape.
///
/// Collapsing a cell means deactivating it and rewriting its 8 corner
/// depths to a zero-thickness slab. The cell stays in the index space, so
/// the implicit row-major indexing a topology builder relies on survives;
/// only its volume disappears.
///
/// Two corner policies exist (see [`crate::MinpvParams::fill_from_above`]);
/// a single [`MinpvProcessor::process`] call applies exactly one of them to
/// every collapsed cell.
#[derive(Debug, Clone, Copy)]
pub struct MinpvProcessor {
    dims: [usize; 3],
}

impl MinpvProcessor {
    /// Create a processor for an `nx` by `ny` by `nz` grid.
    #[inline]
    #[must_use]
    pub const fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { dims: [nx, ny, nz] }
    }

    /// The grid shape this processor operates on.
    #[inline]
    #[must_use]
    pub const fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Collapse every active cell whose pore volume is below `threshold`.
    ///
    /// Mutates `actnum` and `zcorn` in place under the caller's exclusive
    /// borrow. Columns are processed top-down, and after every mutation the
    /// corner depths along each touched column remain non-decreasing in `k`
    /// (checked in debug builds).
    ///
    /// `fill_from_above = true` selects the standard policy: bottom corners
    /// copy the cell's original top corners, so the slab sits flush with
    /// the top of the original span and overlying cells are undisturbed.
    /// `false` selects the alternate policy: the slab snaps to whichever of
    /// the cell's own faces lies closer to an active vertical neighbor.
    ///
    /// Returns the number of cells deactivated. Preconditions (matching
    /// lengths, non-negative values) are the caller's responsibility; see
    /// [`crate::validate_minpv_inputs`].
    pub fn process(
        &self,
        pore_volumes: &[f64],
        threshold: f64,
        actnum: &mut [i32],
        fill_from_above: bool,
        zcorn: &mut [f64],
    ) -> MinpvSummary {
        let [nx, ny, nz] = self.dims;
        let cells = nx * ny * nz;
        debug_assert_eq!(pore_volumes.len(), cells);
        debug_assert_eq!(actnum.len(), cells);
        debug_assert_eq!(zcorn.len(), 8 * cells);

        debug!(threshold, fill_from_above, "starting minpv pass");

        let mut cells_collapsed = 0;
        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    let c = cell_index(self.dims, i, j, k);
                    if actnum[c] == 0 {
                        continue;
                    }
                    if pore_volumes[c] >= threshold {
                        continue;
                    }

                    let cz = self.cell_zcorn(zcorn, i, j, k);
                    let new_cz = if fill_from_above {
                        // Bottom face joins the original top face.
                        [cz[0], cz[1], cz[2], cz[3], cz[0], cz[1], cz[2], cz[3]]
                    } else {
                        match self.nearest_active_face(actnum, zcorn, i, j, k) {
                            SnapFace::Top => {
                                [cz[0], cz[1], cz[2], cz[3], cz[0], cz[1], cz[2], cz[3]]
                            }
                            SnapFace::Bottom => {
                                [cz[4], cz[5], cz[6], cz[7], cz[4], cz[5], cz[6], cz[7]]
                            }
                        }
                    };
                    self.set_cell_zcorn(zcorn, i, j, k, new_cz);

                    actnum[c] = 0;
                    cells_collapsed += 1;

                    debug_assert!(
                        verify_column_monotonic(self.dims, zcorn, i, j),
                        "collapse of cell ({i}, {j}, {k}) inverted its column"
                    );
                }
            }
        }

        if cells_collapsed > 0 {
            info!(cells_collapsed, "minpv pass deactivated thin cells");
        }
        MinpvSummary { cells_collapsed }
    }

    fn cell_zcorn(&self, zcorn: &[f64], i: usize, j: usize, k: usize) -> [f64; 8] {
        let mut cz = [0.0; 8];
        for (corner, z) in cz.iter_mut().enumerate() {
            *z = zcorn[zcorn_index(self.dims, i, j, k, corner)];
        }
        cz
    }

    fn set_cell_zcorn(&self, zcorn: &mut [f64], i: usize, j: usize, k: usize, cz: [f64; 8]) {
        for (corner, z) in cz.iter().enumerate() {
            zcorn[zcorn_index(self.dims, i, j, k, corner)] = *z;
        }
    }

    /// Which face of cell `(i, j, k)` lies closer to an active neighbor in
    /// its column, by midplane depth distance. Cells above have already been
    /// visited, so a collapsed overlying cell no longer counts as active.
    /// Falls to `Bottom` on ties and when the column has no active neighbor.
    fn nearest_active_face(
        &self,
        actnum: &[i32],
        zcorn: &[f64],
        i: usize,
        j: usize,
        k: usize,
    ) -> SnapFace {
        let mid = |cz: [f64; 8]| cz.iter().sum::<f64>() / 8.0;
        let own_mid = mid(self.cell_zcorn(zcorn, i, j, k));

        let above = (0..k)
            .rev()
            .find(|&kk| actnum[cell_index(self.dims, i, j, kk)] != 0)
            .map(|kk| (own_mid - mid(self.cell_zcorn(zcorn, i, j, kk))).abs());
        let below = (k + 1..self.dims[2])
            .find(|&kk| actnum[cell_index(self.dims, i, j, kk)] != 0)
            .map(|kk| (own_mid - mid(self.cell_zcorn(zcorn, i, j, kk))).abs());

        match (above, below) {
            (Some(up), Some(down)) if up < down => SnapFace::Top,
            (Some(_), None) => SnapFace::Top,
            _ => SnapFace::Bottom,
        }
    }
}

/// Check that corner depths are non-decreasing along `k` at all four pillar
/// corners of column `(i, j)`.
///
/// This is the geometric invariant a collapsing pass must preserve: any
/// decrease would mean a self-intersecting or inverted cell.
#[must_use]
pub fn verify_column_monotonic(dims: [usize; 3], zcorn: &[f64], i: usize, j: usize) -> bool {
    for pillar_corner in 0..4 {
        let mut prev = f64::NEG_INFINITY;
        for k in 0..dims[2] {
            let top = zcorn[zcorn_index(dims, i, j, k, pillar_corner)];
            let bottom = zcorn[zcorn_index(dims, i, j, k, pillar_corner + 4)];
            if top < prev || bottom < top {
                return false;
            }
            prev = bottom;
        }
    }
    true
}
