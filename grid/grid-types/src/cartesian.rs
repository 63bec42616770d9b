//! Regular-grid array generators.
//!
//! Produce `coord`/`zcorn` arrays for an axis-aligned cartesian grid with
//! vertical pillars and flat layers. Useful as fixtures and as the trivial
//! special case of a corner-point description.

/// Pillar coordinates for a regular grid with cell size `[dx, dy, dz]`.
///
/// Pillars are vertical, spanning depth `0` to `nz * dz`.
///
/// # Example
///
/// ```
/// use grid_types::cartesian_coord;
///
/// let coord = cartesian_coord([2, 2, 1], [1.0, 1.0, 1.0]);
/// assert_eq!(coord.len(), 6 * 3 * 3);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)] // grid extents are far below 2^52
pub fn cartesian_coord(dims: [usize; 3], cell_size: [f64; 3]) -> Vec<f64> {
    let [nx, ny, nz] = dims;
    let [dx, dy, dz] = cell_size;
    let bottom = nz as f64 * dz;

    let mut coord = Vec::with_capacity(6 * (nx + 1) * (ny + 1));
    for j in 0..=ny {
        for i in 0..=nx {
            let x = i as f64 * dx;
            let y = j as f64 * dy;
            coord.extend_from_slice(&[x, y, 0.0, x, y, bottom]);
        }
    }
    coord
}

/// Corner depths for a regular grid with flat layers of thickness `dz`.
///
/// Layer `k` spans depths `k * dz` to `(k+1) * dz` at all four corners.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cartesian_zcorn(dims: [usize; 3], dz: f64) -> Vec<f64> {
    let [nx, ny, nz] = dims;
    let plane = 4 * nx * ny;

    let mut zcorn = Vec::with_capacity(8 * nx * ny * nz);
    for slab in 0..2 * nz {
        // Slab 2k holds layer k's top plane, slab 2k+1 its bottom plane.
        let depth = (slab / 2 + slab % 2) as f64 * dz;
        zcorn.extend(std::iter::repeat(depth).take(plane));
    }
    zcorn
}

/// Pore volumes for a regular grid: every cell `dx * dy * dz * porosity`.
///
/// A convenience for building minpv fixtures with a uniform porosity.
#[must_use]
pub fn uniform_pore_volumes(dims: [usize; 3], cell_size: [f64; 3], porosity: f64) -> Vec<f64> {
    let bulk = cell_size[0] * cell_size[1] * cell_size[2];
    vec![bulk * porosity; dims[0] * dims[1] * dims[2]]
}
