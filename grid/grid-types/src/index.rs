//! Indexing conventions shared by every grid crate.
//!
//! All arrays are row-major over `(i, j, k)` with `i` fastest. The `zcorn`
//! array interleaves the two corner planes of neighboring cells, so a cell's
//! corners are *not* contiguous; use [`zcorn_index`] rather than arithmetic
//! at call sites.

/// Row-major cell index: `i + nx*(j + ny*k)`.
///
/// # Example
///
/// ```
/// use grid_types::cell_index;
///
/// let dims = [4, 3, 2];
/// assert_eq!(cell_index(dims, 0, 0, 0), 0);
/// assert_eq!(cell_index(dims, 3, 2, 1), 4 * 3 * 2 - 1);
/// ```
#[inline]
#[must_use]
pub fn cell_index(dims: [usize; 3], i: usize, j: usize, k: usize) -> usize {
    debug_assert!(i < dims[0] && j < dims[1] && k < dims[2]);
    i + dims[0] * (j + dims[1] * k)
}

/// Index of the first of the 6 coord values for pillar `(i, j)`.
///
/// Pillars live on the `(nx+1) x (ny+1)` lattice of cell corners seen from
/// above; each contributes two 3D endpoints (top then bottom).
#[inline]
#[must_use]
pub fn pillar_index(dims: [usize; 3], i: usize, j: usize) -> usize {
    debug_assert!(i <= dims[0] && j <= dims[1]);
    6 * (i + (dims[0] + 1) * j)
}

/// Flat `zcorn` index for corner `corner` of cell `(i, j, k)`.
///
/// Corner `corner` decomposes as `dx + 2*dy + 4*dz` with each component 0
/// or 1; `dz = 0` selects the top face. The flat layout doubles each
/// dimension: `(2i+dx) + 2nx*(2j+dy) + 4*nx*ny*(2k+dz)`.
///
/// # Example
///
/// ```
/// use grid_types::zcorn_index;
///
/// let dims = [2, 1, 1];
/// // Top-northwest corner of the first cell is the first entry.
/// assert_eq!(zcorn_index(dims, 0, 0, 0, 0), 0);
/// // Its top-northeast corner neighbors the second cell's top-northwest.
/// assert_eq!(zcorn_index(dims, 0, 0, 0, 1) + 1, zcorn_index(dims, 1, 0, 0, 0));
/// ```
#[inline]
#[must_use]
pub fn zcorn_index(dims: [usize; 3], i: usize, j: usize, k: usize, corner: usize) -> usize {
    debug_assert!(i < dims[0] && j < dims[1] && k < dims[2] && corner < 8);
    let dx = corner & 1;
    let dy = (corner >> 1) & 1;
    let dz = (corner >> 2) & 1;
    (2 * i + dx) + 2 * dims[0] * ((2 * j + dy) + 2 * dims[1] * (2 * k + dz))
}
