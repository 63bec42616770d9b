//! API Regression Tests for the Grid Crate Ecosystem
//!
//! These tests serve as a regression suite to ensure the public API remains
//! stable and consistent across the grid crates. They are organized in 3
//! tiers of increasing complexity:
//!
//! - Tier 1: Foundation (grid-types, indexing, descriptor validation)
//! - Tier 2: Minpv (the collapsing pass and its invariants)
//! - Tier 3: Assembly (end-to-end corner-point construction)
//!
//! If any of these tests fail after API changes, it indicates a breaking
//! change that needs documentation in CHANGELOG.md and a version bump.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use grid::prelude::*;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// What the fake kernel observed for one corner-point build.
#[derive(Debug, Clone, Default)]
struct SeenArrays {
    zcorn: Vec<f64>,
    actnum: Vec<i32>,
    z_tolerance: f64,
}

/// A fake topology builder that records the arrays handed across the seam.
#[derive(Default)]
struct RecordingKernel {
    seen: Rc<RefCell<SeenArrays>>,
}

#[derive(Debug, Default)]
struct RecordedMesh {
    cells: usize,
    attached_zcorn: Option<Vec<f64>>,
}

impl TopologyBuilder for RecordingKernel {
    type Mesh = RecordedMesh;

    fn cartesian_2d(&self, nx: usize, ny: usize, _dx: f64, _dy: f64) -> Option<RecordedMesh> {
        Some(RecordedMesh {
            cells: nx * ny,
            attached_zcorn: None,
        })
    }

    fn cartesian_3d(&self, nx: usize, ny: usize, nz: usize) -> Option<RecordedMesh> {
        Some(RecordedMesh {
            cells: nx * ny * nz,
            attached_zcorn: None,
        })
    }

    fn hexahedral_3d(
        &self,
        nx: usize,
        ny: usize,
        nz: usize,
        _dx: f64,
        _dy: f64,
        _dz: f64,
    ) -> Option<RecordedMesh> {
        Some(RecordedMesh {
            cells: nx * ny * nz,
            attached_zcorn: None,
        })
    }

    fn read_from_file(&self, _path: &Path) -> Option<RecordedMesh> {
        None
    }

    fn cornerpoint(&self, view: &GrdeclView<'_>, z_tolerance: f64) -> Option<RecordedMesh> {
        *self.seen.borrow_mut() = SeenArrays {
            zcorn: view.zcorn.to_vec(),
            actnum: view.actnum.to_vec(),
            z_tolerance,
        };
        Some(RecordedMesh {
            cells: view.cell_count(),
            attached_zcorn: None,
        })
    }

    fn attach_zcorn_copy(&self, mesh: &mut RecordedMesh, zcorn: &[f64]) {
        mesh.attached_zcorn = Some(zcorn.to_vec());
    }
}

fn unit_descriptor(dims: [usize; 3]) -> GridDescriptor {
    GridDescriptor::new(
        dims,
        grid::types::cartesian_coord(dims, [1.0, 1.0, 1.0]),
        grid::types::cartesian_zcorn(dims, 1.0),
        vec![1; dims[0] * dims[1] * dims[2]],
        None,
    )
    .unwrap()
}

// =============================================================================
// TIER 1: Foundation - Types, Indexing, Validation
// =============================================================================

mod tier1_foundation {
    use super::*;
    use grid::types::{cell_index, zcorn_index, DescriptorError};

    #[test]
    fn descriptor_construction_and_access() {
        let descriptor = unit_descriptor([3, 2, 2]);
        assert_eq!(descriptor.dims(), [3, 2, 2]);
        assert_eq!(descriptor.cell_count(), 12);
        assert_eq!(descriptor.pillar_count(), 12);
        assert_eq!(descriptor.coord().len(), 6 * 12);
        assert_eq!(descriptor.zcorn().len(), 8 * 12);
        assert!(descriptor.mapaxes().is_none());
    }

    #[test]
    fn row_major_indexing_convention() {
        let dims = [3, 2, 2];
        assert_eq!(cell_index(dims, 1, 1, 1), 1 + 3 * (1 + 2));
        // zcorn corner 0 of cell (0,0,0) is the very first entry.
        assert_eq!(zcorn_index(dims, 0, 0, 0, 0), 0);
    }

    #[test]
    fn mismatched_actnum_rejected_before_any_processing() {
        let dims = [2, 2, 2];
        let err = GridDescriptor::new(
            dims,
            grid::types::cartesian_coord(dims, [1.0, 1.0, 1.0]),
            grid::types::cartesian_zcorn(dims, 1.0),
            vec![1; 5], // neither empty nor nx*ny*nz
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            DescriptorError::ActnumLengthMismatch {
                expected: 8,
                actual: 5
            }
        );
    }

    #[test]
    fn view_is_read_only_borrow() {
        let descriptor = unit_descriptor([2, 2, 1]);
        let view = descriptor.view();
        assert_eq!(view.cell_count(), 4);
        assert!(view.any_active());
        assert!(view.is_active(3));
    }

    #[test]
    fn mapaxes_pass_through_the_view() {
        let dims = [1, 1, 1];
        let mapaxes = [0.0, 1.0, 0.0, 0.0, 1.0, 0.0];
        let descriptor = GridDescriptor::new(
            dims,
            grid::types::cartesian_coord(dims, [1.0, 1.0, 1.0]),
            grid::types::cartesian_zcorn(dims, 1.0),
            vec![],
            Some(mapaxes),
        )
        .unwrap();

        assert_eq!(descriptor.mapaxes(), Some(mapaxes));
        assert_eq!(descriptor.view().mapaxes, Some(&mapaxes));
    }
}

// =============================================================================
// TIER 2: Minpv - Collapsing Pass Invariants
// =============================================================================

mod tier2_minpv {
    use super::*;
    use grid::minpv::verify_column_monotonic;

    #[test]
    fn cells_above_threshold_untouched() {
        let dims = [2, 2, 2];
        let mut zcorn = grid::types::cartesian_zcorn(dims, 1.0);
        let mut actnum = vec![1; 8];
        let mut pv = vec![5.0; 8];
        pv[0] = 0.0;

        let processor = MinpvProcessor::new(2, 2, 2);
        let summary = processor.process(&pv, 1.0, &mut actnum, true, &mut zcorn);

        assert_eq!(summary.cells_collapsed, 1);
        assert_eq!(actnum[0], 0);
        assert!(actnum[1..].iter().all(|&a| a == 1));
    }

    #[test]
    fn collapsed_columns_stay_monotonic() {
        let dims = [1, 1, 6];
        let mut zcorn = grid::types::cartesian_zcorn(dims, 0.5);
        let mut actnum = vec![1; 6];
        let pv = [1.0, 0.0, 0.0, 1.0, 0.0, 1.0];

        let processor = MinpvProcessor::new(1, 1, 6);
        let summary = processor.process(&pv, 0.5, &mut actnum, true, &mut zcorn);

        assert_eq!(summary.cells_collapsed, 3);
        assert!(verify_column_monotonic(dims, &zcorn, 0, 0));
    }

    #[test]
    fn processing_is_idempotent() {
        let dims = [2, 1, 3];
        let mut zcorn = grid::types::cartesian_zcorn(dims, 1.0);
        let mut actnum = vec![1; 6];
        let pv = [0.1, 1.0, 0.1, 1.0, 0.1, 1.0];

        let processor = MinpvProcessor::new(2, 1, 3);
        let first = processor.process(&pv, 0.5, &mut actnum, true, &mut zcorn);
        assert_eq!(first.cells_collapsed, 3);

        let second = processor.process(&pv, 0.5, &mut actnum, true, &mut zcorn);
        assert!(second.is_noop());
    }
}

// =============================================================================
// TIER 3: Assembly - End-to-End Corner-Point Construction
// =============================================================================

mod tier3_assembly {
    use super::*;

    #[test]
    fn empty_pore_volumes_leave_buffers_byte_identical() {
        let descriptor = unit_descriptor([2, 2, 2]);
        let original_zcorn = descriptor.zcorn().to_vec();
        let original_actnum = descriptor.actnum().to_vec();

        let kernel = RecordingKernel::default();
        let seen = Rc::clone(&kernel.seen);
        let manager =
            GridManager::assemble(kernel, descriptor, &[], MinpvParams::opmfil(1.0), 0.25)
                .unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.zcorn, original_zcorn);
        assert_eq!(seen.actnum, original_actnum);
        assert!((seen.z_tolerance - 0.25).abs() < f64::EPSILON);
        assert!(manager.mesh().attached_zcorn.is_none());
    }

    #[test]
    fn single_thin_cell_deactivated_end_to_end() {
        let descriptor = unit_descriptor([2, 2, 2]);
        let pore_volumes = [0.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0];

        let kernel = RecordingKernel::default();
        let seen = Rc::clone(&kernel.seen);
        let manager = GridManager::assemble(
            kernel,
            descriptor,
            &pore_volumes,
            MinpvParams::opmfil(1.0),
            0.0,
        )
        .unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.actnum, vec![0, 1, 1, 1, 1, 1, 1, 1]);
        // Exactly one cell changed, so the mutated zcorn copy is attached.
        let attached = manager.mesh().attached_zcorn.as_ref().unwrap();
        assert_eq!(attached, &seen.zcorn);
    }

    #[test]
    fn all_inactive_row_still_builds() {
        let descriptor = unit_descriptor([3, 1, 1]);
        let pore_volumes = [0.0, 0.0, 0.0];

        let kernel = RecordingKernel::default();
        let seen = Rc::clone(&kernel.seen);
        let manager = GridManager::assemble(
            kernel,
            descriptor,
            &pore_volumes,
            MinpvParams::opmfil(1.0),
            0.0,
        )
        .unwrap();

        assert_eq!(seen.borrow().actnum, vec![0, 0, 0]);
        assert_eq!(manager.mesh().cells, 3);
        assert!(manager.mesh().attached_zcorn.is_some());
    }

    #[test]
    fn no_collapse_means_no_attached_copy() {
        let descriptor = unit_descriptor([2, 2, 2]);
        // Uniform porosity keeps every cell well above the threshold.
        let pore_volumes = grid::types::uniform_pore_volumes([2, 2, 2], [5.0, 5.0, 1.0], 0.2);

        let manager = GridManager::assemble(
            RecordingKernel::default(),
            descriptor,
            &pore_volumes,
            MinpvParams::opmfil(1.0),
            0.0,
        )
        .unwrap();

        assert!(manager.mesh().attached_zcorn.is_none());
    }

    #[test]
    fn geometry_source_path_matches_direct_assembly() {
        struct DeckSource;

        impl GeometrySource for DeckSource {
            fn descriptor(&self) -> Result<GridDescriptor, GridError> {
                Ok(unit_descriptor([2, 2, 2]))
            }
            fn minpv_params(&self) -> MinpvParams {
                MinpvParams::opmfil(1.0)
            }
            fn pinch_tolerance(&self) -> f64 {
                0.1
            }
        }

        let mut pore_volumes = [5.0; 8];
        pore_volumes[7] = 0.5;

        let kernel = RecordingKernel::default();
        let seen = Rc::clone(&kernel.seen);
        let manager =
            GridManager::from_geometry(kernel, &DeckSource, &pore_volumes).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.actnum[7], 0);
        assert_eq!(seen.actnum.iter().sum::<i32>(), 7);
        assert!((seen.z_tolerance - 0.1).abs() < f64::EPSILON);
        assert!(manager.mesh().attached_zcorn.is_some());
    }

    #[test]
    fn contract_violations_fail_before_the_kernel_runs() {
        let kernel = RecordingKernel::default();
        let seen = Rc::clone(&kernel.seen);

        let result = GridManager::assemble(
            kernel,
            unit_descriptor([2, 2, 2]),
            &[1.0, 2.0, 3.0], // wrong length
            MinpvParams::opmfil(1.0),
            0.0,
        );

        assert!(matches!(result, Err(GridError::ContractViolation(_))));
        // The kernel never saw any arrays.
        assert!(seen.borrow().actnum.is_empty());
    }
}
