//! Minpv pass statistics.

/// Result of one minpv pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use]
pub struct MinpvSummary {
    /// Number of `actnum` entries flipped from active to inactive.
    ///
    /// Zero means the pass left both `actnum` and `zcorn` untouched, and
    /// callers need not propagate a mutated corner-depth copy downstream.
    pub cells_collapsed: usize,
}

impl MinpvSummary {
    /// Whether the pass changed nothing.
    #[inline]
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.cells_collapsed == 0
    }
}
