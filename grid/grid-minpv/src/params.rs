//! Minpv configuration.

/// How a deck asked for minimum-pore-volume handling.
///
/// `EclStd` and `OpmFil` are both processed, and currently processed
/// identically; `EclStd` is kept as a distinct variant so legacy decks
/// remain distinguishable at the type level rather than being silently
/// folded into `OpmFil`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinpvMode {
    /// No minpv processing requested.
    #[default]
    Inactive,
    /// Legacy ECLIPSE-style request; processed like [`MinpvMode::OpmFil`].
    EclStd,
    /// Standard fill-style processing.
    OpmFil,
}

impl MinpvMode {
    /// Whether this mode triggers a collapsing pass.
    #[inline]
    #[must_use]
    pub fn is_active(self) -> bool {
        self != Self::Inactive
    }
}

/// Parameters for a minpv pass.
///
/// # Example
///
/// ```
/// use grid_minpv::{MinpvMode, MinpvParams};
///
/// // No processing by default
/// let params = MinpvParams::default();
/// assert!(!params.mode.is_active());
///
/// // Collapse cells below a cubic metre of pore volume
/// let params = MinpvParams::opmfil(1.0);
/// assert!(params.mode.is_active());
/// assert!(params.fill_from_above);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinpvParams {
    /// Pore volume below which a cell is collapsed. Must be non-negative.
    pub threshold: f64,

    /// Requested processing mode.
    pub mode: MinpvMode,

    /// Corner adjustment policy.
    ///
    /// `true` (the standard policy): a collapsed cell becomes a
    /// zero-thickness slab flush with the top of its original span, leaving
    /// overlying cells untouched.
    ///
    /// `false` (the alternate policy): the slab snaps to whichever of the
    /// cell's own faces is closer to an active vertical neighbor.
    pub fill_from_above: bool,
}

impl Default for MinpvParams {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            mode: MinpvMode::Inactive,
            fill_from_above: true,
        }
    }
}

impl MinpvParams {
    /// Standard processing at the given threshold.
    #[must_use]
    pub fn opmfil(threshold: f64) -> Self {
        Self {
            threshold,
            mode: MinpvMode::OpmFil,
            ..Self::default()
        }
    }

    /// Set the pore-volume threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the processing mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: MinpvMode) -> Self {
        self.mode = mode;
        self
    }

    /// Select the corner adjustment policy.
    #[must_use]
    pub const fn with_fill_from_above(mut self, fill_from_above: bool) -> Self {
        self.fill_from_above = fill_from_above;
        self
    }
}
