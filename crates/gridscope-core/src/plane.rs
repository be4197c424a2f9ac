//! Visible-slice state: which axis is sliced and at which coordinate.

use glam::UVec3;

/// The 2D cross-section currently shown: a slice index along one axis.
///
/// Plane changes may arrive in bursts before the per-frame
/// [`refit`](Self::refit) runs, while `max` still reflects the previous
/// grid. The requested slice is therefore stored raw and normalized against
/// the live extent at refit time; the [`plane`](Self::plane) accessor always
/// reports a value clamped into `[0, max]`, so readers never observe an
/// out-of-range slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneState {
    dim: usize,
    requested: i64,
    max: usize,
}

impl PlaneState {
    /// Creates a plane state slicing along `dim`, at slice 0.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self {
            dim: dim.min(2),
            requested: 0,
            max: 0,
        }
    }

    /// The sliced axis (0..=2).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The current slice index along [`dim`](Self::dim), clamped into
    /// `[0, max]`.
    #[must_use]
    pub fn plane(&self) -> usize {
        self.requested.clamp(0, self.max as i64) as usize
    }

    /// The last valid slice index along [`dim`](Self::dim).
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    /// Recomputes `max` from a grid extent and normalizes the requested
    /// slice into range.
    ///
    /// Called once per frame, and whenever the current object or the sliced
    /// axis changes.
    pub fn refit(&mut self, extent: UVec3) {
        self.max = (extent[self.dim] as usize).saturating_sub(1);
        self.requested = self.requested.clamp(0, self.max as i64);
    }

    /// Steps the requested slice by `delta`.
    pub fn step(&mut self, delta: i64) {
        self.requested = self.plane() as i64 + delta;
    }

    /// Requests an absolute slice index.
    pub fn set_plane(&mut self, value: i64) {
        self.requested = value;
    }

    /// Sets the sliced axis, clamped into `[0, 2]`.
    ///
    /// `max` is stale until the next [`refit`](Self::refit).
    pub fn set_dim(&mut self, dim: i64) {
        self.dim = dim.clamp(0, 2) as usize;
    }

    /// Cycles the sliced axis (x -> y -> z -> x).
    pub fn next_dim(&mut self) {
        self.dim = (self.dim + 1) % 3;
    }
}

impl Default for PlaneState {
    fn default() -> Self {
        // Slicing along z shows the xy plane, the usual 2D-sim view.
        Self::new(2)
    }
}
