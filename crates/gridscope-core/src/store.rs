//! Per-object display state.

use std::collections::HashMap;

use crate::display::STANDARD_INDEX;
use crate::registry::GridHandle;

/// Persistent display state, keyed by object identity.
///
/// The display mode is keyed by object alone; the value scale is keyed by
/// (object, mode) so an object remembers a different scale for every mode it
/// has been viewed in. Entries are created lazily and never removed: a
/// destroyed grid's entries are simply never looked up again, since its
/// handle generation can never recur.
#[derive(Default)]
pub struct DisplayStateStore {
    modes: HashMap<GridHandle, usize>,
    scales: HashMap<(GridHandle, usize), f32>,
}

impl DisplayStateStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored mode index for `handle`, or the standard mode if absent.
    ///
    /// Does not create an entry.
    #[must_use]
    pub fn mode(&self, handle: GridHandle) -> usize {
        self.modes.get(&handle).copied().unwrap_or(STANDARD_INDEX)
    }

    /// Stores the mode index for `handle`. Idempotent.
    pub fn set_mode(&mut self, handle: GridHandle, mode: usize) {
        self.modes.insert(handle, mode);
    }

    /// Stored scale for `(handle, mode)`, or 1.0 if absent.
    #[must_use]
    pub fn scale(&self, handle: GridHandle, mode: usize) -> f32 {
        self.scales.get(&(handle, mode)).copied().unwrap_or(1.0)
    }

    /// Stores the scale for `(handle, mode)`.
    pub fn set_scale(&mut self, handle: GridHandle, mode: usize, value: f32) {
        self.scales.insert((handle, mode), value);
    }
}
