//! Selection cursor over one grid family.

use crate::event::Direction;
use crate::registry::{GridHandle, GridKind, GridRegistry};

/// Cursor over the registry's grids of a single family.
///
/// The cursor holds a handle and an advisory ordinal; both are re-resolved
/// against a fresh registry listing on every operation, so registry churn
/// between frames can never be observed through a stale handle. The central
/// invariant: no operation reads through a handle whose backing grid has
/// been invalidated.
pub struct ObjectSelector {
    kind: GridKind,
    current: Option<GridHandle>,
    index: i64,
    hidden: bool,
}

impl ObjectSelector {
    /// Creates a selector for one family, with no current object.
    #[must_use]
    pub fn new(kind: GridKind) -> Self {
        Self {
            kind,
            current: None,
            index: -1,
            hidden: false,
        }
    }

    /// The family this selector cycles over.
    #[must_use]
    pub fn kind(&self) -> GridKind {
        self.kind
    }

    /// Advisory ordinal of the current object within its family, or -1.
    #[must_use]
    pub fn index(&self) -> i64 {
        self.index
    }

    /// Whether this family is currently hidden.
    #[must_use]
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Flips the family-wide hide flag, independent of the selection.
    pub fn toggle_hidden(&mut self) {
        self.hidden = !self.hidden;
    }

    /// Moves the cursor forward or backward through the family, wrapping.
    ///
    /// The listing is re-queried, so grids added or removed since the last
    /// call are taken into account. An empty family clears the cursor.
    pub fn advance(&mut self, registry: &GridRegistry, direction: Direction) {
        let listing = registry.handles_of_kind(self.kind);
        if listing.is_empty() {
            self.clear();
            return;
        }

        let len = listing.len() as i64;
        let position = self
            .current
            .and_then(|cur| listing.iter().position(|(h, _)| *h == cur));

        let next = match position {
            Some(pos) => (pos as i64 + direction.step()).rem_euclid(len),
            // Previous selection vanished (or none yet); restart at an end.
            None => match direction {
                Direction::Forward => 0,
                Direction::Backward => len - 1,
            },
        };

        let (handle, ordinal) = listing[next as usize];
        if self.current != Some(handle) {
            log::debug!(
                "selected {} grid #{ordinal}",
                self.kind.label()
            );
        }
        self.current = Some(handle);
        self.index = ordinal as i64;
    }

    /// Re-resolves the cursor against the registry.
    ///
    /// Returns the current handle and its ordinal, or `None` if nothing is
    /// selected or the selected grid no longer exists. A stale handle clears
    /// the cursor as a side effect.
    pub fn resolve(&mut self, registry: &GridRegistry) -> Option<(GridHandle, usize)> {
        let handle = self.current?;
        let listing = registry.handles_of_kind(self.kind);
        match listing.iter().find(|(h, _)| *h == handle) {
            Some(&(h, ordinal)) => {
                self.index = ordinal as i64;
                Some((h, ordinal))
            }
            None => {
                log::debug!("selected {} grid vanished, clearing cursor", self.kind.label());
                self.clear();
                None
            }
        }
    }

    fn clear(&mut self) {
        self.current = None;
        self.index = -1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::InspectableGrid;
    use glam::UVec3;

    struct Dummy(String, GridKind);
    impl InspectableGrid for Dummy {
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
        fn name(&self) -> &str {
            &self.0
        }
        fn kind(&self) -> GridKind {
            self.1
        }
        fn size(&self) -> UVec3 {
            UVec3::splat(4)
        }
    }

    fn registry_with(names: &[(&str, GridKind)]) -> GridRegistry {
        let mut reg = GridRegistry::new();
        for (name, kind) in names {
            reg.register(Box::new(Dummy((*name).to_string(), *kind)))
                .unwrap();
        }
        reg
    }

    #[test]
    fn empty_registry_degrades_to_none() {
        let reg = GridRegistry::new();
        let mut sel = ObjectSelector::new(GridKind::Scalar);
        sel.advance(&reg, Direction::Forward);
        assert_eq!(sel.resolve(&reg), None);
        assert_eq!(sel.index(), -1);
    }

    #[test]
    fn advance_wraps_and_skips_other_kinds() {
        let reg = registry_with(&[
            ("rho", GridKind::Scalar),
            ("vel", GridKind::Vector),
            ("p", GridKind::Scalar),
        ]);
        let mut sel = ObjectSelector::new(GridKind::Scalar);

        sel.advance(&reg, Direction::Forward);
        let (h0, i0) = sel.resolve(&reg).unwrap();
        assert_eq!(reg.get(h0).unwrap().name(), "rho");
        assert_eq!(i0, 0);

        sel.advance(&reg, Direction::Forward);
        let (h1, _) = sel.resolve(&reg).unwrap();
        assert_eq!(reg.get(h1).unwrap().name(), "p");

        // Wraps back to the first scalar, never landing on the vector grid.
        sel.advance(&reg, Direction::Forward);
        let (h2, i2) = sel.resolve(&reg).unwrap();
        assert_eq!(reg.get(h2).unwrap().name(), "rho");
        assert_eq!(i2, 0);
    }

    #[test]
    fn n_advances_return_to_start() {
        let reg = registry_with(&[
            ("a", GridKind::Scalar),
            ("b", GridKind::Scalar),
            ("c", GridKind::Scalar),
        ]);
        let mut sel = ObjectSelector::new(GridKind::Scalar);
        sel.advance(&reg, Direction::Forward);
        let start = sel.resolve(&reg).unwrap();
        for _ in 0..3 {
            sel.advance(&reg, Direction::Forward);
        }
        assert_eq!(sel.resolve(&reg).unwrap(), start);
    }

    #[test]
    fn backward_from_none_starts_at_the_end() {
        let reg = registry_with(&[("a", GridKind::Scalar), ("b", GridKind::Scalar)]);
        let mut sel = ObjectSelector::new(GridKind::Scalar);
        sel.advance(&reg, Direction::Backward);
        let (h, i) = sel.resolve(&reg).unwrap();
        assert_eq!(reg.get(h).unwrap().name(), "b");
        assert_eq!(i, 1);
    }

    #[test]
    fn stale_selection_clears_instead_of_dereferencing() {
        let mut reg = registry_with(&[("a", GridKind::Scalar)]);
        let mut sel = ObjectSelector::new(GridKind::Scalar);
        sel.advance(&reg, Direction::Forward);
        let (h, _) = sel.resolve(&reg).unwrap();

        reg.remove(h);
        assert_eq!(sel.resolve(&reg), None);
        assert_eq!(sel.index(), -1);
    }

    #[test]
    fn hide_flag_is_independent_of_selection() {
        let mut sel = ObjectSelector::new(GridKind::Flag);
        assert!(!sel.hidden());
        sel.toggle_hidden();
        assert!(sel.hidden());
        sel.toggle_hidden();
        assert!(!sel.hidden());
    }
}
