//! Grid registry with generational handles.
//!
//! The registry is owned by the embedding simulation engine; the viewer core
//! only ever holds [`GridHandle`]s into it. Grids may be removed or replaced
//! between frames, so a handle carries the generation of the slot it was
//! issued from and is validated on every lookup instead of being trusted.

use std::any::Any;

use glam::UVec3;

use crate::error::{GridscopeError, Result};

/// Type tag for the grid families a painter can inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridKind {
    /// One float per cell.
    Scalar,
    /// One Vec3 per cell.
    Vector,
    /// One bitmask per cell.
    Flag,
}

impl GridKind {
    /// Human-readable family name for summary text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Vector => "vector",
            Self::Flag => "flag",
        }
    }
}

/// A registered data object the viewer can inspect.
///
/// Implementations live in `gridscope-grids`; the typed renderers downcast
/// through [`InspectableGrid::as_any`] to reach concrete value storage.
pub trait InspectableGrid: Any {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Unique name of this grid within the registry.
    fn name(&self) -> &str;

    /// The family this grid belongs to.
    fn kind(&self) -> GridKind;

    /// Cell extent along each axis.
    fn size(&self) -> UVec3;
}

/// Generational handle to a registry slot.
///
/// A handle is only valid while the slot generation matches; removing the
/// grid bumps the generation, so handles held across a removal fail lookup
/// instead of resolving to an unrelated grid reusing the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridHandle {
    slot: u32,
    generation: u32,
}

struct Slot {
    generation: u32,
    grid: Option<Box<dyn InspectableGrid>>,
}

/// Slot-based registry over the inspectable grids of a viewer.
#[derive(Default)]
pub struct GridRegistry {
    slots: Vec<Slot>,
}

impl GridRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a grid, returning its handle.
    ///
    /// Returns an error if a grid with the same name is already registered.
    pub fn register(&mut self, grid: Box<dyn InspectableGrid>) -> Result<GridHandle> {
        if self.iter().any(|(_, g)| g.name() == grid.name()) {
            return Err(GridscopeError::GridExists(grid.name().to_string()));
        }

        // Reuse a free slot if one exists.
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.grid.is_none() {
                slot.grid = Some(grid);
                return Ok(GridHandle {
                    slot: i as u32,
                    generation: slot.generation,
                });
            }
        }

        self.slots.push(Slot {
            generation: 0,
            grid: Some(grid),
        });
        Ok(GridHandle {
            slot: (self.slots.len() - 1) as u32,
            generation: 0,
        })
    }

    /// Removes a grid, invalidating all outstanding handles to it.
    pub fn remove(&mut self, handle: GridHandle) -> Option<Box<dyn InspectableGrid>> {
        let slot = self.slots.get_mut(handle.slot as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let grid = slot.grid.take()?;
        slot.generation += 1;
        Some(grid)
    }

    /// Looks up a grid, validating the handle's generation.
    #[must_use]
    pub fn get(&self, handle: GridHandle) -> Option<&dyn InspectableGrid> {
        let slot = self.slots.get(handle.slot as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.grid.as_deref()
    }

    /// Whether the handle still resolves to a live grid.
    #[must_use]
    pub fn contains(&self, handle: GridHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Looks up a grid handle by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<GridHandle> {
        self.iter()
            .find(|(_, g)| g.name() == name)
            .map(|(h, _)| h)
    }

    /// Iterates all live grids with their handles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (GridHandle, &dyn InspectableGrid)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.grid.as_deref().map(|g| {
                (
                    GridHandle {
                        slot: i as u32,
                        generation: slot.generation,
                    },
                    g,
                )
            })
        })
    }

    /// Ordered listing of one family: `(handle, ordinal within the family)`.
    ///
    /// Re-queried on every selection advance and update; never cached across
    /// frames by callers.
    #[must_use]
    pub fn handles_of_kind(&self, kind: GridKind) -> Vec<(GridHandle, usize)> {
        self.iter()
            .filter(|(_, g)| g.kind() == kind)
            .enumerate()
            .map(|(ordinal, (h, _))| (h, ordinal))
            .collect()
    }

    /// Total number of live grids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.grid.is_some()).count()
    }

    /// Returns true if no grids are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all grids, invalidating every outstanding handle.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            if slot.grid.take().is_some() {
                slot.generation += 1;
            }
        }
    }
}
