//! gridscope: a visualization-overlay engine for simulation viewers.
//!
//! gridscope tracks which registered grid is selected, what display state it
//! carries (mode, value scale, visible slice), and emits flat vertex/color
//! geometry for the current selection. It deliberately stops at the
//! rendering seam: the native surface, the simulation engine that owns the
//! grids, and the UI layer are collaborators, not parts of this crate.
//!
//! # Quick start
//!
//! ```
//! use gridscope::*;
//!
//! fn main() -> Result<()> {
//!     // The embedding engine owns the registry.
//!     let mut registry = GridRegistry::new();
//!     registry.register(Box::new(ScalarGrid::constant(
//!         "density",
//!         UVec3::splat(8),
//!         0.5,
//!     )))?;
//!
//!     // Collaborators are injected at construction.
//!     let mut painter = SelectionPainter::scalar(
//!         NullSurface::default(),
//!         NullTextSink::default(),
//!         &Options::default(),
//!     );
//!
//!     // UI layer: select the first scalar grid, then frame tick.
//!     painter.handle_event(&registry, PainterEvent::NextObject, 0);
//!     painter.update(&registry);
//!     painter.paint();
//!
//!     assert!(!painter.buffer().is_empty());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - A **registry** ([`GridRegistry`]) holds the inspectable grids behind
//!   generational [`GridHandle`]s, so a handle to a removed grid fails
//!   validation instead of resolving to whatever reused its slot.
//! - A **painter** ([`SelectionPainter`]) exists per element family
//!   (scalar, vector, flag). It cycles the selection, keeps per-object
//!   display state, and rebuilds geometry once per frame at most.
//! - **Renderers** ([`ScalarRenderer`], [`VectorRenderer`], [`FlagRenderer`])
//!   turn one slice of one grid into a [`GeometryBuffer`] under the current
//!   display mode.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

mod painter;

pub use painter::{PaintPhase, SelectionPainter, TypedRenderer};

// Re-export core types
pub use gridscope_core::{
    Direction, DisplayMode, DisplayStateStore, FlagDisplayMode, GridHandle, GridKind,
    GridRegistry, GridscopeError, InspectableGrid, ObjectSelector, Options, PainterEvent,
    PlaneState, Result, ScalarDisplayMode, VectorDisplayMode, OFF_INDEX, STANDARD_INDEX,
};

// Re-export render types
pub use gridscope_render::{
    acquire_buffer_handle, BufferId, ColorMap, ColorMapRegistry, GeometryBuffer, NullSurface,
    NullTextSink, Primitive, RenderSurface, TextSink,
};

// Re-export grid types
pub use gridscope_grids::{
    FlagGrid, FlagRenderer, GridRenderer, ScalarGrid, ScalarRenderer, VectorGrid, VectorRenderer,
};

// Re-export glam types for convenience
pub use glam::{UVec3, Vec3};
