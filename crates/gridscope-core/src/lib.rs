//! Core abstractions for gridscope.
//!
//! This crate provides the fundamental types of the visualization overlay:
//! - [`InspectableGrid`] trait and the generational [`GridRegistry`]
//! - [`ObjectSelector`] cursor over one grid family
//! - [`DisplayStateStore`] for per-object mode and per-(object, mode) scale
//! - [`PlaneState`] for the visible slice, and the [`PainterEvent`] contract

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Slot/ordinal indices fit comfortably in the cast widths used
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod display;
pub mod error;
pub mod event;
pub mod options;
pub mod plane;
pub mod registry;
pub mod selector;
pub mod store;

pub use display::{
    DisplayMode, FlagDisplayMode, ScalarDisplayMode, VectorDisplayMode, OFF_INDEX,
    SCALE_STEP_LARGE, SCALE_STEP_SMALL, STANDARD_INDEX,
};
pub use error::{GridscopeError, Result};
pub use event::{Direction, PainterEvent};
pub use options::Options;
pub use plane::PlaneState;
pub use registry::{GridHandle, GridKind, GridRegistry, InspectableGrid};
pub use selector::ObjectSelector;
pub use store::DisplayStateStore;

// Re-export glam types for convenience
pub use glam::{UVec3, Vec3};
