//! Rendering seam for gridscope.
//!
//! Everything a painter needs to turn grid values into drawable output:
//! - [`GeometryBuffer`]: parallel flat vertex/color sequences with the fixed
//!   two-triangle quad fan
//! - [`ColorMap`]/[`ColorMapRegistry`]: value-to-color ramps
//! - [`RenderSurface`]/[`TextSink`]: injected collaborator traits for the
//!   native surface and the out-of-band text display

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod color_maps;
pub mod geometry;
pub mod surface;

pub use color_maps::{hsv_to_rgb, vector_color, ColorMap, ColorMapRegistry};
pub use geometry::{GeometryBuffer, Primitive};
pub use surface::{
    acquire_buffer_handle, BufferId, NullSurface, NullTextSink, RenderSurface, TextSink,
};
