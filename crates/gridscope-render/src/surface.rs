//! Collaborator seams towards the native rendering surface.
//!
//! The actual GL/GPU context lives outside this core. Painters are handed a
//! [`RenderSurface`] and a [`TextSink`] at construction and talk to nothing
//! else; the only process-wide piece is the shared vertex-buffer handle,
//! which is allocated once and whose teardown belongs to the surface.

use std::sync::OnceLock;

use glam::UVec3;

use crate::geometry::GeometryBuffer;

/// Opaque handle to the native vertex-buffer object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(pub u32);

static SHARED_BUFFER: OnceLock<BufferId> = OnceLock::new();

/// Returns the process-wide render-buffer handle, allocating it on first use.
///
/// Idempotent: every caller targeting the same surface receives the same
/// handle. The handle is never released by this crate; the surrounding
/// rendering context owns its teardown.
pub fn acquire_buffer_handle() -> BufferId {
    *SHARED_BUFFER.get_or_init(|| {
        log::debug!("allocating shared render buffer handle");
        BufferId(1)
    })
}

/// The rendering-surface collaborator a painter draws through.
pub trait RenderSurface {
    /// Submits a built geometry buffer for drawing this frame.
    fn submit(&mut self, buffer: BufferId, geometry: &GeometryBuffer);

    /// Notifies the surface that the inspected grid extent changed, so it
    /// can refit the viewport.
    fn set_viewport(&mut self, extent: UVec3);
}

/// Out-of-band text display (status line, info label).
pub trait TextSink {
    /// Shows a plain-text summary for the current selection.
    fn show_text(&mut self, text: &str);
}

/// A surface that records submissions instead of drawing.
///
/// Used by tests and headless embeddings.
#[derive(Debug, Default)]
pub struct NullSurface {
    /// Number of submissions received.
    pub submissions: usize,
    /// Vertex count of the most recent submission.
    pub last_vertex_count: usize,
    /// Most recent viewport extent, if any was published.
    pub viewport: Option<UVec3>,
}

impl RenderSurface for NullSurface {
    fn submit(&mut self, _buffer: BufferId, geometry: &GeometryBuffer) {
        self.submissions += 1;
        self.last_vertex_count = geometry.len();
    }

    fn set_viewport(&mut self, extent: UVec3) {
        self.viewport = Some(extent);
    }
}

/// A text sink that keeps the last string it was shown.
#[derive(Debug, Default)]
pub struct NullTextSink {
    /// Most recently shown text.
    pub last: String,
}

impl TextSink for NullTextSink {
    fn show_text(&mut self, text: &str) {
        self.last = text.to_string();
    }
}
