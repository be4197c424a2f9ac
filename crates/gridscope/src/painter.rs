//! The selection painter: the orchestrating state machine.

use glam::{UVec3, Vec3};
use gridscope_core::{
    Direction, DisplayStateStore, GridHandle, GridKind, GridRegistry, ObjectSelector, Options,
    PainterEvent, PlaneState,
};
use gridscope_grids::{FlagRenderer, GridRenderer, ScalarRenderer, VectorRenderer};
use gridscope_render::{
    acquire_buffer_handle, BufferId, ColorMapRegistry, GeometryBuffer, RenderSurface, TextSink,
};

/// Lifecycle phase of a painter between events and frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintPhase {
    /// No object selected; buffers are empty.
    Idle,
    /// Current object valid; buffers reflect the last computed state.
    Selected,
    /// An event has been processed but geometry not yet rebuilt.
    Dirty,
}

/// The concrete renderer held by a painter, chosen at construction.
///
/// A closed set of per-family variants rather than an open trait-object
/// hierarchy: each painter inspects exactly one element family.
pub enum TypedRenderer {
    /// Scalar grid renderer.
    Scalar(ScalarRenderer),
    /// Vector grid renderer.
    Vector(VectorRenderer),
    /// Flag grid renderer.
    Flag(FlagRenderer),
}

impl GridRenderer for TypedRenderer {
    fn kind(&self) -> GridKind {
        match self {
            Self::Scalar(r) => r.kind(),
            Self::Vector(r) => r.kind(),
            Self::Flag(r) => r.kind(),
        }
    }

    fn mode_count(&self) -> usize {
        match self {
            Self::Scalar(r) => r.mode_count(),
            Self::Vector(r) => r.mode_count(),
            Self::Flag(r) => r.mode_count(),
        }
    }

    fn rebuild(
        &self,
        grid: &dyn gridscope_core::InspectableGrid,
        mode: usize,
        scale: f32,
        plane: &PlaneState,
        maps: &ColorMapRegistry,
        out: &mut GeometryBuffer,
    ) -> String {
        match self {
            Self::Scalar(r) => r.rebuild(grid, mode, scale, plane, maps, out),
            Self::Vector(r) => r.rebuild(grid, mode, scale, plane, maps, out),
            Self::Flag(r) => r.rebuild(grid, mode, scale, plane, maps, out),
        }
    }

    fn click_query(
        &self,
        grid: &dyn gridscope_core::InspectableGrid,
        plane: &PlaneState,
        p0: Vec3,
        p1: Vec3,
    ) -> String {
        match self {
            Self::Scalar(r) => r.click_query(grid, plane, p0, p1),
            Self::Vector(r) => r.click_query(grid, plane, p0, p1),
            Self::Flag(r) => r.click_query(grid, plane, p0, p1),
        }
    }
}

/// Orchestrates selection, display state, and geometry emission for one
/// grid family.
///
/// The painter owns the vertex/color buffer exclusively: it is written only
/// during [`update`](Self::update) and read only during
/// [`paint`](Self::paint). The registry is owned by the embedding engine and
/// re-queried on every operation; the painter never caches grid references
/// across frames.
pub struct SelectionPainter<S: RenderSurface, T: TextSink> {
    renderer: TypedRenderer,
    selector: ObjectSelector,
    store: DisplayStateStore,
    plane: PlaneState,
    maps: ColorMapRegistry,
    buffer: GeometryBuffer,
    buffer_id: BufferId,
    surface: S,
    text: T,
    phase: PaintPhase,
    summary: String,
    last_handle: Option<GridHandle>,
    last_extent: Option<UVec3>,
}

impl<S: RenderSurface, T: TextSink> SelectionPainter<S, T> {
    /// Creates a painter for scalar grids.
    pub fn scalar(surface: S, text: T, options: &Options) -> Self {
        Self::new(
            TypedRenderer::Scalar(ScalarRenderer::new(
                options.scalar_color_map.clone(),
                options.ramp_color_map.clone(),
            )),
            surface,
            text,
            options,
        )
    }

    /// Creates a painter for vector grids.
    pub fn vector(surface: S, text: T, options: &Options) -> Self {
        Self::new(TypedRenderer::Vector(VectorRenderer), surface, text, options)
    }

    /// Creates a painter for flag grids.
    pub fn flag(surface: S, text: T, options: &Options) -> Self {
        Self::new(TypedRenderer::Flag(FlagRenderer), surface, text, options)
    }

    fn new(renderer: TypedRenderer, surface: S, text: T, options: &Options) -> Self {
        let mut selector = ObjectSelector::new(renderer.kind());
        if options.start_hidden {
            selector.toggle_hidden();
        }
        Self {
            renderer,
            selector,
            store: DisplayStateStore::new(),
            plane: PlaneState::new(options.initial_dim),
            maps: ColorMapRegistry::new(),
            buffer: GeometryBuffer::new(),
            buffer_id: acquire_buffer_handle(),
            surface,
            text,
            phase: PaintPhase::Idle,
            summary: String::new(),
            last_handle: None,
            last_extent: None,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> PaintPhase {
        self.phase
    }

    /// The last-built summary text.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// The last-built geometry.
    #[must_use]
    pub fn buffer(&self) -> &GeometryBuffer {
        &self.buffer
    }

    /// The visible-slice state.
    #[must_use]
    pub fn plane(&self) -> &PlaneState {
        &self.plane
    }

    /// Advisory ordinal of the current selection within its family, or -1.
    #[must_use]
    pub fn selection_index(&self) -> i64 {
        self.selector.index()
    }

    /// The injected surface collaborator.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The injected text collaborator.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Sole event-driven entry point.
    ///
    /// Navigation events advance the selector and always mark the painter
    /// dirty, even when the selection did not change. Mode/scale/plane
    /// events go to the typed key handler and dirty the painter only if
    /// handled; with no current object they are no-ops. [`Ignored`]
    /// events cause no transition at all.
    ///
    /// [`Ignored`]: PainterEvent::Ignored
    pub fn handle_event(&mut self, registry: &GridRegistry, event: PainterEvent, param: i32) {
        match event {
            PainterEvent::NextObject => {
                self.selector.advance(registry, Direction::Forward);
                self.phase = PaintPhase::Dirty;
            }
            PainterEvent::PrevObject => {
                self.selector.advance(registry, Direction::Backward);
                self.phase = PaintPhase::Dirty;
            }
            PainterEvent::ToggleVisibility => {
                self.selector.toggle_hidden();
                self.phase = PaintPhase::Dirty;
            }
            PainterEvent::Ignored => {}
            _ => {
                if let Some((handle, _)) = self.selector.resolve(registry) {
                    if self.renderer.handle_key_event(
                        event,
                        param,
                        handle,
                        &mut self.store,
                        &mut self.plane,
                    ) {
                        self.phase = PaintPhase::Dirty;
                    }
                }
            }
        }
    }

    /// Raw-integer variant of [`handle_event`](Self::handle_event) for
    /// UI layers speaking the numeric contract.
    pub fn handle_raw_event(&mut self, registry: &GridRegistry, id: i32, param: i32) {
        self.handle_event(registry, PainterEvent::from_raw(id), param);
    }

    /// Re-resolves the selection and rebuilds geometry if anything is
    /// pending.
    ///
    /// Called once per frame, before any [`paint`](Self::paint) calls.
    /// Events are coalesced: however many arrived since the last frame,
    /// one rebuild reflects them all. A vanished selection degrades to
    /// [`PaintPhase::Idle`] with empty buffers, never a dangling read.
    pub fn update(&mut self, registry: &GridRegistry) {
        let resolved = self.selector.resolve(registry);
        let handle = resolved.map(|(h, _)| h);
        if handle != self.last_handle {
            // Selection changed under us (registry churn), force a rebuild.
            self.last_handle = handle;
            self.phase = PaintPhase::Dirty;
        }
        if self.phase != PaintPhase::Dirty {
            return;
        }

        let grid = handle.and_then(|h| registry.get(h));
        let Some(grid) = grid else {
            self.buffer.clear();
            self.summary.clear();
            self.text.show_text("");
            self.phase = PaintPhase::Idle;
            log::debug!("no {} grid selected", self.renderer.kind().label());
            return;
        };

        let extent = grid.size();
        self.plane.refit(extent);
        if self.last_extent != Some(extent) {
            self.last_extent = Some(extent);
            self.surface.set_viewport(extent);
        }

        let Some(h) = handle else { return };
        let mode = self.store.mode(h);
        let scale = self.store.scale(h, mode);

        self.buffer.clear();
        if self.selector.hidden() {
            self.summary = format!("{} grids hidden", self.renderer.kind().label());
        } else {
            self.summary = self
                .renderer
                .rebuild(grid, mode, scale, &self.plane, &self.maps, &mut self.buffer);
        }
        self.text.show_text(&self.summary);
        log::debug!(
            "rebuilt {} geometry: {} vertices",
            self.renderer.kind().label(),
            self.buffer.len()
        );
        self.phase = PaintPhase::Selected;
    }

    /// Re-submits the last-built buffer to the surface.
    ///
    /// Mutates no logical state; safe to call any number of times per
    /// frame, including in `Idle` (renders nothing).
    pub fn paint(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        self.surface.submit(self.buffer_id, &self.buffer);
    }

    /// Describes the cell hit by the segment `p0..p1` on the current
    /// slice, or an empty string when nothing is selected or hit.
    pub fn click_line(&mut self, registry: &GridRegistry, p0: Vec3, p1: Vec3) -> String {
        let Some((handle, _)) = self.selector.resolve(registry) else {
            return String::new();
        };
        let Some(grid) = registry.get(handle) else {
            return String::new();
        };
        self.renderer.click_query(grid, &self.plane, p0, p1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::UVec3;
    use gridscope_grids::ScalarGrid;
    use gridscope_render::{NullSurface, NullTextSink};

    fn painter() -> SelectionPainter<NullSurface, NullTextSink> {
        SelectionPainter::scalar(
            NullSurface::default(),
            NullTextSink::default(),
            &Options::default(),
        )
    }

    fn registry_one() -> GridRegistry {
        let mut reg = GridRegistry::new();
        reg.register(Box::new(ScalarGrid::constant("rho", UVec3::splat(4), 0.5)))
            .unwrap();
        reg
    }

    #[test]
    fn starts_idle_and_stays_idle_on_empty_registry() {
        let reg = GridRegistry::new();
        let mut p = painter();
        assert_eq!(p.phase(), PaintPhase::Idle);
        p.handle_event(&reg, PainterEvent::NextObject, 0);
        p.update(&reg);
        assert_eq!(p.phase(), PaintPhase::Idle);
        assert!(p.buffer().is_empty());
        p.paint();
        assert_eq!(p.surface().submissions, 0);
    }

    #[test]
    fn select_update_paint_cycle() {
        let reg = registry_one();
        let mut p = painter();
        p.handle_event(&reg, PainterEvent::NextObject, 0);
        assert_eq!(p.phase(), PaintPhase::Dirty);
        p.update(&reg);
        assert_eq!(p.phase(), PaintPhase::Selected);
        assert!(!p.buffer().is_empty());
        assert!(p.text().last.contains("rho"));

        p.paint();
        p.paint();
        assert_eq!(p.surface().submissions, 2);
    }

    #[test]
    fn update_without_pending_events_does_not_rebuild() {
        let reg = registry_one();
        let mut p = painter();
        p.handle_event(&reg, PainterEvent::NextObject, 0);
        p.update(&reg);
        let before = p.surface().viewport;
        p.update(&reg);
        p.update(&reg);
        assert_eq!(p.phase(), PaintPhase::Selected);
        assert_eq!(p.surface().viewport, before);
    }

    #[test]
    fn ignored_events_cause_no_transition() {
        let reg = registry_one();
        let mut p = painter();
        p.handle_event(&reg, PainterEvent::NextObject, 0);
        p.update(&reg);
        p.handle_event(&reg, PainterEvent::Ignored, 0);
        p.handle_raw_event(&reg, 9999, 42);
        assert_eq!(p.phase(), PaintPhase::Selected);
    }

    #[test]
    fn key_events_without_selection_are_no_ops() {
        let reg = registry_one();
        let mut p = painter();
        p.handle_event(&reg, PainterEvent::ScaleUp, 0);
        assert_eq!(p.phase(), PaintPhase::Idle);
    }

    #[test]
    fn hidden_family_keeps_selection_but_emits_nothing() {
        let reg = registry_one();
        let mut p = painter();
        p.handle_event(&reg, PainterEvent::NextObject, 0);
        p.handle_event(&reg, PainterEvent::ToggleVisibility, 0);
        p.update(&reg);
        assert_eq!(p.phase(), PaintPhase::Selected);
        assert!(p.buffer().is_empty());
        assert!(p.summary().contains("hidden"));

        p.handle_event(&reg, PainterEvent::ToggleVisibility, 0);
        p.update(&reg);
        assert!(!p.buffer().is_empty());
    }

    #[test]
    fn viewport_published_once_per_extent() {
        let reg = registry_one();
        let mut p = painter();
        p.handle_event(&reg, PainterEvent::NextObject, 0);
        p.update(&reg);
        assert_eq!(p.surface().viewport, Some(UVec3::splat(4)));
    }
}
