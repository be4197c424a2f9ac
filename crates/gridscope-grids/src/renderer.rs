//! The shared renderer capability trait and slice helpers.

use glam::{UVec3, Vec3};
use gridscope_core::display::{SCALE_STEP_LARGE, SCALE_STEP_SMALL};
use gridscope_core::plane::PlaneState;
use gridscope_core::registry::{GridHandle, GridKind, InspectableGrid};
use gridscope_core::store::DisplayStateStore;
use gridscope_core::PainterEvent;
use gridscope_render::{ColorMapRegistry, GeometryBuffer};

/// Per-element-type rendering capability.
///
/// Renderers are stateless; all display state lives in the
/// [`DisplayStateStore`] and [`PlaneState`] they are handed. One renderer
/// exists per grid family, chosen at painter construction.
pub trait GridRenderer {
    /// The family this renderer draws.
    fn kind(&self) -> GridKind;

    /// Number of display modes in this family.
    fn mode_count(&self) -> usize;

    /// Rebuilds the geometry for the slice at `plane`, returning the
    /// summary text. Off mode emits nothing. The buffer is expected to be
    /// cleared by the caller.
    fn rebuild(
        &self,
        grid: &dyn InspectableGrid,
        mode: usize,
        scale: f32,
        plane: &PlaneState,
        maps: &ColorMapRegistry,
        out: &mut GeometryBuffer,
    ) -> String;

    /// Describes the cell the segment `p0..p1` hits on the current slice,
    /// or an empty string on miss.
    fn click_query(
        &self,
        grid: &dyn InspectableGrid,
        plane: &PlaneState,
        p0: Vec3,
        p1: Vec3,
    ) -> String;

    /// Interprets a mode/scale/plane event against the current object's
    /// state. Returns whether the event was handled; unrecognized events
    /// change nothing and return false.
    fn handle_key_event(
        &self,
        event: PainterEvent,
        param: i32,
        handle: GridHandle,
        store: &mut DisplayStateStore,
        plane: &mut PlaneState,
    ) -> bool {
        let mode = store.mode(handle);
        match event {
            PainterEvent::NextDisplayMode => {
                store.set_mode(handle, (mode + 1) % self.mode_count());
            }
            PainterEvent::PrevDisplayMode => {
                store.set_mode(handle, (mode + self.mode_count() - 1) % self.mode_count());
            }
            PainterEvent::ScaleUp => {
                store.set_scale(handle, mode, store.scale(handle, mode) * SCALE_STEP_LARGE);
            }
            PainterEvent::ScaleDown => {
                store.set_scale(handle, mode, store.scale(handle, mode) / SCALE_STEP_LARGE);
            }
            PainterEvent::ScaleUpSmall => {
                store.set_scale(handle, mode, store.scale(handle, mode) * SCALE_STEP_SMALL);
            }
            PainterEvent::ScaleDownSmall => {
                store.set_scale(handle, mode, store.scale(handle, mode) / SCALE_STEP_SMALL);
            }
            PainterEvent::NextPlane => plane.step(1),
            PainterEvent::PrevPlane => plane.step(-1),
            PainterEvent::SetPlane => plane.set_plane(i64::from(param)),
            PainterEvent::NextDim => plane.next_dim(),
            PainterEvent::SetDim => plane.set_dim(i64::from(param)),
            _ => return false,
        }
        true
    }
}

/// The two in-slice axes for a given slicing axis.
#[must_use]
pub fn slice_axes(dim: usize) -> (usize, usize) {
    match dim {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    }
}

/// Iterates the cell indices of the slice at `plane`, in row-major order
/// over the two in-slice axes.
pub fn slice_cells(extent: UVec3, plane: &PlaneState) -> impl Iterator<Item = UVec3> {
    let (u_axis, v_axis) = slice_axes(plane.dim());
    let dim = plane.dim();
    let slab = plane.plane() as u32;
    let nu = extent[u_axis];
    let nv = extent[v_axis];
    let in_range = slab < extent[dim].max(1) && extent[dim] > 0;
    (0..if in_range { nv } else { 0 }).flat_map(move |v| {
        (0..nu).map(move |u| {
            let mut cell = UVec3::ZERO;
            cell[dim] = slab;
            cell[u_axis] = u;
            cell[v_axis] = v;
            cell
        })
    })
}

/// World-space center of a cell (cells are unit-sized, anchored at their
/// lower corner).
#[must_use]
pub fn cell_center(cell: UVec3) -> Vec3 {
    cell.as_vec3() + Vec3::splat(0.5)
}

/// CCW corners of the quad covering `cell` within the current slice slab.
///
/// Corners lie at the cell's footprint in the slice plane, at the slab's
/// mid-coordinate along the sliced axis, wound counter-clockwise when viewed
/// down that axis.
#[must_use]
pub fn cell_quad(cell: UVec3, dim: usize) -> [Vec3; 4] {
    let (u_axis, v_axis) = slice_axes(dim);
    let mut base = cell.as_vec3();
    base[dim] += 0.5;

    let mut du = Vec3::ZERO;
    du[u_axis] = 1.0;
    let mut dv = Vec3::ZERO;
    dv[v_axis] = 1.0;

    [base, base + du, base + du + dv, base + dv]
}

/// Intersects the segment `p0..p1` with the current slice slab and returns
/// the hit cell, if any.
///
/// Returns `None` for segments parallel to the slab, intersections outside
/// the segment, and hits outside the grid extent.
#[must_use]
pub fn slice_hit(extent: UVec3, plane: &PlaneState, p0: Vec3, p1: Vec3) -> Option<UVec3> {
    let dim = plane.dim();
    let slab = plane.plane() as f32 + 0.5;
    let denom = p1[dim] - p0[dim];
    if denom.abs() < 1e-8 {
        return None;
    }
    let t = (slab - p0[dim]) / denom;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    let p = p0 + (p1 - p0) * t;

    let (u_axis, v_axis) = slice_axes(dim);
    let u = p[u_axis].floor();
    let v = p[v_axis].floor();
    if u < 0.0 || v < 0.0 || u >= extent[u_axis] as f32 || v >= extent[v_axis] as f32 {
        return None;
    }
    if plane.plane() as u32 >= extent[dim].max(1) {
        return None;
    }

    let mut cell = UVec3::ZERO;
    cell[dim] = plane.plane() as u32;
    cell[u_axis] = u as u32;
    cell[v_axis] = v as u32;
    Some(cell)
}

/// Standard one-line selection summary shown in the info label.
#[must_use]
pub fn summary_line(
    kind: GridKind,
    name: &str,
    extent: UVec3,
    plane: &PlaneState,
    mode_label: &str,
    scale: f32,
    stat: &str,
) -> String {
    format!(
        "{} '{}' {}x{}x{} | dim {} plane {}/{} | {} x{:.3}{}",
        kind.label(),
        name,
        extent.x,
        extent.y,
        extent.z,
        plane.dim(),
        plane.plane(),
        plane.max(),
        mode_label,
        scale,
        stat,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn plane_at(dim: usize, slab: usize, extent: UVec3) -> PlaneState {
        let mut ps = PlaneState::new(dim);
        ps.refit(extent);
        ps.set_plane(slab as i64);
        ps
    }

    #[test]
    fn slice_cells_covers_the_full_cross_section() {
        let extent = UVec3::new(4, 3, 2);
        let ps = plane_at(2, 1, extent);
        let cells: Vec<_> = slice_cells(extent, &ps).collect();
        assert_eq!(cells.len(), 4 * 3);
        assert!(cells.iter().all(|c| c.z == 1));
    }

    #[test]
    fn slice_cells_is_empty_for_zero_extent() {
        let ps = plane_at(0, 0, UVec3::ZERO);
        assert_eq!(slice_cells(UVec3::ZERO, &ps).count(), 0);
    }

    #[test]
    fn quad_corners_stay_in_the_slab() {
        let quad = cell_quad(UVec3::new(2, 3, 1), 1);
        for corner in quad {
            assert!((corner.y - 3.5).abs() < 1e-6);
        }
    }

    #[test]
    fn hit_finds_the_pierced_cell() {
        let extent = UVec3::splat(4);
        let ps = plane_at(2, 2, extent);
        let cell = slice_hit(
            extent,
            &ps,
            Vec3::new(1.2, 2.7, -1.0),
            Vec3::new(1.2, 2.7, 10.0),
        );
        assert_eq!(cell, Some(UVec3::new(1, 2, 2)));
    }

    #[test]
    fn parallel_and_out_of_range_segments_miss() {
        let extent = UVec3::splat(4);
        let ps = plane_at(2, 2, extent);
        // Parallel to the slab.
        assert_eq!(
            slice_hit(extent, &ps, Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0)),
            None
        );
        // Segment ends before the slab.
        assert_eq!(
            slice_hit(extent, &ps, Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)),
            None
        );
        // Pierces the slab outside the grid footprint.
        assert_eq!(
            slice_hit(
                extent,
                &ps,
                Vec3::new(9.0, 1.0, 0.0),
                Vec3::new(9.0, 1.0, 4.0)
            ),
            None
        );
    }

    proptest! {
        #[test]
        fn hits_are_always_inside_the_extent(
            x in -10.0f32..10.0, y in -10.0f32..10.0,
            z0 in -10.0f32..10.0, z1 in -10.0f32..10.0,
            slab in 0usize..4,
        ) {
            let extent = UVec3::splat(4);
            let ps = plane_at(2, slab, extent);
            if let Some(cell) = slice_hit(
                extent, &ps,
                Vec3::new(x, y, z0), Vec3::new(x, y, z1),
            ) {
                prop_assert!(cell.x < 4 && cell.y < 4 && cell.z < 4);
                prop_assert_eq!(cell.z as usize, ps.plane());
            }
        }
    }
}
