//! Vector grids and their renderer.

use glam::{UVec3, Vec3};
use gridscope_core::display::{DisplayMode, VectorDisplayMode};
use gridscope_core::error::{GridscopeError, Result};
use gridscope_core::plane::PlaneState;
use gridscope_core::registry::{GridKind, InspectableGrid};
use gridscope_render::{vector_color, ColorMapRegistry, GeometryBuffer, Primitive};

use crate::renderer::{
    cell_center, cell_quad, slice_cells, slice_hit, summary_line, GridRenderer,
};

/// A 3D grid of one Vec3 per cell.
pub struct VectorGrid {
    name: String,
    size: UVec3,
    data: Vec<Vec3>,
}

impl VectorGrid {
    /// Creates a vector grid from cell data in x-major order.
    pub fn new(name: impl Into<String>, size: UVec3, data: Vec<Vec3>) -> Result<Self> {
        let expected = (size.x * size.y * size.z) as usize;
        if data.len() != expected {
            return Err(GridscopeError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            size,
            data,
        })
    }

    /// Creates a grid filled with a constant vector.
    pub fn constant(name: impl Into<String>, size: UVec3, value: Vec3) -> Self {
        let cells = (size.x * size.y * size.z) as usize;
        Self {
            name: name.into(),
            size,
            data: vec![value; cells],
        }
    }

    /// Value at a cell index, or zero out of range.
    #[must_use]
    pub fn get(&self, cell: UVec3) -> Vec3 {
        if cell.x >= self.size.x || cell.y >= self.size.y || cell.z >= self.size.z {
            return Vec3::ZERO;
        }
        let idx = (cell.x + cell.y * self.size.x + cell.z * self.size.x * self.size.y) as usize;
        self.data.get(idx).copied().unwrap_or(Vec3::ZERO)
    }

    /// Largest magnitude in the grid, for summary stats.
    #[must_use]
    pub fn max_norm(&self) -> f32 {
        self.data
            .iter()
            .map(|v| v.length())
            .filter(|l| l.is_finite())
            .fold(0.0f32, f32::max)
    }
}

impl InspectableGrid for VectorGrid {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn kind(&self) -> GridKind {
        GridKind::Vector
    }
    fn size(&self) -> UVec3 {
        self.size
    }
}

/// Renderer for vector grids.
#[derive(Default)]
pub struct VectorRenderer;

impl GridRenderer for VectorRenderer {
    fn kind(&self) -> GridKind {
        GridKind::Vector
    }

    fn mode_count(&self) -> usize {
        VectorDisplayMode::COUNT
    }

    fn rebuild(
        &self,
        grid: &dyn InspectableGrid,
        mode: usize,
        scale: f32,
        plane: &PlaneState,
        _maps: &ColorMapRegistry,
        out: &mut GeometryBuffer,
    ) -> String {
        let Some(grid) = grid.as_any().downcast_ref::<VectorGrid>() else {
            log::warn!("vector renderer handed a non-vector grid");
            return String::new();
        };
        let mode = VectorDisplayMode::from_index(mode);

        match mode {
            VectorDisplayMode::Off => {
                out.set_primitive(Primitive::Lines);
            }
            VectorDisplayMode::Standard => {
                // One cell-centered segment per cell.
                out.set_primitive(Primitive::Lines);
                for cell in slice_cells(grid.size(), plane) {
                    let v = grid.get(cell);
                    let color = vector_color(v, scale);
                    let start = cell_center(cell);
                    out.push_vertex(start, color, 1.0);
                    out.push_vertex(start + v * scale, color, 1.0);
                }
            }
            VectorDisplayMode::Staggered => {
                // One segment per component, anchored at the lower face
                // center (MAC layout).
                out.set_primitive(Primitive::Lines);
                for cell in slice_cells(grid.size(), plane) {
                    let v = grid.get(cell);
                    let center = cell_center(cell);
                    for axis in 0..3 {
                        let mut axis_unit = Vec3::ZERO;
                        axis_unit[axis] = 1.0;
                        let face = center - axis_unit * 0.5;
                        let color = vector_color(axis_unit * v[axis], scale);
                        out.push_vertex(face, color, 1.0);
                        out.push_vertex(face + axis_unit * v[axis] * scale, color, 1.0);
                    }
                }
            }
            VectorDisplayMode::TexCoord => {
                // Values read as texture coordinates: fractional parts as RGB.
                out.set_primitive(Primitive::Triangles);
                for cell in slice_cells(grid.size(), plane) {
                    let v = grid.get(cell) * scale;
                    let color = Vec3::new(
                        v.x.rem_euclid(1.0),
                        v.y.rem_euclid(1.0),
                        v.z.rem_euclid(1.0),
                    );
                    out.push_quad(cell_quad(cell, plane.dim()), color, 1.0);
                }
            }
        }

        summary_line(
            GridKind::Vector,
            grid.name(),
            grid.size(),
            plane,
            mode.label(),
            scale,
            &format!(" | max |v| {:.3}", grid.max_norm()),
        )
    }

    fn click_query(
        &self,
        grid: &dyn InspectableGrid,
        plane: &PlaneState,
        p0: Vec3,
        p1: Vec3,
    ) -> String {
        let Some(grid) = grid.as_any().downcast_ref::<VectorGrid>() else {
            return String::new();
        };
        match slice_hit(grid.size(), plane, p0, p1) {
            Some(cell) => {
                let v = grid.get(cell);
                format!(
                    "{} ({},{},{}): [{:.4}, {:.4}, {:.4}]",
                    grid.name(),
                    cell.x,
                    cell.y,
                    cell.z,
                    v.x,
                    v.y,
                    v.z
                )
            }
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slab_plane(extent: UVec3) -> PlaneState {
        let mut ps = PlaneState::new(2);
        ps.refit(extent);
        ps
    }

    #[test]
    fn max_norm_reports_largest_magnitude() {
        let size = UVec3::new(2, 1, 1);
        let grid = VectorGrid::new(
            "vel",
            size,
            vec![Vec3::new(3.0, 4.0, 0.0), Vec3::X],
        )
        .unwrap();
        assert!((grid.max_norm() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn centered_mode_emits_one_segment_per_cell() {
        let size = UVec3::new(3, 2, 2);
        let grid = VectorGrid::constant("vel", size, Vec3::X);
        let mut out = GeometryBuffer::new();
        VectorRenderer.rebuild(
            &grid,
            VectorDisplayMode::Standard.index(),
            1.0,
            &slab_plane(size),
            &ColorMapRegistry::new(),
            &mut out,
        );
        assert_eq!(out.primitive(), Primitive::Lines);
        // 3x2 slice cells, 2 vertices each.
        assert_eq!(out.len(), 3 * 2 * 2);
        assert_eq!(out.vertices().len(), out.colors().len());
    }

    #[test]
    fn staggered_mode_emits_three_segments_per_cell() {
        let size = UVec3::splat(2);
        let grid = VectorGrid::constant("vel", size, Vec3::ONE);
        let mut out = GeometryBuffer::new();
        VectorRenderer.rebuild(
            &grid,
            VectorDisplayMode::Staggered.index(),
            1.0,
            &slab_plane(size),
            &ColorMapRegistry::new(),
            &mut out,
        );
        assert_eq!(out.len(), 2 * 2 * 3 * 2);
    }

    #[test]
    fn segment_length_follows_scale() {
        let size = UVec3::new(1, 1, 1);
        let grid = VectorGrid::constant("vel", size, Vec3::Y);
        let mut out = GeometryBuffer::new();
        VectorRenderer.rebuild(
            &grid,
            VectorDisplayMode::Standard.index(),
            3.0,
            &slab_plane(size),
            &ColorMapRegistry::new(),
            &mut out,
        );
        let v = out.vertices();
        // Tip minus base along y equals |v| * scale.
        assert!((v[4] - v[1] - 3.0).abs() < 1e-6);
    }

    #[test]
    fn uv_mode_emits_quads() {
        let size = UVec3::splat(2);
        let grid = VectorGrid::constant("uv", size, Vec3::new(0.25, 0.75, 0.0));
        let mut out = GeometryBuffer::new();
        VectorRenderer.rebuild(
            &grid,
            VectorDisplayMode::TexCoord.index(),
            1.0,
            &slab_plane(size),
            &ColorMapRegistry::new(),
            &mut out,
        );
        assert_eq!(out.primitive(), Primitive::Triangles);
        assert_eq!(out.vertices().len(), 2 * 2 * 18);
        // First emitted color carries the fractional coordinates.
        assert!((out.colors()[0] - 0.25).abs() < 1e-6);
        assert!((out.colors()[1] - 0.75).abs() < 1e-6);
    }

    #[test]
    fn click_formats_components() {
        let size = UVec3::splat(2);
        let grid = VectorGrid::constant("vel", size, Vec3::new(1.0, -2.0, 0.5));
        let ps = slab_plane(size);
        let text = VectorRenderer.click_query(
            &grid,
            &ps,
            Vec3::new(0.5, 0.5, -1.0),
            Vec3::new(0.5, 0.5, 1.0),
        );
        assert_eq!(text, "vel (0,0,0): [1.0000, -2.0000, 0.5000]");
    }
}
