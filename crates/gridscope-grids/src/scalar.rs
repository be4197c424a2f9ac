//! Scalar grids and their renderer.

use glam::{UVec3, Vec3};
use gridscope_core::display::{DisplayMode, ScalarDisplayMode};
use gridscope_core::error::{GridscopeError, Result};
use gridscope_core::plane::PlaneState;
use gridscope_core::registry::{GridKind, InspectableGrid};
use gridscope_render::{ColorMapRegistry, GeometryBuffer, Primitive};

use crate::renderer::{
    cell_quad, slice_cells, slice_hit, summary_line, GridRenderer,
};

/// A 3D grid of one float per cell.
pub struct ScalarGrid {
    name: String,
    size: UVec3,
    data: Vec<f32>,
}

impl ScalarGrid {
    /// Creates a scalar grid from cell data in x-major order.
    pub fn new(name: impl Into<String>, size: UVec3, data: Vec<f32>) -> Result<Self> {
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

    /// Creates a grid filled with a constant value.
    pub fn constant(name: impl Into<String>, size: UVec3, value: f32) -> Self {
        let cells = (size.x * size.y * size.z) as usize;
        Self {
            name: name.into(),
            size,
            data: vec![value; cells],
        }
    }

    /// Value at a cell index, or 0.0 out of range.
    #[must_use]
    pub fn get(&self, cell: UVec3) -> f32 {
        if cell.x >= self.size.x || cell.y >= self.size.y || cell.z >= self.size.z {
            return 0.0;
        }
        let idx = (cell.x + cell.y * self.size.x + cell.z * self.size.x * self.size.y) as usize;
        self.data.get(idx).copied().unwrap_or(0.0)
    }

    /// Largest absolute value in the grid, for summary stats.
    #[must_use]
    pub fn max_abs(&self) -> f32 {
        self.data
            .iter()
            .filter(|v| v.is_finite())
            .fold(0.0f32, |acc, v| acc.max(v.abs()))
    }
}

impl InspectableGrid for ScalarGrid {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn kind(&self) -> GridKind {
        GridKind::Scalar
    }
    fn size(&self) -> UVec3 {
        self.size
    }
}

/// Renderer for scalar grids.
///
/// Color map names come from the viewer options at construction time.
pub struct ScalarRenderer {
    diverging_map: String,
    ramp_map: String,
}

impl ScalarRenderer {
    /// Creates a renderer using the given color maps.
    pub fn new(diverging_map: impl Into<String>, ramp_map: impl Into<String>) -> Self {
        Self {
            diverging_map: diverging_map.into(),
            ramp_map: ramp_map.into(),
        }
    }

    /// Whether a cell straddles the zero level set on the current slice.
    fn crosses_zero(grid: &ScalarGrid, cell: UVec3, dim: usize) -> bool {
        let here = grid.get(cell);
        let (u_axis, v_axis) = crate::renderer::slice_axes(dim);
        for axis in [u_axis, v_axis] {
            for offset in [-1i64, 1] {
                let coord = i64::from(cell[axis]) + offset;
                if coord < 0 || coord >= i64::from(grid.size()[axis]) {
                    continue;
                }
                let mut neighbor = cell;
                neighbor[axis] = coord as u32;
                if (grid.get(neighbor) < 0.0) != (here < 0.0) {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for ScalarRenderer {
    fn default() -> Self {
        Self::new("coolwarm", "grayscale")
    }
}

impl GridRenderer for ScalarRenderer {
    fn kind(&self) -> GridKind {
        GridKind::Scalar
    }

    fn mode_count(&self) -> usize {
        ScalarDisplayMode::COUNT
    }

    fn rebuild(
        &self,
        grid: &dyn InspectableGrid,
        mode: usize,
        scale: f32,
        plane: &PlaneState,
        maps: &ColorMapRegistry,
        out: &mut GeometryBuffer,
    ) -> String {
        let Some(grid) = grid.as_any().downcast_ref::<ScalarGrid>() else {
            log::warn!("scalar renderer handed a non-scalar grid");
            return String::new();
        };
        let mode = ScalarDisplayMode::from_index(mode);
        out.set_primitive(Primitive::Triangles);

        let diverging = maps.get_or_default(&self.diverging_map);
        let ramp = maps.get_or_default(&self.ramp_map);

        match mode {
            ScalarDisplayMode::Off => {}
            ScalarDisplayMode::Standard | ScalarDisplayMode::Levelset => {
                for cell in slice_cells(grid.size(), plane) {
                    let v = grid.get(cell) * scale;
                    let c = v.clamp(-1.0, 1.0);
                    let t = if mode == ScalarDisplayMode::Standard {
                        0.5 + 0.5 * c
                    } else {
                        // Level sets keep the sign split but with a sharper
                        // transfer, so the scaled distance stays readable.
                        0.5 + 0.5 * c.signum() * c.abs().sqrt()
                    };
                    out.push_quad(cell_quad(cell, plane.dim()), diverging.sample(t), 1.0);
                }
            }
            ScalarDisplayMode::ShadeVol => {
                for cell in slice_cells(grid.size(), plane) {
                    let brightness = (grid.get(cell) * scale).abs().clamp(0.0, 1.0);
                    out.push_quad(cell_quad(cell, plane.dim()), ramp.sample(brightness), 1.0);
                }
            }
            ScalarDisplayMode::ShadeSurf => {
                for cell in slice_cells(grid.size(), plane) {
                    if Self::crosses_zero(grid, cell, plane.dim()) {
                        out.push_quad(cell_quad(cell, plane.dim()), Vec3::splat(0.7), 1.0);
                    }
                }
            }
        }

        summary_line(
            GridKind::Scalar,
            grid.name(),
            grid.size(),
            plane,
            mode.label(),
            scale,
            &format!(" | max {:.3}", grid.max_abs()),
        )
    }

    fn click_query(
        &self,
        grid: &dyn InspectableGrid,
        plane: &PlaneState,
        p0: Vec3,
        p1: Vec3,
    ) -> String {
        let Some(grid) = grid.as_any().downcast_ref::<ScalarGrid>() else {
            return String::new();
        };
        match slice_hit(grid.size(), plane, p0, p1) {
            Some(cell) => format!(
                "{} ({},{},{}): {:.5}",
                grid.name(),
                cell.x,
                cell.y,
                cell.z,
                grid.get(cell)
            ),
            None => String::new(),
        }
    }
}
