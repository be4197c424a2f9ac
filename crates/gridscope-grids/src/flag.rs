//! Flag (cell-type) grids and their renderer.

use glam::{UVec3, Vec3};
use gridscope_core::display::{DisplayMode, FlagDisplayMode};
use gridscope_core::error::{GridscopeError, Result};
use gridscope_core::plane::PlaneState;
use gridscope_core::registry::{GridKind, InspectableGrid};
use gridscope_render::{ColorMapRegistry, GeometryBuffer, Primitive};

use crate::renderer::{cell_quad, slice_cells, slice_hit, summary_line, GridRenderer};

/// A 3D grid of cell-type bitmasks.
pub struct FlagGrid {
    name: String,
    size: UVec3,
    data: Vec<u32>,
}

impl FlagGrid {
    /// Cell contains fluid.
    pub const FLUID: u32 = 1;
    /// Cell is a solid obstacle.
    pub const OBSTACLE: u32 = 2;
    /// Cell is empty (air).
    pub const EMPTY: u32 = 4;
    /// Cell is an inflow boundary.
    pub const INFLOW: u32 = 8;
    /// Cell is an outflow boundary.
    pub const OUTFLOW: u32 = 16;

    /// Creates a flag grid from cell data in x-major order.
    pub fn new(name: impl Into<String>, size: UVec3, data: Vec<u32>) -> Result<Self> {
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

    /// Creates a grid with every cell marked fluid.
    pub fn all_fluid(name: impl Into<String>, size: UVec3) -> Self {
        let cells = (size.x * size.y * size.z) as usize;
        Self {
            name: name.into(),
            size,
            data: vec![Self::FLUID; cells],
        }
    }

    /// Flags at a cell index, or 0 out of range.
    #[must_use]
    pub fn get(&self, cell: UVec3) -> u32 {
        if cell.x >= self.size.x || cell.y >= self.size.y || cell.z >= self.size.z {
            return 0;
        }
        let idx = (cell.x + cell.y * self.size.x + cell.z * self.size.x * self.size.y) as usize;
        self.data.get(idx).copied().unwrap_or(0)
    }

    /// Display color for a flag value. Boundary types win over bulk types.
    #[must_use]
    pub fn flag_color(flags: u32) -> Vec3 {
        if flags & Self::OBSTACLE != 0 {
            Vec3::splat(0.6)
        } else if flags & Self::INFLOW != 0 {
            Vec3::new(0.1, 0.7, 0.2)
        } else if flags & Self::OUTFLOW != 0 {
            Vec3::new(0.9, 0.5, 0.1)
        } else if flags & Self::FLUID != 0 {
            Vec3::new(0.2, 0.3, 0.85)
        } else if flags & Self::EMPTY != 0 {
            Vec3::splat(0.05)
        } else {
            Vec3::new(0.3, 0.0, 0.3)
        }
    }

    /// Short textual form of a flag value, for click queries.
    #[must_use]
    pub fn flag_label(flags: u32) -> &'static str {
        if flags & Self::OBSTACLE != 0 {
            "obstacle"
        } else if flags & Self::INFLOW != 0 {
            "inflow"
        } else if flags & Self::OUTFLOW != 0 {
            "outflow"
        } else if flags & Self::FLUID != 0 {
            "fluid"
        } else if flags & Self::EMPTY != 0 {
            "empty"
        } else {
            "none"
        }
    }
}

impl InspectableGrid for FlagGrid {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn kind(&self) -> GridKind {
        GridKind::Flag
    }
    fn size(&self) -> UVec3 {
        self.size
    }
}

/// Renderer for flag grids.
#[derive(Default)]
pub struct FlagRenderer;

impl GridRenderer for FlagRenderer {
    fn kind(&self) -> GridKind {
        GridKind::Flag
    }

    fn mode_count(&self) -> usize {
        FlagDisplayMode::COUNT
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
        let Some(grid) = grid.as_any().downcast_ref::<FlagGrid>() else {
            log::warn!("flag renderer handed a non-flag grid");
            return String::new();
        };
        let mode = FlagDisplayMode::from_index(mode);
        out.set_primitive(Primitive::Triangles);

        if mode == FlagDisplayMode::Standard {
            for cell in slice_cells(grid.size(), plane) {
                let color = FlagGrid::flag_color(grid.get(cell));
                out.push_quad(cell_quad(cell, plane.dim()), color, 1.0);
            }
        }

        summary_line(
            GridKind::Flag,
            grid.name(),
            grid.size(),
            plane,
            mode.label(),
            scale,
            "",
        )
    }

    fn click_query(
        &self,
        grid: &dyn InspectableGrid,
        plane: &PlaneState,
        p0: Vec3,
        p1: Vec3,
    ) -> String {
        let Some(grid) = grid.as_any().downcast_ref::<FlagGrid>() else {
            return String::new();
        };
        match slice_hit(grid.size(), plane, p0, p1) {
            Some(cell) => {
                let flags = grid.get(cell);
                format!(
                    "{} ({},{},{}): {} (0x{flags:x})",
                    grid.name(),
                    cell.x,
                    cell.y,
                    cell.z,
                    FlagGrid::flag_label(flags)
                )
            }
            None => String::new(),
        }
    }
}
