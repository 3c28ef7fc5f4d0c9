//! Grid layout.
//!
//! Maps `(mode, columns, rows, canvas)` to the ordered cell anchors. Iteration
//! is column-major: the column index advances slowest.

use serde::{Deserialize, Serialize};

use crate::config::Mode;
use crate::coords::{Vec3, Viewport};

/// Fixed distance between neighbouring 3D cells, in scene units.
pub const SPACING_3D: f32 = 100.0;

/// One grid slot.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub column: u32,
    pub row: u32,
    /// Center of the cell. `z` is always 0; 2D cells are in canvas pixels,
    /// 3D cells are relative to the canvas center.
    pub anchor: Vec3,
}

/// Computes every cell anchor for the grid, `columns × rows` entries.
///
/// - 2D: the canvas is split evenly; each anchor is its cell's center.
/// - 3D: cells sit [`SPACING_3D`] apart. Both axes are shifted by the same
///   offset, derived from `min(columns, rows)`, so only square grids are
///   centered exactly on the origin.
pub fn layout(mode: Mode, columns: u32, rows: u32, canvas: Viewport) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(columns as usize * rows as usize);

    match mode {
        Mode::TwoD => {
            let cell_w = canvas.width / columns as f32;
            let cell_h = canvas.height / rows as f32;
            for i in 0..columns {
                for j in 0..rows {
                    let x = i as f32 * cell_w + cell_w / 2.0;
                    let y = j as f32 * cell_h + cell_h / 2.0;
                    cells.push(Cell { column: i, row: j, anchor: Vec3::new(x, y, 0.0) });
                }
            }
        }
        Mode::ThreeD => {
            let offset = offset_3d(columns, rows);
            for i in 0..columns {
                for j in 0..rows {
                    let x = i as f32 * SPACING_3D + offset;
                    let y = j as f32 * SPACING_3D + offset;
                    cells.push(Cell { column: i, row: j, anchor: Vec3::new(x, y, 0.0) });
                }
            }
        }
    }

    cells
}

/// Shared X/Y shift of the 3D grid.
#[inline]
pub fn offset_3d(columns: u32, rows: u32) -> f32 {
    let n = columns.min(rows).max(1);
    -((n - 1) as f32 * SPACING_3D) / 2.0
}
