//! Continuous-to-grid coordinate mapping.

use crate::grid::{CellPos, GridDims};
use kurbo::{Point, Size};

/// Map a pixel-space point within a viewport to its 1-based grid cell.
///
/// `col = floor(x / (viewport.width / columns)) + 1`, likewise for rows;
/// points outside the viewport clamp into the grid so a stray pointer never
/// produces an invalid cell.
pub fn cell_at(point: Point, viewport: Size, grid: GridDims) -> CellPos {
    let cell_width = viewport.width / grid.columns as f64;
    let cell_height = viewport.height / grid.rows as f64;
    let col = (point.x / cell_width).floor() as i64 + 1;
    let row = (point.y / cell_height).floor() as i64 + 1;
    CellPos {
        col: col.clamp(1, grid.columns as i64) as u32,
        row: row.clamp(1, grid.rows as i64) as u32,
    }
}
