//! Integer cell geometry for the board's virtual grid.
//!
//! Positions are 1-based `(col, row)` cells; sizes are whole-cell extents.
//! All bounds handling clamps rather than rejects.

use serde::{Deserialize, Serialize};

/// Default virtual grid resolution.
pub const DEFAULT_COLUMNS: u32 = 12;
/// Default virtual grid resolution.
pub const DEFAULT_ROWS: u32 = 8;

/// Fixed virtual resolution a board is divided into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    /// Number of columns.
    pub columns: u32,
    /// Number of rows.
    pub rows: u32,
}

impl Default for GridDims {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl GridDims {
    /// Create grid dimensions.
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Check that both dimensions are at least one cell.
    pub fn is_valid(&self) -> bool {
        self.columns >= 1 && self.rows >= 1
    }

    /// Clamp a size to fit the grid, with a 1x1 minimum.
    pub fn clamp_size(&self, size: CellSize) -> CellSize {
        CellSize {
            width: size.width.clamp(1, self.columns),
            height: size.height.clamp(1, self.rows),
        }
    }

    /// Clamp a position so a box of `size` stays inside the grid.
    ///
    /// Each axis clamps independently: `col` lands in
    /// `[1, columns - width + 1]`, likewise rows. An oversized box pins to
    /// column/row 1.
    pub fn clamp_pos(&self, pos: CellPos, size: CellSize) -> CellPos {
        let max_col = (self.columns + 1).saturating_sub(size.width).max(1);
        let max_row = (self.rows + 1).saturating_sub(size.height).max(1);
        CellPos {
            col: pos.col.clamp(1, max_col),
            row: pos.row.clamp(1, max_row),
        }
    }

    /// Check whether a rectangle lies fully inside the grid.
    pub fn contains_rect(&self, rect: CellRect) -> bool {
        rect.pos.col >= 1
            && rect.pos.row >= 1
            && rect.right() <= self.columns
            && rect.bottom() <= self.rows
    }
}

/// 1-based grid cell; the upper-left corner of an item's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPos {
    pub col: u32,
    pub row: u32,
}

impl CellPos {
    /// Create a cell position.
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Item extent in whole cells, both axes at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    /// Create a cell size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle of grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub pos: CellPos,
    pub size: CellSize,
}

impl CellRect {
    /// Create a rectangle from origin and extent.
    pub fn new(pos: CellPos, size: CellSize) -> Self {
        Self { pos, size }
    }

    /// Rightmost occupied column.
    pub fn right(&self) -> u32 {
        self.pos.col + self.size.width - 1
    }

    /// Bottommost occupied row.
    pub fn bottom(&self) -> u32 {
        self.pos.row + self.size.height - 1
    }

    /// Overlap test: two rectangles overlap unless one is entirely to the
    /// left, right, above, or below the other.
    pub fn overlaps(&self, other: CellRect) -> bool {
        !(self.pos.col > other.right()
            || self.right() < other.pos.col
            || self.pos.row > other.bottom()
            || self.bottom() < other.pos.row)
    }

    /// Recompute this rectangle for a new size, keeping the anchored
    /// corner/edge stationary and the result inside the grid.
    ///
    /// `new_size` must already fit the grid (see [`GridDims::clamp_size`]);
    /// growth past a boundary stops at the boundary.
    pub fn resized(self, new_size: CellSize, anchor: Anchor, grid: GridDims) -> CellRect {
        let (col, width) = if anchor.fixes_left() {
            let max_width = (grid.columns + 1).saturating_sub(self.pos.col).max(1);
            (self.pos.col, new_size.width.min(max_width))
        } else {
            let right = self.right();
            let width = new_size.width.min(right);
            (right - width + 1, width)
        };
        let (row, height) = if anchor.fixes_top() {
            let max_height = (grid.rows + 1).saturating_sub(self.pos.row).max(1);
            (self.pos.row, new_size.height.min(max_height))
        } else {
            let bottom = self.bottom();
            let height = new_size.height.min(bottom);
            (bottom - height + 1, height)
        };
        CellRect {
            pos: CellPos { col, row },
            size: CellSize { width, height },
        }
    }
}

/// The corner/edge held fixed during a resize, compass-named.
///
/// `Nw` pins the top-left corner (the item grows right/down); `Se` pins the
/// bottom-right corner (the origin shifts as the item shrinks). Edge anchors
/// pin one side; on the orthogonal axis the top/left side stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl Anchor {
    /// Whether the left side stays fixed while width changes.
    pub fn fixes_left(&self) -> bool {
        !matches!(self, Anchor::E | Anchor::Ne | Anchor::Se)
    }

    /// Whether the top side stays fixed while height changes.
    pub fn fixes_top(&self) -> bool {
        !matches!(self, Anchor::S | Anchor::Se | Anchor::Sw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(col: u32, row: u32, w: u32, h: u32) -> CellRect {
        CellRect::new(CellPos::new(col, row), CellSize::new(w, h))
    }

    #[test]
    fn test_overlap_disjoint() {
        // Side by side, touching edges do not overlap
        assert!(!rect(1, 1, 2, 2).overlaps(rect(3, 1, 2, 2)));
        assert!(!rect(1, 1, 2, 2).overlaps(rect(1, 3, 2, 2)));
    }

    #[test]
    fn test_overlap_partial_and_contained() {
        assert!(rect(1, 1, 3, 3).overlaps(rect(3, 3, 2, 2)));
        assert!(rect(1, 1, 4, 4).overlaps(rect(2, 2, 1, 1)));
        // Symmetry
        assert!(rect(2, 2, 1, 1).overlaps(rect(1, 1, 4, 4)));
    }

    #[test]
    fn test_clamp_pos_inside_grid() {
        let grid = GridDims::new(12, 8);
        let size = CellSize::new(2, 2);
        let clamped = grid.clamp_pos(CellPos::new(20, 20), size);
        assert_eq!(clamped, CellPos::new(11, 7));
        let clamped = grid.clamp_pos(CellPos::new(0, 0), size);
        assert_eq!(clamped, CellPos::new(1, 1));
    }

    #[test]
    fn test_clamp_size() {
        let grid = GridDims::new(12, 8);
        assert_eq!(
            grid.clamp_size(CellSize::new(0, 100)),
            CellSize::new(1, 8)
        );
    }

    #[test]
    fn test_resized_nw_keeps_origin() {
        let grid = GridDims::new(12, 8);
        let out = rect(5, 5, 3, 3).resized(CellSize::new(5, 4), Anchor::Nw, grid);
        assert_eq!(out, rect(5, 5, 5, 4));
    }

    #[test]
    fn test_resized_se_keeps_bottom_right() {
        let grid = GridDims::new(12, 8);
        let before = rect(5, 5, 3, 3);
        let out = before.resized(CellSize::new(2, 2), Anchor::Se, grid);
        assert_eq!(out.right(), before.right());
        assert_eq!(out.bottom(), before.bottom());
        assert_eq!(out, rect(6, 6, 2, 2));
    }

    #[test]
    fn test_resized_stops_at_boundary() {
        let grid = GridDims::new(12, 8);
        // Growing right/down from (10,6) cannot leave the grid
        let out = rect(10, 6, 2, 2).resized(CellSize::new(8, 8), Anchor::Nw, grid);
        assert_eq!(out, rect(10, 6, 3, 3));
        // Growing left/up from an anchored bottom-right corner
        let out = rect(2, 2, 2, 2).resized(CellSize::new(8, 8), Anchor::Se, grid);
        assert_eq!(out, rect(1, 1, 3, 3));
    }

    #[test]
    fn test_anchor_fixed_sides() {
        assert!(Anchor::Nw.fixes_left() && Anchor::Nw.fixes_top());
        assert!(!Anchor::Se.fixes_left() && !Anchor::Se.fixes_top());
        assert!(Anchor::N.fixes_left() && Anchor::N.fixes_top());
        assert!(Anchor::E.fixes_top() && !Anchor::E.fixes_left());
    }
}
