//! Drag and resize gesture sessions.
//!
//! A session captures the geometry fixed at press time and turns each
//! pointer cell into a target for the engine's discrete mutation calls.

use crate::grid::{Anchor, CellPos, CellRect, CellSize};
use crate::item::ItemId;

/// An in-progress drag, preserving the grab offset so the item does not
/// jump to the pointer.
#[derive(Debug, Clone)]
pub struct DragSession {
    item: ItemId,
    /// Pointer cell minus item origin at press time.
    grab_offset: (i64, i64),
}

impl DragSession {
    /// Start a drag on an item grabbed at `grab`.
    pub fn new(item: ItemId, origin: CellPos, grab: CellPos) -> Self {
        Self {
            item,
            grab_offset: (
                grab.col as i64 - origin.col as i64,
                grab.row as i64 - origin.row as i64,
            ),
        }
    }

    /// The item being dragged.
    pub fn item(&self) -> ItemId {
        self.item
    }

    /// Target origin for the current pointer cell. The engine clamps the
    /// result into the grid, so this only keeps the cell 1-based.
    pub fn target_origin(&self, cell: CellPos) -> CellPos {
        CellPos {
            col: (cell.col as i64 - self.grab_offset.0).max(1) as u32,
            row: (cell.row as i64 - self.grab_offset.1).max(1) as u32,
        }
    }
}

/// An in-progress resize from one of the 8 compass handles.
#[derive(Debug, Clone)]
pub struct ResizeSession {
    item: ItemId,
    anchor: Anchor,
}

impl ResizeSession {
    /// Start a resize with the given fixed anchor.
    pub fn new(item: ItemId, anchor: Anchor) -> Self {
        Self { item, anchor }
    }

    /// The item being resized.
    pub fn item(&self) -> ItemId {
        self.item
    }

    /// The fixed corner/edge.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Desired size so the dragged side lands on the pointer cell. Edge
    /// anchors leave the orthogonal axis untouched.
    pub fn target_size(&self, rect: CellRect, cell: CellPos) -> CellSize {
        let width = match self.anchor {
            Anchor::N | Anchor::S => rect.size.width,
            a if a.fixes_left() => (cell.col as i64 - rect.pos.col as i64 + 1).max(1) as u32,
            _ => (rect.right() as i64 - cell.col as i64 + 1).max(1) as u32,
        };
        let height = match self.anchor {
            Anchor::E | Anchor::W => rect.size.height,
            a if a.fixes_top() => (cell.row as i64 - rect.pos.row as i64 + 1).max(1) as u32,
            _ => (rect.bottom() as i64 - cell.row as i64 + 1).max(1) as u32,
        };
        CellSize { width, height }
    }
}
