//! Board document: item collection, grid geometry, z-order counter.

use crate::grid::{Anchor, CellPos, CellSize, GridDims};
use crate::item::{BoardItem, ItemId, ItemKind};
use crate::snapshot::BoardSnapshot;
use crate::templates::{BoardSettings, BoardTemplate};
use log::debug;
use thiserror::Error;
use uuid::Uuid;

/// Maximum number of undo states to keep.
const MAX_UNDO_HISTORY: usize = 50;

/// Size for auto-placed items when the caller does not request one.
pub const DEFAULT_ITEM_SIZE: CellSize = CellSize {
    width: 2,
    height: 2,
};

/// Errors from board mutation and snapshot loading.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("item not found: {0}")]
    NotFound(ItemId),
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// A snapshot of mutable layout state for undo/redo.
#[derive(Debug, Clone)]
struct UndoState {
    items: Vec<BoardItem>,
    next_z_index: i64,
}

/// The in-memory collection of positioned items plus grid geometry and
/// z-order counter.
///
/// Every operation is a synchronous in-memory mutation; persistence and
/// media resolution go through the ports in [`crate::storage`] and
/// [`crate::media`]. The board provides no concurrency control — callers
/// embedding it in a concurrent environment must serialize access.
#[derive(Debug, Clone)]
pub struct Board {
    /// Unique board identifier.
    pub id: String,
    /// Board name.
    pub name: String,
    /// Cosmetic settings; never consulted by layout geometry.
    pub settings: BoardSettings,
    items: Vec<BoardItem>,
    grid: GridDims,
    next_z_index: i64,
    undo_stack: Vec<UndoState>,
    redo_stack: Vec<UndoState>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board on the default 12x8 grid.
    pub fn new() -> Self {
        Self::with_grid(GridDims::default())
    }

    /// Create an empty board with explicit grid dimensions.
    pub fn with_grid(grid: GridDims) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Untitled".to_string(),
            settings: BoardSettings::default(),
            items: Vec::new(),
            grid,
            next_z_index: 1,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Create an empty board seeded from a template.
    pub fn from_template(template: &BoardTemplate) -> Self {
        let mut board = Self::with_grid(template.grid);
        board.name = template.name.clone();
        board.settings = template.settings;
        board
    }

    /// The board's grid dimensions.
    pub fn grid(&self) -> GridDims {
        self.grid
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[BoardItem] {
        &self.items
    }

    /// Items in paint order (back to front, ties by insertion order).
    pub fn items_stacked(&self) -> Vec<&BoardItem> {
        let mut ordered: Vec<&BoardItem> = self.items.iter().collect();
        ordered.sort_by_key(|item| item.z_index);
        ordered
    }

    /// Get an item by id.
    pub fn get_item(&self, id: ItemId) -> Option<&BoardItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn item_mut(&mut self, id: ItemId) -> Result<&mut BoardItem, BoardError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(BoardError::NotFound(id))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the board has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Add an item to the board and return it.
    ///
    /// Without a requested position, scans for the first free rectangle of
    /// the requested size (default 2x2), rows top-to-bottom then columns
    /// left-to-right; if nothing fits, falls back to a 1x1 item at (1,1).
    /// An explicit position is clamped into the grid; overlap with existing
    /// items is permitted.
    pub fn add_item(
        &mut self,
        kind: ItemKind,
        position: Option<CellPos>,
        size: Option<CellSize>,
    ) -> &BoardItem {
        let requested = self.grid.clamp_size(size.unwrap_or(DEFAULT_ITEM_SIZE));
        let (pos, size) = match position {
            Some(p) => (self.grid.clamp_pos(p, requested), requested),
            None => match self.find_available_space(requested) {
                Some(p) => (p, requested),
                None => {
                    debug!("no free {}x{} slot, degrading to 1x1 at (1,1)", requested.width, requested.height);
                    (CellPos::new(1, 1), CellSize::new(1, 1))
                }
            },
        };
        let z_index = self.next_z_index;
        self.next_z_index += 1;
        self.items.push(BoardItem::new(kind, pos, size, z_index));
        &self.items[self.items.len() - 1]
    }

    /// First free position for a box of `size`, scanning row-major.
    pub fn find_available_space(&self, size: CellSize) -> Option<CellPos> {
        if size.width > self.grid.columns || size.height > self.grid.rows {
            return None;
        }
        for row in 1..=self.grid.rows - size.height + 1 {
            for col in 1..=self.grid.columns - size.width + 1 {
                let pos = CellPos::new(col, row);
                if self.is_space_available(pos, size) {
                    return Some(pos);
                }
            }
        }
        None
    }

    /// Check that no existing item overlaps the candidate rectangle.
    ///
    /// Pairwise scan against current items; does not consider grid
    /// boundaries — callers bounds-check separately where placement outside
    /// the grid must be rejected.
    pub fn is_space_available(&self, position: CellPos, size: CellSize) -> bool {
        let candidate = crate::grid::CellRect::new(position, size);
        !self.items.iter().any(|item| item.rect().overlaps(candidate))
    }

    /// Move an item, clamping each axis so its box stays inside the grid.
    ///
    /// No collision check: overlap after a move is permitted by design and
    /// resolved visually by stacking.
    pub fn move_item(&mut self, id: ItemId, new_position: CellPos) -> Result<(), BoardError> {
        let grid = self.grid;
        let item = self.item_mut(id)?;
        item.position = grid.clamp_pos(new_position, item.size);
        Ok(())
    }

    /// Resize an item, keeping the anchored corner/edge stationary.
    ///
    /// The size clamps to a 1x1 minimum and the resulting rectangle stays
    /// inside the grid (growth stops at the boundary).
    pub fn resize_item(
        &mut self,
        id: ItemId,
        new_size: CellSize,
        anchor: Anchor,
    ) -> Result<(), BoardError> {
        let grid = self.grid;
        let item = self.item_mut(id)?;
        let resized = item.rect().resized(grid.clamp_size(new_size), anchor, grid);
        item.position = resized.pos;
        item.size = resized.size;
        Ok(())
    }

    /// Remove an item. Removing an absent id is a no-op.
    pub fn delete_item(&mut self, id: ItemId) {
        self.items.retain(|item| item.id != id);
    }

    /// Clone an item with a fresh id, offset one cell right and down
    /// (clamped to the grid) and stacked on top.
    pub fn duplicate_item(&mut self, id: ItemId) -> Result<&BoardItem, BoardError> {
        let source = self
            .get_item(id)
            .ok_or(BoardError::NotFound(id))?
            .clone();
        let position = self.grid.clamp_pos(
            CellPos::new(
                source.position.col.saturating_add(1),
                source.position.row.saturating_add(1),
            ),
            source.size,
        );
        let z_index = self.next_z_index;
        self.next_z_index += 1;
        self.items
            .push(BoardItem::new(source.kind, position, source.size, z_index));
        Ok(&self.items[self.items.len() - 1])
    }

    /// Raise an item above every other item.
    pub fn bring_to_front(&mut self, id: ItemId) -> Result<(), BoardError> {
        let z_index = self.next_z_index;
        self.item_mut(id)?.z_index = z_index;
        self.next_z_index += 1;
        Ok(())
    }

    /// Lower an item below every other item.
    pub fn send_to_back(&mut self, id: ItemId) -> Result<(), BoardError> {
        // Minimum over the *other* items; with none the z stays put.
        let min_other = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .map(|item| item.z_index)
            .min();
        let item = self.item_mut(id)?;
        if let Some(min) = min_other {
            item.z_index = min - 1;
        }
        Ok(())
    }

    /// Produce the storage-ready representation of the current state.
    ///
    /// Pure function of the board; no I/O, no hidden state.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            grid: self.grid,
            settings: self.settings,
            next_z_index: self.next_z_index,
            items: self.items.clone(),
        }
    }

    /// Reconstruct a board from a snapshot.
    ///
    /// Fails with [`BoardError::InvalidSnapshot`] if the grid is
    /// non-positive, any item rectangle is degenerate or outside the grid,
    /// or item ids collide. A stale `next_z_index` is lifted past the
    /// highest item z so later adds stay topmost.
    pub fn from_snapshot(snapshot: BoardSnapshot) -> Result<Self, BoardError> {
        snapshot.validate().map_err(BoardError::InvalidSnapshot)?;
        let max_item_z = snapshot.items.iter().map(|item| item.z_index).max();
        let mut next_z_index = snapshot.next_z_index;
        if let Some(max) = max_item_z {
            if next_z_index <= max {
                debug!("lifting next_z_index {} past item max {}", next_z_index, max);
                next_z_index = max + 1;
            }
        }
        Ok(Self {
            id: snapshot.id,
            name: snapshot.name,
            settings: snapshot.settings,
            items: snapshot.items,
            grid: snapshot.grid,
            next_z_index,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        })
    }

    fn undo_state(&self) -> UndoState {
        UndoState {
            items: self.items.clone(),
            next_z_index: self.next_z_index,
        }
    }

    fn restore(&mut self, state: UndoState) {
        self.items = state.items;
        self.next_z_index = state.next_z_index;
    }

    /// Push current state to the undo stack (call before making changes).
    pub fn push_undo(&mut self) {
        let state = self.undo_state();
        self.undo_stack.push(state);

        // New changes invalidate the redo stack
        self.redo_stack.clear();

        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last change. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(state) = self.undo_stack.pop() {
            let current = self.undo_state();
            self.redo_stack.push(current);
            self.restore(state);
            true
        } else {
            false
        }
    }

    /// Redo the last undone change. Returns false if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if let Some(state) = self.redo_stack.pop() {
            let current = self.undo_state();
            self.undo_stack.push(current);
            self.restore(state);
            true
        } else {
            false
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
