//! Pointer-to-grid interaction state.
//!
//! Keeps UI gesture state apart from the pure board data: the controller
//! tracks selection, hover, and at most one active drag/resize session,
//! and translates continuous pointer movement into the engine's discrete
//! `move_item`/`resize_item` calls. No rendering, no event loop.

mod pointer;
mod session;

pub use pointer::cell_at;
pub use session::{DragSession, ResizeSession};

use crate::board::{Board, BoardError};
use crate::grid::Anchor;
use crate::item::ItemId;
use kurbo::{Point, Size};

/// The active gesture, if any.
#[derive(Debug, Clone)]
enum Gesture {
    Drag(DragSession),
    Resize(ResizeSession),
}

/// Tracks selection, hover, and the active gesture for one board view.
#[derive(Debug, Clone)]
pub struct InteractionController {
    /// Viewport size in pixels.
    viewport: Size,
    selected: Option<ItemId>,
    hovered: Option<ItemId>,
    gesture: Option<Gesture>,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    /// Create a controller with a default viewport.
    pub fn new() -> Self {
        Self {
            viewport: Size::new(800.0, 600.0),
            selected: None,
            hovered: None,
            gesture: None,
        }
    }

    /// Set the viewport size.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Size::new(width, height);
    }

    /// Select an item (clears the previous selection).
    pub fn select(&mut self, id: ItemId) {
        self.selected = Some(id);
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected item, if any.
    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    /// Check if an item is selected.
    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected == Some(id)
    }

    /// Set the hovered item.
    pub fn set_hovered(&mut self, id: Option<ItemId>) {
        self.hovered = id;
    }

    /// The hovered item, if any.
    pub fn hovered(&self) -> Option<ItemId> {
        self.hovered
    }

    /// Check if a gesture is in progress.
    pub fn is_gesturing(&self) -> bool {
        self.gesture.is_some()
    }

    /// Drop any state referring to items no longer on the board.
    pub fn prune(&mut self, board: &Board) {
        if let Some(id) = self.selected {
            if board.get_item(id).is_none() {
                self.selected = None;
            }
        }
        if let Some(id) = self.hovered {
            if board.get_item(id).is_none() {
                self.hovered = None;
            }
        }
        let stale = match &self.gesture {
            Some(Gesture::Drag(s)) => board.get_item(s.item()).is_none(),
            Some(Gesture::Resize(s)) => board.get_item(s.item()).is_none(),
            None => false,
        };
        if stale {
            self.gesture = None;
        }
    }

    /// Begin dragging an item grabbed at `pointer`. Replaces any active
    /// gesture and selects the item.
    pub fn begin_drag(
        &mut self,
        board: &Board,
        id: ItemId,
        pointer: Point,
    ) -> Result<(), BoardError> {
        let item = board.get_item(id).ok_or(BoardError::NotFound(id))?;
        let grab = cell_at(pointer, self.viewport, board.grid());
        self.selected = Some(id);
        self.gesture = Some(Gesture::Drag(DragSession::new(id, item.position, grab)));
        Ok(())
    }

    /// Move the dragged item to follow the pointer. Without an active drag
    /// this is a no-op.
    pub fn update_drag(&mut self, board: &mut Board, pointer: Point) -> Result<(), BoardError> {
        let Some(Gesture::Drag(session)) = &self.gesture else {
            return Ok(());
        };
        let cell = cell_at(pointer, self.viewport, board.grid());
        board.move_item(session.item(), session.target_origin(cell))
    }

    /// Finish the active drag.
    pub fn end_drag(&mut self) {
        if matches!(self.gesture, Some(Gesture::Drag(_))) {
            self.gesture = None;
        }
    }

    /// Begin resizing an item from the handle opposite `anchor`. Replaces
    /// any active gesture and selects the item.
    pub fn begin_resize(
        &mut self,
        board: &Board,
        id: ItemId,
        anchor: Anchor,
    ) -> Result<(), BoardError> {
        if board.get_item(id).is_none() {
            return Err(BoardError::NotFound(id));
        }
        self.selected = Some(id);
        self.gesture = Some(Gesture::Resize(ResizeSession::new(id, anchor)));
        Ok(())
    }

    /// Resize the item so the dragged side follows the pointer. Without an
    /// active resize this is a no-op.
    pub fn update_resize(&mut self, board: &mut Board, pointer: Point) -> Result<(), BoardError> {
        let Some(Gesture::Resize(session)) = &self.gesture else {
            return Ok(());
        };
        let id = session.item();
        let item = board.get_item(id).ok_or(BoardError::NotFound(id))?;
        let cell = cell_at(pointer, self.viewport, board.grid());
        let new_size = session.target_size(item.rect(), cell);
        board.resize_item(id, new_size, session.anchor())
    }

    /// Finish the active resize.
    pub fn end_resize(&mut self) {
        if matches!(self.gesture, Some(Gesture::Resize(_))) {
            self.gesture = None;
        }
    }
}
