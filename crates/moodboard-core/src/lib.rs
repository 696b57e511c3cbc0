//! MoodBoard Core Library
//!
//! Platform-agnostic grid board layout engine and data model for the
//! mood-board editor: item placement, collision scanning, drag/resize
//! translation, z-ordering, and snapshot persistence ports.

pub mod board;
pub mod grid;
pub mod interaction;
pub mod item;
pub mod media;
pub mod snapshot;
pub mod storage;
pub mod templates;

pub use board::{Board, BoardError, DEFAULT_ITEM_SIZE};
pub use grid::{Anchor, CellPos, CellRect, CellSize, GridDims};
pub use interaction::{InteractionController, cell_at};
pub use item::{BoardItem, ItemId, ItemKind};
pub use media::{DataUrlSource, FileMediaSource, MediaError, MediaFormat, MediaRef, MediaSource};
pub use snapshot::BoardSnapshot;
pub use storage::{
    AutoSaveManager, FileStorage, LAST_BOARD_KEY, MemoryStorage, Storage, StorageError,
};
pub use templates::{BoardSettings, BoardTemplate, Color, builtin_templates};
