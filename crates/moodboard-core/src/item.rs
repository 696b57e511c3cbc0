//! Board item data model.

use crate::grid::{CellPos, CellRect, CellSize};
use crate::media::{MediaFormat, MediaRef};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for board items.
pub type ItemId = Uuid;

/// Content carried by a board item.
///
/// Media refs are opaque, stable strings produced by a
/// [`MediaSource`](crate::media::MediaSource); the engine never inspects
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Raster image.
    Image { media_ref: MediaRef },
    /// Video clip.
    Video { media_ref: MediaRef },
    /// Empty placeholder section.
    Empty,
}

impl ItemKind {
    /// Build the kind matching a resolved media file.
    pub fn from_resolved(format: MediaFormat, media_ref: MediaRef) -> Self {
        if format.is_video() {
            ItemKind::Video { media_ref }
        } else {
            ItemKind::Image { media_ref }
        }
    }

    /// The media reference, if this kind carries one.
    pub fn media_ref(&self) -> Option<&str> {
        match self {
            ItemKind::Image { media_ref } | ItemKind::Video { media_ref } => Some(media_ref),
            ItemKind::Empty => None,
        }
    }

    /// Check if this kind carries media content.
    pub fn is_media(&self) -> bool {
        !matches!(self, ItemKind::Empty)
    }
}

/// One placed element on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardItem {
    pub(crate) id: ItemId,
    /// Content kind.
    pub kind: ItemKind,
    /// Upper-left corner, 1-based grid cell.
    pub position: CellPos,
    /// Extent in grid cells, both axes >= 1.
    pub size: CellSize,
    /// Stacking order; higher draws on top. Not required unique.
    pub z_index: i64,
}

impl BoardItem {
    /// Create an item with a fresh identifier.
    pub(crate) fn new(kind: ItemKind, position: CellPos, size: CellSize, z_index: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            position,
            size,
            z_index,
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The occupied cell rectangle.
    pub fn rect(&self) -> CellRect {
        CellRect::new(self.position, self.size)
    }
}
