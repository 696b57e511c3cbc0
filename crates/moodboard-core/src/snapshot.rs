//! Storage-ready board representation.

use crate::grid::GridDims;
use crate::item::{BoardItem, ItemId};
use crate::templates::BoardSettings;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn default_name() -> String {
    "Untitled".to_string()
}

/// The serialized, storage-ready representation of a board.
///
/// A plain serde value: the concrete encoding is the storage backend's
/// concern. Unknown fields are ignored on load so older engines can open
/// snapshots written by newer ones; `name` and `settings` fall back to
/// defaults when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Board identifier.
    pub id: String,
    /// Board name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Virtual grid resolution.
    pub grid: GridDims,
    /// Cosmetic settings.
    #[serde(default)]
    pub settings: BoardSettings,
    /// Counter seeding the next item's z-index.
    pub next_z_index: i64,
    /// Items in insertion order.
    pub items: Vec<BoardItem>,
}

impl BoardSnapshot {
    /// Structural validation: positive grid, in-bounds non-degenerate item
    /// rectangles, unique item ids.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if !self.grid.is_valid() {
            return Err(format!(
                "grid dimensions must be at least 1x1, got {}x{}",
                self.grid.columns, self.grid.rows
            ));
        }
        let mut seen: HashSet<ItemId> = HashSet::new();
        for item in &self.items {
            if item.size.width < 1 || item.size.height < 1 {
                return Err(format!("item {} has a degenerate size", item.id()));
            }
            if item.position.col < 1 || item.position.row < 1 {
                return Err(format!("item {} position is not 1-based", item.id()));
            }
            if !self.grid.contains_rect(item.rect()) {
                return Err(format!("item {} lies outside the grid", item.id()));
            }
            if !seen.insert(item.id()) {
                return Err(format!("duplicate item id {}", item.id()));
            }
        }
        Ok(())
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
