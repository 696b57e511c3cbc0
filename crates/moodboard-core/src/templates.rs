//! Board templates and cosmetic settings.

use crate::grid::GridDims;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Parse a `#rgb`, `#rrggbb`, or `#rrggbbaa` hex color.
    pub fn from_hex(color: &str) -> Option<Self> {
        let hex = color.strip_prefix('#')?.trim();
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                // #rgb -> #rrggbb
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::new(r, g, b, 255))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b, 255))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Format as `#rrggbb` (alpha appended only when not opaque).
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Cosmetic board settings; never consulted by layout geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardSettings {
    /// Rendered size of one grid cell, in pixels.
    pub cell_size: f64,
    /// Outer board padding, in pixels.
    pub padding: f64,
    /// Board background color.
    pub background: Color,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            padding: 20.0,
            background: Color::new(0xf5, 0xf5, 0xf5, 255),
        }
    }
}

/// A named preset seeding new boards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub grid: GridDims,
    pub settings: BoardSettings,
}

/// The built-in template library.
pub fn builtin_templates() -> Vec<BoardTemplate> {
    vec![
        BoardTemplate {
            id: "minimal-grid".to_string(),
            name: "Minimal Grid".to_string(),
            description: "Clean and simple grid layout".to_string(),
            grid: GridDims::default(),
            settings: BoardSettings::default(),
        },
        BoardTemplate {
            id: "collage".to_string(),
            name: "Collage".to_string(),
            description: "Flexible collage layout".to_string(),
            grid: GridDims::default(),
            settings: BoardSettings {
                cell_size: 30.0,
                padding: 15.0,
                background: Color::white(),
            },
        },
        BoardTemplate {
            id: "modern".to_string(),
            name: "Modern".to_string(),
            description: "Modern and professional layout".to_string(),
            grid: GridDims::default(),
            settings: BoardSettings {
                cell_size: 25.0,
                padding: 25.0,
                background: Color::new(0xf0, 0xf0, 0xf0, 255),
            },
        },
    ]
}
