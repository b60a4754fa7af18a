//! Core theme types.
//!
//! This module defines the fundamental types for the theme catalog:
//! - `Rgb` - RGB triple as read from a color file
//! - `ColorValue` - a parsed color entry, either `Rgb` or the raw string
//! - `ColorSections` - section name -> key -> value
//! - `ThemeRecord` - one discovered theme with its colors

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// RGB color as written in a color file.
///
/// Channels are not clamped: `300,0,0` is kept as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u32; 3]", into = "[u32; 3]")]
pub struct Rgb {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl Rgb {
    /// Create a new color from RGB components.
    pub const fn new(r: u32, g: u32, b: u32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`; alpha is discarded.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !matches!(digits.chars().count(), 6 | 8) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u32::from_str_radix(pair, 16).ok())
        };
        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Convert to hex string (e.g., "#3daee9").
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u32; 3]> for Rgb {
    fn from([r, g, b]: [u32; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u32; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

/// A single entry of a color file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Rgb(Rgb),
    Raw(String),
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Rgb(rgb) => {
                write!(f, "{} (RGB: {},{},{})", rgb.to_hex(), rgb.r, rgb.g, rgb.b)
            }
            ColorValue::Raw(raw) => f.write_str(raw),
        }
    }
}

/// Colors of one section, keyed by lowercased key, in file order.
pub type ColorSection = IndexMap<String, ColorValue>;

/// All sections of a color file, in file order.
pub type ColorSections = IndexMap<String, ColorSection>;

/// A discovered theme.
///
/// Serialized with the field names the JSON output has always used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeRecord {
    /// Display name (the theme directory's basename)
    #[serde(rename = "Name")]
    pub name: String,
    /// Lowercased, space-to-hyphen slug of the name
    #[serde(rename = "Id")]
    pub id: String,
    /// Name with spaces and hyphens removed, lowercased
    #[serde(rename = "Normalized Name")]
    pub normalized_name: String,
    /// Synthesized `org.kde.<normalized>.desktop` identifier
    #[serde(rename = "Package")]
    pub package_id: String,
    /// Theme root directory
    #[serde(rename = "Path")]
    pub path: PathBuf,
    #[serde(rename = "Colors")]
    pub colors: ColorSections,
    /// Whether this is the active theme
    #[serde(rename = "current")]
    pub is_current: bool,
}

impl ThemeRecord {
    /// Look up a color by section and key. The key is matched case-insensitively.
    pub fn color(&self, section: &str, key: &str) -> Option<&ColorValue> {
        self.colors.get(section)?.get(&key.to_lowercase())
    }
}
