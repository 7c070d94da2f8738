//! Paint colors and the catalog the potion shop draws orders from.
//!
//! Paints are identified by [`PaintColor`]; display names are a separate
//! lookup so game data never depends on a UI language.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{PaintMixError, PaintMixResult};

/// A paint the player can add to a potion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Purple,
    White,
}

impl PaintColor {
    /// Every paint, rainbow order with white last.
    pub const ALL: [PaintColor; 8] = [
        PaintColor::Red,
        PaintColor::Orange,
        PaintColor::Yellow,
        PaintColor::Green,
        PaintColor::Blue,
        PaintColor::Indigo,
        PaintColor::Purple,
        PaintColor::White,
    ];

    /// Paints that can be ordered (everything except white).
    pub const NAMED: [PaintColor; 7] = [
        PaintColor::Red,
        PaintColor::Orange,
        PaintColor::Yellow,
        PaintColor::Green,
        PaintColor::Blue,
        PaintColor::Indigo,
        PaintColor::Purple,
    ];

    pub fn is_white(self) -> bool {
        self == PaintColor::White
    }

    /// Dense index into [`PaintColor::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PaintColor::Red => "red",
            PaintColor::Orange => "orange",
            PaintColor::Yellow => "yellow",
            PaintColor::Green => "green",
            PaintColor::Blue => "blue",
            PaintColor::Indigo => "indigo",
            PaintColor::Purple => "purple",
            PaintColor::White => "white",
        }
    }

    pub fn korean_name(self) -> &'static str {
        match self {
            PaintColor::Red => "빨간색",
            PaintColor::Orange => "주황색",
            PaintColor::Yellow => "노란색",
            PaintColor::Green => "초록색",
            PaintColor::Blue => "파란색",
            PaintColor::Indigo => "남색",
            PaintColor::Purple => "보라색",
            PaintColor::White => "흰색",
        }
    }
}

impl fmt::Display for PaintColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A named paint and the color it renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub color: PaintColor,
    pub rgb: Rgb,
}

impl CatalogEntry {
    pub const fn new(color: PaintColor, rgb: Rgb) -> Self {
        Self { color, rgb }
    }
}

const DEFAULT_ENTRIES: [CatalogEntry; 7] = [
    CatalogEntry::new(PaintColor::Red, Rgb::new(0xff, 0x3b, 0x30)),
    CatalogEntry::new(PaintColor::Orange, Rgb::new(0xff, 0x95, 0x00)),
    CatalogEntry::new(PaintColor::Yellow, Rgb::new(0xff, 0xd6, 0x0a)),
    CatalogEntry::new(PaintColor::Green, Rgb::new(0x34, 0xc7, 0x59)),
    CatalogEntry::new(PaintColor::Blue, Rgb::new(0x00, 0x7a, 0xff)),
    CatalogEntry::new(PaintColor::Indigo, Rgb::new(0x58, 0x56, 0xd6)),
    CatalogEntry::new(PaintColor::Purple, Rgb::new(0xaf, 0x52, 0xde)),
];

/// Ordered list of orderable paints plus the designated white.
///
/// Deserialization goes through [`ColorCatalog::new`], so a catalog can never
/// hold white as an entry or repeat a color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogFields")]
pub struct ColorCatalog {
    entries: Vec<CatalogEntry>,
    white: Rgb,
}

#[derive(Deserialize)]
struct CatalogFields {
    entries: Vec<CatalogEntry>,
    white: Rgb,
}

impl TryFrom<CatalogFields> for ColorCatalog {
    type Error = PaintMixError;

    fn try_from(fields: CatalogFields) -> Result<Self, Self::Error> {
        Self::new(fields.entries, fields.white)
    }
}

impl Default for ColorCatalog {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES.to_vec(),
            white: Rgb::WHITE,
        }
    }
}

impl ColorCatalog {
    /// Create a catalog, rejecting empty lists, white entries and duplicates.
    pub fn new(entries: Vec<CatalogEntry>, white: Rgb) -> PaintMixResult<Self> {
        let catalog = Self { entries, white };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> PaintMixResult<()> {
        if self.entries.is_empty() {
            return Err(PaintMixError::InvalidArgument(
                "color catalog must not be empty".to_string(),
            ));
        }
        let mut seen = [false; PaintColor::ALL.len()];
        for entry in &self.entries {
            if entry.color.is_white() {
                return Err(PaintMixError::InvalidArgument(
                    "white is designated separately and cannot be a catalog entry".to_string(),
                ));
            }
            if std::mem::replace(&mut seen[entry.color.index()], true) {
                return Err(PaintMixError::InvalidArgument(format!(
                    "duplicate catalog entry for {}",
                    entry.color
                )));
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn white(&self) -> Rgb {
        self.white
    }

    /// Rendered color of a paint, including white.
    pub fn rgb(&self, color: PaintColor) -> Option<Rgb> {
        if color.is_white() {
            return Some(self.white);
        }
        self.entries
            .iter()
            .find(|entry| entry.color == color)
            .map(|entry| entry.rgb)
    }

    /// Entries followed by white, the order paint buckets are laid out in.
    pub fn buckets(&self) -> impl Iterator<Item = CatalogEntry> + '_ {
        self.entries
            .iter()
            .copied()
            .chain(std::iter::once(CatalogEntry::new(PaintColor::White, self.white)))
    }
}
