//! PaintMix Core Library
//!
//! Deterministic logic behind the PaintMix color-mixing page and its potion
//! shop minigame. Rendering is left to the host UI, which calls into this
//! crate.

pub mod color;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod mixer;
pub mod order;
pub mod palette;
pub mod random;
pub mod round;

pub use color::{color_to_hex, hex_to_color, Rgb};
pub use config::GameConfig;
pub use difficulty::{Difficulty, DifficultyTable, RatioRange, RatioRanges};
pub use error::{PaintMixError, PaintMixResult};
pub use mixer::{mix, Concentration, MixRequest, MixResult};
pub use order::{check_match, generate_order, Order, UserMix};
pub use palette::{CatalogEntry, ColorCatalog, PaintColor};
pub use random::{RandomSource, SplitMix64};
pub use round::{Round, RoundState};
