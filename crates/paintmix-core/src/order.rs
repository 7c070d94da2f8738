//! Customer orders and the exact-match rule for finished potions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::difficulty::{Difficulty, DifficultyTable};
use crate::error::{PaintMixError, PaintMixResult};
use crate::mixer::{mix, MixResult};
use crate::palette::{ColorCatalog, PaintColor};
use crate::random::RandomSource;

/// A customer's request: one named color mixed with white at a fixed ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub color: PaintColor,
    /// Catalog color of `color` when the order was placed.
    pub rgb: Rgb,
    pub color_ratio: u32,
    pub white_ratio: u32,
}

impl Order {
    /// The potion the customer expects to receive.
    pub fn target_mix(&self) -> MixResult {
        mix(self.rgb, self.color_ratio, self.white_ratio)
    }

    /// e.g. `"3:1"`.
    pub fn ratio_label(&self) -> String {
        format!("{}:{}", self.color_ratio, self.white_ratio)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} : white {}",
            self.color, self.color_ratio, self.white_ratio
        )
    }
}

/// The player's paint counts for the current round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMix {
    counts: [u32; PaintColor::ALL.len()],
}

impl UserMix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, color: PaintColor) -> u32 {
        self.counts[color.index()]
    }

    pub fn set(&mut self, color: PaintColor, count: u32) {
        self.counts[color.index()] = count;
    }

    /// Add one unit of paint and return the new count.
    pub fn increment(&mut self, color: PaintColor) -> u32 {
        let slot = &mut self.counts[color.index()];
        *slot = slot.saturating_add(1);
        *slot
    }

    /// Remove one unit of paint, stopping at zero, and return the new count.
    pub fn decrement(&mut self, color: PaintColor) -> u32 {
        let slot = &mut self.counts[color.index()];
        *slot = slot.saturating_sub(1);
        *slot
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    pub fn clear(&mut self) {
        self.counts = [0; PaintColor::ALL.len()];
    }

    /// Counts for every paint, white last.
    pub fn iter(&self) -> impl Iterator<Item = (PaintColor, u32)> + '_ {
        PaintColor::ALL.into_iter().map(|color| (color, self.count(color)))
    }
}

impl FromIterator<(PaintColor, u32)> for UserMix {
    fn from_iter<I: IntoIterator<Item = (PaintColor, u32)>>(iter: I) -> Self {
        let mut user_mix = UserMix::new();
        for (color, count) in iter {
            user_mix.set(color, count);
        }
        user_mix
    }
}

/// Draw a new order: a uniform catalog color, then a color ratio, then a
/// white ratio, each from `rng` exactly once.
pub fn generate_order<R: RandomSource + ?Sized>(
    catalog: &ColorCatalog,
    table: &DifficultyTable,
    difficulty: Difficulty,
    rng: &mut R,
) -> PaintMixResult<Order> {
    if catalog.is_empty() {
        return Err(PaintMixError::InvalidArgument(
            "cannot generate an order from an empty catalog".to_string(),
        ));
    }

    let entry = catalog.entries()[rng.choose_index(catalog.len())];
    let ranges = table.ranges(difficulty);
    let color_ratio = ranges.color.sample(rng);
    let white_ratio = ranges.white.sample(rng);

    let order = Order {
        color: entry.color,
        rgb: entry.rgb,
        color_ratio,
        white_ratio,
    };
    log::debug!("Generated {} order: {}", difficulty, order);
    Ok(order)
}

/// Whether `user_mix` fills `order` exactly.
///
/// The ordered color and white must match their ratios and no other paint may
/// be present, even if the ordered proportions are otherwise right.
pub fn check_match(order: &Order, user_mix: &UserMix) -> bool {
    let others: u64 = user_mix
        .iter()
        .filter(|(color, _)| *color != order.color && !color.is_white())
        .map(|(_, count)| u64::from(count))
        .sum();

    user_mix.count(order.color) == order.color_ratio
        && user_mix.count(PaintColor::White) == order.white_ratio
        && others == 0
}
