//! Difficulty levels and the ratio ranges they draw orders from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PaintMixError, PaintMixResult};
use crate::random::RandomSource;

/// How extreme generated order ratios can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Low,
    Medium,
    High,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Low, Difficulty::Medium, Difficulty::High];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Low => "low",
            Difficulty::Medium => "medium",
            Difficulty::High => "high",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An inclusive range of positive ratio values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct RatioRange {
    min: u32,
    max: u32,
}

impl RatioRange {
    /// Create a range; `min` must be at least 1 and no greater than `max`.
    pub fn new(min: u32, max: u32) -> PaintMixResult<Self> {
        if min == 0 {
            return Err(PaintMixError::InvalidArgument(format!(
                "ratio range must start at 1 or more, got {}..={}",
                min, max
            )));
        }
        if min > max {
            return Err(PaintMixError::InvalidArgument(format!(
                "ratio range is empty: {}..={}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    const fn new_unchecked(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn min(self) -> u32 {
        self.min
    }

    pub fn max(self) -> u32 {
        self.max
    }

    pub fn contains(self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// One uniform draw from the range.
    pub fn sample<R: RandomSource + ?Sized>(self, rng: &mut R) -> u32 {
        rng.gen_range(self.min, self.max)
    }
}

impl TryFrom<(u32, u32)> for RatioRange {
    type Error = PaintMixError;

    fn try_from((min, max): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl From<RatioRange> for (u32, u32) {
    fn from(range: RatioRange) -> Self {
        (range.min, range.max)
    }
}

impl fmt::Display for RatioRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Color and white ranges for one difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioRanges {
    pub color: RatioRange,
    pub white: RatioRange,
}

/// Ratio ranges for every difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTable {
    pub low: RatioRanges,
    pub medium: RatioRanges,
    pub high: RatioRanges,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            low: RatioRanges {
                color: RatioRange::new_unchecked(2, 4),
                white: RatioRange::new_unchecked(1, 2),
            },
            medium: RatioRanges {
                color: RatioRange::new_unchecked(3, 6),
                white: RatioRange::new_unchecked(1, 3),
            },
            high: RatioRanges {
                color: RatioRange::new_unchecked(4, 8),
                white: RatioRange::new_unchecked(2, 6),
            },
        }
    }
}

impl DifficultyTable {
    pub fn ranges(&self, difficulty: Difficulty) -> RatioRanges {
        match difficulty {
            Difficulty::Low => self.low,
            Difficulty::Medium => self.medium,
            Difficulty::High => self.high,
        }
    }
}
