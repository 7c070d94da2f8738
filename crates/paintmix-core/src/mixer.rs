//! Mixing a chosen color with white.
//!
//! The result channel is the weighted average
//! `(c * color_weight + 255 * white_weight) / (color_weight + white_weight)`,
//! rounded half-up in exact integer arithmetic so results never depend on
//! floating point error. A zero total leaves the chosen color unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{PaintMixError, PaintMixResult};

/// How strongly the chosen color dominates a mix.
///
/// Ordered from palest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concentration {
    /// Color fraction in [0, 0.25).
    VeryLight,
    /// Color fraction in [0.25, 0.5).
    SlightlyLight,
    /// Color fraction in [0.5, 0.75).
    Medium,
    /// Color fraction in [0.75, 1].
    Strong,
}

impl Concentration {
    /// Band for `color_weight` parts of color out of `total` parts.
    ///
    /// Compared as integers, so a fraction of exactly 0.75 is always strong.
    pub fn from_weights(color_weight: u32, total: u64) -> Self {
        if total == 0 {
            return Concentration::VeryLight;
        }
        let cw = u64::from(color_weight);
        if cw * 4 >= total * 3 {
            Concentration::Strong
        } else if cw * 2 >= total {
            Concentration::Medium
        } else if cw * 4 >= total {
            Concentration::SlightlyLight
        } else {
            Concentration::VeryLight
        }
    }

    /// Band for an already computed fraction.
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction >= 0.75 {
            Concentration::Strong
        } else if fraction >= 0.5 {
            Concentration::Medium
        } else if fraction >= 0.25 {
            Concentration::SlightlyLight
        } else {
            Concentration::VeryLight
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Concentration::Strong => "strong",
            Concentration::Medium => "medium",
            Concentration::SlightlyLight => "slightly light",
            Concentration::VeryLight => "very light",
        }
    }

    /// Label shown on the Korean-language page.
    pub fn korean_label(self) -> &'static str {
        match self {
            Concentration::Strong => "진함",
            Concentration::Medium => "중간",
            Concentration::SlightlyLight => "약간 연함",
            Concentration::VeryLight => "매우 연함",
        }
    }
}

impl fmt::Display for Concentration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A chosen color with its color:white weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixRequest {
    pub color: Rgb,
    pub color_weight: u32,
    pub white_weight: u32,
}

impl MixRequest {
    pub fn new(color: Rgb, color_weight: u32, white_weight: u32) -> Self {
        Self {
            color,
            color_weight,
            white_weight,
        }
    }

    /// Build a request from raw host input, rejecting negative or oversized
    /// weights.
    pub fn from_signed(color: Rgb, color_weight: i64, white_weight: i64) -> PaintMixResult<Self> {
        let weight = |name: &str, value: i64| {
            u32::try_from(value).map_err(|_| {
                PaintMixError::InvalidArgument(format!(
                    "{} weight must be a non-negative 32-bit integer, got {}",
                    name, value
                ))
            })
        };
        Ok(Self::new(
            color,
            weight("color", color_weight)?,
            weight("white", white_weight)?,
        ))
    }

    pub fn total(&self) -> u64 {
        u64::from(self.color_weight) + u64::from(self.white_weight)
    }

    /// Ratio as shown under the gradient marker, e.g. `"3:1"`.
    pub fn ratio_label(&self) -> String {
        format!("{}:{}", self.color_weight, self.white_weight)
    }

    pub fn mix(&self) -> MixResult {
        let total = self.total();
        if total == 0 {
            return MixResult {
                color: self.color,
                color_fraction: 0.0,
                concentration: Concentration::VeryLight,
            };
        }

        let cw = u64::from(self.color_weight);
        let ww = u64::from(self.white_weight);
        let blend = |channel: u8| -> u8 {
            let numerator = u64::from(channel) * cw + 255 * ww;
            // round half up: floor((2n + d) / 2d)
            let rounded = (2 * numerator + total) / (2 * total);
            rounded.min(255) as u8
        };

        MixResult {
            color: Rgb::from(self.color.channels().map(blend)),
            color_fraction: cw as f64 / total as f64,
            concentration: Concentration::from_weights(self.color_weight, total),
        }
    }
}

/// The outcome of mixing a color with white.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixResult {
    /// The blended color.
    pub color: Rgb,
    /// Share of the chosen color in [0, 1]; 0 when both weights are 0.
    pub color_fraction: f64,
    pub concentration: Concentration,
}

impl MixResult {
    /// Brush marker position along a chosen-color → white gradient, in
    /// percent. A pure color sits at 0 (left), pure white at 100.
    pub fn marker_percent(&self) -> u8 {
        ((1.0 - self.color_fraction) * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Chosen color share in whole percent.
    pub fn color_percent(&self) -> u8 {
        (self.color_fraction * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Mix `chosen` with white at `color_weight : white_weight`.
pub fn mix(chosen: Rgb, color_weight: u32, white_weight: u32) -> MixResult {
    MixRequest::new(chosen, color_weight, white_weight).mix()
}
