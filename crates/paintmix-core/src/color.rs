//! RGB color value and hex string conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PaintMixError, PaintMixResult};

/// An opaque RGB color with 8-bit channels.
///
/// Serializes as a lowercase `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure white, the color every mix is diluted with.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in `[r, g, b]` order.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Relative brightness in [0, 1].
    ///
    /// Rec. 709 weights applied directly to the 8-bit channels (no gamma
    /// decoding), which is what the mixing page displays next to the label.
    pub fn luminance(self) -> f64 {
        let [r, g, b] = self.channels().map(|c| f64::from(c) / 255.0);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = PaintMixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_color(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = PaintMixError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        hex_to_color(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Parse a hex color such as `"#00b7ff"` or `"00B7FF"`.
///
/// Exactly six hex digits are required after the optional leading `#`.
pub fn hex_to_color(hex: &str) -> PaintMixResult<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    // from_str_radix alone would accept a leading '+'
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PaintMixError::InvalidFormat(format!(
            "expected 6 hex digits, got {:?}",
            hex
        )));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| PaintMixError::InvalidFormat(format!("{:?}: {}", hex, e)))
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format a color as lowercase `#rrggbb`.
pub fn color_to_hex(color: Rgb) -> String {
    color.to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!(hex_to_color("#00b7ff").unwrap(), Rgb::new(0, 183, 255));
        assert_eq!(hex_to_color("00b7ff").unwrap(), Rgb::new(0, 183, 255));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(hex_to_color("#FF3B30").unwrap(), hex_to_color("#ff3b30").unwrap());
    }

    #[test]
    fn test_parse_rejects_bad_digits() {
        assert!(matches!(
            hex_to_color("zzzzzz"),
            Err(PaintMixError::InvalidFormat(_))
        ));
        assert!(matches!(
            hex_to_color("#+fffff"),
            Err(PaintMixError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        for input in ["", "#", "#fff", "#fffffff", "##ffffff", "#ffffff00"] {
            assert!(
                matches!(hex_to_color(input), Err(PaintMixError::InvalidFormat(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii() {
        // six bytes, but not six hex digits
        assert!(hex_to_color("fféff").is_err());
    }

    #[test]
    fn test_format_is_lowercase_and_padded() {
        assert_eq!(color_to_hex(Rgb::new(0, 10, 255)), "#000aff");
        assert_eq!(Rgb::new(171, 205, 239).to_string(), "#abcdef");
    }

    #[test]
    fn test_hex_normalizes() {
        let color = hex_to_color("AbCdEf").unwrap();
        assert_eq!(color_to_hex(color), "#abcdef");
    }

    #[test]
    fn test_round_trip_every_channel_value() {
        for v in 0..=255u8 {
            for color in [
                Rgb::new(v, 0, 0),
                Rgb::new(0, v, 0),
                Rgb::new(0, 0, v),
                Rgb::new(v, 255 - v, v.wrapping_mul(37)),
            ] {
                assert_eq!(hex_to_color(&color_to_hex(color)).unwrap(), color);
                assert_eq!(hex_to_color(&color_to_hex(color).to_uppercase()).unwrap(), color);
            }
        }
    }

    #[test]
    fn test_round_trip_channel_grid() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(3) {
                for b in (0..=255u8).step_by(17) {
                    let color = Rgb::new(r, g, b);
                    assert_eq!(hex_to_color(&color.to_string()).unwrap(), color);
                }
            }
        }
    }

    #[test]
    fn test_luminance_bounds() {
        assert_eq!(Rgb::BLACK.luminance(), 0.0);
        assert!((Rgb::WHITE.luminance() - 1.0).abs() < 1e-9);
        assert!((Rgb::new(0, 255, 0).luminance() - 0.7152).abs() < 1e-9);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 149, 0)).unwrap();
        assert_eq!(json, "\"#ff9500\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(255, 149, 0));
        assert!(serde_json::from_str::<Rgb>("\"orange\"").is_err());
    }
}
