//! `ColorDescriptor`: one color in every representation the API exposes.

use crate::color::{self, Rgb};
use serde::{Deserialize, Serialize};

/// A single color described in hex, `rgb()`, and `hsl()` notation together
/// with its derived metrics.
///
/// All fields describe the same color; the textual forms round-trip within
/// ±1 per 8-bit channel. Descriptors are immutable values — a palette is
/// rebuilt wholesale rather than patched.
///
/// Serializes with camelCase field names (`isLight`, `isDark`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorDescriptor {
    /// Normalized lowercase `#rrggbb`.
    pub hex: String,
    /// `rgb(r, g, b)` with integer channels in `[0, 255]`.
    pub rgb: String,
    /// `hsl(h, s%, l%)` with integer degrees/percent.
    pub hsl: String,
    /// True when brightness reaches the midpoint of the brightness range.
    pub is_light: bool,
    pub is_dark: bool,
    /// Perceived brightness, rounded to an integer in `[0, 255]`.
    pub brightness: u8,
    /// Relative luminance in `[0, 1]`.
    pub luminance: f64,
}

impl ColorDescriptor {
    /// Builds a fully-populated descriptor from an RGB value.
    pub fn from_rgb(c: Rgb) -> Self {
        let hsl = color::rgb_to_hsl(c);
        // Rounding can push a hue like 359.7 up to 360; wrap it back so the
        // printed degree stays in [0, 360).
        let h = (hsl.h.round() as u32) % 360;
        let s = (hsl.s * 100.0).round() as u8;
        let l = (hsl.l * 100.0).round() as u8;
        let is_light = color::is_light(c);

        ColorDescriptor {
            hex: c.to_hex(),
            rgb: format!("rgb({}, {}, {})", c.r, c.g, c.b),
            hsl: format!("hsl({h}, {s}%, {l}%)"),
            is_light,
            is_dark: !is_light,
            brightness: color::brightness(c).round() as u8,
            luminance: color::luminance(c),
        }
    }
}
