//! Color types and conversion functions for shadegen.
//!
//! Provides two value types (`Rgb`, `Hsl`) and pure conversion functions
//! between them, plus the derived metrics (brightness, relative luminance,
//! light/dark classification) used by `ColorDescriptor`. All conversions
//! are pure functions; `Hsl` uses `f64` throughout so ramp generation can
//! interpolate without accumulating 8-bit quantization error.

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit RGB color.
///
/// Serializes as a hex string `"#rrggbb"` for human-readable formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color: hue in degrees `[0, 360)`, saturation and lightness as
/// fractions in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    /// Parses a hex color string like `"#6366f1"`, `"6366f1"`, or the
    /// 3-digit shorthand `"#abc"` (case insensitive).
    ///
    /// Shorthand digits expand by repetition (`#abc` -> `#aabbcc`).
    /// Returns `ColorError::InvalidColor` for any other length or for
    /// non-hex digits.
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        match digits.len() {
            3 => {
                let r = expand_shorthand(&digits[0..1])?;
                let g = expand_shorthand(&digits[1..2])?;
                let b = expand_shorthand(&digits[2..3])?;
                Ok(Rgb { r, g, b })
            }
            6 => {
                let r = hex_pair(&digits[0..2], "red")?;
                let g = hex_pair(&digits[2..4], "green")?;
                let b = hex_pair(&digits[4..6], "blue")?;
                Ok(Rgb { r, g, b })
            }
            n => Err(ColorError::InvalidColor(format!(
                "expected 3 or 6 hex digits, got {n}"
            ))),
        }
    }

    /// Formats the color as a lowercase hex string `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parses a single shorthand hex digit and expands it (`"a"` -> `0xaa`).
fn expand_shorthand(digit: &str) -> Result<u8, ColorError> {
    u8::from_str_radix(digit, 16)
        .map(|v| v * 17)
        .map_err(|e| ColorError::InvalidColor(format!("invalid hex digit '{digit}': {e}")))
}

/// Parses a two-digit hex channel value.
fn hex_pair(pair: &str, channel: &str) -> Result<u8, ColorError> {
    u8::from_str_radix(pair, 16)
        .map_err(|e| ColorError::InvalidColor(format!("invalid {channel} component: {e}")))
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Converts RGB to HSL.
///
/// Lightness is `(max + min) / 2`; saturation is 0 for achromatic input,
/// otherwise `d / (2 - max - min)` above mid-lightness and `d / (max + min)`
/// below; hue comes from the 6-way piecewise formula on the max channel.
/// Achromatic input gets hue 0.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let r = c.r as f64 / 255.0;
    let g = c.g as f64 / 255.0;
    let b = c.b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: h * 60.0, s, l }
}

/// Converts HSL to RGB.
///
/// Hue wraps via Euclidean remainder; saturation and lightness are clamped
/// to `[0, 1]`. Channels are quantized to 8-bit with rounding.
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    let h = c.h.rem_euclid(360.0);
    let s = c.s.clamp(0.0, 1.0);
    let l = c.l.clamp(0.0, 1.0);
    let a = s * l.min(1.0 - l);
    let channel = |n: f64| -> u8 {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let v = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };
    Rgb {
        r: channel(0.0),
        g: channel(8.0),
        b: channel(4.0),
    }
}

/// Perceived brightness in `[0, 255]`: the weighted sum
/// `(299·r + 587·g + 114·b) / 1000`.
pub fn brightness(c: Rgb) -> f64 {
    (299.0 * c.r as f64 + 587.0 * c.g as f64 + 114.0 * c.b as f64) / 1000.0
}

/// Relative luminance in `[0, 1]` (gamma-corrected weighted sum).
pub fn luminance(c: Rgb) -> f64 {
    fn linearize(v: u8) -> f64 {
        let v = v as f64 / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * linearize(c.r) + 0.7152 * linearize(c.g) + 0.0722 * linearize(c.b)
}

/// Classifies a color as light when its brightness reaches the midpoint
/// of the brightness range.
pub fn is_light(c: Rgb) -> bool {
    brightness(c) >= 128.0
}
