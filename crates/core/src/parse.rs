//! General color-string parsing: hex, named colors, `rgb()`/`hsl()` notation.
//!
//! [`parse`] is the fallible inner entry point; [`validate`] and
//! [`normalize`] are the soft-failure wrappers the generator and external
//! callers use — they never propagate errors.

use crate::color::{hsl_to_rgb, Hsl, Rgb};
use crate::descriptor::ColorDescriptor;
use crate::error::ColorError;
use crate::named;

/// Parses a color string under any supported syntax.
///
/// Supported forms, tried in order:
/// - `#rgb` / `#rrggbb` hex (also accepted without the `#`),
/// - `rgb(r, g, b)` with integer channels in `[0, 255]`,
/// - `hsl(h, s%, l%)` with degrees and percentages (`%` optional),
/// - the fixed color-name vocabulary from [`crate::named`].
///
/// Alpha syntaxes (`rgba()`, `hsla()`, 4/8-digit hex) are rejected: the
/// descriptor model has no alpha channel to carry them.
pub fn parse(input: &str) -> Result<Rgb, ColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorError::EmptyInput);
    }
    if trimmed.starts_with('#') {
        return Rgb::from_hex(trimmed);
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("rgb") {
        return parse_rgb_func(&lower);
    }
    if lower.starts_with("hsl") {
        return parse_hsl_func(&lower);
    }
    if let Some(hex) = named::lookup(&lower) {
        return Rgb::from_hex(hex);
    }
    // Bare hex without '#' ("fff", "6366f1").
    if matches!(lower.len(), 3 | 6) && lower.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Rgb::from_hex(&lower);
    }

    Err(ColorError::InvalidColor(trimmed.to_string()))
}

/// Returns whether the input parses as a recognizable color.
///
/// Never errors and has no side effect.
pub fn validate(input: &str) -> bool {
    parse(input).is_ok()
}

/// Parses any supported color syntax into a fully-populated descriptor.
///
/// Returns `None` when the input does not parse. The descriptor's hex is
/// always the `#`-prefixed 6-digit form, including for shorthand input.
pub fn normalize(input: &str) -> Option<ColorDescriptor> {
    parse(input).ok().map(ColorDescriptor::from_rgb)
}

fn parse_rgb_func(input: &str) -> Result<Rgb, ColorError> {
    let body = input
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ColorError::InvalidColor(input.to_string()))?;
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ColorError::InvalidColor(format!(
            "rgb() takes 3 components, got {}",
            parts.len()
        )));
    }
    let channel = |part: &str| {
        part.parse::<u8>()
            .map_err(|_| ColorError::InvalidColor(format!("invalid rgb() channel '{part}'")))
    };
    Ok(Rgb {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
    })
}

fn parse_hsl_func(input: &str) -> Result<Rgb, ColorError> {
    let body = input
        .strip_prefix("hsl(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ColorError::InvalidColor(input.to_string()))?;
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ColorError::InvalidColor(format!(
            "hsl() takes 3 components, got {}",
            parts.len()
        )));
    }
    let h = parts[0]
        .parse::<f64>()
        .ok()
        .filter(|h| h.is_finite())
        .ok_or_else(|| ColorError::InvalidColor(format!("invalid hsl() hue '{}'", parts[0])))?;
    let s = percent(parts[1])?;
    let l = percent(parts[2])?;
    Ok(hsl_to_rgb(Hsl { h, s, l }))
}

/// Parses a percentage component (`"84%"` or bare `"84"`) into a fraction.
fn percent(part: &str) -> Result<f64, ColorError> {
    let digits = part.strip_suffix('%').unwrap_or(part).trim_end();
    let v = digits
        .parse::<f64>()
        .map_err(|_| ColorError::InvalidColor(format!("invalid percentage '{part}'")))?;
    if !(0.0..=100.0).contains(&v) {
        return Err(ColorError::InvalidColor(format!(
            "percentage '{part}' out of [0, 100]"
        )));
    }
    Ok(v / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate --

    #[test]
    fn validate_rejects_empty_and_whitespace() {
        assert!(!validate(""));
        assert!(!validate("   "));
        assert!(!validate("\t\n"));
    }

    #[test]
    fn validate_accepts_hex_forms() {
        assert!(validate("#6366f1"));
        assert!(validate("#abc"));
        assert!(validate("6366f1"));
        assert!(validate("fff"));
        assert!(validate("  #FFF  "));
    }

    #[test]
    fn validate_accepts_functional_notation() {
        assert!(validate("rgb(128,0,128)"));
        assert!(validate("rgb(128, 0, 128)"));
        assert!(validate("RGB(0, 0, 0)"));
        assert!(validate("hsl(240, 100%, 50%)"));
        assert!(validate("hsl(240, 100, 50)"));
    }

    #[test]
    fn validate_accepts_named_colors() {
        assert!(validate("purple"));
        assert!(validate("Teal"));
    }

    #[test]
    fn validate_rejects_malformed_input() {
        assert!(!validate("#zzz"));
        assert!(!validate("not-a-color"));
        assert!(!validate("rgb(300, 0, 0)"));
        assert!(!validate("rgb(-1, 0, 0)"));
        assert!(!validate("rgb(1, 2)"));
        assert!(!validate("hsl(240, 150%, 50%)"));
        assert!(!validate("hsl(NaN, 50%, 50%)"));
    }

    #[test]
    fn validate_rejects_alpha_syntaxes() {
        assert!(!validate("rgba(0, 0, 0, 0.5)"));
        assert!(!validate("hsla(240, 50%, 50%, 1)"));
        assert!(!validate("#ff00ff80"));
    }

    // -- parse --

    #[test]
    fn parse_empty_input_yields_empty_input_error() {
        assert!(matches!(parse("  "), Err(ColorError::EmptyInput)));
    }

    #[test]
    fn parse_unknown_input_yields_invalid_color() {
        assert!(matches!(
            parse("not-a-color"),
            Err(ColorError::InvalidColor(_))
        ));
    }

    #[test]
    fn parse_rgb_notation_matches_hex() {
        assert_eq!(
            parse("rgb(128, 0, 128)").unwrap(),
            parse("#800080").unwrap()
        );
    }

    #[test]
    fn parse_hsl_notation_pure_blue() {
        let c = parse("hsl(240, 100%, 50%)").unwrap();
        assert_eq!(c, Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn parse_hsl_wraps_hue_outside_360() {
        assert_eq!(
            parse("hsl(600, 100%, 50%)").unwrap(),
            parse("hsl(240, 100%, 50%)").unwrap()
        );
        assert_eq!(
            parse("hsl(-120, 100%, 50%)").unwrap(),
            parse("hsl(240, 100%, 50%)").unwrap()
        );
    }

    #[test]
    fn parse_named_color_resolves_to_canonical_hex() {
        let c = parse("purple").unwrap();
        assert_eq!(c.to_hex(), "#800080");
    }

    // -- normalize --

    #[test]
    fn normalize_returns_none_for_invalid_input() {
        assert!(normalize("").is_none());
        assert!(normalize("#zzz").is_none());
        assert!(normalize("notacolor").is_none());
    }

    #[test]
    fn normalize_expands_shorthand_hex() {
        let d = normalize("#abc").unwrap();
        assert_eq!(d.hex, "#aabbcc");
    }

    #[test]
    fn normalize_lowercases_hex() {
        let d = normalize("#AABBCC").unwrap();
        assert_eq!(d.hex, "#aabbcc");
    }

    #[test]
    fn normalize_populates_all_representations() {
        let d = normalize("purple").unwrap();
        assert_eq!(d.hex, "#800080");
        assert_eq!(d.rgb, "rgb(128, 0, 128)");
        assert_eq!(d.hsl, "hsl(300, 100%, 25%)");
        assert!(d.is_dark);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn validate_agrees_with_parse(input in ".{0,24}") {
                prop_assert_eq!(validate(&input), parse(&input).is_ok());
            }

            #[test]
            fn normalize_hex_round_trips_case_insensitively(
                r in any::<u8>(),
                g in any::<u8>(),
                b in any::<u8>(),
            ) {
                let hex = Rgb { r, g, b }.to_hex();
                let upper = hex.to_ascii_uppercase();
                let d = normalize(&upper).unwrap();
                prop_assert_eq!(d.hex, hex);
            }

            #[test]
            fn rgb_notation_round_trips(
                r in any::<u8>(),
                g in any::<u8>(),
                b in any::<u8>(),
            ) {
                let input = format!("rgb({r}, {g}, {b})");
                let parsed = parse(&input).unwrap();
                prop_assert_eq!(parsed, Rgb { r, g, b });
            }
        }
    }
}
