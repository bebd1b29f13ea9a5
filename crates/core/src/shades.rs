//! Shade-ramp generation: hue-preserving lightness sweeps in HSL space.
//!
//! A ramp is an ordered sequence of [`ColorDescriptor`]s from lightest to
//! darkest, derived from one base color. Two generation policies exist and
//! are selected explicitly by the caller; they are never merged or picked
//! silently (see [`ShadePolicy`]).

use crate::color::{hsl_to_rgb, rgb_to_hsl, Hsl};
use crate::descriptor::ColorDescriptor;
use crate::parse;

/// Minimum number of shades in any generated ramp.
///
/// Requested counts below this are raised to it; this is a hard floor,
/// not a suggestion.
pub const MIN_SHADES: usize = 10;

/// Lightness of the first (lightest) shade under [`ShadePolicy::LightToDark`].
const L_START: f64 = 0.95;
/// Lightness of the last (darkest) shade under [`ShadePolicy::LightToDark`].
const L_END: f64 = 0.10;

/// Saturation band for [`ShadePolicy::LightToDark`]. Near-gray and
/// fully-saturated bases are pulled into this band so every shade keeps a
/// visible color identity.
const SAT_MIN: f64 = 0.15;
const SAT_MAX: f64 = 0.92;

/// Maximum lightness shift under [`ShadePolicy::AroundBase`], in
/// percentage points.
const SPREAD: f64 = 40.0;

/// All recognized policy names.
const POLICY_NAMES: &[&str] = &["light-to-dark", "around-base"];

/// How a ramp's lightness values are chosen.
///
/// Both policies preserve the base hue exactly and emit shades ordered
/// lightest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadePolicy {
    /// Fixed sweep from lightness 0.95 down to 0.10, with saturation
    /// clamped to [0.15, 0.92]. The default.
    #[default]
    LightToDark,
    /// Symmetric spread of ±40 lightness points around the base color's
    /// own lightness. Saturation is left untouched.
    AroundBase,
}

impl ShadePolicy {
    /// Resolves a policy by name (`"light-to-dark"`, `"around-base"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light-to-dark" => Some(ShadePolicy::LightToDark),
            "around-base" => Some(ShadePolicy::AroundBase),
            _ => None,
        }
    }

    /// Returns this policy's canonical name.
    pub fn name(self) -> &'static str {
        match self {
            ShadePolicy::LightToDark => "light-to-dark",
            ShadePolicy::AroundBase => "around-base",
        }
    }

    /// Returns a slice of all recognized policy names.
    pub fn list_names() -> &'static [&'static str] {
        POLICY_NAMES
    }
}

/// Generates a shade ramp under the default policy.
///
/// Equivalent to [`generate_shades_with`] with [`ShadePolicy::LightToDark`].
pub fn generate_shades(base: &str, count: usize) -> Vec<ColorDescriptor> {
    generate_shades_with(base, count, ShadePolicy::default())
}

/// Generates a shade ramp from a base color string.
///
/// Returns an empty vector when `base` does not parse — the soft-failure
/// contract lets callers treat "no palette" as "nothing to render". For a
/// valid base the result always has `max(count, MIN_SHADES)` entries,
/// ordered lightest-first by construction (no re-sorting happens).
///
/// Pure and deterministic: identical inputs produce identical output.
pub fn generate_shades_with(base: &str, count: usize, policy: ShadePolicy) -> Vec<ColorDescriptor> {
    let Ok(rgb) = parse::parse(base) else {
        return Vec::new();
    };
    let base_hsl = rgb_to_hsl(rgb);
    let n = count.max(MIN_SHADES);
    match policy {
        ShadePolicy::LightToDark => light_to_dark(base_hsl, n),
        ShadePolicy::AroundBase => around_base(base_hsl, n),
    }
}

/// Fixed-range sweep: lightness from `L_START` down to `L_END` inclusive,
/// hue preserved, saturation clamped into the visibility band.
fn light_to_dark(base: Hsl, n: usize) -> Vec<ColorDescriptor> {
    let s = base.s.clamp(SAT_MIN, SAT_MAX);
    let step = (L_START - L_END) / (n - 1) as f64;
    (0..n)
        .map(|i| {
            let l = L_START - step * i as f64;
            ColorDescriptor::from_rgb(hsl_to_rgb(Hsl { h: base.h, s, l }))
        })
        .collect()
}

/// Symmetric spread around the base lightness: the middle of the ramp sits
/// at the base color, the ends at ±`SPREAD` lightness points (clamped to
/// the valid range, so very light or very dark bases saturate at the
/// boundary).
fn around_base(base: Hsl, n: usize) -> Vec<ColorDescriptor> {
    let center = (n - 1) as f64 / 2.0;
    (0..n)
        .map(|i| {
            let delta = (center - i as f64) / center * SPREAD;
            let l = (base.l + delta / 100.0).clamp(0.0, 1.0);
            ColorDescriptor::from_rgb(hsl_to_rgb(Hsl {
                h: base.h,
                s: base.s,
                l,
            }))
        })
        .collect()
}
