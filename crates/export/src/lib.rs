#![deny(unsafe_code)]
//! Export text renderers for shadegen ramps.
//!
//! This crate sits between `shadegen-core` (which generates ramps) and the
//! frontends that present them. It renders a ramp as copy-pasteable text in
//! one of two modes: CSS custom properties inside a `:root` block, or
//! Tailwind config entries under `theme.extend.colors.custom`. The exact
//! line layout of both blocks is a stable contract — consumers paste the
//! output verbatim.

use shadegen_core::ColorDescriptor;

/// All recognized format names.
const FORMAT_NAMES: &[&str] = &["vanilla", "tailwind"];

/// Which export text to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// CSS custom properties: `--color-N: #hex;` inside `:root { ... }`.
    #[default]
    Vanilla,
    /// Tailwind config entries keyed `<baseHex>-<N*100>` under
    /// `theme.extend.colors.custom`.
    Tailwind,
}

impl ExportFormat {
    /// Resolves a format by name (`"vanilla"`, `"tailwind"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "vanilla" => Some(ExportFormat::Vanilla),
            "tailwind" => Some(ExportFormat::Tailwind),
            _ => None,
        }
    }

    /// Returns this format's canonical name.
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Vanilla => "vanilla",
            ExportFormat::Tailwind => "tailwind",
        }
    }

    /// Returns a slice of all recognized format names.
    pub fn list_names() -> &'static [&'static str] {
        FORMAT_NAMES
    }
}

/// Renders a full ramp as export text.
///
/// `base_hex` keys the Tailwind entries (its `#` is stripped); the vanilla
/// mode ignores it. Shade indices are 1-based in both modes.
pub fn render(format: ExportFormat, base_hex: &str, shades: &[ColorDescriptor]) -> String {
    match format {
        ExportFormat::Vanilla => {
            let body = shades
                .iter()
                .enumerate()
                .map(|(i, shade)| format!("  --color-{}: {};", i + 1, shade.hex))
                .collect::<Vec<_>>()
                .join("\n");
            format!(":root {{\n{body}\n}}")
        }
        ExportFormat::Tailwind => {
            let base = base_hex.strip_prefix('#').unwrap_or(base_hex);
            let body = shades
                .iter()
                .enumerate()
                .map(|(i, shade)| format!("  '{}-{}': '{}',", base, (i + 1) * 100, shade.hex))
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "module.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{\n        custom: {{\n{body}\n        }}\n      }}\n    }}\n  }}\n}}"
            )
        }
    }
}

/// Renders the single-swatch copy snippet for one shade.
pub fn swatch_snippet(format: ExportFormat, hex: &str) -> String {
    match format {
        ExportFormat::Vanilla => format!("background-color: {hex};"),
        ExportFormat::Tailwind => format!("bg-[{hex}]"),
    }
}

/// Builds the page-background gradient for a ramp: three stops taken from
/// shades 3, 5, and 9 (lighter, mid, darker), falling back to `fallback`
/// wherever the ramp is too short.
pub fn background_gradient(shades: &[ColorDescriptor], fallback: &str) -> String {
    let stop = |i: usize| shades.get(i).map(|s| s.hex.as_str()).unwrap_or(fallback);
    format!(
        "linear-gradient(to bottom right, {}, {}, {})",
        stop(3),
        stop(5),
        stop(9)
    )
}
