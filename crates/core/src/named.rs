//! Fixed CSS color-name vocabulary.
//!
//! A closed table of 26 standard names mapped to canonical hex values.
//! Callers needing broader syntax coverage go through [`crate::parse`]
//! instead; this table is deliberately non-extensible.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Name -> canonical hex, initialized once on first use.
static NAMED_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("red", "#ff0000"),
        ("blue", "#0000ff"),
        ("green", "#008000"),
        ("yellow", "#ffff00"),
        ("orange", "#ffa500"),
        ("purple", "#800080"),
        ("pink", "#ffc0cb"),
        ("brown", "#a52a2a"),
        ("black", "#000000"),
        ("white", "#ffffff"),
        ("gray", "#808080"),
        ("grey", "#808080"),
        ("cyan", "#00ffff"),
        ("magenta", "#ff00ff"),
        ("lime", "#00ff00"),
        ("indigo", "#4b0082"),
        ("violet", "#ee82ee"),
        ("turquoise", "#40e0d0"),
        ("coral", "#ff7f50"),
        ("salmon", "#fa8072"),
        ("gold", "#ffd700"),
        ("silver", "#c0c0c0"),
        ("navy", "#000080"),
        ("teal", "#008080"),
        ("olive", "#808000"),
        ("maroon", "#800000"),
    ])
});

/// Case-insensitive lookup of a color name.
///
/// Returns the canonical hex value, or `None` for anything outside the
/// fixed vocabulary.
pub fn lookup(name: &str) -> Option<&'static str> {
    NAMED_COLORS
        .get(name.trim().to_ascii_lowercase().as_str())
        .copied()
}

/// Returns all recognized names, sorted for stable listing output.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = NAMED_COLORS.keys().copied().collect();
    names.sort_unstable();
    names
}
