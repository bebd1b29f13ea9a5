#![deny(unsafe_code)]
//! Core color utilities and shade-ramp generation for shadegen.
//!
//! Provides the `Rgb`/`Hsl` value types and conversions, the general
//! color-string parser (`validate`/`normalize`), the fixed named-color
//! vocabulary, the `ColorDescriptor` data model, and the shade generator
//! with its selectable `ShadePolicy`.
//!
//! Everything here is a pure, synchronous function over immutable values;
//! the only process-wide data is the static named-color table.

pub mod color;
pub mod descriptor;
pub mod error;
pub mod named;
pub mod parse;
pub mod shades;

pub use color::{Hsl, Rgb};
pub use descriptor::ColorDescriptor;
pub use error::ColorError;
pub use parse::{normalize, validate};
pub use shades::{generate_shades, generate_shades_with, ShadePolicy, MIN_SHADES};
