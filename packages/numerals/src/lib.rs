//! Numeral rendering for line numbers, occurrence markers and hand markers
//!
//! Line numbers in an edition are shown in the numeral system of the edition's
//! language. This crate provides the digit renderers and an explicit registry
//! that resolves a language code to one of them.

mod registry;
mod styles;

pub use registry::{DigitRenderer, NumeralRegistry, DEFAULT_STYLE};
pub use styles::{to_decimal_arabic, to_decimal_western, NumeralStyle};

/// Placeholder shown wherever a number cannot be rendered
pub const UNSUPPORTED_MARKER: &str = "???";
