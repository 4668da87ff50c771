//! Colour classification.
//!
//! Every palette entry falls into exactly one [`Classification`]. The
//! palette builder uses it to decide ordering; nothing stores it.

mod grayscale;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::parse_colour;

pub use grayscale::{is_exact_gray, is_grayscale, is_perceptual_gray, perceptual_threshold};

/// Functional colour notation: `rgb(...)`, `rgba(...)`, `hsl(...)`, `hsla(...)`.
static NOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^(?:rgba?|hsla?)\s*\(.*\)$").expect("valid regex"));

/// How a raw colour string was understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    /// Parses and has a visible hue.
    Chromatic,
    /// Looks like `rgb()`/`hsl()` but the parser rejected it, e.g. `rgb(var(--x))`.
    NonStandardNotation,
    /// Neither a colour nor colour notation.
    Unparsable,
    /// Parses and is exactly or perceptually gray.
    Grayscale,
}

impl Classification {
    /// All classifications in output order.
    pub const ALL: [Classification; 4] = [
        Classification::Chromatic,
        Classification::NonStandardNotation,
        Classification::Unparsable,
        Classification::Grayscale,
    ];

    /// Short human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Classification::Chromatic => "chromatic",
            Classification::NonStandardNotation => "notation",
            Classification::Unparsable => "unparsable",
            Classification::Grayscale => "grayscale",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Check whether a raw string is written in functional colour notation.
///
/// Purely textual: says nothing about whether the arguments are valid.
pub fn is_colour_notation(raw: &str) -> bool {
    NOTATION.is_match(raw.trim())
}

/// Classify a raw colour string.
pub fn classify(raw: &str) -> Classification {
    match parse_colour(raw) {
        Some(colour) if is_grayscale(&colour) => Classification::Grayscale,
        Some(_) => Classification::Chromatic,
        None if is_colour_notation(raw) => Classification::NonStandardNotation,
        None => Classification::Unparsable,
    }
}
