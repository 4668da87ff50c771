//! Core domain types for swatch.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `ParsedColour` - a recognised colour with RGB and HSV components
//! - `ColourEntry` - one named colour in a palette
//! - `ShadeTable` / `ShadeSelection` - framework shade data and the policy for picking shades
//! - `Palette` / `PaletteBuilder` - the reconciled, ordered output

mod colour;
mod entry;
mod palette;
mod shade;

pub use colour::{parse_colour, ParsedColour};
pub use entry::ColourEntry;
pub use palette::{
    build_palette, classify_entries, dedup, sort_by_name, split, Palette, PaletteBuilder,
    PaletteGroups,
};
pub use shade::{ShadeSelection, ShadeTable, ShadeValue, DEFAULT_SHADE};
