//! swatch - Colour palette builder
//!
//! A library for merging colours declared in Sass variables with the colour
//! table of a utility-first CSS framework into one ordered, deduplicated
//! palette, with grayscale colours sorted last.

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod project;
pub mod render;
pub mod resolver;
pub mod sources;
pub mod types;

pub use classify::{classify, is_grayscale, Classification};
pub use config::{discover, scan_directory, Discovery, Manifest, Priority, ScanResult};
pub use error::{Result, SwatchError};
pub use project::{BuildReport, Project};
pub use render::{merge_theme_document, to_json, write_palette};
pub use resolver::{resolve_shades, slugify, title, title_case, ShadeResolver};
pub use sources::{load_sass, load_shade_table, parse_sass};
pub use types::{
    build_palette, parse_colour, ColourEntry, Palette, PaletteBuilder, PaletteGroups,
    ParsedColour, ShadeSelection, ShadeTable, ShadeValue,
};
