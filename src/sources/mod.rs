//! Colour sources.
//!
//! Each source turns project files into palette entries. A source whose
//! files are missing contributes nothing rather than failing.

mod framework;
mod sass;

pub use framework::{
    load_framework_config, load_shade_table, parse_json_config, parse_yaml_config, select_path,
    shade_table,
};
pub use sass::{load_sass, parse_sass};
