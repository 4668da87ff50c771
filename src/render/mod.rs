//! Palette output.
//!
//! A palette is written either as a bare JSON array of
//! `{name, slug, color}` objects or spliced into a theme document at
//! `settings.color.palette`.

mod theme;

use std::fs;
use std::path::Path;

use crate::error::{Result, SwatchError};
use crate::types::Palette;

pub use theme::{merge_theme_document, theme_skeleton, write_theme_document};

/// Serialize a palette as a JSON array.
pub fn to_json(palette: &Palette, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(palette)
    } else {
        serde_json::to_string(palette)
    };

    json.map_err(|e| SwatchError::Build {
        message: format!("Failed to serialize palette: {}", e),
        help: None,
    })
}

/// Write a palette as a JSON array, creating parent directories.
pub fn write_palette(palette: &Palette, path: &Path, pretty: bool) -> Result<()> {
    let json = to_json(palette, pretty)?;
    write_file(path, &json)
}

/// Write `content` to `path`, creating parent directories as needed.
pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| SwatchError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    fs::write(path, content).map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write palette: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{build_palette, ColourEntry};

    fn palette() -> Palette {
        build_palette(
            vec![
                ColourEntry::new("Gray", "gray", "#888"),
                ColourEntry::new("Red", "red", "#f00"),
            ],
            vec![],
        )
    }

    #[test]
    fn test_to_json_compact() {
        assert_eq!(
            to_json(&palette(), false).unwrap(),
            r##"[{"name":"Red","slug":"red","color":"#f00"},{"name":"Gray","slug":"gray","color":"#888"}]"##
        );
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&palette(), true).unwrap();
        assert!(json.starts_with("[\n  {\n    \"name\": \"Red\""));
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&Palette::default(), false).unwrap(), "[]");
    }

    #[test]
    fn test_write_palette_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/palette.json");

        write_palette(&palette(), &path, false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed[0]["name"], "Red");
        assert_eq!(parsed[1]["slug"], "gray");
    }
}
