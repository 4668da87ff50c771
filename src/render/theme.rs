//! Theme document output.
//!
//! The palette replaces `settings.color.palette` in an existing document;
//! everything else in the document is left untouched, key order included.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{json, Map, Value};

use crate::error::{Result, SwatchError};
use crate::types::Palette;

use super::write_file;

/// The minimal document created when none exists yet.
pub fn theme_skeleton() -> Value {
    json!({
        "version": 2,
        "settings": {
            "color": {
                "palette": []
            }
        }
    })
}

/// Place `palette` at `settings.color.palette` in `existing`, or in a fresh
/// skeleton if there is no document.
pub fn merge_theme_document(existing: Option<Value>, palette: &Palette) -> Result<Value> {
    let mut document = existing.unwrap_or_else(theme_skeleton);

    let palette = serde_json::to_value(palette).map_err(|e| SwatchError::Build {
        message: format!("Failed to serialize palette: {}", e),
        help: None,
    })?;

    let root = as_object(&mut document, "document")?;
    let settings = child_object(root, "settings")?;
    let color = child_object(settings, "color")?;
    color.insert("palette".to_string(), palette);

    Ok(document)
}

/// Merge the palette into the theme document at `path` and write it back.
pub fn write_theme_document(palette: &Palette, path: &Path, pretty: bool) -> Result<()> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => Some(serde_json::from_str(&content).map_err(|e| SwatchError::Parse {
            message: format!("Invalid theme document {}: {}", path.display(), e),
            help: Some("Fix or remove the file to regenerate it".to_string()),
        })?),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            return Err(SwatchError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to read theme document: {}", e),
            })
        }
    };

    let document = merge_theme_document(existing, palette)?;
    let json = if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    }
    .map_err(|e| SwatchError::Build {
        message: format!("Failed to serialize theme document: {}", e),
        help: None,
    })?;

    write_file(path, &json)
}

fn as_object<'a>(value: &'a mut Value, what: &str) -> Result<&'a mut Map<String, Value>> {
    value.as_object_mut().ok_or_else(|| SwatchError::Build {
        message: format!("Theme {} is not a JSON object", what),
        help: Some("Expected { \"settings\": { \"color\": { ... } } }".to_string()),
    })
}

/// Get `parent[key]` as an object, inserting an empty one if missing.
fn child_object<'a>(
    parent: &'a mut Map<String, Value>,
    key: &str,
) -> Result<&'a mut Map<String, Value>> {
    let child = parent
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    as_object(child, key)
}
