//! Utility framework configuration source.
//!
//! Works on a *resolved* framework configuration: the fully merged config
//! object dumped to JSON (or YAML). The colour table is found by a dot path
//! such as `theme.colors` and turned into a [`ShadeTable`], keeping key
//! order exactly as it appears in the file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SwatchError};
use crate::types::{ShadeTable, ShadeValue};

/// Load a resolved configuration file.
///
/// Returns `Ok(None)` when the file does not exist. `.yaml`/`.yml` files
/// are read as YAML, everything else as JSON.
pub fn load_framework_config(path: &Path) -> Result<Option<Value>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(SwatchError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to read framework config: {}", e),
            })
        }
    };

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );

    if is_yaml {
        parse_yaml_config(&content).map(Some)
    } else {
        parse_json_config(&content).map(Some)
    }
}

/// Parse a JSON configuration.
pub fn parse_json_config(content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| SwatchError::Parse {
        message: format!("Invalid framework config JSON: {}", e),
        help: Some("Dump the resolved config with JSON.stringify".to_string()),
    })
}

/// Parse a YAML configuration into the same value model as JSON.
pub fn parse_yaml_config(content: &str) -> Result<Value> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| SwatchError::Parse {
        message: format!("Invalid framework config YAML: {}", e),
        help: None,
    })?;
    Ok(yaml_to_json(yaml))
}

/// Convert YAML to JSON, stringifying non-string mapping keys (`500:`).
fn yaml_to_json(value: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64().map(Value::from).unwrap_or(Value::Null)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(map) => Value::Object(
            map.into_iter()
                .filter_map(|(k, v)| Some((yaml_key(k)?, yaml_to_json(v))))
                .collect(),
        ),
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_key(key: serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => Some(s),
        Yaml::Number(n) => Some(n.to_string()),
        Yaml::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Walk a dot path (`theme.colors`) into a config value.
///
/// An empty path returns the root.
pub fn select_path<'a>(config: &'a Value, dot_path: &str) -> Option<&'a Value> {
    dot_path
        .split('.')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .try_fold(config, |value, segment| value.get(segment))
}

/// Build a shade table from the object at `dot_path`.
///
/// Missing paths and non-object targets give an empty table. String values
/// become plain colours, objects become shades; anything else is skipped,
/// as are non-string shade values.
pub fn shade_table(config: &Value, dot_path: &str) -> ShadeTable {
    let Some(Value::Object(colours)) = select_path(config, dot_path) else {
        return ShadeTable::new();
    };

    colours
        .iter()
        .filter_map(|(base, value)| {
            let value = match value {
                Value::String(colour) => ShadeValue::Single(colour.clone()),
                Value::Object(shades) => ShadeValue::Shades(
                    shades
                        .iter()
                        .filter_map(|(key, v)| v.as_str().map(|c| (key.clone(), c.to_string())))
                        .collect(),
                ),
                _ => return None,
            };
            Some((base.clone(), value))
        })
        .collect()
}

/// Load a config file and extract its shade table in one step.
///
/// A missing file gives an empty table.
pub fn load_shade_table(path: &Path, dot_path: &str) -> Result<ShadeTable> {
    Ok(load_framework_config(path)?
        .map(|config| shade_table(&config, dot_path))
        .unwrap_or_default())
}
