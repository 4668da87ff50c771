//! Shade tables and the shade selection policy.
//!
//! A shade table is the raw colour configuration of a utility framework:
//! base colour names mapping either to one colour or to a set of numbered
//! shades. Order matters in both levels and is kept exactly as parsed.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// The shade picked by [`ShadeSelection::SingleDefault`].
pub const DEFAULT_SHADE: &str = "500";

/// Value of one base colour in a shade table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShadeValue {
    /// A plain colour with no shades: `"white": "#fff"`
    Single(String),
    /// Ordered shade key to colour pairs: `"blue": {"500": "#00f", ...}`
    Shades(Vec<(String, String)>),
}

impl ShadeValue {
    /// Look up a shade by exact key.
    pub fn shade(&self, key: &str) -> Option<&str> {
        match self {
            ShadeValue::Single(_) => None,
            ShadeValue::Shades(shades) => shades
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
        }
    }
}

/// An ordered mapping of base colour names to their values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShadeTable {
    entries: Vec<(String, ShadeValue)>,
}

impl ShadeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a base colour. Later duplicates are kept; resolution order
    /// follows insertion order.
    pub fn push(&mut self, base: impl Into<String>, value: ShadeValue) {
        self.entries.push((base.into(), value));
    }

    /// Append a plain colour.
    pub fn push_single(&mut self, base: impl Into<String>, colour: impl Into<String>) {
        self.push(base, ShadeValue::Single(colour.into()));
    }

    /// Append a base colour with shades, given in order.
    pub fn push_shades<K, V>(&mut self, base: impl Into<String>, shades: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let shades = shades
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.push(base, ShadeValue::Shades(shades));
    }

    /// Get the first value recorded for a base colour.
    pub fn get(&self, base: &str) -> Option<&ShadeValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == base)
            .map(|(_, v)| v)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShadeValue)> {
        self.entries.iter().map(|(name, v)| (name.as_str(), v))
    }

    /// Get the number of base colours.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ShadeValue)> for ShadeTable {
    fn from_iter<I: IntoIterator<Item = (String, ShadeValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Which shades of a base colour end up in the palette.
///
/// In `swatch.yaml` this is the `shades` key:
/// - `false` (default) -> [`SingleDefault`](Self::SingleDefault)
/// - `true` or `"all"` -> [`AllShades`](Self::AllShades)
/// - `[100, 500]` -> [`ExplicitList`](Self::ExplicitList)
/// - `{100: Light, 900: Dark}` -> [`LabeledShades`](Self::LabeledShades)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum ShadeSelection {
    /// Every shade.
    AllShades,
    /// Only the `500` shade.
    #[default]
    SingleDefault,
    /// Only the listed shade keys.
    ExplicitList(Vec<String>),
    /// Only the mapped shade keys, each named with its label.
    LabeledShades(Vec<(String, String)>),
}

impl ShadeSelection {
    /// Check whether a (non-`default`) shade key is selected.
    pub fn selects(&self, key: &str) -> bool {
        match self {
            ShadeSelection::AllShades => true,
            ShadeSelection::SingleDefault => key == DEFAULT_SHADE,
            ShadeSelection::ExplicitList(keys) => keys.iter().any(|k| k == key),
            ShadeSelection::LabeledShades(labels) => labels.iter().any(|(k, _)| k == key),
        }
    }

    /// Shade labels, present only for [`LabeledShades`](Self::LabeledShades).
    pub fn labels(&self) -> Option<&[(String, String)]> {
        match self {
            ShadeSelection::LabeledShades(labels) => Some(labels),
            _ => None,
        }
    }
}

impl TryFrom<Value> for ShadeSelection {
    type Error = String;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Null | Value::Bool(false) => Ok(ShadeSelection::SingleDefault),
            Value::Bool(true) => Ok(ShadeSelection::AllShades),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "all" | "true" => Ok(ShadeSelection::AllShades),
                "false" | "default" => Ok(ShadeSelection::SingleDefault),
                other => Err(format!(
                    "unknown shades keyword '{}' (expected true, false, a list, or a mapping)",
                    other
                )),
            },
            Value::Sequence(items) => items
                .iter()
                .map(scalar_key)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(ShadeSelection::ExplicitList),
            Value::Mapping(map) => map
                .iter()
                .map(|(k, v)| Ok((scalar_key(k)?, scalar_key(v)?)))
                .collect::<std::result::Result<Vec<_>, String>>()
                .map(ShadeSelection::LabeledShades),
            Value::Number(n) => Ok(ShadeSelection::ExplicitList(vec![n.to_string()])),
            Value::Tagged(tagged) => ShadeSelection::try_from(tagged.value),
        }
    }
}

impl From<ShadeSelection> for Value {
    fn from(selection: ShadeSelection) -> Self {
        match selection {
            ShadeSelection::AllShades => Value::Bool(true),
            ShadeSelection::SingleDefault => Value::Bool(false),
            ShadeSelection::ExplicitList(keys) => {
                Value::Sequence(keys.into_iter().map(Value::String).collect())
            }
            ShadeSelection::LabeledShades(labels) => Value::Mapping(
                labels
                    .into_iter()
                    .map(|(k, v)| (Value::String(k), Value::String(v)))
                    .collect(),
            ),
        }
    }
}

/// Normalise a YAML scalar (string, number, bool) to a shade key string.
fn scalar_key(value: &Value) -> std::result::Result<String, String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        _ => Err("shade keys and labels must be plain values".to_string()),
    }
}
