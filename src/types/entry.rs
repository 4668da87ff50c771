//! Palette entry type.

use serde::{Deserialize, Serialize};

/// A single named colour as it appears in the output palette.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColourEntry {
    /// Human-readable label. Unique within a built palette.
    pub name: String,
    /// URL-safe identifier.
    pub slug: String,
    /// Raw colour string exactly as the source supplied it.
    pub color: String,
}

impl ColourEntry {
    /// Create a new entry.
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            color: color.into(),
        }
    }
}
