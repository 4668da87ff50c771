//! Project configuration for swatch.
//!
//! A project is a directory with an optional `swatch.yaml` manifest. Without
//! one, defaults apply. All relative paths in the manifest are relative to
//! the project root.
//!
//! # Example
//!
//! ```ignore
//! use swatch::config::discover;
//!
//! let project = discover("./theme")?;
//! println!("Sass sources in {}", project.manifest.sass_dir(&project.root).display());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::{FrameworkConfig, Manifest, OutputConfig, OutputMode, Priority, SassConfig};
pub use scanner::{detect_source_kind, scan_directory, ScanResult, SourceKind};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "swatch.yaml";

/// A located project.
#[derive(Debug, Clone)]
pub struct Discovery {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no swatch.yaml was found).
    pub manifest: Manifest,

    /// Whether a swatch.yaml manifest was found.
    pub has_manifest: bool,
}

impl Discovery {
    /// Path of the manifest file, whether or not it exists.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILENAME)
    }
}

/// Locate a project's configuration.
///
/// Loads `swatch.yaml` from `root` if present, otherwise uses defaults.
pub fn discover(root: impl AsRef<Path>) -> Result<Discovery> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    Ok(Discovery {
        root,
        manifest,
        has_manifest,
    })
}
