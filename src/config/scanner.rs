//! File system scanner for colour sources.
//!
//! Used by `swatch init` to guess where a project's Sass files and resolved
//! framework config live.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Directories never worth descending into.
const SKIPPED_DIRS: &[&str] = &["node_modules", "target", "vendor", "dist", "build"];

/// What kind of colour source a file is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A `.scss` file.
    Sass,
    /// A resolved framework config (`tailwind*.json`, `.yaml`, `.yml`).
    FrameworkConfig,
}

/// Result of scanning a directory for colour sources.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered Sass files, sorted.
    pub sass_files: Vec<PathBuf>,
    /// Discovered framework config files, sorted.
    pub framework_configs: Vec<PathBuf>,
}

impl ScanResult {
    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.sass_files.len() + self.framework_configs.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The directory holding the most Sass files, ties broken by path order.
    pub fn primary_sass_dir(&self) -> Option<&Path> {
        let mut best: Option<(&Path, usize)> = None;
        for file in &self.sass_files {
            let Some(dir) = file.parent() else {
                continue;
            };
            let count = self
                .sass_files
                .iter()
                .filter(|f| f.parent() == Some(dir))
                .count();
            if best.map_or(true, |(_, n)| count > n) {
                best = Some((dir, count));
            }
        }
        best.map(|(dir, _)| dir)
    }
}

/// Detect the source kind from a file name.
pub fn detect_source_kind(path: &Path) -> Option<SourceKind> {
    let name = path.file_name()?.to_str()?;

    if name.ends_with(".scss") {
        return Some(SourceKind::Sass);
    }

    let is_config_ext = [".json", ".yaml", ".yml"].iter().any(|ext| name.ends_with(ext));
    if is_config_ext && name.starts_with("tailwind") {
        return Some(SourceKind::FrameworkConfig);
    }

    None
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || SKIPPED_DIRS.contains(&name))
}

/// Recursively scan a directory for colour sources.
pub fn scan_directory(root: &Path) -> ScanResult {
    let mut result = ScanResult::default();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_skipped(e))
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path().to_path_buf();
        match detect_source_kind(&path) {
            Some(SourceKind::Sass) => result.sass_files.push(path),
            Some(SourceKind::FrameworkConfig) => result.framework_configs.push(path),
            None => {}
        }
    }

    result
}
