//! End-to-end palette builds for a project directory.
//!
//! Loads both colour sources as configured by the manifest, reconciles them
//! with the configured priority, and writes the result. Every call starts
//! from the files on disk, so repeated builds never share state.

use std::path::{Path, PathBuf};

use crate::config::{discover, Manifest, OutputMode, Priority};
use crate::error::Result;
use crate::render::{write_palette, write_theme_document};
use crate::resolver::resolve_shades;
use crate::sources::{load_sass, load_shade_table};
use crate::types::{ColourEntry, Palette, PaletteBuilder, PaletteGroups};

/// Entries loaded from each source, before reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceEntries {
    pub sass: Vec<ColourEntry>,
    pub framework: Vec<ColourEntry>,
}

impl SourceEntries {
    /// Split into (primary, secondary) according to `priority`.
    pub fn by_priority(self, priority: Priority) -> (Vec<ColourEntry>, Vec<ColourEntry>) {
        match priority {
            Priority::Sass => (self.sass, self.framework),
            Priority::Framework => (self.framework, self.sass),
        }
    }

    fn builder(self, priority: Priority) -> PaletteBuilder {
        let (primary, secondary) = self.by_priority(priority);
        PaletteBuilder::new().primary(primary).secondary(secondary)
    }
}

/// Outcome of one build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// The reconciled palette.
    pub palette: Palette,
    /// Entries contributed by the Sass source before dedup.
    pub sass_count: usize,
    /// Entries contributed by the framework source before dedup.
    pub framework_count: usize,
    /// Entries classified as grayscale.
    pub grayscale_count: usize,
}

impl BuildReport {
    /// Entries dropped as duplicate names.
    pub fn duplicates(&self) -> usize {
        (self.sass_count + self.framework_count).saturating_sub(self.palette.len())
    }
}

/// A project root with its manifest.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub manifest: Manifest,
}

impl Project {
    /// Create a project from an explicit manifest.
    pub fn new(root: impl Into<PathBuf>, manifest: Manifest) -> Self {
        Self {
            root: root.into(),
            manifest,
        }
    }

    /// Load the project at `root`, reading `swatch.yaml` if present.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let discovery = discover(root)?;
        Ok(Self::new(discovery.root, discovery.manifest))
    }

    /// Load entries from both sources.
    pub fn load_sources(&self) -> Result<SourceEntries> {
        let manifest = &self.manifest;

        let sass = load_sass(
            &manifest.sass_dir(&self.root),
            &manifest.sass.files,
            &manifest.sass.variables,
        )?;

        let table = load_shade_table(
            &manifest.framework_config(&self.root),
            &manifest.framework.path,
        )?;
        let framework = resolve_shades(&table, &manifest.blacklist, &manifest.shades);

        Ok(SourceEntries { sass, framework })
    }

    /// Load, reconcile and classify, keeping the classification buckets.
    pub fn groups(&self) -> Result<PaletteGroups> {
        Ok(self.load_sources()?.builder(self.manifest.priority).groups())
    }

    /// Load and reconcile both sources.
    pub fn build(&self) -> Result<BuildReport> {
        let sources = self.load_sources()?;
        let sass_count = sources.sass.len();
        let framework_count = sources.framework.len();

        let groups = sources.builder(self.manifest.priority).groups();
        let grayscale_count = groups.grayscale.len();
        let palette = Palette::from(groups);

        Ok(BuildReport {
            palette,
            sass_count,
            framework_count,
            grayscale_count,
        })
    }

    /// Resolved output path.
    pub fn output_path(&self) -> PathBuf {
        self.manifest.output_path(&self.root)
    }

    /// Write a palette in the configured output mode. Returns the path written.
    pub fn write(&self, palette: &Palette, pretty: bool) -> Result<PathBuf> {
        let path = self.output_path();
        let pretty = pretty || self.manifest.output.pretty;

        match self.manifest.output.mode {
            OutputMode::Palette => write_palette(palette, &path, pretty)?,
            OutputMode::ThemeJson => write_theme_document(palette, &path, pretty)?,
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MANIFEST_FILENAME;
    use std::fs;
    use tempfile::tempdir;

    fn write_project(root: &Path, manifest: &str) {
        fs::write(root.join(MANIFEST_FILENAME), manifest).unwrap();
        fs::write(
            root.join("_variables.scss"),
            "$colors: (\"red\": #e3342f, \"gray\": #777, \"brand\": var(--brand));\n",
        )
        .unwrap();
        fs::write(
            root.join("tailwind.config.json"),
            r##"{"theme": {"colors": {
                "transparent": "transparent",
                "red": {"500": "#ef4444"},
                "blue": {"500": "#3b82f6", "900": "#1e3a8a"}
            }}}"##,
        )
        .unwrap();
    }

    #[test]
    fn test_build_with_sass_priority() {
        let dir = tempdir().unwrap();
        write_project(dir.path(), "priority: sass\n");

        let report = Project::open(dir.path()).unwrap().build().unwrap();
        let names: Vec<&str> = report.palette.names().collect();

        assert_eq!(names, vec!["Blue", "Red", "Brand", "Gray"]);
        assert_eq!(report.palette.get("Red").unwrap().color, "#e3342f");
        assert_eq!(report.sass_count, 3);
        assert_eq!(report.framework_count, 2);
        assert_eq!(report.grayscale_count, 1);
        assert_eq!(report.duplicates(), 1);
    }

    #[test]
    fn test_build_with_framework_priority() {
        let dir = tempdir().unwrap();
        write_project(dir.path(), "priority: framework\n");

        let report = Project::open(dir.path()).unwrap().build().unwrap();
        assert_eq!(report.palette.get("Red").unwrap().color, "#ef4444");
        assert_eq!(report.palette.get("Red").unwrap().slug, "red-500");
    }

    #[test]
    fn test_build_without_sources() {
        let dir = tempdir().unwrap();
        let report = Project::open(dir.path()).unwrap().build().unwrap();
        assert!(report.palette.is_empty());
    }

    #[test]
    fn test_write_modes() {
        let dir = tempdir().unwrap();
        write_project(dir.path(), "output:\n  path: out/theme.json\n  mode: theme-json\n");

        let project = Project::open(dir.path()).unwrap();
        let report = project.build().unwrap();
        let path = project.write(&report.palette, false).unwrap();

        assert_eq!(path, dir.path().join("out/theme.json"));
        let doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["settings"]["color"]["palette"][0]["name"], "Blue");
    }
}
