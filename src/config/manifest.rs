//! Project manifest (swatch.yaml) parsing.
//!
//! The manifest says where each colour source lives, how framework shades
//! are picked, which source wins name collisions, and where the palette is
//! written. Every field has a default, so an empty file is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::types::ShadeSelection;

/// Project manifest loaded from swatch.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Sass variable source.
    pub sass: SassConfig,

    /// Utility framework config source.
    pub framework: FrameworkConfig,

    /// Which framework shades to include.
    pub shades: ShadeSelection,

    /// Framework base colours to skip entirely.
    pub blacklist: Vec<String>,

    /// Which source wins when both define the same name.
    pub priority: Priority,

    /// Output settings.
    pub output: OutputConfig,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sass: SassConfig::default(),
            framework: FrameworkConfig::default(),
            shades: ShadeSelection::default(),
            blacklist: default_blacklist(),
            priority: Priority::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_blacklist() -> Vec<String> {
    vec![
        "transparent".to_string(),
        "current".to_string(),
        "inherit".to_string(),
    ]
}

/// Where to find Sass colour variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SassConfig {
    /// Directory holding the Sass files.
    pub path: PathBuf,

    /// Candidate file names inside `path`, read in order.
    pub files: Vec<String>,

    /// Variables to extract, with or without the leading `$`.
    pub variables: Vec<String>,
}

impl Default for SassConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            files: vec!["_variables.scss".to_string(), "variables.scss".to_string()],
            variables: vec!["colors".to_string(), "theme-colors".to_string()],
        }
    }
}

/// Where to find the resolved framework config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameworkConfig {
    /// Resolved config file (JSON or YAML).
    pub config: PathBuf,

    /// Dot path to the colour table inside the config.
    pub path: String,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            config: PathBuf::from("tailwind.config.json"),
            path: "theme.colors".to_string(),
        }
    }
}

/// The source whose entries are primary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Sass,
    Framework,
}

/// Shape of the written artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// A bare JSON array of entries.
    #[default]
    Palette,
    /// The array placed at `settings.color.palette` in a theme document.
    ThemeJson,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file.
    pub path: PathBuf,

    /// Pretty-print the JSON.
    pub pretty: bool,

    /// Output shape.
    pub mode: OutputMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("palette.json"),
            pretty: false,
            mode: OutputMode::default(),
        }
    }
}

impl Manifest {
    /// Load manifest from a swatch.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| SwatchError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check swatch.yaml syntax".to_string()),
        })
    }

    /// Sass directory, resolved against the project root.
    pub fn sass_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.sass.path)
    }

    /// Framework config file, resolved against the project root.
    pub fn framework_config(&self, root: &Path) -> PathBuf {
        root.join(&self.framework.config)
    }

    /// Output file, resolved against the project root.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output.path)
    }

    /// Paths whose changes should trigger a rebuild.
    pub fn watched_paths(&self, root: &Path) -> Vec<PathBuf> {
        let mut paths = vec![self.sass_dir(root), self.framework_config(root)];
        paths.dedup();
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let yaml = "priority: framework";
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.priority, Priority::Framework);
        assert_eq!(manifest.shades, ShadeSelection::SingleDefault);
        assert_eq!(manifest.output.path, PathBuf::from("palette.json"));
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
sass:
  path: assets/scss
  files: [_colors.scss]
  variables: [$brand-colors]
framework:
  config: build/tailwind.resolved.json
  path: theme.extend.colors
shades:
  100: Light
  900: Dark
blacklist: [white]
priority: sass
output:
  path: theme.json
  pretty: true
  mode: theme-json
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.sass.path, PathBuf::from("assets/scss"));
        assert_eq!(manifest.sass.files, vec!["_colors.scss"]);
        assert_eq!(manifest.sass.variables, vec!["$brand-colors"]);
        assert_eq!(
            manifest.framework.config,
            PathBuf::from("build/tailwind.resolved.json")
        );
        assert_eq!(manifest.framework.path, "theme.extend.colors");
        assert_eq!(
            manifest.shades,
            ShadeSelection::LabeledShades(vec![
                ("100".into(), "Light".into()),
                ("900".into(), "Dark".into()),
            ])
        );
        assert_eq!(manifest.blacklist, vec!["white"]);
        assert_eq!(manifest.priority, Priority::Sass);
        assert_eq!(manifest.output.path, PathBuf::from("theme.json"));
        assert!(manifest.output.pretty);
        assert_eq!(manifest.output.mode, OutputMode::ThemeJson);
    }

    #[test]
    fn test_default_manifest() {
        let manifest = Manifest::default();

        assert_eq!(manifest.sass.path, PathBuf::from("."));
        assert_eq!(manifest.framework.path, "theme.colors");
        assert_eq!(manifest.blacklist, vec!["transparent", "current", "inherit"]);
        assert_eq!(manifest.priority, Priority::Sass);
        assert_eq!(manifest.output.mode, OutputMode::Palette);
        assert!(!manifest.output.pretty);
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse("").unwrap(), Manifest::default());
        assert_eq!(Manifest::parse("# nothing yet\n").unwrap(), Manifest::default());
    }

    #[test]
    fn test_shade_list_policy() {
        let manifest = Manifest::parse("shades: [500, 700]").unwrap();
        assert_eq!(
            manifest.shades,
            ShadeSelection::ExplicitList(vec!["500".into(), "700".into()])
        );

        let manifest = Manifest::parse("shades: true").unwrap();
        assert_eq!(manifest.shades, ShadeSelection::AllShades);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let err = Manifest::parse("shades: sometimes").unwrap_err();
        assert!(matches!(err, SwatchError::Config { .. }));

        let err = Manifest::parse("priority: both").unwrap_err();
        assert!(matches!(err, SwatchError::Config { .. }));
    }

    #[test]
    fn test_paths_resolve_against_root() {
        let manifest = Manifest::parse("sass:\n  path: scss\noutput:\n  path: out/p.json\n").unwrap();
        let root = Path::new("/project");

        assert_eq!(manifest.sass_dir(root), PathBuf::from("/project/scss"));
        assert_eq!(
            manifest.framework_config(root),
            PathBuf::from("/project/tailwind.config.json")
        );
        assert_eq!(manifest.output_path(root), PathBuf::from("/project/out/p.json"));
        assert_eq!(manifest.watched_paths(root).len(), 2);
    }

    #[test]
    fn test_manifest_roundtrips() {
        let manifest = Manifest {
            shades: ShadeSelection::ExplicitList(vec!["500".into()]),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&manifest).unwrap();
        assert_eq!(Manifest::parse(&yaml).unwrap(), manifest);
    }
}
