//! Init command implementation.
//!
//! Generates a `swatch.yaml` manifest from the sources found in a project.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{scan_directory, Manifest, ScanResult, MANIFEST_FILENAME};
use crate::error::{Result, SwatchError};
use crate::output::{display_path, plural, Printer};

/// Initialize a swatch project by generating a swatch.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing swatch.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(SwatchError::AlreadyExists {
            path: manifest_path,
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let scan = scan_directory(&args.path);
    let manifest = manifest_from_scan(&args.path, &scan);

    let yaml = serde_yaml::to_string(&manifest).map_err(|e| SwatchError::Build {
        message: format!("Failed to serialize manifest: {}", e),
        help: None,
    })?;

    fs::write(&manifest_path, &yaml).map_err(|e| SwatchError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if let Some(dir) = scan.primary_sass_dir() {
        printer.info("Discovered", &format!("Sass in {}", display_path(dir)));
    }
    if let Some(config) = scan.framework_configs.first() {
        printer.info("Discovered", &format!("framework config {}", display_path(config)));
    }

    printer.success(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(scan.total(), "source file", "source files")
        ),
    );

    Ok(())
}

/// Fill a default manifest with whatever the scan found.
fn manifest_from_scan(root: &Path, scan: &ScanResult) -> Manifest {
    let mut manifest = Manifest::default();

    if let Some(dir) = scan.primary_sass_dir() {
        manifest.sass.path = relative_to(root, dir);

        let mut files: Vec<String> = scan
            .sass_files
            .iter()
            .filter(|f| f.parent() == Some(dir))
            .filter_map(|f| f.file_name()?.to_str().map(str::to_string))
            .collect();
        // Variable partials first, they are where colours usually live
        files.sort_by_key(|name| (!name.contains("variables"), name.clone()));
        manifest.sass.files = files;
    }

    if let Some(config) = scan.framework_configs.first() {
        manifest.framework.config = relative_to(root, config);
    }

    manifest
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(relative) if relative.as_os_str().is_empty() => PathBuf::from("."),
        Ok(relative) => relative.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn init(path: &Path, force: bool) -> Result<()> {
        let args = InitArgs {
            path: path.to_path_buf(),
            force,
        };
        run(args, &Printer::plain().quiet(true))
    }

    fn load(path: &Path) -> Manifest {
        Manifest::load(&path.join(MANIFEST_FILENAME)).unwrap()
    }

    #[test]
    fn test_init_empty_directory_writes_defaults() {
        let dir = tempdir().unwrap();

        init(dir.path(), false).unwrap();

        assert_eq!(load(dir.path()), Manifest::default());
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "priority: framework").unwrap();

        let err = init(dir.path(), false).unwrap_err();
        assert!(matches!(err, SwatchError::AlreadyExists { .. }));
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "priority: framework").unwrap();

        init(dir.path(), true).unwrap();

        assert_eq!(load(dir.path()).priority, crate::config::Priority::Sass);
    }

    #[test]
    fn test_init_discovers_sources() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets/scss")).unwrap();
        fs::create_dir_all(dir.path().join("build")).unwrap();
        fs::create_dir_all(dir.path().join("config")).unwrap();
        fs::write(dir.path().join("assets/scss/main.scss"), "").unwrap();
        fs::write(dir.path().join("assets/scss/_variables.scss"), "").unwrap();
        fs::write(dir.path().join("config/tailwind.resolved.json"), "{}").unwrap();

        init(dir.path(), false).unwrap();

        let manifest = load(dir.path());
        assert_eq!(manifest.sass.path, PathBuf::from("assets/scss"));
        assert_eq!(manifest.sass.files, vec!["_variables.scss", "main.scss"]);
        assert_eq!(
            manifest.framework.config,
            PathBuf::from("config/tailwind.resolved.json")
        );
    }

    #[test]
    fn test_relative_to() {
        let root = Path::new("/p");
        assert_eq!(relative_to(root, Path::new("/p")), PathBuf::from("."));
        assert_eq!(relative_to(root, Path::new("/p/a/b")), PathBuf::from("a/b"));
        assert_eq!(relative_to(root, Path::new("/q")), PathBuf::from("/q"));
    }
}
