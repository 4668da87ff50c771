//! Watch mode for `swatch build --watch`.
//!
//! Watches the project root and rebuilds when the manifest, a Sass file in
//! the Sass directory, or the framework config changes. Each rebuild reads
//! everything from disk again. A failed rebuild is reported and the watcher
//! keeps going.

use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use notify::{Event, RecursiveMode, Watcher};

use crate::config::{Manifest, MANIFEST_FILENAME};
use crate::error::{Result, SwatchError};
use crate::output::{display_path, Printer};
use crate::project::Project;

use super::build::{build_once, BuildArgs};

/// Quiet period that collapses an editor's burst of events into one rebuild.
const DEBOUNCE: Duration = Duration::from_millis(150);

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let root = args.path.canonicalize().map_err(|e| SwatchError::Io {
        path: args.path.clone(),
        message: format!("Failed to resolve project directory: {}", e),
    })?;
    let args = BuildArgs { path: root.clone(), ..args };

    if let Err(e) = build_once(&args, printer) {
        printer.error("Failed", &e.to_string());
    }

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx).map_err(watch_error)?;
    watcher
        .watch(&root, RecursiveMode::Recursive)
        .map_err(watch_error)?;

    printer.info("Watching", &printer.cyan(&display_path(&root)));

    let mut project = open_or_default(&root, printer);

    while let Ok(event) = rx.recv() {
        let event = match event {
            Ok(event) => event,
            Err(e) => {
                printer.warning("Watch", &e.to_string());
                continue;
            }
        };

        if event.kind.is_access() || !event.paths.iter().any(|p| is_relevant(&project, p)) {
            continue;
        }

        // Drain the rest of the burst
        while rx.recv_timeout(DEBOUNCE).is_ok() {}

        match Project::open(&root) {
            Ok(reopened) => project = reopened,
            Err(e) => {
                printer.error("Failed", &e.to_string());
                // Keep the previous filter; the manifest path stays relevant
                continue;
            }
        }

        printer.status("Rebuilding", &changed_label(&event));
        if let Err(e) = build_once(&args, printer) {
            printer.error("Failed", &e.to_string());
        }
    }

    Ok(())
}

/// Open the project, falling back to the default manifest when it is invalid
/// so the watcher can still pick up a fixed `swatch.yaml`.
pub(crate) fn open_or_default(root: &Path, printer: &Printer) -> Project {
    Project::open(root).unwrap_or_else(|e| {
        printer.error("Failed", &e.to_string());
        Project::new(root, Manifest::default())
    })
}

/// Whether a changed path can affect the palette.
///
/// The output file itself never counts, so writing it does not trigger
/// another build.
pub(crate) fn is_relevant(project: &Project, path: &Path) -> bool {
    if path == project.output_path() {
        return false;
    }

    if path == project.root.join(MANIFEST_FILENAME)
        || path == project.manifest.framework_config(&project.root)
    {
        return true;
    }

    let sass_dir = project.manifest.sass_dir(&project.root);
    path.starts_with(&sass_dir) && path.extension().is_some_and(|ext| ext == "scss")
}

fn changed_label(event: &Event) -> String {
    event
        .paths
        .first()
        .map(|p| display_path(p))
        .unwrap_or_else(|| "project".to_string())
}

fn watch_error(e: notify::Error) -> SwatchError {
    SwatchError::Watch {
        message: format!("Failed to watch project: {}", e),
    }
}
