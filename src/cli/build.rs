//! Build command implementation.
//!
//! Loads both colour sources, reconciles them and writes the palette.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::discover;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::project::{BuildReport, Project};
use crate::render::to_json;

/// Build the palette and write it to the configured output
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Rebuild whenever a source or the manifest changes
    #[arg(long, short)]
    pub watch: bool,

    /// Print the palette to stdout instead of writing the output file
    #[arg(long)]
    pub stdout: bool,

    /// Pretty-print the JSON (overrides output.pretty)
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    if args.watch {
        return super::watch::run(args, printer);
    }

    build_once(&args, printer).map(|_| ())
}

/// Run one complete build for the project at `args.path`.
pub(crate) fn build_once(args: &BuildArgs, printer: &Printer) -> Result<BuildReport> {
    let project = open_project(&args.path, printer)?;
    let report = project.build()?;

    report_sources(&report, printer);

    if args.stdout {
        println!("{}", to_json(&report.palette, args.pretty || project.manifest.output.pretty)?);
        return Ok(report);
    }

    let written = project.write(&report.palette, args.pretty)?;
    printer.success(
        "Wrote",
        &format!(
            "{} to {}",
            plural(report.palette.len(), "colour", "colours"),
            display_path(&written)
        ),
    );

    Ok(report)
}

fn open_project(path: &Path, printer: &Printer) -> Result<Project> {
    let discovery = discover(path)?;
    if discovery.has_manifest {
        printer.status("Loading", &display_path(&discovery.manifest_path()));
    } else {
        printer.info("Using", "default configuration (no swatch.yaml)");
    }
    Ok(Project::new(discovery.root, discovery.manifest))
}

fn report_sources(report: &BuildReport, printer: &Printer) {
    printer.status(
        "Collected",
        &format!(
            "{} from Sass, {} from framework config",
            plural(report.sass_count, "colour", "colours"),
            report.framework_count
        ),
    );

    if report.duplicates() > 0 {
        printer.info(
            "Merged",
            &plural(report.duplicates(), "duplicate name", "duplicate names"),
        );
    }

    if report.grayscale_count > 0 {
        printer.info(
            "Sorted",
            &format!(
                "{} to the end",
                plural(report.grayscale_count, "grayscale colour", "grayscale colours")
            ),
        );
    }

    if report.palette.is_empty() {
        printer.warning("Empty", "no colours found in either source");
    }
}
