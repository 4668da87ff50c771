//! List command implementation.
//!
//! Builds the palette without writing it and prints every entry with the
//! classification that decided its position.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::classify::Classification;
use crate::error::{Result, SwatchError};
use crate::output::{plural, Printer};
use crate::project::Project;
use crate::types::{ColourEntry, PaletteGroups};

/// Show every palette entry with its classification
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Print entries as JSON to stdout
    #[arg(long)]
    pub json: bool,
}

/// One listed entry with its classification.
#[derive(Debug, Serialize)]
struct ListedEntry<'a> {
    #[serde(flatten)]
    entry: &'a ColourEntry,
    classification: &'static str,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let groups = Project::open(&args.path)?.groups()?;

    if args.json {
        let listed = listed_entries(&groups);
        let json = serde_json::to_string_pretty(&listed).map_err(|e| SwatchError::Build {
            message: format!("Failed to serialize listing: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    for line in format_lines(&groups, printer) {
        println!("{}", line);
    }

    let summary: Vec<String> = groups
        .iter()
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(class, entries)| format!("{} {}", entries.len(), class.label()))
        .collect();
    printer.info(
        "Listed",
        &format!(
            "{} ({})",
            plural(groups.total(), "colour", "colours"),
            summary.join(", ")
        ),
    );

    Ok(())
}

fn listed_entries(groups: &PaletteGroups) -> Vec<ListedEntry<'_>> {
    groups
        .iter()
        .flat_map(|(class, entries)| {
            entries.iter().map(move |entry| ListedEntry {
                entry,
                classification: class.label(),
            })
        })
        .collect()
}

fn format_lines(groups: &PaletteGroups, printer: &Printer) -> Vec<String> {
    let name_width = column_width(groups, |e| &e.name);
    let colour_width = column_width(groups, |e| &e.color);

    groups
        .iter()
        .flat_map(|(class, entries)| {
            entries
                .iter()
                .map(move |entry| format_line(entry, class, name_width, colour_width, printer))
        })
        .collect()
}

fn format_line(
    entry: &ColourEntry,
    class: Classification,
    name_width: usize,
    colour_width: usize,
    printer: &Printer,
) -> String {
    // Pad before painting so escape codes don't count toward the width
    format!(
        "{} {}  {:<colour_width$}  {}  {}",
        printer.swatch(&entry.color),
        printer.bold(&format!("{:<name_width$}", entry.name)),
        entry.color,
        printer.classification(class),
        printer.dim(&entry.slug),
    )
}

fn column_width(groups: &PaletteGroups, field: impl Fn(&ColourEntry) -> &String) -> usize {
    groups
        .iter()
        .flat_map(|(_, entries)| entries.iter())
        .map(|e| field(e).chars().count())
        .max()
        .unwrap_or(0)
}
