pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod watch;

use clap::{Parser, Subcommand};

/// swatch - Merge Sass and utility-framework colours into one palette
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings, errors and final results
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the palette and write it to the configured output
    Build(build::BuildArgs),

    /// Show every palette entry with its classification
    List(list::ListArgs),

    /// Initialize a swatch project (generates swatch.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
