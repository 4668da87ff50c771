use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while loading sources or writing a palette.
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(swatch::io))]
    Io { path: PathBuf, message: String },

    /// A framework config or theme document that is not valid JSON/YAML.
    #[error("Parse error: {message}")]
    #[diagnostic(code(swatch::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(swatch::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{} already exists", path.display())]
    #[diagnostic(code(swatch::exists), help("Use --force to overwrite"))]
    AlreadyExists { path: PathBuf },

    #[error("Watch error: {message}")]
    #[diagnostic(
        code(swatch::watch),
        help("Check the directory exists and is readable")
    )]
    Watch { message: String },

    #[error("Build error: {message}")]
    #[diagnostic(code(swatch::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SwatchError>;
