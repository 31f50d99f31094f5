//! Typed failures raised by the setup engine
//!
//! Recoverable situations (a missing default catalog, a missing target file)
//! are not errors; they surface as outcomes. Everything here aborts the run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a setup run
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid replacement pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to fetch default catalog from {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Required file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to read answer: {0}")]
    Prompt(#[source] std::io::Error),
}

pub type SetupResult<T> = std::result::Result<T, SetupError>;
