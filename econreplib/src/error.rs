//! Error types for econreplib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading data or selecting a report
#[derive(Error, Debug)]
pub enum EconrepError {
    /// Input file does not exist
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// Input file header lacks columns the report needs
    #[error("file '{path}' is missing required columns: {}", .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    /// Failed to read or parse an input file
    #[error("failed to read file '{path}': {source}")]
    ReadFailure { path: PathBuf, source: csv::Error },

    /// Report selector does not name a known report
    #[error("unknown report kind: {0}")]
    UnknownReportKind(String),
}
