//! CSV loading with header validation.
//!
//! Every input file is checked against the report's required columns
//! before its rows are accepted, so a bad file aborts the run instead of
//! silently producing a partial report.

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::EconrepError;
use crate::Result;

/// A single CSV record, keyed by column name.
///
/// Ragged records are tolerated: a short record leaves its trailing
/// columns absent, a long record drops its extra fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    columns: HashMap<String, String>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.columns.insert(column.into(), value.into());
    }

    /// Get a column value, or `None` if the record had no such column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }
}

/// Read rows from every file, in argument order.
///
/// Each file's header must carry all of `required_columns`; a file that
/// does not aborts the whole read. Rows from later files are appended
/// after rows from earlier ones.
pub fn read_files(paths: &[PathBuf], required_columns: &[&str]) -> Result<Vec<Row>> {
    let mut all_rows = Vec::new();

    for path in paths {
        let rows = read_file(path, required_columns)?;
        all_rows.extend(rows);
    }

    Ok(all_rows)
}

/// Read one CSV file into rows.
///
/// The file handle is scoped to this call, so it is closed before the
/// caller moves on to the next file.
fn read_file(path: &Path, required_columns: &[&str]) -> Result<Vec<Row>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => EconrepError::FileNotFound(path.to_path_buf()),
        _ => EconrepError::ReadFailure {
            path: path.to_path_buf(),
            source: e.into(),
        },
    })?;

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| EconrepError::ReadFailure {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();

    let missing: Vec<String> = required_columns
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(EconrepError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        });
    }

    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| EconrepError::ReadFailure {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut row = Row::new();
        for (index, header) in headers.iter().enumerate() {
            if let Some(value) = record.get(index) {
                row.insert(header, value);
            }
        }
        rows.push(row);
    }

    Ok(rows)
}
