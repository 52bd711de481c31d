//! # econreplib
//!
//! A report engine for macroeconomic indicator CSV files: load rows,
//! aggregate them by country or continent, and rank the results.
//!
//! ## Overview
//!
//! The library is a four-stage pipeline, one module per stage:
//!
//! - **source**: read CSV files into rows, validating that every file
//!   carries the report's required columns
//! - **data**: group rows by the report's key column and reduce each
//!   group (mean or sum), per the [`ReportKind`] behavior table
//! - **query**: sort the entries by value, compute the summary, apply
//!   the row limit
//! - **output**: render a bordered fixed-width table
//!
//! ## Features
//!
//! - **Strict loading**: a missing file or a missing required column
//!   aborts the run
//! - **Tolerant cells**: values that fail to parse drop out of their
//!   group instead of failing the report
//! - **Stable ranking**: equal values keep their first-seen order in
//!   both sort directions
//! - **Pure data types**: every stage returns structured data; printing
//!   is left to the caller
//!
//! ## Example
//!
//! ```rust
//! use econreplib::{aggregate_rows, read_files, QueryOptions, ReportKind, ReportQuerySet};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Set up an input file
//! let dir = tempdir().unwrap();
//! let path = dir.path().join("gdp.csv");
//! fs::write(&path, "country,gdp\nUSA,25000\nChina,18000\nUSA,26000\n").unwrap();
//!
//! // Load and aggregate
//! let kind = ReportKind::AverageGdp;
//! let rows = read_files(&[path], &kind.required_columns()).unwrap();
//! let result = aggregate_rows(&rows, kind);
//!
//! // Rank (descending by default) and render
//! let queryset = ReportQuerySet::from_result(result, &QueryOptions::new());
//! assert_eq!(queryset.entries[0].key, "USA");
//! assert_eq!(queryset.entries[0].value, 25500.0);
//!
//! let table = econreplib::render_table(&queryset.entries, kind.key_column(), kind.value_label());
//! assert!(table.contains("| USA"));
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{aggregate_rows, AggregateEntry, Reduction, ReportKind};
pub use error::EconrepError;
pub use output::render_table;
pub use query::{QueryOptions, ReportQuerySet, SortDirection, Summary};
pub use source::{read_files, Row};

/// Result type for econreplib operations
pub type Result<T> = std::result::Result<T, EconrepError>;
