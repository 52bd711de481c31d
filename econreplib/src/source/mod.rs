//! Source loading: read input CSV files into rows.
//!
//! This module handles the first stage of the pipeline - getting raw
//! records out of the input files. It provides:
//!
//! - **Header validation**: every file must carry the report's required
//!   columns, or the run aborts
//! - **Row loading**: dictionary-style rows keyed by column name, merged
//!   across files in argument order
//!
//! ## Example
//!
//! ```rust,ignore
//! use econreplib::source::read_files;
//!
//! let rows = read_files(&files, &["country", "gdp"])?;
//! ```

pub mod reader;

pub use reader::{read_files, Row};
