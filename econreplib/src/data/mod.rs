//! Data aggregation: turn raw rows into grouped report entries.
//!
//! This module handles the second stage of the pipeline - reducing loaded
//! rows to one entry per group. It provides:
//!
//! - **Report kinds**: the closed [`ReportKind`] enum whose methods form
//!   the behavior table (columns, parsing rules, reduction)
//! - **Aggregation**: group-by in first-seen order with tolerant numeric
//!   parsing
//!
//! ## Example
//!
//! ```rust,ignore
//! use econreplib::data::{aggregate_rows, ReportKind};
//!
//! let entries = aggregate_rows(&rows, ReportKind::AverageGdp);
//! ```

pub mod aggregate;
pub mod report;

pub use aggregate::{aggregate_rows, AggregateEntry};
pub use report::{Reduction, ReportKind};
