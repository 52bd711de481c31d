//! Query processing: rank aggregated entries for display.
//!
//! This module handles the third stage of the pipeline - shaping
//! aggregated data into what the report will show. It provides:
//!
//! - **Options**: sort direction and row limit ([`QueryOptions`])
//! - **Query sets**: sorted, summarized, limited entries
//!   ([`ReportQuerySet`])
//!
//! ## Example
//!
//! ```rust,ignore
//! use econreplib::query::{QueryOptions, ReportQuerySet, SortDirection};
//!
//! let options = QueryOptions::new()
//!     .direction(SortDirection::Ascending)
//!     .limit(10);
//! let queryset = ReportQuerySet::from_result(entries, &options);
//! ```

pub mod options;
pub mod queryset;

pub use options::{QueryOptions, SortDirection};
pub use queryset::{ReportQuerySet, Summary};
