//! Output rendering: format query sets for display.
//!
//! This module handles the last stage of the pipeline - turning ranked
//! entries into presentable text. It provides:
//!
//! - **Table rendering**: bordered fixed-width tables with a row-number
//!   column
//!
//! Rendering is a pure presentation layer: it only formats data the
//! query stage already sorted, limited, and summarized.

pub mod table;

pub use table::render_table;
