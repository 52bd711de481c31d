//! Input options for ranking report entries.
//!
//! This module contains the configuration types that control how
//! aggregated entries are ordered and cut down for display.

use serde::{Deserialize, Serialize};

/// Sort direction for report values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest value first
    Ascending,
    /// Largest value first
    #[default]
    Descending,
}

/// Ordering and limiting configuration for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Sort direction for the value column
    pub direction: SortDirection,
    /// Keep only the first N entries after sorting; `None` keeps all
    pub limit: Option<usize>,
}

impl QueryOptions {
    /// Create options with the defaults (descending, no limit).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the sort direction.
    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Builder: keep only the first `limit` entries.
    ///
    /// A limit of zero is treated as "no limit".
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
