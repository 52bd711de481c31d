//! Query set: aggregated entries ranked and ready for rendering.
//!
//! The queryset sits between raw aggregation results and the table
//! output. It represents data that has been:
//! - Sorted by value in the requested direction (stable for ties)
//! - Summarized (record count, max, min) over the full result
//! - Cut down to the requested limit
//!
//! The data pipeline is:
//! 1. Raw rows (source)
//! 2. Aggregate entries (data)
//! 3. QuerySet (sorted, summarized, limited)
//! 4. Rendered table (output)

use serde::{Deserialize, Serialize};

use crate::data::AggregateEntry;

use super::options::{QueryOptions, SortDirection};

/// Headline numbers over the full sorted result, before any limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of entries in the full result
    pub records: usize,
    /// Entry with the largest value (first among equals)
    pub max: AggregateEntry,
    /// Entry with the smallest value (first among equals)
    pub min: AggregateEntry,
}

/// A report's entries after sorting and limiting, plus their summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportQuerySet {
    /// Ranked entries, cut to the limit when one was set
    pub entries: Vec<AggregateEntry>,
    /// Summary over the full result; `None` when there were no entries
    pub summary: Option<Summary>,
}

impl ReportQuerySet {
    /// Create a queryset from aggregation results.
    ///
    /// Sorts by value in the configured direction, computes the summary
    /// over the full result, then applies the limit. Each direction gets
    /// its own comparator so the stable sort keeps equal values in input
    /// order either way.
    pub fn from_result(result: Vec<AggregateEntry>, options: &QueryOptions) -> Self {
        let mut entries = result;

        match options.direction {
            SortDirection::Ascending => entries.sort_by(|a, b| a.value.total_cmp(&b.value)),
            SortDirection::Descending => entries.sort_by(|a, b| b.value.total_cmp(&a.value)),
        }

        let summary = build_summary(&entries);

        if let Some(limit) = options.limit.filter(|n| *n > 0) {
            entries.truncate(limit);
        }

        ReportQuerySet { entries, summary }
    }
}

/// Summarize the full result before any limit is applied.
///
/// Strict comparisons make ties resolve to the earliest entry, matching
/// the first-seen group order regardless of sort direction.
fn build_summary(entries: &[AggregateEntry]) -> Option<Summary> {
    let first = entries.first()?;

    let mut max = first;
    let mut min = first;
    for entry in &entries[1..] {
        if entry.value > max.value {
            max = entry;
        }
        if entry.value < min.value {
            min = entry;
        }
    }

    Some(Summary {
        records: entries.len(),
        max: max.clone(),
        min: min.clone(),
    })
}
