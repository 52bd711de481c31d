//! Group-by aggregation over loaded rows.
//!
//! Rows are grouped by the report's key column in first-seen order, cell
//! values are parsed per the report's rules, and each group is reduced to
//! a single number. Unparseable values never abort a run; they just drop
//! out of the group.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::report::{Reduction, ReportKind};
use crate::source::Row;

/// One aggregated group: a key and its reduced value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateEntry {
    /// Group key (a country or continent name)
    pub key: String,
    /// Reduced value for the group, rounded to 2 decimal places
    pub value: f64,
}

impl AggregateEntry {
    /// Create a new entry.
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Group rows by the report's key column and reduce each group.
///
/// Groups come back in the order their key first appeared in the input.
/// A mean group with no parseable values is dropped; a sum group is kept
/// only when its total is greater than zero.
pub fn aggregate_rows(rows: &[Row], kind: ReportKind) -> Vec<AggregateEntry> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<f64>> = HashMap::new();

    for row in rows {
        let Some(key) = row.get(kind.key_column()) else {
            continue;
        };
        if kind.skips_blank_keys() && key.is_empty() {
            continue;
        }

        // A group exists from the first sighting of its key, even if that
        // row's value turns out to be unusable.
        if !groups.contains_key(key) {
            order.push(key.to_string());
        }
        let bucket = groups.entry(key.to_string()).or_default();

        let parsed = row
            .get(kind.value_column())
            .and_then(|raw| parse_value(raw, kind.strips_thousands_separators()));
        if let Some(value) = parsed {
            bucket.push(value);
        }
    }

    let mut entries = Vec::new();

    for key in order {
        let Some(values) = groups.remove(&key) else {
            continue;
        };

        match kind.reduction() {
            Reduction::Mean => {
                if values.is_empty() {
                    continue;
                }
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                entries.push(AggregateEntry::new(key, round2(mean)));
            }
            Reduction::Sum => {
                let total: f64 = values.iter().sum();
                if total > 0.0 {
                    entries.push(AggregateEntry::new(key, round2(total)));
                }
            }
        }
    }

    entries
}

/// Parse one raw cell as a number.
///
/// With separator stripping, commas are removed before the value is
/// trimmed; otherwise the value is only trimmed.
fn parse_value(raw: &str, strip_separators: bool) -> Option<f64> {
    if strip_separators {
        raw.replace(',', "").trim().parse().ok()
    } else {
        raw.trim().parse().ok()
    }
}

/// Round to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
