//! Fixed-width table rendering for report entries.
//!
//! This module is a pure presentation layer - it only formats entries the
//! query stage already ranked. All sorting, limiting, and summarizing
//! happens before the data gets here.

use crate::data::AggregateEntry;

/// Printed width of the value column.
const VALUE_WIDTH: usize = 10;

/// Header symbol for the row-number column.
const INDEX_HEADER: &str = "#";

/// Message rendered instead of a table when there are no entries.
const NO_DATA_MESSAGE: &str = "No data to display";

/// Render entries as a bordered fixed-width table.
///
/// Layout: a row-number column sized to the entry count, a left-aligned
/// key column sized to the longest key (or its header), and a
/// right-aligned value column of fixed width with 2 decimal places.
/// An empty slice renders as a plain no-data message.
pub fn render_table(entries: &[AggregateEntry], key_header: &str, value_header: &str) -> String {
    if entries.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let index_width = entries.len().to_string().len();
    let key_width = entries
        .iter()
        .map(|entry| display_width(&entry.key))
        .max()
        .unwrap_or(0)
        .max(display_width(key_header));

    let border = border_line(index_width, key_width);

    let mut lines = Vec::with_capacity(entries.len() + 4);
    lines.push(border.clone());
    lines.push(format!(
        "| {:>iw$} | {:<kw$} | {:>vw$} |",
        INDEX_HEADER,
        key_header,
        value_header,
        iw = index_width,
        kw = key_width,
        vw = VALUE_WIDTH,
    ));
    lines.push(border.clone());

    for (index, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "| {:>iw$} | {:<kw$} | {:>vw$.2} |",
            index + 1,
            entry.key,
            entry.value,
            iw = index_width,
            kw = key_width,
            vw = VALUE_WIDTH,
        ));
    }

    lines.push(border);

    lines.join("\n")
}

/// Width of a cell in characters.
///
/// Column widths count characters, not bytes, so non-ASCII keys line up
/// with `format!`'s padding.
fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Horizontal border sized to the three columns.
fn border_line(index_width: usize, key_width: usize) -> String {
    format!(
        "+{}+{}+{}+",
        "─".repeat(index_width + 2),
        "─".repeat(key_width + 2),
        "─".repeat(VALUE_WIDTH + 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&[], "country", "gdp"), "No data to display");
    }

    #[test]
    fn test_render_basic_table() {
        let entries = vec![
            AggregateEntry::new("USA", 25500.0),
            AggregateEntry::new("China", 18000.0),
        ];

        let table = render_table(&entries, "country", "gdp");
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "+───+─────────+────────────+");
        assert_eq!(lines[1], "| # | country |        gdp |");
        assert_eq!(lines[2], lines[0]);
        assert_eq!(lines[3], "| 1 | USA     |   25500.00 |");
        assert_eq!(lines[4], "| 2 | China   |   18000.00 |");
        assert_eq!(lines[5], lines[0]);
    }

    #[test]
    fn test_index_column_widens_with_row_count() {
        let entries: Vec<AggregateEntry> = (1..=10)
            .map(|i| AggregateEntry::new(format!("Key{i}"), i as f64))
            .collect();

        let table = render_table(&entries, "country", "gdp");
        let lines: Vec<&str> = table.lines().collect();

        // Two-digit row count: the index cell is 2 wide
        assert_eq!(lines[1], "|  # | country |        gdp |");
        assert!(lines[3].starts_with("|  1 | Key1"));
        assert!(lines[12].starts_with("| 10 | Key10"));
    }

    #[test]
    fn test_key_column_sized_by_longest_key() {
        let entries = vec![AggregateEntry::new("Bosnia and Herzegovina", 1000.0)];

        let table = render_table(&entries, "country", "gdp");
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[1], "| # | country                |        gdp |");
        assert_eq!(lines[3], "| 1 | Bosnia and Herzegovina |    1000.00 |");
    }

    #[test]
    fn test_key_column_sized_by_header_when_keys_are_short() {
        let entries = vec![AggregateEntry::new("Asia", 1424.0)];

        let table = render_table(&entries, "continent", "population");
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[1], "| # | continent | population |");
        assert_eq!(lines[3], "| 1 | Asia      |    1424.00 |");
    }

    #[test]
    fn test_non_ascii_keys_align_by_chars() {
        let entries = vec![
            AggregateEntry::new("Österreich", 500.0),
            AggregateEntry::new("Zypern", 100.0),
        ];

        let table = render_table(&entries, "country", "gdp");
        let lines: Vec<&str> = table.lines().collect();

        // "Österreich" is 10 chars but 11 bytes; widths must count chars
        assert_eq!(lines[3], "| 1 | Österreich |     500.00 |");
        assert_eq!(lines[4], "| 2 | Zypern     |     100.00 |");
    }

    #[test]
    fn test_value_width_is_a_minimum() {
        let entries = vec![AggregateEntry::new("World", 8000000000.0)];

        let table = render_table(&entries, "continent", "population");
        let lines: Vec<&str> = table.lines().collect();

        // An oversized value widens its cell rather than truncating
        assert_eq!(lines[3], "| 1 | World     | 8000000000.00 |");
    }
}
