//! Report rendering for CLI output

use console::style;
use econreplib::{render_table, ReportKind, ReportQuerySet};

/// Render the full report block: title, table, and summary.
///
/// Starts with a blank line so the report stands apart from the
/// processing notice. The summary block only appears when the queryset
/// carries one, i.e. when there were entries at all.
pub fn render_report(kind: ReportKind, queryset: &ReportQuerySet) -> String {
    let mut lines = vec![
        String::new(),
        format!("{} {}", style("Report:").bold(), kind),
        render_table(&queryset.entries, kind.key_column(), kind.value_label()),
    ];

    if let Some(summary) = &queryset.summary {
        lines.push(String::new());
        lines.push(format!("{}", style("Summary:").bold()));
        lines.push(format!("• Total records: {}", summary.records));
        lines.push(format!(
            "• Maximum: {} ({:.2})",
            summary.max.key, summary.max.value
        ));
        lines.push(format!(
            "• Minimum: {} ({:.2})",
            summary.min.key, summary.min.value
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use econreplib::{AggregateEntry, QueryOptions};

    #[test]
    fn test_report_block_layout() {
        let result = vec![
            AggregateEntry::new("USA", 25500.0),
            AggregateEntry::new("China", 18000.0),
        ];
        let queryset = ReportQuerySet::from_result(result, &QueryOptions::new());

        let report = render_report(ReportKind::AverageGdp, &queryset);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "");
        assert!(lines[1].contains("Report:"));
        assert!(lines[1].contains("average-gdp"));
        assert!(report.contains("| 1 | USA     |   25500.00 |"));
        assert!(report.contains("| 2 | China   |   18000.00 |"));
        assert!(report.contains("• Total records: 2"));
        assert!(report.contains("• Maximum: USA (25500.00)"));
        assert!(report.contains("• Minimum: China (18000.00)"));
    }

    #[test]
    fn test_continent_report_uses_its_own_headers() {
        let result = vec![AggregateEntry::new("Asia", 1424.0)];
        let queryset = ReportQuerySet::from_result(result, &QueryOptions::new());

        let report = render_report(ReportKind::PopulationByContinent, &queryset);

        assert!(report.contains("| # | continent | population |"));
        assert!(report.contains("| 1 | Asia      |    1424.00 |"));
    }
}
