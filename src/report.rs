use crate::analyzer::FilterReport;
use crate::cli::OutputFormat;
use crate::config::ReportRules;
use crate::frequency::FrequencyTable;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use serde_json::json;
use std::fmt::Write as _;

/// Which tables a report shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportScope {
    /// Full filters followed by filter components.
    #[default]
    All,
    /// Full filters only.
    FullFiltersOnly,
}

pub fn render_report(
    report: &FilterReport,
    format: OutputFormat,
    rules: &ReportRules,
    scope: ReportScope,
) -> String {
    match format {
        OutputFormat::Text => format_report_text(report, rules, scope),
        OutputFormat::Table => format_report_table(report, rules, scope),
        OutputFormat::Json => format_report_json(report, scope),
    }
}

/// Fixed-width two-column layout.
///
/// Long filters are not wrapped; they push the closing border to the right.
pub fn format_report_text(report: &FilterReport, rules: &ReportRules, scope: ReportScope) -> String {
    let mut out = String::new();
    write_text_table(&mut out, &report.full_filters, &rules.full_filter_title, rules);

    if scope == ReportScope::All {
        let _ = writeln!(out);
        write_text_table(&mut out, &report.components, &rules.component_title, rules);
    }

    out
}

fn write_text_table(out: &mut String, table: &FrequencyTable, title: &str, rules: &ReportRules) {
    let count_width = rules.count_width;
    let filter_width = rules.filter_width;

    let _ = writeln!(
        out,
        "|{:>count_width$} | {:<filter_width$} |",
        "Occurrences", title
    );
    let _ = writeln!(
        out,
        "+{}+{}+",
        "-".repeat(count_width + 1),
        "-".repeat(filter_width + 2)
    );
    for entry in table {
        let _ = writeln!(
            out,
            "|{:>count_width$} | {:>filter_width$} |",
            entry.count, entry.value
        );
    }
}

/// Box-drawn tables with a share column.
pub fn format_report_table(report: &FilterReport, rules: &ReportRules, scope: ReportScope) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} filters in {} lines across {} file{}",
        report.stats.filters,
        report.stats.lines,
        report.stats.files,
        if report.stats.files == 1 { "" } else { "s" }
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        frequency_table(&report.full_filters, &rules.full_filter_title)
    );

    if scope == ReportScope::All {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            frequency_table(&report.components, &rules.component_title)
        );
    }

    out
}

fn frequency_table(table: &FrequencyTable, title: &str) -> Table {
    let mut rendered = create_styled_table(&["Occurrences", "Percent", title]);
    let total = table.total();

    for entry in table {
        let percentage = if total == 0 {
            0.0
        } else {
            (entry.count as f64 / total as f64) * 100.0
        };
        rendered.add_row(vec![
            Cell::new(entry.count).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:>6.2}%", percentage)).set_alignment(CellAlignment::Right),
            Cell::new(&entry.value),
        ]);
    }

    rendered
}

/// Builds a table with the shared header styling.
pub fn create_styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(
            headers
                .iter()
                .map(|header| Cell::new(header).add_attribute(Attribute::Bold)),
        );
    table
}

pub fn format_report_json(report: &FilterReport, scope: ReportScope) -> String {
    let mut document = json!({
        "stats": report.stats,
        "full_filters": report.full_filters.entries(),
    });
    if scope == ReportScope::All {
        document["components"] = json!(report.components.entries());
    }

    serde_json::to_string_pretty(&document)
        .unwrap_or_else(|_| "{\"error\":\"failed to serialize filter report\"}".to_string())
}
