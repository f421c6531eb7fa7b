//! Format a generation report for the terminal.

use crate::generate::GenerationReport;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading, bold and underlined when `color` is set.
pub fn format_section_heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

/// Format a report as human-readable text.
pub fn format_report_text(report: &GenerationReport, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Generated", color)));
    out.push_str(&format!("  Assembly: {}\n", report.asm.display()));
    out.push_str(&format!("  Header: {}\n", report.header.display()));
    out.push_str(&format!("  Resources: {}\n", report.resources.len()));

    if report.resources.is_empty() {
        return out;
    }

    out.push('\n');
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Resource", "Symbol", "Size"]);
    for entry in &report.resources {
        table.add_row(vec![
            entry.name.clone(),
            entry.symbol.clone(),
            entry.size.to_string(),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

/// Format a report as pretty JSON.
pub fn format_report_json(report: &GenerationReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}
