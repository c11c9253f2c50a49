//! Terminal output.
//!
//! Fixed-width, left-aligned tables. Rendering returns plain text; colour is
//! only added when printing.

use crate::models::{BandwidthReport, BANDWIDTH_HEADERS};
use crate::processing::{NetworkRow, NETWORK_HEADERS};
use colored::Colorize;
use itertools::Itertools;

/// Column widths for the CIDR table.
pub const NETWORK_WIDTHS: [usize; 8] = [18, 18, 18, 18, 18, 18, 18, 12];

/// Column widths for the bandwidth table.
pub const BANDWIDTH_WIDTHS: [usize; 8] = [20, 20, 20, 30, 30, 25, 25, 20];

/// Format a value as a left-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// The value padded with spaces, or unchanged when already wider
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:<width$}")
}

/// Format a row of fields with the given widths, separated by a space.
pub fn format_row<T: ToString>(fields: &[T], widths: &[usize]) -> String {
    fields
        .iter()
        .zip(widths)
        .map(|(field, width)| format_field(field.to_string(), *width))
        .join(" ")
        .trim_end()
        .to_string()
}

/// Header line plus one line per row.
pub fn render_network_table(rows: &[NetworkRow]) -> String {
    let mut lines = vec![format_row(&NETWORK_HEADERS, &NETWORK_WIDTHS)];
    lines.extend(
        rows.iter()
            .map(|row| format_row(&row.fields(), &NETWORK_WIDTHS)),
    );
    lines.join("\n")
}

/// Header line plus the single report line.
pub fn render_bandwidth_table(report: &BandwidthReport) -> String {
    [
        format_row(&BANDWIDTH_HEADERS, &BANDWIDTH_WIDTHS),
        format_row(&report.fields(), &BANDWIDTH_WIDTHS),
    ]
    .join("\n")
}

/// Print the CIDR table to stdout.
pub fn print_network_info(rows: &[NetworkRow]) {
    let table = render_network_table(rows);
    print_table(&table);
}

/// Print the bandwidth table to stdout.
pub fn print_to_console(report: &BandwidthReport) {
    let table = render_bandwidth_table(report);
    print_table(&table);
}

/// Report an input that could not be processed, on stderr.
pub fn print_input_error(input: &str, err: &dyn std::fmt::Display) {
    eprintln!("{} '{}': {}", "ERROR".red().bold(), input.trim(), err);
}

fn print_table(table: &str) {
    let mut lines = table.lines();
    if let Some(header) = lines.next() {
        println!("{}", header.bold());
    }
    for line in lines {
        println!("{line}");
    }
}
