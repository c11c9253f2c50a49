//! Output formatting for calculator results.
//!
//! This module handles formatting and outputting results:
//! - [`csv`] - CSV files
//! - [`json`] - JSON on stdout
//! - [`terminal`] - fixed-width tables with colors

mod csv;
mod json;
mod terminal;

pub use csv::{
    csv_line, escape_csv_field, write_bandwidth_csv, write_bandwidth_report, write_network_csv,
    write_network_rows,
};
pub use json::{bandwidth_json, network_json};
pub use terminal::{
    format_field, format_row, print_input_error, print_network_info, print_to_console,
    render_bandwidth_table, render_network_table, BANDWIDTH_WIDTHS, NETWORK_WIDTHS,
};
