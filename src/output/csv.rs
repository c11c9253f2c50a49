//! CSV output.

use crate::models::{BandwidthReport, BANDWIDTH_HEADERS};
use crate::processing::{NetworkRow, NETWORK_HEADERS};
use itertools::Itertools;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Quote a field if it contains a comma or a double quote.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        // enclose in double quotes and double any quote inside,
        // excel does not like spaces after comma between fields
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

/// One CSV line, without the line ending.
pub fn csv_line<T: AsRef<str>>(fields: &[T]) -> String {
    fields
        .iter()
        .map(|field| escape_csv_field(field.as_ref()))
        .join(",")
}

/// Write a header row followed by the network rows.
pub fn write_network_rows<W: Write>(writer: &mut W, rows: &[NetworkRow]) -> std::io::Result<()> {
    writeln!(writer, "{}", csv_line(&NETWORK_HEADERS))?;
    for row in rows {
        writeln!(writer, "{}", csv_line(&row.fields()))?;
    }
    Ok(())
}

/// Write a header row followed by the report row.
pub fn write_bandwidth_report<W: Write>(
    writer: &mut W,
    report: &BandwidthReport,
) -> std::io::Result<()> {
    writeln!(writer, "{}", csv_line(&BANDWIDTH_HEADERS))?;
    writeln!(writer, "{}", csv_line(&report.fields()))?;
    Ok(())
}

/// Write the CIDR table to `path`, replacing any existing file.
pub fn write_network_csv<P: AsRef<Path>>(rows: &[NetworkRow], path: P) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    log::info!("Writing {} network rows to {}", rows.len(), path.display());
    let mut writer = create(path)?;
    write_network_rows(&mut writer, rows)?;
    writer.flush()?;
    Ok(())
}

/// Write the bandwidth report to `path`, replacing any existing file.
pub fn write_bandwidth_csv<P: AsRef<Path>>(
    report: &BandwidthReport,
    path: P,
) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    log::info!("Writing bandwidth report to {}", path.display());
    let mut writer = create(path)?;
    write_bandwidth_report(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>, Box<dyn Error>> {
    let file = File::create(path)
        .map_err(|e| format!("Error creating CSV file {}: {e}", path.display()))?;
    Ok(BufWriter::new(file))
}
