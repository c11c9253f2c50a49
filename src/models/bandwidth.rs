//! Bandwidth, disk space and transfer time calculator.

use super::units::{parse_data_size, parse_throughput};
use crate::error::{BandwidthError, ValidationError};
use serde::Serialize;

/// 1 GB = 8000 Mb with decimal units.
const MEGABITS_PER_GIGABYTE: f64 = 8_000.0;

/// Column headers matching the fields of [`BandwidthReport`], in order.
pub const BANDWIDTH_HEADERS: [&str; 8] = [
    "Media Throughput",
    "Read/Write Ratio",
    "Initial Data Size",
    "Disk Space Required (Read)",
    "Disk Space Required (Write)",
    "Bandwidth Required (Read)",
    "Bandwidth Required (Write)",
    "Transfer Time",
];

/// Media throughput split into a read and a write share, moving a fixed
/// amount of data.
///
/// Built through [`BandwidthCalculator::new`], which rejects any input that
/// breaks a constraint, so every value of this type is valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandwidthCalculator {
    throughput_mbps: f64,
    read_ratio: f64,
    write_ratio: f64,
    data_size_gb: f64,
}

/// Rendered result of [`BandwidthCalculator::calculate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandwidthReport {
    pub media_throughput: String,
    pub read_write_ratio: String,
    pub initial_data_size: String,
    pub disk_space_read: String,
    pub disk_space_write: String,
    pub bandwidth_read: String,
    pub bandwidth_write: String,
    pub transfer_time: String,
}

impl BandwidthReport {
    /// The report fields in [`BANDWIDTH_HEADERS`] order.
    pub fn fields(&self) -> [&str; 8] {
        [
            self.media_throughput.as_str(),
            self.read_write_ratio.as_str(),
            self.initial_data_size.as_str(),
            self.disk_space_read.as_str(),
            self.disk_space_write.as_str(),
            self.bandwidth_read.as_str(),
            self.bandwidth_write.as_str(),
            self.transfer_time.as_str(),
        ]
    }
}

impl BandwidthCalculator {
    /// Create a calculator from a throughput (`"1 Gbps"`), read and write
    /// percentages, and a data size (`"1 TB"`).
    ///
    /// Units are parsed first, then the ratios are checked for range and sum,
    /// then throughput and data size must be positive and give a finite
    /// transfer time.
    pub fn new(
        media_throughput: &str,
        read_percent: f64,
        write_percent: f64,
        initial_data_size: &str,
    ) -> Result<BandwidthCalculator, BandwidthError> {
        let throughput_mbps = parse_throughput(media_throughput)?;
        let data_size_gb = parse_data_size(initial_data_size)?;
        let read_ratio = read_percent / 100.0;
        let write_ratio = write_percent / 100.0;

        if !(0.0..=1.0).contains(&read_ratio) {
            return Err(ValidationError::RatioOutOfRange {
                name: "read",
                value: read_percent,
            }
            .into());
        }
        if !(0.0..=1.0).contains(&write_ratio) {
            return Err(ValidationError::RatioOutOfRange {
                name: "write",
                value: write_percent,
            }
            .into());
        }
        // compare the percentages, fractions like 0.3 + 0.7 are not exact
        if read_percent + write_percent != 100.0 {
            return Err(ValidationError::RatioSum {
                read: read_percent,
                write: write_percent,
            }
            .into());
        }
        if throughput_mbps <= 0.0 {
            return Err(ValidationError::NonPositiveThroughput(throughput_mbps).into());
        }
        if data_size_gb <= 0.0 {
            return Err(ValidationError::NonPositiveDataSize(data_size_gb).into());
        }

        let calculator = BandwidthCalculator {
            throughput_mbps,
            read_ratio,
            write_ratio,
            data_size_gb,
        };
        // a subnormal throughput passes the > 0 check but divides to inf
        if !calculator.transfer_time().is_finite() {
            return Err(ValidationError::TransferTimeOverflow {
                throughput: throughput_mbps,
                size: data_size_gb,
            }
            .into());
        }

        log::debug!(
            "bandwidth {throughput_mbps} Mbps, ratio {read_ratio}:{write_ratio}, size {data_size_gb} GB"
        );
        Ok(calculator)
    }

    pub fn throughput_mbps(&self) -> f64 {
        self.throughput_mbps
    }

    pub fn read_ratio(&self) -> f64 {
        self.read_ratio
    }

    pub fn write_ratio(&self) -> f64 {
        self.write_ratio
    }

    pub fn data_size_gb(&self) -> f64 {
        self.data_size_gb
    }

    /// Disk space taken by reads, in GB.
    pub fn disk_space_read(&self) -> f64 {
        self.data_size_gb * self.read_ratio
    }

    /// Disk space taken by writes, in GB.
    pub fn disk_space_write(&self) -> f64 {
        self.data_size_gb * self.write_ratio
    }

    /// Share of the throughput used by reads, in Mbps.
    pub fn bandwidth_read(&self) -> f64 {
        self.throughput_mbps * self.read_ratio
    }

    /// Share of the throughput used by writes, in Mbps.
    pub fn bandwidth_write(&self) -> f64 {
        self.throughput_mbps * self.write_ratio
    }

    /// Seconds to read the data once and then write it once.
    ///
    /// Each phase moves its ratio share of the data over the same share of
    /// the link, so each takes `data / throughput` whatever the split.
    pub fn transfer_time(&self) -> f64 {
        let one_pass = self.data_size_gb * MEGABITS_PER_GIGABYTE / self.throughput_mbps;
        one_pass * 2.0
    }

    /// Compute every derived value and render it with its unit.
    pub fn calculate(&self) -> BandwidthReport {
        BandwidthReport {
            media_throughput: format_quantity(self.throughput_mbps, "Mbps"),
            read_write_ratio: format!(
                "{}:{}",
                ratio_percent(self.read_ratio),
                ratio_percent(self.write_ratio)
            ),
            initial_data_size: format_quantity(self.data_size_gb, "GB"),
            disk_space_read: format_quantity(self.disk_space_read(), "GB"),
            disk_space_write: format_quantity(self.disk_space_write(), "GB"),
            bandwidth_read: format_quantity(self.bandwidth_read(), "Mbps"),
            bandwidth_write: format_quantity(self.bandwidth_write(), "Mbps"),
            transfer_time: convert_seconds_to_time(self.transfer_time()),
        }
    }
}

/// Render seconds as `"<H> hours, <M> minutes, <S.SS> seconds"`.
///
/// The total is rounded to centiseconds before it is split, so the seconds
/// field never reads `60.00`.
///
/// ```
/// use network_calculator::models::convert_seconds_to_time;
/// assert_eq!(convert_seconds_to_time(8000.0), "2 hours, 13 minutes, 20.00 seconds");
/// ```
pub fn convert_seconds_to_time(seconds: f64) -> String {
    let centis = (seconds * 100.0).round();
    let hours = (centis / 360_000.0).floor();
    let minutes = ((centis % 360_000.0) / 6_000.0).floor();
    let seconds = (centis % 6_000.0) / 100.0;
    format!("{hours} hours, {minutes} minutes, {seconds:.2} seconds")
}

fn format_quantity(value: f64, unit: &str) -> String {
    format!("{value:.2} {unit}")
}

/// Fraction as a percentage, rounded to 2 decimals, e.g. 0.29 -> 29.
fn ratio_percent(ratio: f64) -> f64 {
    (ratio * 10_000.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnitParseError;

    #[test]
    fn test_calculate() {
        let bc = BandwidthCalculator::new("1 Gbps", 50.0, 50.0, "1 TB").unwrap();
        let expected = BandwidthReport {
            media_throughput: "1000.00 Mbps".to_string(),
            read_write_ratio: "50:50".to_string(),
            initial_data_size: "1000.00 GB".to_string(),
            disk_space_read: "500.00 GB".to_string(),
            disk_space_write: "500.00 GB".to_string(),
            bandwidth_read: "500.00 Mbps".to_string(),
            bandwidth_write: "500.00 Mbps".to_string(),
            transfer_time: "4 hours, 26 minutes, 40.00 seconds".to_string(),
        };
        assert_eq!(bc.calculate(), expected);
    }

    #[test]
    fn test_transfer_time() {
        let bc = BandwidthCalculator::new("1 Gbps", 50.0, 50.0, "1 TB").unwrap();
        assert_eq!(bc.transfer_time(), 16000.0);

        // the split does not change the total
        let bc = BandwidthCalculator::new("1 Gbps", 70.0, 30.0, "1 TB").unwrap();
        assert_eq!(bc.transfer_time(), 16000.0);

        let bc = BandwidthCalculator::new("10 Gbps", 100.0, 0.0, "500 GB").unwrap();
        assert_eq!(bc.transfer_time(), 800.0);
    }

    #[test]
    fn test_uneven_split() {
        let bc = BandwidthCalculator::new("400 Mbps", 25.0, 75.0, "2 TB").unwrap();
        assert_eq!(bc.disk_space_read(), 500.0);
        assert_eq!(bc.disk_space_write(), 1500.0);
        assert_eq!(bc.bandwidth_read(), 100.0);
        assert_eq!(bc.bandwidth_write(), 300.0);
        assert_eq!(bc.calculate().read_write_ratio, "25:75");

        let bc = BandwidthCalculator::new("1 Gbps", 29.0, 71.0, "1 GB").unwrap();
        assert_eq!(bc.calculate().read_write_ratio, "29:71");
    }

    #[test]
    fn test_invalid_ratios() {
        assert_eq!(
            BandwidthCalculator::new("1 Gbps", 60.0, 50.0, "1 TB").unwrap_err(),
            BandwidthError::Validation(ValidationError::RatioSum {
                read: 60.0,
                write: 50.0
            })
        );
        assert_eq!(
            BandwidthCalculator::new("1 Gbps", 120.0, -20.0, "1 TB").unwrap_err(),
            BandwidthError::Validation(ValidationError::RatioOutOfRange {
                name: "read",
                value: 120.0
            })
        );
        assert_eq!(
            BandwidthCalculator::new("1 Gbps", 50.0, 150.0, "1 TB").unwrap_err(),
            BandwidthError::Validation(ValidationError::RatioOutOfRange {
                name: "write",
                value: 150.0
            })
        );
        assert!(BandwidthCalculator::new("1 Gbps", 30.0, 70.0, "1 TB").is_ok());
        assert!(BandwidthCalculator::new("1 Gbps", 33.5, 66.5, "1 TB").is_ok());
    }

    #[test]
    fn test_invalid_media_throughput() {
        assert_eq!(
            BandwidthCalculator::new("0 Gbps", 50.0, 50.0, "1 TB").unwrap_err(),
            BandwidthError::Validation(ValidationError::NonPositiveThroughput(0.0))
        );
        assert!(matches!(
            BandwidthCalculator::new("-5 Mbps", 50.0, 50.0, "1 TB"),
            Err(BandwidthError::Validation(
                ValidationError::NonPositiveThroughput(_)
            ))
        ));
    }

    #[test]
    fn test_invalid_initial_data_size() {
        assert_eq!(
            BandwidthCalculator::new("1 Gbps", 50.0, 50.0, "0 TB").unwrap_err(),
            BandwidthError::Validation(ValidationError::NonPositiveDataSize(0.0))
        );
    }

    #[test]
    fn test_unit_errors_come_first() {
        assert!(matches!(
            BandwidthCalculator::new("1 Gbit", 60.0, 50.0, "1 TB"),
            Err(BandwidthError::UnitParse(UnitParseError::UnknownUnit { .. }))
        ));
        assert!(matches!(
            BandwidthCalculator::new("1 Gbps", 50.0, 50.0, "TB"),
            Err(BandwidthError::UnitParse(UnitParseError::Malformed(_)))
        ));
    }

    #[test]
    fn test_convert_seconds_to_time() {
        assert_eq!(
            convert_seconds_to_time(8000.0),
            "2 hours, 13 minutes, 20.00 seconds"
        );
        assert_eq!(
            convert_seconds_to_time(3600.0),
            "1 hours, 0 minutes, 0.00 seconds"
        );
        assert_eq!(
            convert_seconds_to_time(59.5),
            "0 hours, 0 minutes, 59.50 seconds"
        );
        assert_eq!(
            convert_seconds_to_time(90061.25),
            "25 hours, 1 minutes, 1.25 seconds"
        );
    }

    #[test]
    fn test_convert_seconds_to_time_carries_rounding() {
        assert_eq!(
            convert_seconds_to_time(3599.999),
            "1 hours, 0 minutes, 0.00 seconds"
        );
        assert_eq!(
            convert_seconds_to_time(59.996),
            "0 hours, 1 minutes, 0.00 seconds"
        );
        assert_eq!(
            convert_seconds_to_time(59.994),
            "0 hours, 0 minutes, 59.99 seconds"
        );

        // 2 * 3.7499999 * 8000 / 1000 = 59.9999984 s
        let report = BandwidthCalculator::new("1 Gbps", 50.0, 50.0, "3.7499999 GB")
            .unwrap()
            .calculate();
        assert_eq!(report.transfer_time, "0 hours, 1 minutes, 0.00 seconds");
    }

    #[test]
    fn test_rejects_non_finite_results() {
        assert_eq!(
            BandwidthCalculator::new("1 Gbps", 50.0, 50.0, "1e303 PB").unwrap_err(),
            BandwidthError::UnitParse(UnitParseError::Number("1e303 PB".to_string()))
        );
        assert!(matches!(
            BandwidthCalculator::new("1e-320 Mbps", 50.0, 50.0, "1 TB"),
            Err(BandwidthError::Validation(
                ValidationError::TransferTimeOverflow { .. }
            ))
        ));
    }

    #[test]
    fn test_report_fields_follow_headers() {
        let report = BandwidthCalculator::new("1 Tbps", 10.0, 90.0, "1 TB")
            .unwrap()
            .calculate();
        let fields = report.fields();
        assert_eq!(fields.len(), BANDWIDTH_HEADERS.len());
        assert_eq!(fields[0], "1000000.00 Mbps");
        assert_eq!(fields[2], "1000.00 GB");
        assert_eq!(fields[7], "0 hours, 0 minutes, 16.00 seconds");
    }
}
