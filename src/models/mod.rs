//! Calculator models.
//!
//! This module contains the two calculators and their building blocks:
//! - [`NetworkCalculator`] - IPv4 CIDR block attributes
//! - [`BandwidthCalculator`] - throughput split and transfer time
//! - unit parsing for `"<number> <unit>"` quantities

mod bandwidth;
mod ipv4;
mod network;
mod units;

// Re-export public types
pub use bandwidth::{convert_seconds_to_time, BandwidthCalculator, BandwidthReport, BANDWIDTH_HEADERS};
pub use ipv4::{block_size, get_cidr_mask, ip_after_subnet, parse_cidr, MAX_LENGTH};
pub use network::NetworkCalculator;
pub use units::{parse_data_size, parse_throughput, DataSizeUnit, ThroughputUnit};
