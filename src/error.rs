//! Error types for the network and bandwidth calculators.
//!
//! Every error is returned from a constructor before any derived value exists,
//! except [`CidrError::NextNetworkOverflow`] which comes from
//! [`NetworkCalculator::next_network`](crate::models::NetworkCalculator::next_network).

use thiserror::Error;

/// Invalid CIDR input, or a network calculation that left the IPv4 range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    #[error("invalid CIDR '{0}': expected <address>/<prefix-length>")]
    Format(String),
    #[error("invalid IPv4 address '{0}'")]
    Address(String),
    #[error("invalid prefix length '{0}': must be an integer from 0 to 32")]
    Prefix(String),
    #[error("next network after {0} is past 255.255.255.255")]
    NextNetworkOverflow(String),
}

/// A bandwidth input that parsed correctly but breaks a constraint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{name} ratio {value}% is out of range: must be between 0 and 100")]
    RatioOutOfRange { name: &'static str, value: f64 },
    #[error("read and write ratios must add up to 100 (got {read} + {write})")]
    RatioSum { read: f64, write: f64 },
    #[error("media throughput must be greater than 0 (got {0} Mbps)")]
    NonPositiveThroughput(f64),
    #[error("initial data size must be greater than 0 (got {0} GB)")]
    NonPositiveDataSize(f64),
    #[error("transfer time for {size} GB at {throughput} Mbps is too large to represent")]
    TransferTimeOverflow { throughput: f64, size: f64 },
}

/// A `<number> <unit>` string that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitParseError {
    #[error("malformed quantity '{0}': expected '<number> <unit>'")]
    Malformed(String),
    #[error("invalid number '{0}'")]
    Number(String),
    #[error("unknown unit '{unit}': expected one of {expected}")]
    UnknownUnit { unit: String, expected: &'static str },
}

/// Any failure while building a [`BandwidthCalculator`](crate::models::BandwidthCalculator).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BandwidthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    UnitParse(#[from] UnitParseError),
}
