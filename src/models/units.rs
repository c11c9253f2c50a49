//! Throughput and data size units.
//!
//! Quantities are entered as `"<number> <unit>"` (the space is optional, the
//! unit is case-insensitive) and normalised to Mbps and GB respectively.
//! Data sizes use decimal factors: 1 TB = 1000 GB, 1 PB = 1000 TB.

use crate::error::UnitParseError;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref QUANTITY_RE: Regex =
        Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*([A-Za-z]+)\s*$")
            .expect("Invalid Regex?");
}

/// Data rate units, normalised to megabits per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThroughputUnit {
    Mbps,
    Gbps,
    Tbps,
}

impl ThroughputUnit {
    const EXPECTED: &'static str = "Mbps, Gbps, Tbps";

    /// Megabits per second in one of this unit.
    pub fn to_mbps(self) -> f64 {
        match self {
            ThroughputUnit::Mbps => 1.0,
            ThroughputUnit::Gbps => 1_000.0,
            ThroughputUnit::Tbps => 1_000_000.0,
        }
    }
}

impl FromStr for ThroughputUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mbps" => Ok(ThroughputUnit::Mbps),
            "gbps" => Ok(ThroughputUnit::Gbps),
            "tbps" => Ok(ThroughputUnit::Tbps),
            _ => Err(UnitParseError::UnknownUnit {
                unit: s.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

impl fmt::Display for ThroughputUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            ThroughputUnit::Mbps => "Mbps",
            ThroughputUnit::Gbps => "Gbps",
            ThroughputUnit::Tbps => "Tbps",
        };
        f.write_str(s)
    }
}

/// Data size units, normalised to gigabytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSizeUnit {
    GB,
    TB,
    PB,
}

impl DataSizeUnit {
    const EXPECTED: &'static str = "GB, TB, PB";

    /// Gigabytes in one of this unit.
    pub fn to_gb(self) -> f64 {
        match self {
            DataSizeUnit::GB => 1.0,
            DataSizeUnit::TB => 1_000.0,
            DataSizeUnit::PB => 1_000_000.0,
        }
    }
}

impl FromStr for DataSizeUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gb" => Ok(DataSizeUnit::GB),
            "tb" => Ok(DataSizeUnit::TB),
            "pb" => Ok(DataSizeUnit::PB),
            _ => Err(UnitParseError::UnknownUnit {
                unit: s.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

impl fmt::Display for DataSizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            DataSizeUnit::GB => "GB",
            DataSizeUnit::TB => "TB",
            DataSizeUnit::PB => "PB",
        };
        f.write_str(s)
    }
}

/// Split a quantity string into its number and unit token.
fn split_quantity(input: &str) -> Result<(f64, &str), UnitParseError> {
    let caps = QUANTITY_RE
        .captures(input)
        .ok_or_else(|| UnitParseError::Malformed(input.trim().to_string()))?;
    let (number, unit) = match (caps.get(1), caps.get(2)) {
        (Some(number), Some(unit)) => (number.as_str(), unit.as_str()),
        _ => return Err(UnitParseError::Malformed(input.trim().to_string())),
    };
    let value: f64 = number
        .parse()
        .map_err(|_| UnitParseError::Number(number.to_string()))?;
    if !value.is_finite() {
        return Err(UnitParseError::Number(number.to_string()));
    }
    log::trace!("split quantity '{input}' -> {value} {unit}");
    Ok((value, unit))
}

/// Parse a throughput such as `"1 Gbps"` into megabits per second.
pub fn parse_throughput(input: &str) -> Result<f64, UnitParseError> {
    let (value, unit) = split_quantity(input)?;
    let unit: ThroughputUnit = unit.parse()?;
    finite(value * unit.to_mbps(), input)
}

/// Parse a data size such as `"1 TB"` into gigabytes.
pub fn parse_data_size(input: &str) -> Result<f64, UnitParseError> {
    let (value, unit) = split_quantity(input)?;
    let unit: DataSizeUnit = unit.parse()?;
    finite(value * unit.to_gb(), input)
}

/// The unit multiplier can push a finite literal past `f64::MAX`.
fn finite(value: f64, input: &str) -> Result<f64, UnitParseError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(UnitParseError::Number(input.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_throughput() {
        assert_eq!(parse_throughput("1 Gbps").unwrap(), 1000.0);
        assert_eq!(parse_throughput("250 mbps").unwrap(), 250.0);
        assert_eq!(parse_throughput("2.5 TBPS").unwrap(), 2_500_000.0);
        assert_eq!(parse_throughput("10Gbps").unwrap(), 10_000.0);
        assert_eq!(parse_throughput("  0.5   Gbps ").unwrap(), 500.0);
        assert_eq!(parse_throughput("0 Gbps").unwrap(), 0.0);
        assert_eq!(parse_throughput("-1 Gbps").unwrap(), -1000.0);
    }

    #[test]
    fn test_parse_data_size() {
        assert_eq!(parse_data_size("1 TB").unwrap(), 1000.0);
        assert_eq!(parse_data_size("20 gb").unwrap(), 20.0);
        assert_eq!(parse_data_size("1.5 PB").unwrap(), 1_500_000.0);
        assert_eq!(parse_data_size(".5 TB").unwrap(), 500.0);
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            parse_throughput("100 kbps").unwrap_err(),
            UnitParseError::UnknownUnit {
                unit: "kbps".to_string(),
                expected: "Mbps, Gbps, Tbps"
            }
        );
        // a size unit is not a rate unit
        assert!(matches!(
            parse_throughput("1 TB"),
            Err(UnitParseError::UnknownUnit { .. })
        ));
        assert!(matches!(
            parse_data_size("1 MB"),
            Err(UnitParseError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn test_malformed() {
        for input in ["", "Gbps", "1", "one Gbps", "1 2 Gbps", "1 Gbps extra", "1.2.3 Gbps"] {
            assert!(
                matches!(parse_throughput(input), Err(UnitParseError::Malformed(_))),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_number_out_of_range() {
        // the literal itself overflows f64
        assert_eq!(
            parse_throughput("1e999 Gbps"),
            Err(UnitParseError::Number("1e999".to_string()))
        );
        // the literal fits but the multiplier does not
        assert_eq!(
            parse_data_size(" 1e303 PB "),
            Err(UnitParseError::Number("1e303 PB".to_string()))
        );
        assert!(parse_data_size("1e300 PB").is_ok());
    }

    #[test]
    fn test_unit_display() {
        assert_eq!("gBpS".parse::<ThroughputUnit>().unwrap().to_string(), "Gbps");
        assert_eq!("pb".parse::<DataSizeUnit>().unwrap().to_string(), "PB");
    }
}
