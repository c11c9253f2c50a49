//! IPv4 CIDR and bandwidth calculators.
//!
//! - [`models::NetworkCalculator`] derives mask, network/broadcast id, usable
//!   range and next network from `address/prefix`.
//! - [`models::BandwidthCalculator`] splits a link into read and write shares
//!   and estimates the time to move a data set.
//!
//! Both are immutable values validated at construction; [`output`] renders
//! their results as tables, CSV or JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{BandwidthError, CidrError, UnitParseError, ValidationError};
pub use models::{convert_seconds_to_time, BandwidthCalculator, NetworkCalculator};
