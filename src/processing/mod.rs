//! Batch processing of calculator inputs.
//!
//! - [`batch`] - CIDR lists into table rows

mod batch;

// Re-export public functions
pub use batch::{network_rows, read_cidr_file, NetworkRow, NETWORK_HEADERS};
