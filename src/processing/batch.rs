//! Batch processing of CIDR lists.
//!
//! One row per input entry; an invalid entry is reported in place and does
//! not stop the rest of the batch.

use crate::error::CidrError;
use crate::models::NetworkCalculator;
use itertools::Itertools;
use serde::Serialize;
use std::error::Error;
use std::path::Path;

/// Column headers matching the fields of [`NetworkRow`], in order.
pub const NETWORK_HEADERS: [&str; 8] = [
    "CIDR",
    "Subnet Mask",
    "Network ID",
    "Next Network",
    "Broadcast ID",
    "First IP",
    "Last IP",
    "Total IPs",
];

/// One table row of network attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkRow {
    pub cidr: String,
    pub subnet_mask: String,
    pub network_id: String,
    /// "none" when the block is the last one of the address space.
    pub next_network: String,
    pub broadcast_id: String,
    pub first_ip: String,
    pub last_ip: String,
    pub total_ips: u64,
}

impl NetworkRow {
    /// The row fields in [`NETWORK_HEADERS`] order.
    pub fn fields(&self) -> [String; 8] {
        [
            self.cidr.clone(),
            self.subnet_mask.clone(),
            self.network_id.clone(),
            self.next_network.clone(),
            self.broadcast_id.clone(),
            self.first_ip.clone(),
            self.last_ip.clone(),
            self.total_ips.to_string(),
        ]
    }
}

impl From<&NetworkCalculator> for NetworkRow {
    fn from(net: &NetworkCalculator) -> Self {
        let next_network = match net.next_network() {
            Ok(next) => next.to_string(),
            Err(e) => {
                log::warn!("{}: {e}", net.cidr());
                "none".to_string()
            }
        };
        NetworkRow {
            cidr: net.cidr().to_string(),
            subnet_mask: net.subnet_mask().to_string(),
            network_id: net.network_id().to_string(),
            next_network,
            broadcast_id: net.broadcast_id().to_string(),
            first_ip: net.first_usable_ip().to_string(),
            last_ip: net.last_usable_ip().to_string(),
            total_ips: net.usable_host_count(),
        }
    }
}

/// Build one row per CIDR string, keeping input order.
pub fn network_rows<S: AsRef<str>>(cidrs: &[S]) -> Vec<Result<NetworkRow, CidrError>> {
    log::info!("#Start network_rows() for {} entries", cidrs.len());
    cidrs
        .iter()
        .map(|cidr| {
            NetworkCalculator::new(cidr.as_ref())
                .map(|net| NetworkRow::from(&net))
                .inspect_err(|e| log::warn!("skipping '{}': {e}", cidr.as_ref().trim()))
        })
        .collect()
}

/// Read CIDR entries from a text file.
///
/// One entry per line, or several separated by commas. Blank lines and
/// anything after `#` are ignored.
pub fn read_cidr_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Box<dyn Error>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(format!("CIDR file does not exist: {}", path.display()).into());
    }
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading CIDR file {}: {e}", path.display()))?;
    let cidrs = parse_cidr_list(&text);
    log::info!("Read {} CIDR entries from {}", cidrs.len(), path.display());
    log::debug!("entries: {}", cidrs.iter().join(", "));
    Ok(cidrs)
}

fn parse_cidr_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_rows() {
        let rows = network_rows(&["198.51.100.0/22 ", "192.168.1.10/26", "172.16.0.5/16"]);
        assert_eq!(rows.len(), 3);
        let row = rows[0].as_ref().unwrap();
        assert_eq!(
            row.fields(),
            [
                "198.51.100.0/22",
                "255.255.252.0",
                "198.51.100.0",
                "198.51.104.0",
                "198.51.103.255",
                "198.51.100.1",
                "198.51.103.254",
                "1022",
            ]
        );
        assert_eq!(rows[1].as_ref().unwrap().total_ips, 62);
        assert_eq!(rows[2].as_ref().unwrap().next_network, "172.17.0.0");
    }

    #[test]
    fn test_network_rows_keeps_going_after_bad_entry() {
        let rows = network_rows(&[
            "10.0.0.0/8".to_string(),
            "10.0.0.0/99".to_string(),
            "banana".to_string(),
            "255.255.255.252/30".to_string(),
        ]);
        assert_eq!(rows.len(), 4);
        assert!(rows[0].is_ok());
        assert_eq!(rows[1], Err(CidrError::Prefix("99".to_string())));
        assert_eq!(rows[2], Err(CidrError::Format("banana".to_string())));
        let last = rows[3].as_ref().unwrap();
        assert_eq!(last.next_network, "none");
        assert_eq!(last.total_ips, 2);
    }

    #[test]
    fn test_parse_cidr_list() {
        let text = "# office\n10.0.0.0/24\n\n 10.0.1.0/24 , 10.0.2.0/24 # lab\n#10.9.9.9/32\n";
        assert_eq!(
            parse_cidr_list(text),
            vec!["10.0.0.0/24", "10.0.1.0/24", "10.0.2.0/24"]
        );
    }

    #[test]
    fn test_read_cidr_file() {
        let cidrs = read_cidr_file("src/tests/test_data/cidr_list_01.txt")
            .expect("Error reading CIDR file");
        assert_eq!(cidrs.len(), 5);
        assert_eq!(cidrs[0], "198.51.100.0/22");
        assert!(read_cidr_file("src/tests/test_data/missing.txt").is_err());
    }
}
