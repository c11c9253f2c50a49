//! IPv4 network attribute calculator.

use super::ipv4::{get_cidr_mask, ip_after_subnet, parse_cidr, MAX_LENGTH};
use crate::error::CidrError;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An IPv4 block described by `address/prefix-length`.
///
/// All accessors are derived from the address and prefix on each call.
/// The address may carry host bits (`192.168.1.10/26` is accepted).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkCalculator {
    /// The CIDR text as given, trimmed.
    cidr: String,
    addr: Ipv4Addr,
    prefix: u8,
    mask: u32,
}

impl NetworkCalculator {
    /// Create a new [`NetworkCalculator`] from a CIDR string (e.g. "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<NetworkCalculator, CidrError> {
        let (addr, prefix) = parse_cidr(addr_cidr)?;
        let mask = get_cidr_mask(prefix)?;
        log::debug!("parsed {addr}/{prefix} mask={mask:#010x}");
        Ok(NetworkCalculator {
            cidr: addr_cidr.trim().to_string(),
            addr,
            prefix,
            mask,
        })
    }

    /// The CIDR text this calculator was built from.
    pub fn cidr(&self) -> &str {
        &self.cidr
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Dotted-decimal subnet mask, e.g. /24 is 255.255.255.0.
    pub fn subnet_mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.mask)
    }

    /// Address with the host bits cleared.
    pub fn network_id(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask)
    }

    /// Address with the host bits set.
    pub fn broadcast_id(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.network_id()) | !self.mask)
    }

    /// Network id of the adjacent block of the same size.
    ///
    /// Returns [`CidrError::NextNetworkOverflow`] for the last block of the
    /// address space (e.g. `255.255.255.0/24` or any `/0`).
    pub fn next_network(&self) -> Result<Ipv4Addr, CidrError> {
        ip_after_subnet(self.addr, self.prefix)
    }

    /// First usable host address.
    ///
    /// /31 and /32 blocks reserve no network address, so this is the network id.
    pub fn first_usable_ip(&self) -> Ipv4Addr {
        let network = u32::from(self.network_id());
        if self.has_reserved_addresses() {
            Ipv4Addr::from(network + 1)
        } else {
            Ipv4Addr::from(network)
        }
    }

    /// Last usable host address.
    ///
    /// /31 and /32 blocks reserve no broadcast address, so this is the broadcast id.
    pub fn last_usable_ip(&self) -> Ipv4Addr {
        let broadcast = u32::from(self.broadcast_id());
        if self.has_reserved_addresses() {
            Ipv4Addr::from(broadcast - 1)
        } else {
            Ipv4Addr::from(broadcast)
        }
    }

    /// Usable host count: block size minus network and broadcast, or the whole
    /// block for /31 and /32.
    pub fn usable_host_count(&self) -> u64 {
        let size = self.block_size();
        if self.has_reserved_addresses() {
            size - 2
        } else {
            size
        }
    }

    /// Total addresses in the block, reserved ones included.
    pub fn block_size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    fn has_reserved_addresses(&self) -> bool {
        self.prefix < MAX_LENGTH - 1
    }
}

impl FromStr for NetworkCalculator {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkCalculator::new(s)
    }
}

impl fmt::Display for NetworkCalculator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
