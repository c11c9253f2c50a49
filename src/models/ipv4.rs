//! IPv4 prefix arithmetic.
//!
//! Low level helpers working on [`Ipv4Addr`] and a prefix length. The
//! [`NetworkCalculator`](super::NetworkCalculator) is built on these.

use crate::error::CidrError;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Split `"<address>/<prefix>"` into its address and prefix length.
///
/// Surrounding whitespace is ignored, host bits in the address are kept.
pub fn parse_cidr(addr_cidr: &str) -> Result<(Ipv4Addr, u8), CidrError> {
    let addr_cidr = addr_cidr.trim();
    let (addr, len) = addr_cidr
        .split_once('/')
        .ok_or_else(|| CidrError::Format(addr_cidr.to_string()))?;
    if len.contains('/') {
        return Err(CidrError::Format(addr_cidr.to_string()));
    }
    let addr: Ipv4Addr = addr
        .trim()
        .parse()
        .map_err(|_| CidrError::Address(addr.trim().to_string()))?;
    let len = len.trim();
    let prefix: u8 = len.parse().map_err(|_| CidrError::Prefix(len.to_string()))?;
    if prefix > MAX_LENGTH {
        return Err(CidrError::Prefix(len.to_string()));
    }
    Ok((addr, prefix))
}

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use network_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::Prefix(len.to_string()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Number of addresses in a block with the given prefix length.
pub fn block_size(len: u8) -> Result<u64, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::Prefix(len.to_string()))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// First address of the block that follows the one containing `addr`.
///
/// Fails rather than wrapping when that block would start past 255.255.255.255.
pub fn ip_after_subnet(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    let network = Ipv4Addr::from(u32::from(addr) & get_cidr_mask(len)?);
    let next_bits = u32::from(network) as u64 + block_size(len)?;
    u32::try_from(next_bits)
        .map(Ipv4Addr::from)
        .map_err(|_| CidrError::NextNetworkOverflow(format!("{network}/{len}")))
}
