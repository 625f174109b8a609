//! Packed subnet records for the exclusion table.

use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

/// One row of the exclusion table: a network address and its subnet mask,
/// both packed big-endian into 32-bit integers.
///
/// The network keeps the address exactly as written in the source list;
/// host bits below the mask are not cleared. The consuming scanner tests
/// `(addr & mask) == network`, so a row with stray host bits never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetEntry {
    pub network: u32,
    pub mask: u32,
}

impl SubnetEntry {
    /// Build an entry from an address and prefix length.
    pub fn new(addr: Ipv4Addr, prefix_len: u8) -> Self {
        Self {
            network: u32::from(addr),
            mask: mask_for_prefix(prefix_len),
        }
    }

    /// The scanner's membership test: `(addr & mask) == network`.
    pub fn matches(&self, addr: Ipv4Addr) -> bool {
        u32::from(addr) & self.mask == self.network
    }

    /// Number of addresses the mask spans: 2^(32-N).
    pub fn address_count(&self) -> u64 {
        1u64 << self.mask.count_zeros()
    }
}

impl From<Ipv4Net> for SubnetEntry {
    fn from(net: Ipv4Net) -> Self {
        Self::new(net.addr(), net.prefix_len())
    }
}

/// Subnet mask with the top `prefix_len` bits set.
///
/// The zero case is handled explicitly: `u32::MAX << 32` is not a valid
/// shift, and the table encodes a /0 mask as all bits clear.
pub fn mask_for_prefix(prefix_len: u8) -> u32 {
    debug_assert!(prefix_len <= 32);
    if prefix_len == 0 {
        0
    } else {
        u32::MAX << (32 - u32::from(prefix_len))
    }
}

/// Total number of addresses covered by a table.
///
/// Overlapping rows are counted twice; the table is order-sensitive and
/// never deduplicated, so this is a measure of the rows as written.
pub fn count_addresses(entries: &[SubnetEntry]) -> u64 {
    entries
        .iter()
        .fold(0u64, |acc, e| acc.saturating_add(e.address_count()))
}

/// Percentage of the 2^32 IPv4 address space covered.
pub fn coverage_percent(address_count: u64) -> f64 {
    const IPV4_SPACE: f64 = 4_294_967_296.0;
    (address_count as f64 / IPV4_SPACE) * 100.0
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The computed mask must agree with ipnet's netmask for every
        /// prefix length.
        #[test]
        fn prop_mask_matches_ipnet(prefix in 0u8..=32) {
            let net = Ipv4Net::new(Ipv4Addr::new(0, 0, 0, 0), prefix).unwrap();
            prop_assert_eq!(mask_for_prefix(prefix), u32::from(net.netmask()));
        }

        /// The mask has exactly N leading set bits and 32-N trailing clear
        /// bits.
        #[test]
        fn prop_mask_shape(prefix in 0u8..=32) {
            let mask = mask_for_prefix(prefix);
            prop_assert_eq!(mask.leading_ones(), u32::from(prefix));
            prop_assert_eq!(mask.count_zeros(), 32 - u32::from(prefix));
        }

        /// Packing is the big-endian octet layout.
        #[test]
        fn prop_pack_big_endian(a: u8, b: u8, c: u8, d: u8) {
            let entry = SubnetEntry::new(Ipv4Addr::new(a, b, c, d), 32);
            let expected = (u32::from(a) << 24)
                | (u32::from(b) << 16)
                | (u32::from(c) << 8)
                | u32::from(d);
            prop_assert_eq!(entry.network, expected);
        }

        /// For rows without host bits, the membership test agrees with
        /// ipnet's containment check.
        #[test]
        fn prop_matches_agrees_with_ipnet(
            net_bits: u32,
            prefix in 0u8..=32,
            addr_bits: u32,
        ) {
            let net = Ipv4Net::new(Ipv4Addr::from(net_bits), prefix)
                .unwrap()
                .trunc();
            let entry = SubnetEntry::from(net);
            let addr = Ipv4Addr::from(addr_bits);
            prop_assert_eq!(entry.matches(addr), net.contains(&addr));
        }
    }
}
