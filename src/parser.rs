//! Exclusion list parsing.

use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

use crate::error::ExcludegenError;

/// Parse an exclusion list in the scanner's `exclude.txt` format.
///
/// One `A.B.C.D/N` entry per line. Lines whose first non-whitespace
/// character is `#` and blank lines are skipped. Input order is preserved
/// and duplicates are kept; the emitted table is order-sensitive.
///
/// Malformed lines are hard errors: the returned error names the 1-based
/// line number and the offending text.
pub fn parse_exclude_list(content: &str) -> Result<Vec<Ipv4Net>, ExcludegenError> {
    let mut entries = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let net = parse_entry(line).map_err(|reason| ExcludegenError::InvalidEntry {
            line: idx + 1,
            entry: line.to_string(),
            reason,
        })?;
        entries.push(net);
    }

    Ok(entries)
}

/// Parse a single `A.B.C.D/N` entry.
///
/// Bare addresses without a prefix length are rejected: every table row
/// needs an explicit mask.
fn parse_entry(entry: &str) -> Result<Ipv4Net, String> {
    let (addr_part, prefix_part) = entry
        .split_once('/')
        .ok_or_else(|| "missing '/N' prefix length".to_string())?;

    let addr: Ipv4Addr = addr_part
        .parse()
        .map_err(|_| format!("bad address '{}': expected four octets in 0-255", addr_part))?;

    let prefix: u8 = prefix_part
        .parse()
        .map_err(|_| format!("bad prefix length '{}'", prefix_part))?;

    Ipv4Net::new(addr, prefix).map_err(|_| format!("prefix length {} out of range 0-32", prefix))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Generate valid IPv4 CIDR strings
    fn ipv4_cidr_string_strategy() -> impl Strategy<Value = String> {
        (0u8..=255, 0u8..=255, 0u8..=255, 0u8..=255, 0u8..=32)
            .prop_map(|(a, b, c, d, prefix)| format!("{}.{}.{}.{}/{}", a, b, c, d, prefix))
    }

    proptest! {
        /// Every valid entry parses, and nothing is reordered or dropped.
        #[test]
        fn prop_valid_entries_parse_in_order(
            entries in prop::collection::vec(ipv4_cidr_string_strategy(), 0..50)
        ) {
            let content = entries.join("\n");
            let nets = parse_exclude_list(&content).unwrap();
            prop_assert_eq!(nets.len(), entries.len());
            for (entry, net) in entries.iter().zip(nets.iter()) {
                prop_assert_eq!(entry.parse::<Ipv4Net>().unwrap(), *net);
            }
        }

        /// Interleaved comments and blank lines never change the result.
        #[test]
        fn prop_comments_do_not_affect_entries(
            entries in prop::collection::vec(ipv4_cidr_string_strategy(), 0..20)
        ) {
            let plain = entries.join("\n");
            let noisy: String = entries
                .iter()
                .flat_map(|e| ["# noise".to_string(), String::new(), e.clone()])
                .collect::<Vec<_>>()
                .join("\n");
            prop_assert_eq!(
                parse_exclude_list(&plain).unwrap(),
                parse_exclude_list(&noisy).unwrap()
            );
        }

        /// Arbitrary content never panics; it parses or errors.
        #[test]
        fn prop_arbitrary_content_no_panic(content in "\\PC*") {
            let _ = parse_exclude_list(&content);
        }
    }
}
