//! Stats command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::parser::parse_exclude_list;
use crate::table::{self, SubnetEntry};
use crate::utils::format_count_with_separator;

/// Statistics over a parsed exclusion list.
///
/// Overlapping entries are counted twice; the table is never deduplicated.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub entries: usize,
    pub addresses_covered: u64,
    pub coverage_percent: f64,
}

impl StatsReport {
    pub fn from_entries(entries: &[SubnetEntry]) -> Self {
        let addresses_covered = table::count_addresses(entries);
        Self {
            entries: entries.len(),
            addresses_covered,
            coverage_percent: table::coverage_percent(addresses_covered),
        }
    }
}

/// Run the stats command
pub fn run(input: Option<PathBuf>, json: bool, config_path: &Path) -> Result<()> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(input) = input {
        config.input = input;
    }

    let content = std::fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read exclusion list: {:?}", config.input))?;
    let entries: Vec<SubnetEntry> = parse_exclude_list(&content)?
        .into_iter()
        .map(SubnetEntry::from)
        .collect();

    let report = StatsReport::from_entries(&entries);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Exclusion list: {}", config.input.display());
        println!("  Entries:           {}", report.entries);
        println!(
            "  Addresses covered: {}",
            format_count_with_separator(report.addresses_covered)
        );
        println!("  IPv4 space:        {:.2}%", report.coverage_percent);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipnet::Ipv4Net;

    #[test]
    fn test_report_from_entries() {
        let entries: Vec<SubnetEntry> = ["10.0.0.0/8", "192.0.2.0/24"]
            .iter()
            .map(|s| SubnetEntry::from(s.parse::<Ipv4Net>().unwrap()))
            .collect();
        let report = StatsReport::from_entries(&entries);
        assert_eq!(report.entries, 2);
        assert_eq!(report.addresses_covered, 16_777_216 + 256);
        assert!(report.coverage_percent > 0.39 && report.coverage_percent < 0.40);
    }

    #[test]
    fn test_report_empty() {
        let report = StatsReport::from_entries(&[]);
        assert_eq!(report.entries, 0);
        assert_eq!(report.addresses_covered, 0);
        assert_eq!(report.coverage_percent, 0.0);
    }
}
