//! Check command implementation.

use anyhow::{Context, Result};
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::parser::parse_exclude_list;
use crate::table::SubnetEntry;

/// Run the check command
pub fn run(addr_str: &str, input: Option<PathBuf>, config_path: &Path) -> Result<()> {
    let addr: Ipv4Addr = addr_str
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid IPv4 address: {}", addr_str))?;

    let mut config = Config::load_or_default(config_path)?;
    if let Some(input) = input {
        config.input = input;
    }

    let content = std::fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read exclusion list: {:?}", config.input))?;
    let nets = parse_exclude_list(&content)?;

    // Same test the scanner compiles in; first matching row wins.
    let hit = nets
        .iter()
        .find(|net| SubnetEntry::from(**net).matches(addr));

    match hit {
        Some(net) => println!("{} is EXCLUDED by {}", addr, net),
        None => println!("{} is NOT excluded", addr),
    }

    Ok(())
}
