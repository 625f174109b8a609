//! Generate command implementation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{Config, Syntax};
use crate::emit::create_emitter;
use crate::parser::parse_exclude_list;
use crate::table::SubnetEntry;
use crate::utils::format_count;

/// Run the generate command
pub fn run(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    array_name: Option<String>,
    syntax: Option<String>,
    config_path: &Path,
) -> Result<()> {
    let mut config = Config::load_or_default(config_path)?;

    // CLI options override the config file
    if let Some(input) = input {
        config.input = input;
    }
    if let Some(name) = array_name {
        config.array_name = name;
    }
    if let Some(syntax) = syntax {
        config.syntax = syntax.parse::<Syntax>()?;
    }
    config.validate()?;

    let content = std::fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read exclusion list: {:?}", config.input))?;

    let nets = parse_exclude_list(&content)?;
    let entries: Vec<SubnetEntry> = nets.into_iter().map(SubnetEntry::from).collect();
    info!(
        "Parsed {} entries from {:?}",
        format_count(entries.len()),
        config.input
    );

    let emitter = create_emitter(config.syntax);
    let code = emitter.emit(&config.array_name, &entries);
    debug!("Generated {} bytes of {:?} source", code.len(), config.syntax);

    match output {
        Some(path) => {
            std::fs::write(&path, code.as_bytes())
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            info!("Wrote table to {:?}", path);
        }
        None => {
            // The generated code is the program's one product; everything
            // else goes to stderr via tracing.
            print!("{}", code);
        }
    }

    Ok(())
}
