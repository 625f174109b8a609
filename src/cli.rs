//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "excludegen")]
#[command(author, version, about = "Subnet exclusion table generator")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "excludegen.yaml", global = true)]
    pub config: PathBuf,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the packed subnet table from an exclusion list
    Generate {
        /// Exclusion list to read (defaults to the configured input)
        input: Option<PathBuf>,

        /// Write the generated code to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Identifier for the emitted array
        #[arg(long)]
        array_name: Option<String>,

        /// Output syntax (c, rust)
        #[arg(long)]
        syntax: Option<String>,
    },

    /// Check whether an address is covered by the exclusion list
    Check {
        /// IPv4 address to check
        addr: String,

        /// Exclusion list to read (defaults to the configured input)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Show statistics about the exclusion list
    Stats {
        /// Exclusion list to read (defaults to the configured input)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show version
    Version,
}
