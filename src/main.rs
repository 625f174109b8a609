//! excludegen - Subnet exclusion table generator
//!
//! Turns an exclusion list in CIDR notation into the packed
//! `(network, mask)` array the scanner compiles against.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use excludegen::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity. Logs go to stderr: stdout carries
    // the generated code and must stay clean for redirection.
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Generate {
            input,
            output,
            array_name,
            syntax,
        } => excludegen::commands::generate::run(input, output, array_name, syntax, &cli.config),
        Commands::Check { addr, input } => {
            excludegen::commands::check::run(&addr, input, &cli.config)
        }
        Commands::Stats { input, json } => {
            excludegen::commands::stats::run(input, json, &cli.config)
        }
        Commands::Version => {
            println!("excludegen {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
