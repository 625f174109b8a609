//! # excludegen - Subnet exclusion table generator
//!
//! Build-time companion to an IPv4 network scanner: reads a text file of
//! CIDR entries (`A.B.C.D/N`, `#` comments and blank lines ignored) and
//! emits the table as a source-code array literal, one packed
//! `(network, mask)` pair of 32-bit integers per entry, in input order.
//! The scanner compiles the generated array and skips any address for
//! which `(addr & mask) == network` holds for some row.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface definitions
//! - [`commands`] - CLI command implementations
//! - [`config`] - Configuration parsing and validation
//! - [`emit`] - Array-literal emitters (C, Rust)
//! - [`error`] - Error types
//! - [`parser`] - Exclusion list parsing
//! - [`table`] - Packed subnet records and mask arithmetic
//! - [`utils`] - Formatting helpers
//!
//! ## Example
//!
//! ```
//! use excludegen::config::Syntax;
//! use excludegen::emit::create_emitter;
//! use excludegen::parser::parse_exclude_list;
//! use excludegen::table::SubnetEntry;
//!
//! let nets = parse_exclude_list("# local ranges\n10.0.0.0/8\n192.168.0.0/16\n")?;
//! let entries: Vec<SubnetEntry> = nets.into_iter().map(SubnetEntry::from).collect();
//!
//! let code = create_emitter(Syntax::C).emit("excluded_subnets", &entries);
//! assert!(code.starts_with("const uint32_t excluded_subnets[] = {"));
//! # Ok::<(), excludegen::ExcludegenError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod emit;
pub mod error;
pub mod parser;
pub mod table;
pub mod utils;

pub use cli::{Cli, Commands};
pub use config::{Config, Syntax};
pub use error::ExcludegenError;
pub use table::SubnetEntry;
