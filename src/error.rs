//! Error types for excludegen.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExcludegenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid entry at line {line}: '{entry}': {reason}")]
    InvalidEntry {
        line: usize,
        entry: String,
        reason: String,
    },
}
