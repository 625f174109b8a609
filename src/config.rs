//! Configuration management for excludegen.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ExcludegenError;

/// Valid output syntax names, as accepted on the command line
const VALID_SYNTAXES: &[&str] = &["c", "rust"];

/// Output syntax for the generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    /// `const uint32_t name[] = { ... };`
    C,
    /// `pub const NAME: &[(u32, u32)] = &[ ... ];`
    Rust,
}

impl std::str::FromStr for Syntax {
    type Err = ExcludegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" => Ok(Syntax::C),
            "rust" => Ok(Syntax::Rust),
            other => Err(ExcludegenError::Config(format!(
                "Invalid syntax '{}'. Valid values: {}",
                other,
                VALID_SYNTAXES.join(", ")
            ))),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Exclusion list to read
    pub input: PathBuf,

    /// Identifier for the emitted array
    pub array_name: String,

    /// Output syntax (c, rust)
    pub syntax: Syntax,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("exclude.txt"),
            array_name: "excluded_subnets".to_string(),
            syntax: Syntax::C,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        config.validate()?;

        Ok(config)
    }

    /// Load the config at `path` if it exists, defaults otherwise.
    ///
    /// The config file is optional: a bare `excludegen generate` in a
    /// directory with just an exclusion list must work.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // The array name lands verbatim in generated source.
        if !is_valid_identifier(&self.array_name) {
            return Err(ExcludegenError::Config(format!(
                "Invalid array name '{}'. Use letters, digits and underscores, not starting with a digit",
                self.array_name
            ))
            .into());
        }
        Ok(())
    }
}

/// Check that a string is usable as a C (and Rust) identifier.
fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
