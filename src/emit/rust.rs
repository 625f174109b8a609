//! Rust array emitter.

use super::TableEmitter;
use crate::table::SubnetEntry;

/// Emits the table as a `pub const` slice of `(network, mask)` tuples.
/// The array name is upper-cased per Rust const convention.
pub struct RustEmitter;

impl RustEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl TableEmitter for RustEmitter {
    fn emit(&self, array_name: &str, entries: &[SubnetEntry]) -> String {
        let rows: Vec<String> = entries
            .iter()
            .map(|e| format!("    ({}, {}),", e.network, e.mask))
            .collect();

        format!(
            "pub const {}: &[(u32, u32)] = &[\n{}\n];\n",
            array_name.to_uppercase(),
            rows.join("\n")
        )
    }
}
