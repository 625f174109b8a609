//! C array emitter.

use super::TableEmitter;
use crate::table::SubnetEntry;

/// Emits the table as a `const uint32_t` array in the exact layout the
/// consuming scanner compiles against: pairs flattened into one array,
/// four-space indent, pairs joined by `,\n`, no trailing comma.
pub struct CEmitter;

impl CEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl TableEmitter for CEmitter {
    fn emit(&self, array_name: &str, entries: &[SubnetEntry]) -> String {
        let rows: Vec<String> = entries
            .iter()
            .map(|e| format!("    {}, {}", e.network, e.mask))
            .collect();

        format!(
            "const uint32_t {}[] = {{\n{}\n}};\n",
            array_name,
            rows.join(",\n")
        )
    }
}
