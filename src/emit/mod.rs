//! Array-literal emitters for the generated table.

mod c;
mod rust;

pub use c::CEmitter;
pub use rust::RustEmitter;

use crate::config::Syntax;
use crate::table::SubnetEntry;

/// Trait for target-syntax emitters.
///
/// An emitter renders the whole table as one array-literal declaration,
/// one `(network, mask)` pair per input entry, in input order.
pub trait TableEmitter {
    fn emit(&self, array_name: &str, entries: &[SubnetEntry]) -> String;
}

/// Create an emitter for the configured output syntax.
pub fn create_emitter(syntax: Syntax) -> Box<dyn TableEmitter> {
    match syntax {
        Syntax::C => Box::new(CEmitter::new()),
        Syntax::Rust => Box::new(RustEmitter::new()),
    }
}
