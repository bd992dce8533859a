pub mod editing;
pub mod io;
pub mod models;
pub mod parsing;
pub mod rendering;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{Cmd, Outcome};
pub use io::*;
pub use models::{Block, Document, Heading, Item, Priority};
pub use parsing::{LoadError, ParseError, parse, parse_reader, parse_str};
pub use rendering::{render, render_to, render_to_string};
