pub mod document;
pub mod task;

pub use document::Document;
pub use task::{Block, Heading, Item, Priority};
