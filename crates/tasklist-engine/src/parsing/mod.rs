//! # Document Parsing
//!
//! Line-oriented parsing of task-list documents.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is matched against the
//!    blank, heading and item shapes, producing a `LineClass` that borrows the
//!    raw heading text, item text and bracket tokens.
//! 2. **Decoding** (`decode`): bracket tokens are validated and the line becomes
//!    a `Value` (heading, item or unknown markup).
//! 3. **Block Construction** (`builder`): a `BlockBuilder` folds values into
//!    blocks, rejecting items that appear before the first heading.
//! 4. **Heading Uniqueness** (`headings`): a second pass over the finished block
//!    list rejects repeated heading texts.
//!
//! ## Key Invariants
//!
//! - The first defect aborts the parse; there is no partial result.
//! - Blank lines never produce values and never fail.
//! - Heading and item text are kept verbatim apart from leading whitespace.

pub mod builder;
pub mod classify;
pub mod cursor;
pub mod decode;
pub mod error;
pub mod headings;

#[cfg(test)]
mod tests;

use std::io::BufRead;
use std::str::FromStr;

use crate::models::Document;

pub use builder::BlockBuilder;
pub use classify::{LineClass, classify};
pub use decode::{Value, decode};
pub use error::{LoadError, ParseError};
pub use headings::check_unique_headings;

/// Parses a sequence of lines into a [`Document`].
///
/// Lines may carry their trailing line terminator or not. The sequence is
/// consumed lazily, one line at a time.
pub fn parse<I, S>(lines: I) -> Result<Document, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_lines(lines.into_iter().map(Ok::<S, ParseError>))
}

/// Parses a whole text held in memory.
pub fn parse_str(text: &str) -> Result<Document, ParseError> {
    parse(text.lines())
}

/// Parses lines read from `reader`, keeping read failures apart from
/// markup errors.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Document, LoadError> {
    parse_lines(reader.lines().map(|line| line.map_err(LoadError::from)))
}

fn parse_lines<I, S, E>(lines: I) -> Result<Document, E>
where
    I: Iterator<Item = Result<S, E>>,
    S: AsRef<str>,
    E: From<ParseError>,
{
    let mut builder = BlockBuilder::new();

    for (line_no, line) in lines.enumerate() {
        let line = line?;
        let class = classify(line.as_ref());
        log::trace!("line {line_no}: {class:?}");
        if let Some(value) = decode(line_no, class)? {
            builder.push(line_no, value)?;
        }
    }

    let blocks = builder.finish();
    check_unique_headings(&blocks)?;

    log::debug!(
        "Parsed {} blocks with {} items",
        blocks.len(),
        blocks.iter().map(|b| b.items.len()).sum::<usize>()
    );
    Ok(Document::from_blocks(blocks))
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}
