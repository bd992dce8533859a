//! Canonical text output for documents.
//!
//! Rendering is the inverse of parsing for canonical input: every block is a
//! heading line followed by a blank line, then its items (if any) and one
//! more blank line. Original spacing inside brackets is not reproduced.

use std::io::{self, Write};

use crate::models::{Block, Document};

/// Lazily renders `doc` as lines, each ending in `\n`.
pub fn render(doc: &Document) -> impl Iterator<Item = String> + '_ {
    doc.blocks.iter().flat_map(render_block)
}

/// Renders `doc` into a single string.
pub fn render_to_string(doc: &Document) -> String {
    render(doc).collect()
}

/// Writes the rendering of `doc` to `writer` and flushes it.
///
/// Only the writer can fail; rendering itself has no error path.
pub fn render_to<W: Write>(doc: &Document, mut writer: W) -> io::Result<()> {
    for line in render(doc) {
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()
}

fn render_block(block: &Block) -> impl Iterator<Item = String> + '_ {
    let heading = [format!("{}\n", block.heading), "\n".to_string()];
    let items = block.items.iter().map(|item| format!("{item}\n"));
    let trailer = (!block.items.is_empty()).then(|| "\n".to_string());

    heading.into_iter().chain(items).chain(trailer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Heading, Item, Priority};
    use pretty_assertions::assert_eq;

    fn sample() -> Document {
        Document::from_blocks(vec![
            Block::new(Heading::new("one", 2), vec![]),
            Block::new(
                Heading::new("two", 1),
                vec![
                    Item::new("item two-one", false, Priority::None),
                    Item::new("item two-two", true, Priority::None),
                    Item::new("item two-three", false, Priority::High),
                ],
            ),
            Block::new(
                Heading::new("three", 2),
                vec![Item::new("item three-one", true, Priority::Medium)],
            ),
        ])
    }

    const SAMPLE_TEXT: &str = "\
## one

# two

- item two-one
- [x] item two-two
- (a) item two-three

## three

- [x] (b) item three-one

";

    #[test]
    fn renders_canonical_text() {
        assert_eq!(render_to_string(&sample()), SAMPLE_TEXT);
    }

    #[test]
    fn renders_to_writer() {
        let mut out = Vec::new();
        render_to(&sample(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), SAMPLE_TEXT);
    }

    #[test]
    fn yields_one_line_at_a_time() {
        let doc = Document::from_blocks(vec![Block::new(
            Heading::new("two", 1),
            vec![Item::new("only", false, Priority::Low)],
        )]);
        let lines: Vec<String> = render(&doc).collect();
        assert_eq!(lines, vec!["# two\n", "\n", "- (c) only\n", "\n"]);
    }

    #[test]
    fn empty_document_renders_nothing() {
        assert_eq!(render(&Document::new()).count(), 0);
    }

    #[test]
    fn empty_block_gets_single_blank_line() {
        let doc = Document::from_blocks(vec![Block::named("empty")]);
        assert_eq!(render_to_string(&doc), "# empty\n\n");
    }

    #[test]
    fn writer_errors_propagate() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        assert!(render_to(&sample(), Broken).is_err());
    }
}
