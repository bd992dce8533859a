use std::collections::HashMap;

use crate::models::Block;

use super::error::ParseError;

/// Rejects block lists in which any heading text occurs more than once.
///
/// Every block whose heading is repeated contributes its text once, in block
/// order, so `one, two, one` reports `'one', 'one'`.
pub fn check_unique_headings(blocks: &[Block]) -> Result<(), ParseError> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for block in blocks {
        *counts.entry(block.name()).or_default() += 1;
    }

    let duplicates: Vec<String> = blocks
        .iter()
        .map(Block::name)
        .filter(|name| counts[name] > 1)
        .map(str::to_string)
        .collect();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(ParseError::DuplicateHeadings {
            headings: duplicates,
        })
    }
}
